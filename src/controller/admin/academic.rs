use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        academic_year::{AcademicYearDto, SaveAcademicYearDto},
        api::{ErrorDto, OkDto},
        semester::{SaveSemesterDto, SemesterDto},
    },
    service::{academic_year::AcademicYearService, semester::SemesterService},
    state::AppState,
};

pub const ACADEMIC_TAG: &str = "admin/academic";

#[derive(Deserialize)]
pub struct SemesterFilter {
    pub academic_year_id: Option<i32>,
}

/// List all academic years, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/academic-years",
    tag = ACADEMIC_TAG,
    responses(
        (status = 200, description = "Academic years", body = Vec<AcademicYearDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_academic_years(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let years = AcademicYearService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(years)))
}

/// Create an academic year.
#[utoipa::path(
    post,
    path = "/api/admin/academic-years",
    tag = ACADEMIC_TAG,
    request_body = SaveAcademicYearDto,
    responses(
        (status = 201, description = "Created", body = AcademicYearDto),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_academic_year(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveAcademicYearDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let year = AcademicYearService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(year)))
}

/// Update an academic year.
#[utoipa::path(
    put,
    path = "/api/admin/academic-years/{id}",
    tag = ACADEMIC_TAG,
    params(("id" = i32, Path, description = "Academic year id")),
    request_body = SaveAcademicYearDto,
    responses(
        (status = 200, description = "Updated", body = AcademicYearDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_academic_year(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveAcademicYearDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let year = AcademicYearService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(year)))
}

/// Delete an academic year and everything hanging off it.
#[utoipa::path(
    delete,
    path = "/api/admin/academic-years/{id}",
    tag = ACADEMIC_TAG,
    params(("id" = i32, Path, description = "Academic year id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_academic_year(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AcademicYearService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Academic year deleted".to_string(),
        }),
    ))
}

/// List semesters, optionally narrowed to one academic year.
#[utoipa::path(
    get,
    path = "/api/admin/semesters",
    tag = ACADEMIC_TAG,
    params(("academic_year_id" = Option<i32>, Query, description = "Filter by academic year")),
    responses(
        (status = 200, description = "Semesters", body = Vec<SemesterDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_semesters(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<SemesterFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let semesters = SemesterService::new(&state.db)
        .get_all(filter.academic_year_id)
        .await?;

    Ok((StatusCode::OK, Json(semesters)))
}

/// Create a semester inside an academic year.
#[utoipa::path(
    post,
    path = "/api/admin/semesters",
    tag = ACADEMIC_TAG,
    request_body = SaveSemesterDto,
    responses(
        (status = 201, description = "Created", body = SemesterDto),
        (status = 400, description = "Invalid dates or unknown academic year", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 409, description = "Name already in use in this year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_semester(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let semester = SemesterService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(semester)))
}

/// Update a semester.
#[utoipa::path(
    put,
    path = "/api/admin/semesters/{id}",
    tag = ACADEMIC_TAG,
    params(("id" = i32, Path, description = "Semester id")),
    request_body = SaveSemesterDto,
    responses(
        (status = 200, description = "Updated", body = SemesterDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_semester(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let semester = SemesterService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(semester)))
}

/// Delete a semester.
#[utoipa::path(
    delete,
    path = "/api/admin/semesters/{id}",
    tag = ACADEMIC_TAG,
    params(("id" = i32, Path, description = "Semester id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_semester(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SemesterService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Semester deleted".to_string(),
        }),
    ))
}
