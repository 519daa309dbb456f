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
        api::{ErrorDto, OkDto},
        class::{ClassDto, ClassStudentDto, EnrollStudentDto, MergeClassDto, MergeResultDto, SaveClassDto},
    },
    service::class::ClassService,
    state::AppState,
};

pub const CLASS_TAG: &str = "admin/classes";

#[derive(Deserialize)]
pub struct ClassFilter {
    pub academic_year_id: Option<i32>,
}

/// List classes with homeroom teacher and student count.
#[utoipa::path(
    get,
    path = "/api/admin/classes",
    tag = CLASS_TAG,
    params(("academic_year_id" = Option<i32>, Query, description = "Filter by academic year")),
    responses(
        (status = 200, description = "Classes", body = Vec<ClassDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ClassFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let classes = ClassService::new(&state.db)
        .get_all(filter.academic_year_id)
        .await?;

    Ok((StatusCode::OK, Json(classes)))
}

/// Create a class.
#[utoipa::path(
    post,
    path = "/api/admin/classes",
    tag = CLASS_TAG,
    request_body = SaveClassDto,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Unknown academic year", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 409, description = "Name already in use in this year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let class = ClassService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(class)))
}

/// Update a class.
#[utoipa::path(
    put,
    path = "/api/admin/classes/{id}",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    request_body = SaveClassDto,
    responses(
        (status = 200, description = "Updated"),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let class = ClassService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(class)))
}

/// Delete a class.
#[utoipa::path(
    delete,
    path = "/api/admin/classes/{id}",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ClassService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Class deleted".to_string(),
        }),
    ))
}

/// Get the roster of a class.
#[utoipa::path(
    get,
    path = "/api/admin/classes/{id}/students",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    responses(
        (status = 200, description = "Roster", body = Vec<ClassStudentDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_students(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let students = ClassService::new(&state.db).get_students(id).await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Enroll a student into a class.
#[utoipa::path(
    post,
    path = "/api/admin/classes/{id}/students",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    request_body = EnrollStudentDto,
    responses(
        (status = 201, description = "Enrolled", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Class or student not found", body = ErrorDto),
        (status = 409, description = "Already enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<EnrollStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ClassService::new(&state.db)
        .enroll_student(id, payload.student_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OkDto {
            message: "Student enrolled".to_string(),
        }),
    ))
}

/// Remove a student from a class.
#[utoipa::path(
    delete,
    path = "/api/admin/classes/{id}/students/{student_id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class id"),
        ("student_id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Removed", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unenroll_student(
    State(state): State<AppState>,
    session: Session,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ClassService::new(&state.db)
        .unenroll_student(id, student_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Student removed from class".to_string(),
        }),
    ))
}

/// Merge another class into this one.
///
/// Students of the source class move into the target; students already in
/// the target are dropped from the source instead of duplicated. The source
/// class is deleted. The whole operation is atomic.
#[utoipa::path(
    post,
    path = "/api/admin/classes/{id}/merge",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Target class id")),
    request_body = MergeClassDto,
    responses(
        (status = 200, description = "Merged", body = MergeResultDto),
        (status = 400, description = "Source equals target", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn merge_class(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MergeClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let result = ClassService::new(&state.db)
        .merge(id, payload.source_class_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
