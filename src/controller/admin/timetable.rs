use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ErrorDto, OkDto},
        timetable::{SaveTimetableDto, TimetableEntryDto, TimetableQuery},
    },
    service::timetable::TimetableService,
    state::AppState,
};

pub const TIMETABLE_TAG: &str = "admin/timetables";

/// List timetable entries for a semester, optionally narrowed to one class.
#[utoipa::path(
    get,
    path = "/api/admin/timetables",
    tag = TIMETABLE_TAG,
    params(TimetableQuery),
    responses(
        (status = 200, description = "Timetable entries", body = Vec<TimetableEntryDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timetables(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TimetableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = TimetableService::new(&state.db)
        .get(query.semester_id, query.class_id)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// Schedule a teaching slot.
///
/// Rejected with 409 if the class, the teacher, or the room is already
/// occupied at that day and period in the same semester.
#[utoipa::path(
    post,
    path = "/api/admin/timetables",
    tag = TIMETABLE_TAG,
    request_body = SaveTimetableDto,
    responses(
        (status = 201, description = "Created", body = TimetableEntryDto),
        (status = 400, description = "Invalid day, period, or room", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 409, description = "Class, teacher, or room already occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timetable(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTimetableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = TimetableService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Move or reassign a teaching slot.
#[utoipa::path(
    put,
    path = "/api/admin/timetables/{id}",
    tag = TIMETABLE_TAG,
    params(("id" = i32, Path, description = "Timetable entry id")),
    request_body = SaveTimetableDto,
    responses(
        (status = 200, description = "Updated", body = TimetableEntryDto),
        (status = 400, description = "Invalid day, period, or room", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 409, description = "Class, teacher, or room already occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timetable(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTimetableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = TimetableService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Remove a teaching slot.
#[utoipa::path(
    delete,
    path = "/api/admin/timetables/{id}",
    tag = TIMETABLE_TAG,
    params(("id" = i32, Path, description = "Timetable entry id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_timetable(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TimetableService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Timetable entry deleted".to_string(),
        }),
    ))
}
