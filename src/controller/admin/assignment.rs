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
        assignment::{AssignmentDto, SaveAssignmentDto},
    },
    service::teaching_assignment::TeachingAssignmentService,
    state::AppState,
};

pub const ASSIGNMENT_TAG: &str = "admin/assignments";

#[derive(Deserialize)]
pub struct AssignmentFilter {
    pub semester_id: Option<i32>,
}

/// List teaching assignments with names resolved.
#[utoipa::path(
    get,
    path = "/api/admin/assignments",
    tag = ASSIGNMENT_TAG,
    params(("semester_id" = Option<i32>, Query, description = "Filter by semester")),
    responses(
        (status = 200, description = "Assignments", body = Vec<AssignmentDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<AssignmentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let assignments = TeachingAssignmentService::new(&state.db)
        .get_all(filter.semester_id)
        .await?;

    Ok((StatusCode::OK, Json(assignments)))
}

/// Assign a teacher to teach a subject to a class for a semester.
#[utoipa::path(
    post,
    path = "/api/admin/assignments",
    tag = ASSIGNMENT_TAG,
    request_body = SaveAssignmentDto,
    responses(
        (status = 201, description = "Created", body = AssignmentDto),
        (status = 400, description = "Unknown teacher, class, subject, or semester", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 409, description = "Subject already assigned for this class and semester", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let assignment = TeachingAssignmentService::new(&state.db)
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Remove a teaching assignment.
#[utoipa::path(
    delete,
    path = "/api/admin/assignments/{id}",
    tag = ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Assignment id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TeachingAssignmentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Assignment deleted".to_string(),
        }),
    ))
}
