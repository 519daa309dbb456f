use axum::{
    extract::{Path, State},
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
        subject::{SaveSubjectDto, SubjectDto},
    },
    service::subject::SubjectService,
    state::AppState,
};

pub const SUBJECT_TAG: &str = "admin/subjects";

/// List all subjects.
#[utoipa::path(
    get,
    path = "/api/admin/subjects",
    tag = SUBJECT_TAG,
    responses(
        (status = 200, description = "Subjects", body = Vec<SubjectDto>),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let subjects = SubjectService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(subjects)))
}

/// Create a subject.
#[utoipa::path(
    post,
    path = "/api/admin/subjects",
    tag = SUBJECT_TAG,
    request_body = SaveSubjectDto,
    responses(
        (status = 201, description = "Created", body = SubjectDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 409, description = "Code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let subject = SubjectService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(subject)))
}

/// Update a subject.
#[utoipa::path(
    put,
    path = "/api/admin/subjects/{id}",
    tag = SUBJECT_TAG,
    params(("id" = i32, Path, description = "Subject id")),
    request_body = SaveSubjectDto,
    responses(
        (status = 200, description = "Updated", body = SubjectDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 409, description = "Code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subject(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let subject = SubjectService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(subject)))
}

/// Delete a subject.
#[utoipa::path(
    delete,
    path = "/api/admin/subjects/{id}",
    tag = SUBJECT_TAG,
    params(("id" = i32, Path, description = "Subject id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SubjectService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Subject deleted".to_string(),
        }),
    ))
}
