use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{class::ClassRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        attendance::AttendanceDto,
        class::ClassDto,
        conduct::ConductDto,
        material::MaterialDto,
        score::StudentScoreDto,
        timetable::TimetableEntryDto,
    },
    service::{
        attendance::AttendanceService, conduct::ConductService, material::MaterialService,
        score::ScoreService, timetable::TimetableService,
    },
    state::AppState,
};

pub const STUDENT_TAG: &str = "student";

/// Resolves the session user to their student profile.
async fn require_student(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<entity::student::Model, AppError> {
    let user = AuthGuard::new(db, session)
        .require(&[Permission::Student])
        .await?;

    UserRepository::new(db)
        .find_student_by_user_id(user.id)
        .await?
        .ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
}

#[derive(Deserialize)]
pub struct SemesterParam {
    pub semester_id: i32,
}

#[derive(Deserialize)]
pub struct SemesterFilter {
    pub semester_id: Option<i32>,
}

/// Classes the signed-in student is enrolled in.
#[utoipa::path(
    get,
    path = "/api/student/classes",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Classes", body = Vec<ClassDto>),
        (status = 401, description = "Not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = require_student(&state.db, &session).await?;

    let repo = ClassRepository::new(&state.db);
    let mut classes = Vec::new();
    for class in repo.get_classes_of_student(student.id).await? {
        if let Some(dto) = repo.get_enriched_by_id(class.id).await? {
            classes.push(dto);
        }
    }

    Ok((StatusCode::OK, Json(classes)))
}

/// The signed-in student's weekly timetable for a semester.
#[utoipa::path(
    get,
    path = "/api/student/timetable",
    tag = STUDENT_TAG,
    params(("semester_id" = i32, Query, description = "Semester")),
    responses(
        (status = 200, description = "Timetable entries", body = Vec<TimetableEntryDto>),
        (status = 401, description = "Not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SemesterParam>,
) -> Result<impl IntoResponse, AppError> {
    let student = require_student(&state.db, &session).await?;

    let entries = TimetableService::new(&state.db)
        .get_for_student(student.id, params.semester_id)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// The signed-in student's scores, optionally narrowed to one semester.
#[utoipa::path(
    get,
    path = "/api/student/scores",
    tag = STUDENT_TAG,
    params(("semester_id" = Option<i32>, Query, description = "Filter by semester")),
    responses(
        (status = 200, description = "Scores with subject names", body = Vec<StudentScoreDto>),
        (status = 401, description = "Not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scores(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<SemesterFilter>,
) -> Result<impl IntoResponse, AppError> {
    let student = require_student(&state.db, &session).await?;

    let scores = ScoreService::new(&state.db)
        .for_student(student.id, filter.semester_id)
        .await?;

    Ok((StatusCode::OK, Json(scores)))
}

/// The signed-in student's attendance history.
#[utoipa::path(
    get,
    path = "/api/student/attendance",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceDto>),
        (status = 401, description = "Not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = require_student(&state.db, &session).await?;

    let records = AttendanceService::new(&state.db)
        .get_for_student(student.id)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

/// The signed-in student's conduct ratings.
#[utoipa::path(
    get,
    path = "/api/student/conduct",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Conduct ratings", body = Vec<ConductDto>),
        (status = 401, description = "Not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conduct(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = require_student(&state.db, &session).await?;

    let records = ConductService::new(&state.db)
        .for_student(student.id)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Materials published to any class the student is enrolled in, newest
/// first.
#[utoipa::path(
    get,
    path = "/api/student/materials",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Materials", body = Vec<MaterialDto>),
        (status = 401, description = "Not authenticated or not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_materials(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let student = require_student(&state.db, &session).await?;

    let materials = MaterialService::new(&state.db)
        .get_for_student(student.id)
        .await?;

    Ok((StatusCode::OK, Json(materials)))
}
