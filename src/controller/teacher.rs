use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{material::CreateMaterialParams, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ErrorDto, OkDto},
        assignment::AssignmentDto,
        attendance::{AttendanceDto, AttendanceQuery, RecordAttendanceDto},
        certificate::CertificateDto,
        class::{ClassDto, ClassStudentDto},
        conduct::{ConductDto, UpsertConductDto},
        material::MaterialDto,
        score::{GradebookQuery, GradebookRowDto, ScoreDto, UpsertScoreDto},
        timetable::TimetableEntryDto,
    },
    service::{
        attendance::AttendanceService,
        certificate::CertificateService,
        class::ClassService,
        conduct::ConductService,
        material::MaterialService,
        score::ScoreService,
        teaching_assignment::TeachingAssignmentService,
        timetable::TimetableService,
        upload::{discard_file, store_file, UploadKind},
    },
    state::AppState,
};

pub const TEACHER_TAG: &str = "teacher";

/// Resolves the session user to their teacher profile. Every handler in
/// this module goes through here first.
async fn require_teacher(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<(entity::user::Model, entity::teacher::Model), AppError> {
    let user = AuthGuard::new(db, session)
        .require(&[Permission::Teacher])
        .await?;

    let teacher = UserRepository::new(db)
        .find_teacher_by_user_id(user.id)
        .await?
        .ok_or(AuthError::UserNotInDatabase(user.id))?;

    Ok((user, teacher))
}

#[derive(Deserialize)]
pub struct SemesterParam {
    pub semester_id: i32,
}

#[derive(Deserialize)]
pub struct SemesterFilter {
    pub semester_id: Option<i32>,
}

/// The signed-in teacher's weekly timetable for a semester.
#[utoipa::path(
    get,
    path = "/api/teacher/timetable",
    tag = TEACHER_TAG,
    params(("semester_id" = i32, Query, description = "Semester")),
    responses(
        (status = 200, description = "Timetable entries", body = Vec<TimetableEntryDto>),
        (status = 401, description = "Not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SemesterParam>,
) -> Result<impl IntoResponse, AppError> {
    let (_, teacher) = require_teacher(&state.db, &session).await?;

    let entries = TimetableService::new(&state.db)
        .get_for_teacher(teacher.id, params.semester_id)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// The signed-in teacher's teaching assignments.
#[utoipa::path(
    get,
    path = "/api/teacher/assignments",
    tag = TEACHER_TAG,
    params(("semester_id" = Option<i32>, Query, description = "Filter by semester")),
    responses(
        (status = 200, description = "Assignments", body = Vec<AssignmentDto>),
        (status = 401, description = "Not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<SemesterFilter>,
) -> Result<impl IntoResponse, AppError> {
    let (_, teacher) = require_teacher(&state.db, &session).await?;

    let assignments = TeachingAssignmentService::new(&state.db)
        .get_for_teacher(teacher.id, filter.semester_id)
        .await?;

    Ok((StatusCode::OK, Json(assignments)))
}

/// Classes the signed-in teacher runs as homeroom teacher.
#[utoipa::path(
    get,
    path = "/api/teacher/homerooms",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Homeroom classes", body = Vec<ClassDto>),
        (status = 401, description = "Not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_homerooms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_, teacher) = require_teacher(&state.db, &session).await?;

    let classes = ClassService::new(&state.db)
        .get_homerooms(teacher.id)
        .await?;

    Ok((StatusCode::OK, Json(classes)))
}

/// Roster of a class the teacher is connected to.
#[utoipa::path(
    get,
    path = "/api/teacher/classes/{id}/students",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Class id")),
    responses(
        (status = 200, description = "Enrolled students", body = Vec<ClassStudentDto>),
        (status = 401, description = "Not authenticated or class not theirs", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_students(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let students = ClassService::new(&state.db)
        .get_students_for_teacher(teacher.id, user.id, class_id)
        .await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Gradebook for one of the teacher's (class, subject, semester) assignments.
#[utoipa::path(
    get,
    path = "/api/teacher/gradebook",
    tag = TEACHER_TAG,
    params(GradebookQuery),
    responses(
        (status = 200, description = "One row per enrolled student", body = Vec<GradebookRowDto>),
        (status = 401, description = "Not authenticated or assignment not theirs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gradebook(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<GradebookQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let rows = ScoreService::new(&state.db)
        .gradebook(
            teacher.id,
            user.id,
            query.class_id,
            query.subject_id,
            query.semester_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Enter or update score components for one student.
///
/// The weighted average is recomputed on every write and becomes available
/// once all four components are present.
#[utoipa::path(
    put,
    path = "/api/teacher/classes/{id}/scores",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Class id")),
    request_body = UpsertScoreDto,
    responses(
        (status = 200, description = "Stored score", body = ScoreDto),
        (status = 400, description = "Component out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated or assignment not theirs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_score(
    State(state): State<AppState>,
    session: Session,
    Path(class_id): Path<i32>,
    Json(payload): Json<UpsertScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let score = ScoreService::new(&state.db)
        .upsert(teacher.id, user.id, class_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(score)))
}

/// Record a roll call for one class and date.
#[utoipa::path(
    post,
    path = "/api/teacher/attendance",
    tag = TEACHER_TAG,
    request_body = RecordAttendanceDto,
    responses(
        (status = 200, description = "Stored records", body = Vec<AttendanceDto>),
        (status = 400, description = "Unknown status or student not enrolled", body = ErrorDto),
        (status = 401, description = "Not authenticated or class not theirs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_attendance(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecordAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let records = AttendanceService::new(&state.db)
        .record(teacher.id, user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Attendance records for one class and date.
#[utoipa::path(
    get,
    path = "/api/teacher/attendance",
    tag = TEACHER_TAG,
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceDto>),
        (status = 401, description = "Not authenticated or class not theirs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let records = AttendanceService::new(&state.db)
        .get_by_class_date(teacher.id, user.id, query.class_id, query.date)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Rate a homeroom student's conduct for a semester.
#[utoipa::path(
    put,
    path = "/api/teacher/conduct",
    tag = TEACHER_TAG,
    request_body = UpsertConductDto,
    responses(
        (status = 200, description = "Stored rating", body = ConductDto),
        (status = 400, description = "Unknown rating", body = ErrorDto),
        (status = 401, description = "Not authenticated or not their homeroom student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_conduct(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertConductDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let conduct = ConductService::new(&state.db)
        .upsert(teacher.id, user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(conduct)))
}

/// Materials the signed-in teacher has published.
#[utoipa::path(
    get,
    path = "/api/teacher/materials",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Materials", body = Vec<MaterialDto>),
        (status = 401, description = "Not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_materials(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_, teacher) = require_teacher(&state.db, &session).await?;

    let materials = MaterialService::new(&state.db).get_own(teacher.id).await?;

    Ok((StatusCode::OK, Json(materials)))
}

/// Publish a material file to a class.
///
/// Multipart fields: `class_id`, `subject_id`, `title`, optional
/// `description`, and the `file` itself.
#[utoipa::path(
    post,
    path = "/api/teacher/materials",
    tag = TEACHER_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Published", body = MaterialDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not authenticated or class not theirs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_material(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    let mut class_id: Option<i32> = None;
    let mut subject_id: Option<i32> = None;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "class_id" => class_id = Some(parse_field(field.text().await?, "class_id")?),
            "subject_id" => subject_id = Some(parse_field(field.text().await?, "subject_id")?),
            "title" => title = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            "file" => {
                let name = field.file_name().unwrap_or_default().to_string();
                file = Some((name, field.bytes().await?.to_vec()));
            }
            _ => {}
        }
    }

    let class_id = class_id.ok_or_else(|| missing("class_id"))?;
    let subject_id = subject_id.ok_or_else(|| missing("subject_id"))?;
    let title = title.filter(|t| !t.trim().is_empty()).ok_or_else(|| missing("title"))?;
    let (file_name, bytes) = file.ok_or_else(|| missing("file"))?;

    // Authorization runs before the file touches disk.
    let service = MaterialService::new(&state.db);
    service
        .authorize_publish(user.id, teacher.id, class_id, subject_id)
        .await?;

    let file_url = store_file(&state.config.upload_dir, UploadKind::Material, &file_name, &bytes).await?;

    let result = service
        .publish(
            user.id,
            CreateMaterialParams {
                class_id,
                subject_id,
                teacher_id: teacher.id,
                title,
                description: description.filter(|d| !d.trim().is_empty()),
                file_url: file_url.clone(),
            },
        )
        .await;

    let material = match result {
        Ok(material) => material,
        Err(err) => {
            if let Err(cleanup) = discard_file(&state.config.upload_dir, &file_url).await {
                tracing::warn!("Failed to remove stored upload {file_url}: {cleanup}");
            }
            return Err(err);
        }
    };

    Ok((StatusCode::CREATED, Json(material)))
}

/// Remove one of the teacher's own materials.
#[utoipa::path(
    delete,
    path = "/api/teacher/materials/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Material id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or material not theirs", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_material(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    MaterialService::new(&state.db)
        .delete_own(teacher.id, user.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Material deleted".to_string(),
        }),
    ))
}

/// The signed-in teacher's submitted certificates.
#[utoipa::path(
    get,
    path = "/api/teacher/certificates",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Certificates", body = Vec<CertificateDto>),
        (status = 401, description = "Not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_certificates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let (_, teacher) = require_teacher(&state.db, &session).await?;

    let certificates = CertificateService::new(&state.db)
        .get_own(teacher.id)
        .await?;

    Ok((StatusCode::OK, Json(certificates)))
}

/// Submit a certificate for admin review.
///
/// Multipart fields: `name`, `issued_date` (YYYY-MM-DD), and the `file`.
#[utoipa::path(
    post,
    path = "/api/teacher/certificates",
    tag = TEACHER_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Submitted as pending", body = CertificateDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not authenticated or not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_certificate(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (_, teacher) = require_teacher(&state.db, &session).await?;

    let mut name: Option<String> = None;
    let mut issued_date: Option<NaiveDate> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "name" => name = Some(field.text().await?),
            "issued_date" => issued_date = Some(parse_field(field.text().await?, "issued_date")?),
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                file = Some((file_name, field.bytes().await?.to_vec()));
            }
            _ => {}
        }
    }

    let name = name.filter(|n| !n.trim().is_empty()).ok_or_else(|| missing("name"))?;
    let issued_date = issued_date.ok_or_else(|| missing("issued_date"))?;
    let (file_name, bytes) = file.ok_or_else(|| missing("file"))?;

    let file_url = store_file(
        &state.config.upload_dir,
        UploadKind::Certificate,
        &file_name,
        &bytes,
    )
    .await?;

    let result = CertificateService::new(&state.db)
        .submit(teacher.id, name, file_url.clone(), issued_date)
        .await;

    let certificate = match result {
        Ok(certificate) => certificate,
        Err(err) => {
            if let Err(cleanup) = discard_file(&state.config.upload_dir, &file_url).await {
                tracing::warn!("Failed to remove stored upload {file_url}: {cleanup}");
            }
            return Err(err);
        }
    };

    Ok((StatusCode::CREATED, Json(certificate)))
}

/// Withdraw one of the teacher's own certificates.
#[utoipa::path(
    delete,
    path = "/api/teacher/certificates/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Certificate id")),
    responses(
        (status = 200, description = "Deleted", body = OkDto),
        (status = 401, description = "Not authenticated or certificate not theirs", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_certificate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (user, teacher) = require_teacher(&state.db, &session).await?;

    CertificateService::new(&state.db)
        .delete_own(teacher.id, user.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OkDto {
            message: "Certificate deleted".to_string(),
        }),
    ))
}

fn parse_field<T: std::str::FromStr>(value: String, name: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Malformed multipart field: {name}")))
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing multipart field: {name}"))
}
