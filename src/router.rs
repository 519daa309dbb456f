use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    controller::{admin, auth, chat, student, teacher},
    error::{config::ConfigError, AppError},
    model,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::get_captcha,
        auth::login,
        auth::register,
        auth::logout,
        auth::get_user,
        auth::forgot_password,
        auth::reset_password,
        auth::change_password,
        auth::oauth_login,
        auth::oauth_callback,
        auth::face_login,
        admin::academic::get_academic_years,
        admin::academic::create_academic_year,
        admin::academic::update_academic_year,
        admin::academic::delete_academic_year,
        admin::academic::get_semesters,
        admin::academic::create_semester,
        admin::academic::update_semester,
        admin::academic::delete_semester,
        admin::subject::get_subjects,
        admin::subject::create_subject,
        admin::subject::update_subject,
        admin::subject::delete_subject,
        admin::class::get_classes,
        admin::class::create_class,
        admin::class::update_class,
        admin::class::delete_class,
        admin::class::get_class_students,
        admin::class::enroll_student,
        admin::class::unenroll_student,
        admin::class::merge_class,
        admin::user::get_users,
        admin::user::create_user,
        admin::user::get_user,
        admin::user::update_user,
        admin::user::delete_user,
        admin::user::reset_user_password,
        admin::assignment::get_assignments,
        admin::assignment::create_assignment,
        admin::assignment::delete_assignment,
        admin::timetable::get_timetables,
        admin::timetable::create_timetable,
        admin::timetable::update_timetable,
        admin::timetable::delete_timetable,
        admin::certificate::get_certificates,
        admin::certificate::review_certificate,
        teacher::get_timetable,
        teacher::get_assignments,
        teacher::get_homerooms,
        teacher::get_class_students,
        teacher::get_gradebook,
        teacher::put_score,
        teacher::record_attendance,
        teacher::get_attendance,
        teacher::put_conduct,
        teacher::get_materials,
        teacher::upload_material,
        teacher::delete_material,
        teacher::get_certificates,
        teacher::submit_certificate,
        teacher::delete_certificate,
        student::get_classes,
        student::get_timetable,
        student::get_scores,
        student::get_attendance,
        student::get_conduct,
        student::get_materials,
        chat::get_contacts,
        chat::get_conversation,
        chat::send_message,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::OkDto,
        model::auth::LoginDto,
        model::auth::RegisterDto,
        model::auth::ForgotPasswordDto,
        model::auth::ResetPasswordDto,
        model::auth::ChangePasswordDto,
        model::auth::FaceLoginDto,
        model::user::UserDto,
        model::user::CreateUserDto,
        model::user::UpdateUserDto,
        model::user::AdminResetPasswordDto,
        model::user::PaginatedUsersDto,
        model::academic_year::AcademicYearDto,
        model::academic_year::SaveAcademicYearDto,
        model::semester::SemesterDto,
        model::semester::SaveSemesterDto,
        model::subject::SubjectDto,
        model::subject::SaveSubjectDto,
        model::class::ClassDto,
        model::class::SaveClassDto,
        model::class::ClassStudentDto,
        model::class::EnrollStudentDto,
        model::class::MergeClassDto,
        model::class::MergeResultDto,
        model::assignment::AssignmentDto,
        model::assignment::SaveAssignmentDto,
        model::timetable::TimetableEntryDto,
        model::timetable::SaveTimetableDto,
        model::score::ScoreDto,
        model::score::UpsertScoreDto,
        model::score::GradebookRowDto,
        model::score::StudentScoreDto,
        model::attendance::AttendanceDto,
        model::attendance::AttendanceEntryDto,
        model::attendance::RecordAttendanceDto,
        model::conduct::ConductDto,
        model::conduct::UpsertConductDto,
        model::certificate::CertificateDto,
        model::certificate::ReviewCertificateDto,
        model::material::MaterialDto,
        model::chat::MessageDto,
        model::chat::SendMessageDto,
        model::chat::ContactDto,
    ))
)]
struct ApiDoc;

pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let frontend_origin: HeaderValue = config.frontend_origin.parse().map_err(|_| {
        ConfigError::InvalidValue("FRONTEND_ORIGIN".to_string(), config.frontend_origin.clone())
    })?;

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let auth_routes = Router::new()
        .route("/api/auth/captcha", get(auth::get_captcha))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/oauth/login", get(auth::oauth_login))
        .route("/api/auth/oauth/callback", get(auth::oauth_callback))
        .route("/api/auth/face-login", post(auth::face_login));

    let admin_routes = Router::new()
        .route(
            "/api/admin/academic-years",
            get(admin::academic::get_academic_years).post(admin::academic::create_academic_year),
        )
        .route(
            "/api/admin/academic-years/{id}",
            put(admin::academic::update_academic_year)
                .delete(admin::academic::delete_academic_year),
        )
        .route(
            "/api/admin/semesters",
            get(admin::academic::get_semesters).post(admin::academic::create_semester),
        )
        .route(
            "/api/admin/semesters/{id}",
            put(admin::academic::update_semester).delete(admin::academic::delete_semester),
        )
        .route(
            "/api/admin/subjects",
            get(admin::subject::get_subjects).post(admin::subject::create_subject),
        )
        .route(
            "/api/admin/subjects/{id}",
            put(admin::subject::update_subject).delete(admin::subject::delete_subject),
        )
        .route(
            "/api/admin/classes",
            get(admin::class::get_classes).post(admin::class::create_class),
        )
        .route(
            "/api/admin/classes/{id}",
            put(admin::class::update_class).delete(admin::class::delete_class),
        )
        .route(
            "/api/admin/classes/{id}/students",
            get(admin::class::get_class_students).post(admin::class::enroll_student),
        )
        .route(
            "/api/admin/classes/{id}/students/{student_id}",
            delete(admin::class::unenroll_student),
        )
        .route("/api/admin/classes/{id}/merge", post(admin::class::merge_class))
        .route(
            "/api/admin/users",
            get(admin::user::get_users).post(admin::user::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            get(admin::user::get_user)
                .put(admin::user::update_user)
                .delete(admin::user::delete_user),
        )
        .route(
            "/api/admin/users/{id}/reset-password",
            post(admin::user::reset_user_password),
        )
        .route(
            "/api/admin/assignments",
            get(admin::assignment::get_assignments).post(admin::assignment::create_assignment),
        )
        .route(
            "/api/admin/assignments/{id}",
            delete(admin::assignment::delete_assignment),
        )
        .route(
            "/api/admin/timetables",
            get(admin::timetable::get_timetables).post(admin::timetable::create_timetable),
        )
        .route(
            "/api/admin/timetables/{id}",
            put(admin::timetable::update_timetable).delete(admin::timetable::delete_timetable),
        )
        .route(
            "/api/admin/certificates",
            get(admin::certificate::get_certificates),
        )
        .route(
            "/api/admin/certificates/{id}/review",
            post(admin::certificate::review_certificate),
        );

    let teacher_routes = Router::new()
        .route("/api/teacher/timetable", get(teacher::get_timetable))
        .route("/api/teacher/assignments", get(teacher::get_assignments))
        .route("/api/teacher/homerooms", get(teacher::get_homerooms))
        .route(
            "/api/teacher/classes/{id}/students",
            get(teacher::get_class_students),
        )
        .route("/api/teacher/gradebook", get(teacher::get_gradebook))
        .route("/api/teacher/classes/{id}/scores", put(teacher::put_score))
        .route(
            "/api/teacher/attendance",
            get(teacher::get_attendance).post(teacher::record_attendance),
        )
        .route("/api/teacher/conduct", put(teacher::put_conduct))
        .route(
            "/api/teacher/materials",
            get(teacher::get_materials).post(teacher::upload_material),
        )
        .route(
            "/api/teacher/materials/{id}",
            delete(teacher::delete_material),
        )
        .route(
            "/api/teacher/certificates",
            get(teacher::get_certificates).post(teacher::submit_certificate),
        )
        .route(
            "/api/teacher/certificates/{id}",
            delete(teacher::delete_certificate),
        );

    let student_routes = Router::new()
        .route("/api/student/classes", get(student::get_classes))
        .route("/api/student/timetable", get(student::get_timetable))
        .route("/api/student/scores", get(student::get_scores))
        .route("/api/student/attendance", get(student::get_attendance))
        .route("/api/student/conduct", get(student::get_conduct))
        .route("/api/student/materials", get(student::get_materials));

    let chat_routes = Router::new()
        .route("/api/chat/contacts", get(chat::get_contacts))
        .route(
            "/api/chat/conversations/{peer_id}",
            get(chat::get_conversation),
        )
        .route("/api/chat/messages", post(chat::send_message));

    Ok(Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(auth_routes)
        .merge(admin_routes)
        .merge(teacher_routes)
        .merge(student_routes)
        .merge(chat_routes)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(cors))
}
