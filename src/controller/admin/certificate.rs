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
        api::ErrorDto,
        certificate::{CertificateDto, ReviewCertificateDto},
    },
    service::certificate::CertificateService,
    state::AppState,
};

pub const CERTIFICATE_TAG: &str = "admin/certificates";

#[derive(Deserialize)]
pub struct CertificateFilter {
    pub status: Option<String>,
}

/// Review queue of teacher certificates, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/admin/certificates",
    tag = CERTIFICATE_TAG,
    params(("status" = Option<String>, Query, description = "Filter: pending, approved, or rejected")),
    responses(
        (status = 200, description = "Certificates", body = Vec<CertificateDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_certificates(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<CertificateFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let certificates = CertificateService::new(&state.db)
        .get_all(filter.status.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(certificates)))
}

/// Approve or reject a certificate.
#[utoipa::path(
    post,
    path = "/api/admin/certificates/{id}/review",
    tag = CERTIFICATE_TAG,
    params(("id" = i32, Path, description = "Certificate id")),
    request_body = ReviewCertificateDto,
    responses(
        (status = 200, description = "Reviewed", body = CertificateDto),
        (status = 400, description = "Status must be approved or rejected", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_certificate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewCertificateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let certificate = CertificateService::new(&state.db)
        .review(id, &payload.status)
        .await?;

    Ok((StatusCode::OK, Json(certificate)))
}
