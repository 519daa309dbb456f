use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Review states for a submitted certificate.
pub const CERTIFICATE_STATUSES: [&str; 3] = ["pending", "approved", "rejected"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificateDto {
    pub id: i32,
    pub teacher_id: i32,
    pub teacher_name: Option<String>,
    pub name: String,
    pub file_url: String,
    pub issued_date: NaiveDate,
    pub status: String,
}

impl CertificateDto {
    pub fn from_model(
        model: entity::teacher_certificate::Model,
        teacher_name: Option<String>,
    ) -> Self {
        Self {
            id: model.id,
            teacher_id: model.teacher_id,
            teacher_name,
            name: model.name,
            file_url: model.file_url,
            issued_date: model.issued_date,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReviewCertificateDto {
    /// Either "approved" or "rejected".
    pub status: String,
}
