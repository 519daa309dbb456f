use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::certificate::CertificateRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::certificate::{CertificateDto, CERTIFICATE_STATUSES};

pub struct CertificateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a certificate for review; it starts out pending.
    pub async fn submit(
        &self,
        teacher_id: i32,
        name: String,
        file_url: String,
        issued_date: NaiveDate,
    ) -> Result<CertificateDto, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Certificate name must not be empty".to_string(),
            ));
        }

        let certificate = CertificateRepository::new(self.db)
            .create(teacher_id, name, file_url, issued_date)
            .await?;

        Ok(CertificateDto::from_model(certificate, None))
    }

    pub async fn get_own(&self, teacher_id: i32) -> Result<Vec<CertificateDto>, AppError> {
        let certificates = CertificateRepository::new(self.db)
            .get_for_teacher(teacher_id)
            .await?;

        Ok(certificates
            .into_iter()
            .map(|c| CertificateDto::from_model(c, None))
            .collect())
    }

    pub async fn delete_own(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        certificate_id: i32,
    ) -> Result<(), AppError> {
        let repo = CertificateRepository::new(self.db);
        let certificate = repo.get_by_id(certificate_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Certificate {certificate_id} not found"))
        })?;

        if certificate.teacher_id != teacher_id {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "delete a certificate belonging to another teacher".to_string(),
            )
            .into());
        }

        repo.delete(certificate_id).await?;

        Ok(())
    }

    /// Admin review queue, optionally filtered by status.
    pub async fn get_all(&self, status: Option<&str>) -> Result<Vec<CertificateDto>, AppError> {
        if let Some(status) = status {
            if !CERTIFICATE_STATUSES.contains(&status) {
                return Err(AppError::BadRequest(format!(
                    "Unknown certificate status: {status}"
                )));
            }
        }

        Ok(CertificateRepository::new(self.db)
            .get_all_enriched(status)
            .await?)
    }

    /// Admin decision on a pending certificate.
    pub async fn review(&self, certificate_id: i32, status: &str) -> Result<CertificateDto, AppError> {
        if status != "approved" && status != "rejected" {
            return Err(AppError::BadRequest(
                "Review status must be approved or rejected".to_string(),
            ));
        }

        let repo = CertificateRepository::new(self.db);
        if repo.get_by_id(certificate_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Certificate {certificate_id} not found"
            )));
        }

        let certificate = repo.set_status(certificate_id, status.to_string()).await?;

        Ok(CertificateDto::from_model(certificate, None))
    }
}
