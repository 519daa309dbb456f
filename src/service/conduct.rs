use sea_orm::DatabaseConnection;

use crate::data::class::ClassRepository;
use crate::data::conduct::ConductRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::conduct::{ConductDto, UpsertConductDto};

/// Conduct ratings follow the national scale.
pub const CONDUCT_RATINGS: [&str; 4] = ["excellent", "good", "fair", "poor"];

pub struct ConductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rates a student's conduct for a semester. Only the homeroom teacher
    /// of one of the student's classes may do this.
    pub async fn upsert(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        params: UpsertConductDto,
    ) -> Result<ConductDto, AppError> {
        if !CONDUCT_RATINGS.contains(&params.rating.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown conduct rating: {}",
                params.rating
            )));
        }

        let class_repo = ClassRepository::new(self.db);
        let homeroom_classes = class_repo.find_homeroom_by_teacher(teacher_id).await?;

        let mut is_their_student = false;
        for class in &homeroom_classes {
            if class_repo.is_enrolled(params.student_id, class.id).await? {
                is_their_student = true;
                break;
            }
        }

        if !is_their_student {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "rate conduct for a student outside their homeroom".to_string(),
            )
            .into());
        }

        Ok(ConductRepository::new(self.db).upsert(params).await?.into())
    }

    pub async fn for_student(&self, student_id: i32) -> Result<Vec<ConductDto>, AppError> {
        let records = ConductRepository::new(self.db)
            .for_student(student_id)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
