use sea_orm::DatabaseConnection;

use crate::data::score::ScoreRepository;
use crate::data::teaching_assignment::TeachingAssignmentRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::score::{GradebookRowDto, ScoreDto, StudentScoreDto, UpsertScoreDto};

pub struct ScoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enters or updates score components for a student. The acting teacher
    /// must hold the teaching assignment for this class, subject, and
    /// semester.
    pub async fn upsert(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        class_id: i32,
        params: UpsertScoreDto,
    ) -> Result<ScoreDto, AppError> {
        validate_components(&params)?;

        if !TeachingAssignmentRepository::new(self.db)
            .exists_for_teacher(teacher_id, class_id, params.subject_id, params.semester_id)
            .await?
        {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "enter scores for a class they are not assigned to".to_string(),
            )
            .into());
        }

        Ok(ScoreRepository::new(self.db).upsert(params).await?.into())
    }

    /// Gradebook for one class and subject; same assignment gate as writes.
    pub async fn gradebook(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        class_id: i32,
        subject_id: i32,
        semester_id: i32,
    ) -> Result<Vec<GradebookRowDto>, AppError> {
        if !TeachingAssignmentRepository::new(self.db)
            .exists_for_teacher(teacher_id, class_id, subject_id, semester_id)
            .await?
        {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "view a gradebook for a class they are not assigned to".to_string(),
            )
            .into());
        }

        Ok(ScoreRepository::new(self.db)
            .gradebook(class_id, subject_id, semester_id)
            .await?)
    }

    pub async fn for_student(
        &self,
        student_id: i32,
        semester_id: Option<i32>,
    ) -> Result<Vec<StudentScoreDto>, AppError> {
        Ok(ScoreRepository::new(self.db)
            .for_student(student_id, semester_id)
            .await?)
    }
}

fn validate_components(params: &UpsertScoreDto) -> Result<(), AppError> {
    for (name, value) in [
        ("oral", params.oral),
        ("fifteen_minute", params.fifteen_minute),
        ("midterm", params.midterm),
        ("final_exam", params.final_exam),
    ] {
        if let Some(value) = value {
            if !(0.0..=10.0).contains(&value) {
                return Err(AppError::BadRequest(format!(
                    "Score component {name} must be between 0 and 10"
                )));
            }
        }
    }

    Ok(())
}
