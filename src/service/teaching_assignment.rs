use sea_orm::DatabaseConnection;

use crate::data::class::ClassRepository;
use crate::data::semester::SemesterRepository;
use crate::data::subject::SubjectRepository;
use crate::data::teaching_assignment::TeachingAssignmentRepository;
use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::assignment::{AssignmentDto, SaveAssignmentDto};

pub struct TeachingAssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeachingAssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a teacher to a (class, subject, semester). Only one teacher
    /// may hold that combination.
    pub async fn create(&self, params: SaveAssignmentDto) -> Result<AssignmentDto, AppError> {
        self.validate_references(&params).await?;

        let repo = TeachingAssignmentRepository::new(self.db);
        if repo
            .exists(params.class_id, params.subject_id, params.semester_id)
            .await?
        {
            return Err(AppError::Conflict(
                "This subject is already assigned for this class and semester".to_string(),
            ));
        }

        let assignment = repo.create(params).await?;

        repo.get_enriched_by_id(assignment.id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Assignment vanished after creation".to_string())
            })
    }

    pub async fn get_all(&self, semester_id: Option<i32>) -> Result<Vec<AssignmentDto>, AppError> {
        Ok(TeachingAssignmentRepository::new(self.db)
            .get_enriched(semester_id)
            .await?)
    }

    pub async fn get_for_teacher(
        &self,
        teacher_id: i32,
        semester_id: Option<i32>,
    ) -> Result<Vec<AssignmentDto>, AppError> {
        Ok(TeachingAssignmentRepository::new(self.db)
            .get_enriched_for_teacher(teacher_id, semester_id)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TeachingAssignmentRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Assignment {id} not found")));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn validate_references(&self, params: &SaveAssignmentDto) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_teacher_by_id(params.teacher_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Teacher {} does not exist",
                params.teacher_id
            )));
        }
        if ClassRepository::new(self.db)
            .get_by_id(params.class_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Class {} does not exist",
                params.class_id
            )));
        }
        if SubjectRepository::new(self.db)
            .get_by_id(params.subject_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Subject {} does not exist",
                params.subject_id
            )));
        }
        if SemesterRepository::new(self.db)
            .get_by_id(params.semester_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Semester {} does not exist",
                params.semester_id
            )));
        }

        Ok(())
    }
}
