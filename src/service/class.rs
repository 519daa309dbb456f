use sea_orm::DatabaseConnection;

use crate::data::academic_year::AcademicYearRepository;
use crate::data::class::ClassRepository;
use crate::data::teaching_assignment::TeachingAssignmentRepository;
use crate::data::user::UserRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::class::{ClassDto, ClassStudentDto, MergeResultDto, SaveClassDto};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveClassDto) -> Result<ClassDto, AppError> {
        self.validate(&params, None).await?;

        let repo = ClassRepository::new(self.db);
        let class = repo.create(params).await?;

        repo.get_enriched_by_id(class.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Class vanished after creation".to_string()))
    }

    pub async fn get_all(&self, academic_year_id: Option<i32>) -> Result<Vec<ClassDto>, AppError> {
        Ok(ClassRepository::new(self.db)
            .get_enriched(academic_year_id)
            .await?)
    }

    pub async fn update(&self, id: i32, params: SaveClassDto) -> Result<ClassDto, AppError> {
        let repo = ClassRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Class {id} not found")));
        }

        self.validate(&params, Some(id)).await?;

        let class = repo.update(id, params).await?;

        repo.get_enriched_by_id(class.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Class vanished after update".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Class {id} not found")));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Classes the teacher runs as homeroom teacher.
    pub async fn get_homerooms(&self, teacher_id: i32) -> Result<Vec<ClassDto>, AppError> {
        let repo = ClassRepository::new(self.db);
        let mut classes = Vec::new();
        for class in repo.find_homeroom_by_teacher(teacher_id).await? {
            if let Some(dto) = repo.get_enriched_by_id(class.id).await? {
                classes.push(dto);
            }
        }

        Ok(classes)
    }

    pub async fn get_students(&self, class_id: i32) -> Result<Vec<ClassStudentDto>, AppError> {
        let repo = ClassRepository::new(self.db);
        if repo.get_by_id(class_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Class {class_id} not found")));
        }

        Ok(repo.get_students(class_id).await?)
    }

    pub async fn enroll_student(&self, class_id: i32, student_id: i32) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);
        if repo.get_by_id(class_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Class {class_id} not found")));
        }
        if UserRepository::new(self.db)
            .find_student_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Student {student_id} not found")));
        }
        if repo.is_enrolled(student_id, class_id).await? {
            return Err(AppError::Conflict(
                "Student is already enrolled in this class".to_string(),
            ));
        }

        repo.enroll(student_id, class_id).await?;

        Ok(())
    }

    pub async fn unenroll_student(&self, class_id: i32, student_id: i32) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);
        if !repo.is_enrolled(student_id, class_id).await? {
            return Err(AppError::NotFound(format!(
                "Student {student_id} is not enrolled in class {class_id}"
            )));
        }

        repo.unenroll(student_id, class_id).await?;

        Ok(())
    }

    /// Roster access for the teacher portal. The teacher must run the class
    /// as homeroom teacher or teach it in some semester.
    pub async fn get_students_for_teacher(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        class_id: i32,
    ) -> Result<Vec<ClassStudentDto>, AppError> {
        let repo = ClassRepository::new(self.db);
        let is_homeroom = repo
            .find_homeroom_by_teacher(teacher_id)
            .await?
            .iter()
            .any(|c| c.id == class_id);
        let teaches = TeachingAssignmentRepository::new(self.db)
            .get_for_teacher(teacher_id, None)
            .await?
            .iter()
            .any(|a| a.class_id == class_id);

        if !is_homeroom && !teaches {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "view the roster of a class they are not connected to".to_string(),
            )
            .into());
        }

        self.get_students(class_id).await
    }

    /// Absorbs the source class into the target: students move over, any
    /// already in the target are dropped, and the source class is deleted.
    pub async fn merge(
        &self,
        target_class_id: i32,
        source_class_id: i32,
    ) -> Result<MergeResultDto, AppError> {
        if target_class_id == source_class_id {
            return Err(AppError::BadRequest(
                "A class cannot be merged into itself".to_string(),
            ));
        }

        let repo = ClassRepository::new(self.db);
        if repo.get_by_id(target_class_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Class {target_class_id} not found"
            )));
        }
        if repo.get_by_id(source_class_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Class {source_class_id} not found"
            )));
        }

        let (moved, duplicates_dropped) =
            repo.merge_into(source_class_id, target_class_id).await?;

        Ok(MergeResultDto {
            moved,
            duplicates_dropped,
        })
    }

    async fn validate(
        &self,
        params: &SaveClassDto,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if AcademicYearRepository::new(self.db)
            .get_by_id(params.academic_year_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Academic year {} does not exist",
                params.academic_year_id
            )));
        }

        if ClassRepository::new(self.db)
            .name_taken_in_year(params.academic_year_id, &params.name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Class {} already exists in this academic year",
                params.name
            )));
        }

        Ok(())
    }
}
