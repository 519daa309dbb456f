//! Factories for classes, enrollments, and teaching assignments.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating classes with customizable fields.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    academic_year_id: i32,
    homeroom_teacher_id: Option<i32>,
    name: String,
    grade_level: i32,
}

impl<'a> ClassFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, academic_year_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            academic_year_id,
            homeroom_teacher_id: None,
            name: format!("Class {}", id),
            grade_level: 10,
        }
    }

    pub fn homeroom_teacher(mut self, teacher_id: i32) -> Self {
        self.homeroom_teacher_id = Some(teacher_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn grade_level(mut self, grade_level: i32) -> Self {
        self.grade_level = grade_level;
        self
    }

    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            academic_year_id: ActiveValue::Set(self.academic_year_id),
            homeroom_teacher_id: ActiveValue::Set(self.homeroom_teacher_id),
            name: ActiveValue::Set(self.name),
            grade_level: ActiveValue::Set(self.grade_level),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values in the given academic year.
pub async fn create_class(
    db: &DatabaseConnection,
    academic_year_id: i32,
) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db, academic_year_id).build().await
}

/// Enrolls a student in a class.
pub async fn enroll(
    db: &DatabaseConnection,
    student_id: i32,
    class_id: i32,
) -> Result<entity::student_class::Model, DbErr> {
    entity::student_class::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        class_id: ActiveValue::Set(class_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a teaching assignment linking teacher, class, subject, and
/// semester.
pub async fn create_assignment(
    db: &DatabaseConnection,
    teacher_id: i32,
    class_id: i32,
    subject_id: i32,
    semester_id: i32,
) -> Result<entity::teaching_assignment::Model, DbErr> {
    entity::teaching_assignment::ActiveModel {
        teacher_id: ActiveValue::Set(teacher_id),
        class_id: ActiveValue::Set(class_id),
        subject_id: ActiveValue::Set(subject_id),
        semester_id: ActiveValue::Set(semester_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
