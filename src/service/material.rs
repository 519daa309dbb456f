use sea_orm::DatabaseConnection;

use crate::data::class::ClassRepository;
use crate::data::material::{CreateMaterialParams, MaterialRepository};
use crate::data::teaching_assignment::TeachingAssignmentRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::material::MaterialDto;

pub struct MaterialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks the teacher has a teaching assignment for the class and
    /// subject in some semester. Controllers call this before accepting an
    /// upload so nothing is written to disk for a denied request.
    pub async fn authorize_publish(
        &self,
        teacher_user_id: i32,
        teacher_id: i32,
        class_id: i32,
        subject_id: i32,
    ) -> Result<(), AppError> {
        let assigned = TeachingAssignmentRepository::new(self.db)
            .get_for_teacher(teacher_id, None)
            .await?
            .iter()
            .any(|a| a.class_id == class_id && a.subject_id == subject_id);

        if !assigned {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "publish materials for a class they do not teach".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Publishes a material to a class the teacher is assigned to.
    pub async fn publish(
        &self,
        teacher_user_id: i32,
        params: CreateMaterialParams,
    ) -> Result<MaterialDto, AppError> {
        self.authorize_publish(
            teacher_user_id,
            params.teacher_id,
            params.class_id,
            params.subject_id,
        )
        .await?;

        let material = MaterialRepository::new(self.db).create(params).await?;

        Ok(MaterialDto::from_model(material, None))
    }

    pub async fn get_own(&self, teacher_id: i32) -> Result<Vec<MaterialDto>, AppError> {
        Ok(MaterialRepository::new(self.db)
            .get_for_teacher(teacher_id)
            .await?)
    }

    /// Materials visible to a student: everything published to classes
    /// they are enrolled in.
    pub async fn get_for_student(&self, student_id: i32) -> Result<Vec<MaterialDto>, AppError> {
        let classes = ClassRepository::new(self.db)
            .get_classes_of_student(student_id)
            .await?;

        let repo = MaterialRepository::new(self.db);
        let mut materials = Vec::new();
        for class in classes {
            materials.extend(repo.get_for_class(class.id).await?);
        }
        materials.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

        Ok(materials)
    }

    pub async fn delete_own(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        material_id: i32,
    ) -> Result<(), AppError> {
        let repo = MaterialRepository::new(self.db);
        let material = repo
            .get_by_id(material_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Material {material_id} not found")))?;

        if material.teacher_id != teacher_id {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "delete a material belonging to another teacher".to_string(),
            )
            .into());
        }

        repo.delete(material_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn publishing_needs_a_matching_assignment() -> Result<(), sea_orm::DbErr> {
        let test = TestBuilder::new()
            .with_timetable_tables()
            .with_table(entity::prelude::ClassMaterial)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let setup = factory::helpers::create_gradebook_setup(db).await?;
        let other_subject = factory::subject::create_subject(db).await?;

        let service = MaterialService::new(db);

        let denied = service
            .authorize_publish(
                setup.teacher_user.id,
                setup.teacher.id,
                setup.class.id,
                other_subject.id,
            )
            .await;
        assert!(matches!(
            denied,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));

        let material = service
            .publish(
                setup.teacher_user.id,
                CreateMaterialParams {
                    class_id: setup.class.id,
                    subject_id: setup.subject.id,
                    teacher_id: setup.teacher.id,
                    title: "Chapter 1 notes".to_string(),
                    description: None,
                    file_url: "/uploads/materials/notes.pdf".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(material.title, "Chapter 1 notes");

        Ok(())
    }
}
