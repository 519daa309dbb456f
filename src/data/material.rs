use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::material::MaterialDto;

pub struct MaterialRepository<'a> {
    db: &'a DatabaseConnection,
}

pub struct CreateMaterialParams {
    pub class_id: i32,
    pub subject_id: i32,
    pub teacher_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
}

impl<'a> MaterialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateMaterialParams,
    ) -> Result<entity::class_material::Model, DbErr> {
        entity::class_material::ActiveModel {
            class_id: ActiveValue::Set(params.class_id),
            subject_id: ActiveValue::Set(params.subject_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            file_url: ActiveValue::Set(params.file_url),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::class_material::Model>, DbErr> {
        entity::prelude::ClassMaterial::find_by_id(id).one(self.db).await
    }

    pub async fn get_for_class(&self, class_id: i32) -> Result<Vec<MaterialDto>, DbErr> {
        let materials = entity::prelude::ClassMaterial::find()
            .filter(entity::class_material::Column::ClassId.eq(class_id))
            .order_by_desc(entity::class_material::Column::UploadedAt)
            .all(self.db)
            .await?;

        self.enrich(materials).await
    }

    pub async fn get_for_teacher(&self, teacher_id: i32) -> Result<Vec<MaterialDto>, DbErr> {
        let materials = entity::prelude::ClassMaterial::find()
            .filter(entity::class_material::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::class_material::Column::UploadedAt)
            .all(self.db)
            .await?;

        self.enrich(materials).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ClassMaterial::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn enrich(
        &self,
        materials: Vec<entity::class_material::Model>,
    ) -> Result<Vec<MaterialDto>, DbErr> {
        let subject_names = super::subject::SubjectRepository::new(self.db)
            .names_by_ids(materials.iter().map(|m| m.subject_id).collect())
            .await?;

        Ok(materials
            .into_iter()
            .map(|m| {
                let subject_name = subject_names.get(&m.subject_id).cloned();
                MaterialDto::from_model(m, subject_name)
            })
            .collect())
    }
}
