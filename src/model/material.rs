use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaterialDto {
    pub id: i32,
    pub class_id: i32,
    pub subject_id: i32,
    pub subject_name: Option<String>,
    pub teacher_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl MaterialDto {
    pub fn from_model(model: entity::class_material::Model, subject_name: Option<String>) -> Self {
        Self {
            id: model.id,
            class_id: model.class_id,
            subject_id: model.subject_id,
            subject_name,
            teacher_id: model.teacher_id,
            title: model.title,
            description: model.description,
            file_url: model.file_url,
            uploaded_at: model.uploaded_at,
        }
    }
}
