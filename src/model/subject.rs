use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    pub name: String,
    pub code: String,
}

impl From<entity::subject::Model> for SubjectDto {
    fn from(model: entity::subject::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveSubjectDto {
    pub name: String,
    pub code: String,
}
