use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConductDto {
    pub id: i32,
    pub student_id: i32,
    pub semester_id: i32,
    pub rating: String,
    pub note: Option<String>,
}

impl From<entity::conduct::Model> for ConductDto {
    fn from(model: entity::conduct::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            semester_id: model.semester_id,
            rating: model.rating,
            note: model.note,
        }
    }
}

/// Homeroom teacher's conduct rating for one student and semester.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertConductDto {
    pub student_id: i32,
    pub semester_id: i32,
    pub rating: String,
    pub note: Option<String>,
}
