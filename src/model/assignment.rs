use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Teaching assignment enriched with display names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: i32,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub class_id: i32,
    pub class_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub semester_id: i32,
    pub semester_name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveAssignmentDto {
    pub teacher_id: i32,
    pub class_id: i32,
    pub subject_id: i32,
    pub semester_id: i32,
}
