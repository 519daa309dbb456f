use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassDto {
    pub id: i32,
    pub academic_year_id: i32,
    pub name: String,
    pub grade_level: i32,
    pub homeroom_teacher_id: Option<i32>,
    pub homeroom_teacher_name: Option<String>,
    pub student_count: u64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveClassDto {
    pub academic_year_id: i32,
    pub name: String,
    pub grade_level: i32,
    pub homeroom_teacher_id: Option<i32>,
}

/// Student row as listed inside a class roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassStudentDto {
    pub student_id: i32,
    pub user_id: i32,
    pub full_name: String,
    pub enrollment_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnrollStudentDto {
    pub student_id: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MergeClassDto {
    /// Class whose students are absorbed; deleted once the merge completes.
    pub source_class_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MergeResultDto {
    pub moved: u64,
    /// Enrollments dropped because the student was already in the target.
    pub duplicates_dropped: u64,
}
