use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timetable slot enriched with display names for rendering a grid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimetableEntryDto {
    pub id: i32,
    pub class_id: i32,
    pub class_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub semester_id: i32,
    /// School day numbering: 2 = Monday .. 8 = Sunday.
    pub day_of_week: i32,
    pub period: i32,
    pub room: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveTimetableDto {
    pub class_id: i32,
    pub subject_id: i32,
    pub teacher_id: i32,
    pub semester_id: i32,
    pub day_of_week: i32,
    pub period: i32,
    pub room: String,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct TimetableQuery {
    pub semester_id: i32,
    pub class_id: Option<i32>,
}

/// Which dimension a proposed slot collides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Class,
    Teacher,
    Room,
}

impl ConflictKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ConflictKind::Class => "the class already has a lesson in this slot",
            ConflictKind::Teacher => "the teacher already has a lesson in this slot",
            ConflictKind::Room => "the room is already occupied in this slot",
        }
    }
}
