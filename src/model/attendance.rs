use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepted attendance statuses.
pub const ATTENDANCE_STATUSES: [&str; 4] = ["present", "absent", "late", "excused"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub student_id: i32,
    pub class_id: i32,
    pub semester_id: i32,
    pub date: NaiveDate,
    pub status: String,
    pub note: Option<String>,
}

impl From<entity::attendance::Model> for AttendanceDto {
    fn from(model: entity::attendance::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            class_id: model.class_id,
            semester_id: model.semester_id,
            date: model.date,
            status: model.status,
            note: model.note,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttendanceEntryDto {
    pub student_id: i32,
    pub status: String,
    pub note: Option<String>,
}

/// One roll call: every listed student gets a row for the given date.
/// Re-submitting the same day overwrites the previous statuses.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecordAttendanceDto {
    pub class_id: i32,
    pub semester_id: i32,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntryDto>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct AttendanceQuery {
    pub class_id: i32,
    pub date: NaiveDate,
}
