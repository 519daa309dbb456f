use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreDto {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub semester_id: i32,
    pub oral: Option<f64>,
    pub fifteen_minute: Option<f64>,
    pub midterm: Option<f64>,
    pub final_exam: Option<f64>,
    pub average: Option<f64>,
}

impl From<entity::score::Model> for ScoreDto {
    fn from(model: entity::score::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            subject_id: model.subject_id,
            semester_id: model.semester_id,
            oral: model.oral,
            fifteen_minute: model.fifteen_minute,
            midterm: model.midterm,
            final_exam: model.final_exam,
            average: model.average,
        }
    }
}

/// Teacher-entered score components for one student. Missing components
/// leave the stored value untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertScoreDto {
    pub student_id: i32,
    pub subject_id: i32,
    pub semester_id: i32,
    pub oral: Option<f64>,
    pub fifteen_minute: Option<f64>,
    pub midterm: Option<f64>,
    pub final_exam: Option<f64>,
}

/// One row of a class gradebook: a student plus their score for the
/// subject being graded, if any has been entered yet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradebookRowDto {
    pub student_id: i32,
    pub full_name: String,
    pub score: Option<ScoreDto>,
}

/// Student-facing score row with the subject spelled out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentScoreDto {
    pub subject_name: String,
    pub semester_id: i32,
    pub oral: Option<f64>,
    pub fifteen_minute: Option<f64>,
    pub midterm: Option<f64>,
    pub final_exam: Option<f64>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct GradebookQuery {
    pub class_id: i32,
    pub subject_id: i32,
    pub semester_id: i32,
}
