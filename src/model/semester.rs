use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SemesterDto {
    pub id: i32,
    pub academic_year_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<entity::semester::Model> for SemesterDto {
    fn from(model: entity::semester::Model) -> Self {
        Self {
            id: model.id,
            academic_year_id: model.academic_year_id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveSemesterDto {
    pub academic_year_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
