use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AcademicYearDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<entity::academic_year::Model> for AcademicYearDto {
    fn from(model: entity::academic_year::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveAcademicYearDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
