//! Factories for academic years and semesters.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an academic year with a unique name and a September to June
/// date range.
pub async fn create_academic_year(
    db: &DatabaseConnection,
) -> Result<entity::academic_year::Model, DbErr> {
    let id = next_id();

    entity::academic_year::ActiveModel {
        name: ActiveValue::Set(format!("Year {}", id)),
        start_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()),
        end_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a semester inside the given academic year.
pub async fn create_semester(
    db: &DatabaseConnection,
    academic_year_id: i32,
) -> Result<entity::semester::Model, DbErr> {
    let id = next_id();

    entity::semester::ActiveModel {
        academic_year_id: ActiveValue::Set(academic_year_id),
        name: ActiveValue::Set(format!("Semester {}", id)),
        start_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()),
        end_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()),
        ..Default::default()
    }
    .insert(db)
    .await
}
