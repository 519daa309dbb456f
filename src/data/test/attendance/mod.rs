use crate::data::attendance::AttendanceRepository;
use crate::model::attendance::AttendanceEntryDto;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert_many;

fn entry(student_id: i32, status: &str) -> AttendanceEntryDto {
    AttendanceEntryDto {
        student_id,
        status: status.to_string(),
        note: None,
    }
}

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, day).unwrap()
}
