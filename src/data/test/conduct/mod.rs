use crate::data::conduct::ConductRepository;
use crate::model::conduct::UpsertConductDto;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;

fn rating(student_id: i32, semester_id: i32, rating: &str) -> UpsertConductDto {
    UpsertConductDto {
        student_id,
        semester_id,
        rating: rating.to_string(),
        note: None,
    }
}
