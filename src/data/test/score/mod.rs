use crate::data::score::ScoreRepository;
use crate::model::score::UpsertScoreDto;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod gradebook;
mod upsert;

fn components(
    student_id: i32,
    subject_id: i32,
    semester_id: i32,
    oral: Option<f64>,
    fifteen_minute: Option<f64>,
    midterm: Option<f64>,
    final_exam: Option<f64>,
) -> UpsertScoreDto {
    UpsertScoreDto {
        student_id,
        subject_id,
        semester_id,
        oral,
        fifteen_minute,
        midterm,
        final_exam,
    }
}
