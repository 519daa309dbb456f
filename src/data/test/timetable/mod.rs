use crate::data::timetable::TimetableRepository;
use crate::model::timetable::{ConflictKind, SaveTimetableDto};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod find_conflict;
mod get_for_class;
mod get_for_semester;

/// Creates the scaffolding a timetable test needs: a semester, two
/// classes, two teachers, and a subject.
async fn setup(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::semester::Model,
        entity::class::Model,
        entity::class::Model,
        entity::teacher::Model,
        entity::teacher::Model,
        entity::subject::Model,
    ),
    DbErr,
> {
    let year = factory::academic::create_academic_year(db).await?;
    let semester = factory::academic::create_semester(db, year.id).await?;
    let class_a = factory::class::create_class(db, year.id).await?;
    let class_b = factory::class::create_class(db, year.id).await?;
    let (_, teacher_a) = factory::user::create_teacher(db).await?;
    let (_, teacher_b) = factory::user::create_teacher(db).await?;
    let subject = factory::subject::create_subject(db).await?;

    Ok((semester, class_a, class_b, teacher_a, teacher_b, subject))
}

fn slot(
    class_id: i32,
    subject_id: i32,
    teacher_id: i32,
    semester_id: i32,
    room: &str,
) -> SaveTimetableDto {
    SaveTimetableDto {
        class_id,
        subject_id,
        teacher_id,
        semester_id,
        day_of_week: 2,
        period: 1,
        room: room.to_string(),
    }
}
