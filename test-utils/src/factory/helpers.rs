//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an academic year, a semester within it, and a class.
///
/// Convenience for tests that need the academic scaffolding but don't care
/// about its field values.
pub async fn create_class_setup(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::academic_year::Model,
        entity::semester::Model,
        entity::class::Model,
    ),
    DbErr,
> {
    let year = crate::factory::academic::create_academic_year(db).await?;
    let semester = crate::factory::academic::create_semester(db, year.id).await?;
    let class = crate::factory::class::create_class(db, year.id).await?;

    Ok((year, semester, class))
}

/// Creates everything a gradebook test needs: the academic scaffolding, a
/// teacher, a subject, an enrolled student, and the teaching assignment
/// connecting them.
pub async fn create_gradebook_setup(
    db: &DatabaseConnection,
) -> Result<GradebookSetup, DbErr> {
    let (year, semester, class) = create_class_setup(db).await?;
    let (teacher_user, teacher) = crate::factory::user::create_teacher(db).await?;
    let (student_user, student) = crate::factory::user::create_student(db).await?;
    let subject = crate::factory::subject::create_subject(db).await?;

    crate::factory::class::enroll(db, student.id, class.id).await?;
    let assignment = crate::factory::class::create_assignment(
        db,
        teacher.id,
        class.id,
        subject.id,
        semester.id,
    )
    .await?;

    Ok(GradebookSetup {
        year,
        semester,
        class,
        teacher_user,
        teacher,
        student_user,
        student,
        subject,
        assignment,
    })
}

/// Entities created by `create_gradebook_setup`.
pub struct GradebookSetup {
    pub year: entity::academic_year::Model,
    pub semester: entity::semester::Model,
    pub class: entity::class::Model,
    pub teacher_user: entity::user::Model,
    pub teacher: entity::teacher::Model,
    pub student_user: entity::user::Model,
    pub student: entity::student::Model,
    pub subject: entity::subject::Model,
    pub assignment: entity::teaching_assignment::Model,
}
