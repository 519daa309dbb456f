use super::*;
use sea_orm::ModelTrait;

/// The semester-wide view spans every class but stays inside the semester.
#[tokio::test]
async fn returns_all_classes_of_the_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, class_b, teacher_a, teacher_b, subject) = setup(db).await?;
    let year = factory::academic::create_academic_year(db).await?;
    let other_semester = factory::academic::create_semester(db, year.id).await?;

    let repo = TimetableRepository::new(db);
    repo.create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let mut second = slot(class_b.id, subject.id, teacher_b.id, semester.id, "202");
    second.period = 2;
    repo.create(second).await?;

    repo.create(slot(
        class_a.id,
        subject.id,
        teacher_a.id,
        other_semester.id,
        "101",
    ))
    .await?;

    let entries = repo.get_for_semester(semester.id).await?;

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.semester_id == semester.id));

    Ok(())
}

/// A slot resolves back to its semester through the entity relation.
#[tokio::test]
async fn slot_links_back_to_its_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, _, subject) = setup(db).await?;

    let entry = TimetableRepository::new(db)
        .create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let linked = entry
        .find_related(entity::prelude::Semester)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(linked.id, semester.id);

    Ok(())
}
