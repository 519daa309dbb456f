use super::*;

/// Slots come back ordered by day then period, with names resolved.
#[tokio::test]
async fn returns_ordered_and_enriched_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, _, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);

    let mut late = slot(class_a.id, subject.id, teacher_a.id, semester.id, "101");
    late.day_of_week = 4;
    repo.create(late).await?;

    let mut early = slot(class_a.id, subject.id, teacher_a.id, semester.id, "102");
    early.day_of_week = 2;
    early.period = 2;
    repo.create(early).await?;

    let entries = repo.get_for_class(class_a.id, semester.id).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].day_of_week, 2);
    assert_eq!(entries[1].day_of_week, 4);
    assert_eq!(entries[0].class_name, class_a.name);
    assert_eq!(entries[0].subject_name, subject.name);
    assert!(!entries[0].teacher_name.is_empty());

    Ok(())
}

/// Other classes' slots stay out of the result.
#[tokio::test]
async fn excludes_other_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, class_b, teacher_a, teacher_b, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);
    repo.create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let mut other = slot(class_b.id, subject.id, teacher_b.id, semester.id, "202");
    other.period = 2;
    repo.create(other).await?;

    let entries = repo.get_for_class(class_a.id, semester.id).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].class_id, class_a.id);

    Ok(())
}
