use super::*;

/// An empty timetable has nothing to collide with.
#[tokio::test]
async fn no_conflict_on_empty_timetable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, _, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);
    let conflict = repo
        .find_conflict(
            &slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"),
            None,
        )
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// A class cannot be in two places during the same period, even with a
/// different teacher and room.
#[tokio::test]
async fn detects_class_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, teacher_b, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);
    repo.create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let conflict = repo
        .find_conflict(
            &slot(class_a.id, subject.id, teacher_b.id, semester.id, "202"),
            None,
        )
        .await?;

    assert_eq!(conflict, Some(ConflictKind::Class));

    Ok(())
}

/// A teacher cannot teach two classes during the same period.
#[tokio::test]
async fn detects_teacher_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, class_b, teacher_a, _, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);
    repo.create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let conflict = repo
        .find_conflict(
            &slot(class_b.id, subject.id, teacher_a.id, semester.id, "202"),
            None,
        )
        .await?;

    assert_eq!(conflict, Some(ConflictKind::Teacher));

    Ok(())
}

/// A room cannot host two classes during the same period.
#[tokio::test]
async fn detects_room_conflict() -> Result<(), DbErr> {
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

    let conflict = repo
        .find_conflict(
            &slot(class_b.id, subject.id, teacher_b.id, semester.id, "101"),
            None,
        )
        .await?;

    assert_eq!(conflict, Some(ConflictKind::Room));

    Ok(())
}

/// The same class, teacher, and room are all free at a different period.
#[tokio::test]
async fn different_period_does_not_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, _, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);
    repo.create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let mut moved = slot(class_a.id, subject.id, teacher_a.id, semester.id, "101");
    moved.period = 2;

    let conflict = repo.find_conflict(&moved, None).await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Another semester's timetable is a separate grid entirely.
#[tokio::test]
async fn other_semester_does_not_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, _, subject) = setup(db).await?;
    let year = factory::academic::create_academic_year(db).await?;
    let other_semester = factory::academic::create_semester(db, year.id).await?;

    let repo = TimetableRepository::new(db);
    repo.create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let conflict = repo
        .find_conflict(
            &slot(class_a.id, subject.id, teacher_a.id, other_semester.id, "101"),
            None,
        )
        .await?;

    assert!(conflict.is_none());

    Ok(())
}

/// Saving an entry unchanged must not collide with itself.
#[tokio::test]
async fn update_excludes_own_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_timetable_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (semester, class_a, _, teacher_a, _, subject) = setup(db).await?;

    let repo = TimetableRepository::new(db);
    let entry = repo
        .create(slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"))
        .await?;

    let conflict = repo
        .find_conflict(
            &slot(class_a.id, subject.id, teacher_a.id, semester.id, "101"),
            Some(entry.id),
        )
        .await?;

    assert!(conflict.is_none());

    Ok(())
}
