use super::*;

/// One roll call writes a row per listed student.
#[tokio::test]
async fn records_one_row_per_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;
    let (_, second) = factory::user::create_student(db).await?;
    factory::class::enroll(db, second.id, setup.class.id).await?;

    let repo = AttendanceRepository::new(db);
    let written = repo
        .upsert_many(
            setup.class.id,
            setup.semester.id,
            day(1),
            vec![
                entry(setup.student.id, "present"),
                entry(second.id, "absent"),
            ],
        )
        .await?;

    assert_eq!(written.len(), 2);

    let stored = repo.get_by_class_date(setup.class.id, day(1)).await?;
    assert_eq!(stored.len(), 2);

    Ok(())
}

/// Re-submitting the same day overwrites statuses instead of stacking
/// duplicate rows.
#[tokio::test]
async fn resubmission_overwrites_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;

    let repo = AttendanceRepository::new(db);
    repo.upsert_many(
        setup.class.id,
        setup.semester.id,
        day(1),
        vec![entry(setup.student.id, "absent")],
    )
    .await?;

    let mut corrected = entry(setup.student.id, "late");
    corrected.note = Some("Arrived at 8:20".to_string());
    repo.upsert_many(setup.class.id, setup.semester.id, day(1), vec![corrected])
        .await?;

    let stored = repo.get_by_class_date(setup.class.id, day(1)).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, "late");
    assert_eq!(stored[0].note.as_deref(), Some("Arrived at 8:20"));

    Ok(())
}

/// Different dates are independent roll calls.
#[tokio::test]
async fn separate_dates_keep_separate_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;

    let repo = AttendanceRepository::new(db);
    repo.upsert_many(
        setup.class.id,
        setup.semester.id,
        day(1),
        vec![entry(setup.student.id, "present")],
    )
    .await?;
    repo.upsert_many(
        setup.class.id,
        setup.semester.id,
        day(2),
        vec![entry(setup.student.id, "absent")],
    )
    .await?;

    let history = repo.get_by_student(setup.student.id).await?;
    assert_eq!(history.len(), 2);

    Ok(())
}
