use super::*;

/// With components missing the average stays undefined.
#[tokio::test]
async fn partial_components_leave_average_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;

    let score = ScoreRepository::new(db)
        .upsert(components(
            setup.student.id,
            setup.subject.id,
            setup.semester.id,
            Some(8.0),
            None,
            Some(9.0),
            None,
        ))
        .await?;

    assert_eq!(score.oral, Some(8.0));
    assert_eq!(score.midterm, Some(9.0));
    assert!(score.fifteen_minute.is_none());
    assert!(score.average.is_none());

    Ok(())
}

/// A full set of components yields the weighted average:
/// (oral + fifteen + 2*midterm + 3*final) / 7.
#[tokio::test]
async fn full_components_compute_weighted_average() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;

    let score = ScoreRepository::new(db)
        .upsert(components(
            setup.student.id,
            setup.subject.id,
            setup.semester.id,
            Some(8.0),
            Some(7.0),
            Some(9.0),
            Some(10.0),
        ))
        .await?;

    assert_eq!(score.average, Some(9.0));

    Ok(())
}

/// A later partial write keeps the components it omits and recomputes
/// the average, without creating a second row.
#[tokio::test]
async fn second_upsert_merges_components() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;
    let repo = ScoreRepository::new(db);

    let first = repo
        .upsert(components(
            setup.student.id,
            setup.subject.id,
            setup.semester.id,
            Some(8.0),
            Some(7.0),
            None,
            None,
        ))
        .await?;

    let second = repo
        .upsert(components(
            setup.student.id,
            setup.subject.id,
            setup.semester.id,
            None,
            None,
            Some(9.0),
            Some(10.0),
        ))
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.oral, Some(8.0));
    assert_eq!(second.fifteen_minute, Some(7.0));
    assert_eq!(second.midterm, Some(9.0));
    assert_eq!(second.final_exam, Some(10.0));
    assert_eq!(second.average, Some(9.0));

    Ok(())
}
