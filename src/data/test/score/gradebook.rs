use super::*;

/// Every enrolled student appears, whether or not a score exists yet.
#[tokio::test]
async fn includes_students_without_scores() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;
    let (_, ungraded) = factory::user::create_student(db).await?;
    factory::class::enroll(db, ungraded.id, setup.class.id).await?;

    let repo = ScoreRepository::new(db);
    repo.upsert(components(
        setup.student.id,
        setup.subject.id,
        setup.semester.id,
        Some(8.0),
        Some(7.0),
        Some(9.0),
        Some(10.0),
    ))
    .await?;

    let rows = repo
        .gradebook(setup.class.id, setup.subject.id, setup.semester.id)
        .await?;

    assert_eq!(rows.len(), 2);

    let graded = rows
        .iter()
        .find(|r| r.student_id == setup.student.id)
        .unwrap();
    assert_eq!(graded.score.as_ref().unwrap().average, Some(9.0));

    let blank = rows.iter().find(|r| r.student_id == ungraded.id).unwrap();
    assert!(blank.score.is_none());

    Ok(())
}

/// Scores for other subjects do not leak into the gradebook.
#[tokio::test]
async fn ignores_scores_of_other_subjects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;
    let other_subject = factory::subject::create_subject(db).await?;

    let repo = ScoreRepository::new(db);
    repo.upsert(components(
        setup.student.id,
        other_subject.id,
        setup.semester.id,
        Some(8.0),
        Some(7.0),
        Some(9.0),
        Some(10.0),
    ))
    .await?;

    let rows = repo
        .gradebook(setup.class.id, setup.subject.id, setup.semester.id)
        .await?;

    assert_eq!(rows.len(), 1);
    assert!(rows[0].score.is_none());

    Ok(())
}
