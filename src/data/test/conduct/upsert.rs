use super::*;

/// A later rating replaces the earlier one for the same semester.
#[tokio::test]
async fn later_rating_replaces_earlier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;

    let repo = ConductRepository::new(db);
    let first = repo
        .upsert(rating(setup.student.id, setup.semester.id, "good"))
        .await?;
    let second = repo
        .upsert(rating(setup.student.id, setup.semester.id, "excellent"))
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.rating, "excellent");

    let history = repo.for_student(setup.student.id).await?;
    assert_eq!(history.len(), 1);

    Ok(())
}

/// Each semester keeps its own rating.
#[tokio::test]
async fn semesters_are_rated_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_gradebook_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_gradebook_setup(db).await?;
    let other_semester = factory::academic::create_semester(db, setup.year.id).await?;

    let repo = ConductRepository::new(db);
    repo.upsert(rating(setup.student.id, setup.semester.id, "good"))
        .await?;
    repo.upsert(rating(setup.student.id, other_semester.id, "fair"))
        .await?;

    let history = repo.for_student(setup.student.id).await?;
    assert_eq!(history.len(), 2);

    let stored = repo
        .find_one(setup.student.id, setup.semester.id)
        .await?
        .unwrap();
    assert_eq!(stored.rating, "good");

    Ok(())
}
