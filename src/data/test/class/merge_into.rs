use super::*;

/// Students move to the target class and the source class disappears.
#[tokio::test]
async fn moves_students_and_deletes_source() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let target = factory::class::create_class(db, year.id).await?;
    let source = factory::class::create_class(db, year.id).await?;

    let (_, student_a) = factory::user::create_student(db).await?;
    let (_, student_b) = factory::user::create_student(db).await?;
    factory::class::enroll(db, student_a.id, source.id).await?;
    factory::class::enroll(db, student_b.id, source.id).await?;

    let repo = ClassRepository::new(db);
    let (moved, dropped) = repo.merge_into(source.id, target.id).await?;

    assert_eq!(moved, 2);
    assert_eq!(dropped, 0);

    assert!(repo.is_enrolled(student_a.id, target.id).await?);
    assert!(repo.is_enrolled(student_b.id, target.id).await?);
    assert!(repo.get_by_id(source.id).await?.is_none());

    Ok(())
}

/// A student already enrolled in the target keeps a single enrollment;
/// the source one is dropped rather than duplicated.
#[tokio::test]
async fn drops_duplicate_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let target = factory::class::create_class(db, year.id).await?;
    let source = factory::class::create_class(db, year.id).await?;

    let (_, both) = factory::user::create_student(db).await?;
    let (_, source_only) = factory::user::create_student(db).await?;
    factory::class::enroll(db, both.id, target.id).await?;
    factory::class::enroll(db, both.id, source.id).await?;
    factory::class::enroll(db, source_only.id, source.id).await?;

    let repo = ClassRepository::new(db);
    let (moved, dropped) = repo.merge_into(source.id, target.id).await?;

    assert_eq!(moved, 1);
    assert_eq!(dropped, 1);

    let roster = repo.get_students(target.id).await?;
    assert_eq!(roster.len(), 2);

    Ok(())
}

/// Merging an empty class just deletes it.
#[tokio::test]
async fn merging_empty_class_moves_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let target = factory::class::create_class(db, year.id).await?;
    let source = factory::class::create_class(db, year.id).await?;

    let repo = ClassRepository::new(db);
    let (moved, dropped) = repo.merge_into(source.id, target.id).await?;

    assert_eq!(moved, 0);
    assert_eq!(dropped, 0);
    assert!(repo.get_by_id(source.id).await?.is_none());

    Ok(())
}
