use super::*;

/// The roster joins through to user rows and sorts by name.
#[tokio::test]
async fn returns_roster_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let class = factory::class::create_class(db, year.id).await?;

    let (user_a, student_a) = factory::user::create_student(db).await?;
    let (user_b, student_b) = factory::user::create_student(db).await?;
    factory::class::enroll(db, student_a.id, class.id).await?;
    factory::class::enroll(db, student_b.id, class.id).await?;

    let roster = ClassRepository::new(db).get_students(class.id).await?;

    assert_eq!(roster.len(), 2);
    let names: Vec<&str> = roster.iter().map(|s| s.full_name.as_str()).collect();
    assert!(names.contains(&user_a.full_name.as_str()));
    assert!(names.contains(&user_b.full_name.as_str()));

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    Ok(())
}

/// An empty class has an empty roster.
#[tokio::test]
async fn empty_class_returns_no_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic::create_academic_year(db).await?;
    let class = factory::class::create_class(db, year.id).await?;

    let roster = ClassRepository::new(db).get_students(class.id).await?;

    assert!(roster.is_empty());

    Ok(())
}
