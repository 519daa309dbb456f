use super::*;

/// The role filter narrows the listing and the total count.
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_student(db).await?;
    factory::user::create_student(db).await?;
    factory::user::create_teacher(db).await?;

    let repo = UserRepository::new(db);
    let (students, total) = repo.get_paginated(Some("Student"), 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(students.len(), 2);
    for (_, role) in &students {
        assert_eq!(role.as_ref().unwrap().name, "Student");
    }

    Ok(())
}

/// Pages split the listing; the total stays the full count.
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::user::create_student(db).await?;
    }

    let repo = UserRepository::new(db);
    let (first_page, total) = repo.get_paginated(None, 0, 2).await?;
    let (second_page, _) = repo.get_paginated(None, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);

    Ok(())
}

/// Users come back ordered by username.
#[tokio::test]
async fn orders_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_roles(db).await?;

    let repo = UserRepository::new(db);
    repo.create(params("zeta", RoleName::Student)).await?;
    repo.create(params("alpha", RoleName::Student)).await?;

    let (users, _) = repo.get_paginated(None, 0, 10).await?;

    let usernames: Vec<&str> = users.iter().map(|(u, _)| u.username.as_str()).collect();
    assert_eq!(usernames, vec!["alpha", "zeta"]);

    Ok(())
}
