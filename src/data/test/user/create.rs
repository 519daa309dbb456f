use super::*;

/// Creating a student account also creates the student profile row.
#[tokio::test]
async fn student_gets_profile_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_roles(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.create(params("new_student", RoleName::Student)).await?;

    let student = repo.find_student_by_user_id(user.id).await?;
    assert!(student.is_some());

    Ok(())
}

/// Creating a teacher account also creates the teacher profile row.
#[tokio::test]
async fn teacher_gets_profile_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_roles(db).await?;

    let repo = UserRepository::new(db);
    let mut teacher_params = params("new_teacher", RoleName::Teacher);
    teacher_params.specialization = Some("Mathematics".to_string());
    let user = repo.create(teacher_params).await?;

    let teacher = repo.find_teacher_by_user_id(user.id).await?.unwrap();
    assert_eq!(teacher.specialization.as_deref(), Some("Mathematics"));

    Ok(())
}

/// Admin accounts carry no profile row at all.
#[tokio::test]
async fn admin_gets_no_profile_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_roles(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.create(params("new_admin", RoleName::Admin)).await?;

    assert!(repo.find_student_by_user_id(user.id).await?.is_none());
    assert!(repo.find_teacher_by_user_id(user.id).await?.is_none());
    assert!(repo.find_parent_by_user_id(user.id).await?.is_none());

    Ok(())
}

/// Creation fails loudly when the roles table was never seeded.
#[tokio::test]
async fn fails_without_seeded_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .create(params("orphan", RoleName::Student))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
