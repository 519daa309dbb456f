use crate::data::user::UserRepository;
use crate::model::user::{CreateUserParams, RoleName};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;

fn params(username: &str, role: RoleName) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: Some(format!("{username}@school.test")),
        password_hash: "not-a-real-hash".to_string(),
        full_name: format!("User {username}"),
        role,
        date_of_birth: None,
        phone: None,
        address: None,
        enrollment_year: None,
        hire_date: None,
        specialization: None,
        occupation: None,
    }
}

async fn seed_roles(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for name in ["Admin", "Teacher", "Student", "Parent"] {
        factory::user::ensure_role(db, name).await?;
    }

    Ok(())
}
