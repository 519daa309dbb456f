//! User factory for creating test accounts of any role.

use crate::factory::helpers::next_id;
use chrono::{Datelike, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Finds or creates a role by name.
pub async fn ensure_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    if let Some(role) = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    entity::role::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating test users with customizable fields.
///
/// Defaults: a unique username and email, the `Student` role, and a dummy
/// password hash. Override fields as needed before calling `build()`.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("teach01")
///     .role("Teacher")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: Option<String>,
    full_name: String,
    role: String,
    password_hash: String,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: Some(format!("user{}@school.test", id)),
            full_name: format!("User {}", id),
            role: "Student".to_string(),
            password_hash: "not-a-real-hash".to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the user, creating the role row if needed.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let role = ensure_role(self.db, &self.role).await?;

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            full_name: ActiveValue::Set(self.full_name),
            role_id: ActiveValue::Set(role.id),
            avatar_url: ActiveValue::Set(None),
            date_of_birth: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values (Student role, no profile row).
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a Student user together with their student profile row.
pub async fn create_student(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
    let user = UserFactory::new(db).role("Student").build().await?;

    let student = entity::student::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        enrollment_year: ActiveValue::Set(Utc::now().year()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((user, student))
}

/// Creates a Teacher user together with their teacher profile row.
pub async fn create_teacher(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::teacher::Model), DbErr> {
    let user = UserFactory::new(db).role("Teacher").build().await?;

    let teacher = entity::teacher::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        hire_date: ActiveValue::Set(None),
        specialization: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((user, teacher))
}

/// Creates an Admin user.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("Admin").build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.username.is_empty());
        assert!(user.email.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.username, user2.username);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }

    #[tokio::test]
    async fn student_profile_links_back_to_user() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, student) = create_student(db).await?;

        assert_eq!(student.user_id, user.id);

        Ok(())
    }
}
