use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Roles a handler may require. Mirrors the seeded `role` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Permission {
    fn role_name(&self) -> &'static str {
        match self {
            Permission::Admin => "Admin",
            Permission::Teacher => "Teacher",
            Permission::Student => "Student",
            Permission::Parent => "Parent",
        }
    }
}

/// Access guard evaluated at the top of every protected handler.
///
/// Resolves the session user and checks their role against the permissions
/// the endpoint accepts. An empty permission slice means any authenticated
/// user passes.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some((user, role)) = user_repo.find_with_role(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if permissions.is_empty() {
            return Ok(user);
        }

        let role_name = role.map(|r| r.name).unwrap_or_default();
        if permissions.iter().any(|p| p.role_name() == role_name) {
            Ok(user)
        } else {
            Err(AuthError::AccessDenied(
                user_id,
                format!("role {role_name} not in required set"),
            )
            .into())
        }
    }
}
