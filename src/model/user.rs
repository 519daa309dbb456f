use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed role set seeded by the migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "Admin",
            RoleName::Teacher => "Teacher",
            RoleName::Student => "Student",
            RoleName::Parent => "Parent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Admin" => Some(RoleName::Admin),
            "Teacher" => Some(RoleName::Teacher),
            "Student" => Some(RoleName::Student),
            "Parent" => Some(RoleName::Parent),
            _ => None,
        }
    }
}

/// User as exposed to the API. The password hash never crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserDto {
    pub fn from_parts(user: entity::user::Model, role: Option<entity::role::Model>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: role.map(|r| r.name).unwrap_or_default(),
            avatar_url: user.avatar_url,
            date_of_birth: user.date_of_birth,
            phone: user.phone,
            address: user.address,
        }
    }
}

/// Admin-facing creation payload. Role-specific profile fields are only
/// consulted when they match the requested role.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub full_name: String,
    pub role: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub enrollment_year: Option<i32>,
    pub hire_date: Option<NaiveDate>,
    pub specialization: Option<String>,
    pub occupation: Option<String>,
}

/// Validated creation parameters: password already hashed, role resolved.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub full_name: String,
    pub role: RoleName,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub enrollment_year: Option<i32>,
    pub hire_date: Option<NaiveDate>,
    pub specialization: Option<String>,
    pub occupation: Option<String>,
}

/// Partial update; `None` fields keep their current values.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AdminResetPasswordDto {
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
