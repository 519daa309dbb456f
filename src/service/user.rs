use sea_orm::DatabaseConnection;

use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::user::{
    CreateUserDto, CreateUserParams, PaginatedUsersDto, RoleName, UpdateUserDto, UserDto,
};
use crate::service::auth::hash_password;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserDto) -> Result<UserDto, AppError> {
        let role = RoleName::parse(&params.role)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {}", params.role)))?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if let Some(email) = &params.email {
            if user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::Conflict("Email is already registered".to_string()));
            }
        }

        let password_hash = hash_password(&params.password)?;
        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                full_name: params.full_name,
                role,
                date_of_birth: params.date_of_birth,
                phone: params.phone,
                address: params.address,
                enrollment_year: params.enrollment_year,
                hire_date: params.hire_date,
                specialization: params.specialization,
                occupation: params.occupation,
            })
            .await?;

        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role);

        Ok(UserDto::from_parts(user, role))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserDto, AppError> {
        let (user, role) = UserRepository::new(self.db)
            .find_with_role(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

        Ok(UserDto::from_parts(user, role))
    }

    pub async fn get_paginated(
        &self,
        role_filter: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsersDto, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(role_filter, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedUsersDto {
            users: users
                .into_iter()
                .map(|(user, role)| UserDto::from_parts(user, role))
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn update(&self, id: i32, params: UpdateUserDto) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }
        if let Some(email) = &params.email {
            if let Some(existing) = user_repo.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::Conflict("Email is already registered".to_string()));
                }
            }
        }

        let user = user_repo.update(id, params).await?;
        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role);

        Ok(UserDto::from_parts(user, role))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }

        user_repo.delete(id).await?;

        Ok(())
    }

    /// Admin-driven password reset, no old password required.
    pub async fn reset_password(&self, id: i32, new_password: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }

        let password_hash = hash_password(new_password)?;
        user_repo.set_password_hash(id, password_hash).await?;

        Ok(())
    }
}
