use chrono::{Datelike, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::user::{CreateUserParams, RoleName, UpdateUserDto};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user plus the profile row their role requires.
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let role = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(params.role.as_str()))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Role {} not seeded",
                params.role.as_str()
            )))?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            full_name: ActiveValue::Set(params.full_name),
            role_id: ActiveValue::Set(role.id),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        match params.role {
            RoleName::Student => {
                entity::student::ActiveModel {
                    user_id: ActiveValue::Set(user.id),
                    enrollment_year: ActiveValue::Set(
                        params.enrollment_year.unwrap_or_else(|| Utc::now().year()),
                    ),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
            RoleName::Teacher => {
                entity::teacher::ActiveModel {
                    user_id: ActiveValue::Set(user.id),
                    hire_date: ActiveValue::Set(params.hire_date),
                    specialization: ActiveValue::Set(params.specialization),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
            RoleName::Parent => {
                entity::parent::ActiveModel {
                    user_id: ActiveValue::Set(user.id),
                    occupation: ActiveValue::Set(params.occupation),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
            RoleName::Admin => {}
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Fetches a user together with their role row.
    pub async fn find_with_role(
        &self,
        id: i32,
    ) -> Result<Option<(entity::user::Model, Option<entity::role::Model>)>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await
    }

    /// Gets paginated users with their roles, optionally filtered by role name.
    pub async fn get_paginated(
        &self,
        role_filter: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(entity::user::Model, Option<entity::role::Model>)>, u64), DbErr> {
        let mut query = entity::prelude::User::find()
            .find_also_related(entity::prelude::Role)
            .order_by_asc(entity::user::Column::Username);

        if let Some(role_name) = role_filter {
            query = query.filter(entity::role::Column::Name.eq(role_name));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserDto,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {id} not found")))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(Some(email));
        }
        if let Some(full_name) = params.full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active_model.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(Some(address));
        }
        if let Some(avatar_url) = params.avatar_url {
            active_model.avatar_url = ActiveValue::Set(Some(avatar_url));
        }

        active_model.update(self.db).await
    }

    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {id} not found")))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password_hash = ActiveValue::Set(password_hash);
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn all_ids(&self) -> Result<Vec<i32>, DbErr> {
        let users = entity::prelude::User::find().all(self.db).await?;

        Ok(users.into_iter().map(|u| u.id).collect())
    }

    /// Checks whether any account carries the Admin role.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .inner_join(entity::prelude::Role)
            .filter(entity::role::Column::Name.eq(RoleName::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_student_by_id(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    pub async fn find_student_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn find_teacher_by_id(
        &self,
        teacher_id: i32,
    ) -> Result<Option<entity::teacher::Model>, DbErr> {
        entity::prelude::Teacher::find_by_id(teacher_id)
            .one(self.db)
            .await
    }

    pub async fn find_teacher_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::teacher::Model>, DbErr> {
        entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn find_parent_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::parent::Model>, DbErr> {
        entity::prelude::Parent::find()
            .filter(entity::parent::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Resolves user rows for a set of teacher ids, keyed by teacher id.
    pub async fn full_names_for_teachers(
        &self,
        teacher_ids: Vec<i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        if teacher_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let teachers = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Id.is_in(teacher_ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(teachers
            .into_iter()
            .filter_map(|(teacher, user)| user.map(|u| (teacher.id, u.full_name)))
            .collect())
    }
}
