use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::subject::SaveSubjectDto;

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveSubjectDto) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveSubjectDto,
    ) -> Result<entity::subject::Model, DbErr> {
        let subject = entity::prelude::Subject::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Subject with id {id} not found"
            )))?;

        let mut active_model: entity::subject::ActiveModel = subject.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.code = ActiveValue::Set(params.code);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Subject::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn code_taken(&self, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Subject::find().filter(entity::subject::Column::Code.eq(code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::subject::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn names_by_ids(
        &self,
        subject_ids: Vec<i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        if subject_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(subject_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect())
    }
}
