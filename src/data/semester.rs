use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::semester::SaveSemesterDto;

pub struct SemesterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SemesterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveSemesterDto) -> Result<entity::semester::Model, DbErr> {
        entity::semester::ActiveModel {
            academic_year_id: ActiveValue::Set(params.academic_year_id),
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_year(
        &self,
        academic_year_id: i32,
    ) -> Result<Vec<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find()
            .filter(entity::semester::Column::AcademicYearId.eq(academic_year_id))
            .order_by_asc(entity::semester::Column::StartDate)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find()
            .order_by_desc(entity::semester::Column::StartDate)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveSemesterDto,
    ) -> Result<entity::semester::Model, DbErr> {
        let semester = entity::prelude::Semester::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Semester with id {id} not found"
            )))?;

        let mut active_model: entity::semester::ActiveModel = semester.into();
        active_model.academic_year_id = ActiveValue::Set(params.academic_year_id);
        active_model.name = ActiveValue::Set(params.name);
        active_model.start_date = ActiveValue::Set(params.start_date);
        active_model.end_date = ActiveValue::Set(params.end_date);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Semester::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn name_taken_in_year(
        &self,
        academic_year_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Semester::find()
            .filter(entity::semester::Column::AcademicYearId.eq(academic_year_id))
            .filter(entity::semester::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::semester::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
