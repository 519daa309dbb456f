use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::academic_year::SaveAcademicYearDto;

pub struct AcademicYearRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicYearRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SaveAcademicYearDto,
    ) -> Result<entity::academic_year::Model, DbErr> {
        entity::academic_year::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::academic_year::Model>, DbErr> {
        entity::prelude::AcademicYear::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::academic_year::Model>, DbErr> {
        entity::prelude::AcademicYear::find()
            .order_by_desc(entity::academic_year::Column::StartDate)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveAcademicYearDto,
    ) -> Result<entity::academic_year::Model, DbErr> {
        let year = entity::prelude::AcademicYear::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Academic year with id {id} not found"
            )))?;

        let mut active_model: entity::academic_year::ActiveModel = year.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.start_date = ActiveValue::Set(params.start_date);
        active_model.end_date = ActiveValue::Set(params.end_date);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::AcademicYear::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::AcademicYear::find()
            .filter(entity::academic_year::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::academic_year::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
