use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::conduct::UpsertConductDto;

pub struct ConductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One conduct rating per student per semester; later writes replace
    /// earlier ones.
    pub async fn upsert(&self, params: UpsertConductDto) -> Result<entity::conduct::Model, DbErr> {
        let existing = entity::prelude::Conduct::find()
            .filter(entity::conduct::Column::StudentId.eq(params.student_id))
            .filter(entity::conduct::Column::SemesterId.eq(params.semester_id))
            .one(self.db)
            .await?;

        match existing {
            Some(record) => {
                let mut active_model: entity::conduct::ActiveModel = record.into();
                active_model.rating = ActiveValue::Set(params.rating);
                active_model.note = ActiveValue::Set(params.note);
                active_model.update(self.db).await
            }
            None => {
                entity::conduct::ActiveModel {
                    student_id: ActiveValue::Set(params.student_id),
                    semester_id: ActiveValue::Set(params.semester_id),
                    rating: ActiveValue::Set(params.rating),
                    note: ActiveValue::Set(params.note),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::conduct::Model>, DbErr> {
        entity::prelude::Conduct::find()
            .filter(entity::conduct::Column::StudentId.eq(student_id))
            .order_by_asc(entity::conduct::Column::SemesterId)
            .all(self.db)
            .await
    }

    pub async fn find_one(
        &self,
        student_id: i32,
        semester_id: i32,
    ) -> Result<Option<entity::conduct::Model>, DbErr> {
        entity::prelude::Conduct::find()
            .filter(entity::conduct::Column::StudentId.eq(student_id))
            .filter(entity::conduct::Column::SemesterId.eq(semester_id))
            .one(self.db)
            .await
    }
}
