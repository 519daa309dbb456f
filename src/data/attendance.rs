use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::attendance::AttendanceEntryDto;

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes one roll call. Each entry upserts on (student, class, date)
    /// so re-submitting a day's attendance overwrites the earlier statuses.
    pub async fn upsert_many(
        &self,
        class_id: i32,
        semester_id: i32,
        date: NaiveDate,
        entries: Vec<AttendanceEntryDto>,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        let mut results = Vec::with_capacity(entries.len());

        for entry in entries {
            let existing = entity::prelude::Attendance::find()
                .filter(entity::attendance::Column::StudentId.eq(entry.student_id))
                .filter(entity::attendance::Column::ClassId.eq(class_id))
                .filter(entity::attendance::Column::Date.eq(date))
                .one(self.db)
                .await?;

            let model = match existing {
                Some(record) => {
                    let mut active_model: entity::attendance::ActiveModel = record.into();
                    active_model.semester_id = ActiveValue::Set(semester_id);
                    active_model.status = ActiveValue::Set(entry.status);
                    active_model.note = ActiveValue::Set(entry.note);
                    active_model.update(self.db).await?
                }
                None => {
                    entity::attendance::ActiveModel {
                        student_id: ActiveValue::Set(entry.student_id),
                        class_id: ActiveValue::Set(class_id),
                        semester_id: ActiveValue::Set(semester_id),
                        date: ActiveValue::Set(date),
                        status: ActiveValue::Set(entry.status),
                        note: ActiveValue::Set(entry.note),
                        ..Default::default()
                    }
                    .insert(self.db)
                    .await?
                }
            };
            results.push(model);
        }

        Ok(results)
    }

    pub async fn get_by_class_date(
        &self,
        class_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ClassId.eq(class_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .order_by_asc(entity::attendance::Column::StudentId)
            .all(self.db)
            .await
    }

    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .order_by_desc(entity::attendance::Column::Date)
            .all(self.db)
            .await
    }
}
