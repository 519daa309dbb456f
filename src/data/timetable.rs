use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::timetable::{ConflictKind, SaveTimetableDto, TimetableEntryDto};

pub struct TimetableRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimetableRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveTimetableDto) -> Result<entity::timetable::Model, DbErr> {
        entity::timetable::ActiveModel {
            class_id: ActiveValue::Set(params.class_id),
            subject_id: ActiveValue::Set(params.subject_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            semester_id: ActiveValue::Set(params.semester_id),
            day_of_week: ActiveValue::Set(params.day_of_week),
            period: ActiveValue::Set(params.period),
            room: ActiveValue::Set(params.room),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::timetable::Model>, DbErr> {
        entity::prelude::Timetable::find_by_id(id).one(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveTimetableDto,
    ) -> Result<entity::timetable::Model, DbErr> {
        let slot = entity::prelude::Timetable::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Timetable entry with id {id} not found"
            )))?;

        let mut active_model: entity::timetable::ActiveModel = slot.into();
        active_model.class_id = ActiveValue::Set(params.class_id);
        active_model.subject_id = ActiveValue::Set(params.subject_id);
        active_model.teacher_id = ActiveValue::Set(params.teacher_id);
        active_model.semester_id = ActiveValue::Set(params.semester_id);
        active_model.day_of_week = ActiveValue::Set(params.day_of_week);
        active_model.period = ActiveValue::Set(params.period);
        active_model.room = ActiveValue::Set(params.room);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Timetable::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks whether the proposed slot collides with an existing one on
    /// any of the three scheduling dimensions. `exclude_id` skips the entry
    /// being updated so a no-op move does not conflict with itself.
    pub async fn find_conflict(
        &self,
        params: &SaveTimetableDto,
        exclude_id: Option<i32>,
    ) -> Result<Option<ConflictKind>, DbErr> {
        let base = || {
            let mut query = entity::prelude::Timetable::find()
                .filter(entity::timetable::Column::SemesterId.eq(params.semester_id))
                .filter(entity::timetable::Column::DayOfWeek.eq(params.day_of_week))
                .filter(entity::timetable::Column::Period.eq(params.period));
            if let Some(id) = exclude_id {
                query = query.filter(entity::timetable::Column::Id.ne(id));
            }
            query
        };

        let class_clash = base()
            .filter(entity::timetable::Column::ClassId.eq(params.class_id))
            .one(self.db)
            .await?;
        if class_clash.is_some() {
            return Ok(Some(ConflictKind::Class));
        }

        let teacher_clash = base()
            .filter(entity::timetable::Column::TeacherId.eq(params.teacher_id))
            .one(self.db)
            .await?;
        if teacher_clash.is_some() {
            return Ok(Some(ConflictKind::Teacher));
        }

        let room_clash = base()
            .filter(entity::timetable::Column::Room.eq(params.room.as_str()))
            .one(self.db)
            .await?;
        if room_clash.is_some() {
            return Ok(Some(ConflictKind::Room));
        }

        Ok(None)
    }

    pub async fn get_enriched_by_id(&self, id: i32) -> Result<Option<TimetableEntryDto>, DbErr> {
        let Some(slot) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.enrich(vec![slot]).await?.into_iter().next())
    }

    pub async fn get_for_class(
        &self,
        class_id: i32,
        semester_id: i32,
    ) -> Result<Vec<TimetableEntryDto>, DbErr> {
        let slots = entity::prelude::Timetable::find()
            .filter(entity::timetable::Column::ClassId.eq(class_id))
            .filter(entity::timetable::Column::SemesterId.eq(semester_id))
            .order_by_asc(entity::timetable::Column::DayOfWeek)
            .order_by_asc(entity::timetable::Column::Period)
            .all(self.db)
            .await?;

        self.enrich(slots).await
    }

    pub async fn get_for_teacher(
        &self,
        teacher_id: i32,
        semester_id: i32,
    ) -> Result<Vec<TimetableEntryDto>, DbErr> {
        let slots = entity::prelude::Timetable::find()
            .filter(entity::timetable::Column::TeacherId.eq(teacher_id))
            .filter(entity::timetable::Column::SemesterId.eq(semester_id))
            .order_by_asc(entity::timetable::Column::DayOfWeek)
            .order_by_asc(entity::timetable::Column::Period)
            .all(self.db)
            .await?;

        self.enrich(slots).await
    }

    pub async fn get_for_semester(
        &self,
        semester_id: i32,
    ) -> Result<Vec<TimetableEntryDto>, DbErr> {
        let slots = entity::prelude::Timetable::find()
            .filter(entity::timetable::Column::SemesterId.eq(semester_id))
            .order_by_asc(entity::timetable::Column::DayOfWeek)
            .order_by_asc(entity::timetable::Column::Period)
            .all(self.db)
            .await?;

        self.enrich(slots).await
    }

    /// Resolves class, subject, and teacher names in bulk for a set of
    /// slots so the grid can be rendered without per-cell lookups.
    async fn enrich(
        &self,
        slots: Vec<entity::timetable::Model>,
    ) -> Result<Vec<TimetableEntryDto>, DbErr> {
        let class_ids: Vec<i32> = slots.iter().map(|s| s.class_id).collect();
        let class_names: HashMap<i32, String> = if class_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Class::find()
                .filter(entity::class::Column::Id.is_in(class_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect()
        };

        let subject_names = super::subject::SubjectRepository::new(self.db)
            .names_by_ids(slots.iter().map(|s| s.subject_id).collect())
            .await?;
        let teacher_names = super::user::UserRepository::new(self.db)
            .full_names_for_teachers(slots.iter().map(|s| s.teacher_id).collect())
            .await?;

        Ok(slots
            .into_iter()
            .map(|s| TimetableEntryDto {
                id: s.id,
                class_id: s.class_id,
                class_name: class_names.get(&s.class_id).cloned().unwrap_or_default(),
                subject_id: s.subject_id,
                subject_name: subject_names.get(&s.subject_id).cloned().unwrap_or_default(),
                teacher_id: s.teacher_id,
                teacher_name: teacher_names.get(&s.teacher_id).cloned().unwrap_or_default(),
                semester_id: s.semester_id,
                day_of_week: s.day_of_week,
                period: s.period,
                room: s.room,
            })
            .collect())
    }
}
