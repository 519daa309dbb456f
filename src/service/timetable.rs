use sea_orm::DatabaseConnection;

use crate::data::class::ClassRepository;
use crate::data::timetable::TimetableRepository;
use crate::error::AppError;
use crate::model::timetable::{SaveTimetableDto, TimetableEntryDto};

pub struct TimetableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimetableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a slot after checking the class, teacher, and room are all free
    /// at that (semester, day, period).
    pub async fn create(&self, params: SaveTimetableDto) -> Result<TimetableEntryDto, AppError> {
        validate_slot(&params)?;

        let repo = TimetableRepository::new(self.db);
        if let Some(conflict) = repo.find_conflict(&params, None).await? {
            return Err(AppError::Conflict(format!(
                "Timetable conflict: {}",
                conflict.describe()
            )));
        }

        let slot = repo.create(params).await?;

        repo.get_enriched_by_id(slot.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Slot vanished after creation".to_string()))
    }

    /// Moves or reassigns a slot; the entry itself is excluded from the
    /// conflict check so an unchanged slot can be saved again.
    pub async fn update(
        &self,
        id: i32,
        params: SaveTimetableDto,
    ) -> Result<TimetableEntryDto, AppError> {
        validate_slot(&params)?;

        let repo = TimetableRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Timetable entry {id} not found"
            )));
        }
        if let Some(conflict) = repo.find_conflict(&params, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "Timetable conflict: {}",
                conflict.describe()
            )));
        }

        let slot = repo.update(id, params).await?;

        repo.get_enriched_by_id(slot.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Slot vanished after update".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TimetableRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Timetable entry {id} not found"
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn get(
        &self,
        semester_id: i32,
        class_id: Option<i32>,
    ) -> Result<Vec<TimetableEntryDto>, AppError> {
        let repo = TimetableRepository::new(self.db);
        let entries = match class_id {
            Some(class_id) => repo.get_for_class(class_id, semester_id).await?,
            None => repo.get_for_semester(semester_id).await?,
        };

        Ok(entries)
    }

    /// Combined timetable over every class the student is enrolled in.
    pub async fn get_for_student(
        &self,
        student_id: i32,
        semester_id: i32,
    ) -> Result<Vec<TimetableEntryDto>, AppError> {
        let classes = ClassRepository::new(self.db)
            .get_classes_of_student(student_id)
            .await?;

        let repo = TimetableRepository::new(self.db);
        let mut entries = Vec::new();
        for class in classes {
            entries.extend(repo.get_for_class(class.id, semester_id).await?);
        }
        entries.sort_by_key(|e| (e.day_of_week, e.period));

        Ok(entries)
    }

    pub async fn get_for_teacher(
        &self,
        teacher_id: i32,
        semester_id: i32,
    ) -> Result<Vec<TimetableEntryDto>, AppError> {
        Ok(TimetableRepository::new(self.db)
            .get_for_teacher(teacher_id, semester_id)
            .await?)
    }
}

// Days are numbered the way the school counts them: 2 (Monday) through
// 8 (Sunday).
fn validate_slot(params: &SaveTimetableDto) -> Result<(), AppError> {
    if !(2..=8).contains(&params.day_of_week) {
        return Err(AppError::BadRequest(
            "Day of week must be between 2 (Monday) and 8 (Sunday)".to_string(),
        ));
    }
    if !(1..=10).contains(&params.period) {
        return Err(AppError::BadRequest(
            "Period must be between 1 and 10".to_string(),
        ));
    }
    if params.room.trim().is_empty() {
        return Err(AppError::BadRequest("Room must not be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn slot(day_of_week: i32, period: i32, room: &str) -> SaveTimetableDto {
        SaveTimetableDto {
            class_id: 1,
            subject_id: 1,
            teacher_id: 1,
            semester_id: 1,
            day_of_week,
            period,
            room: room.to_string(),
        }
    }

    #[test]
    fn day_numbering_runs_monday_two_through_sunday_eight() {
        assert!(validate_slot(&slot(2, 1, "101")).is_ok());
        assert!(validate_slot(&slot(8, 1, "101")).is_ok());
        assert!(validate_slot(&slot(1, 1, "101")).is_err());
        assert!(validate_slot(&slot(9, 1, "101")).is_err());
    }

    #[test]
    fn period_must_be_within_the_school_day() {
        assert!(validate_slot(&slot(2, 1, "101")).is_ok());
        assert!(validate_slot(&slot(2, 10, "101")).is_ok());
        assert!(validate_slot(&slot(2, 0, "101")).is_err());
        assert!(validate_slot(&slot(2, 11, "101")).is_err());
    }

    #[test]
    fn room_must_not_be_blank() {
        assert!(validate_slot(&slot(2, 1, "  ")).is_err());
    }
}
