use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::attendance::AttendanceRepository;
use crate::data::class::ClassRepository;
use crate::data::teaching_assignment::TeachingAssignmentRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::attendance::{AttendanceDto, RecordAttendanceDto, ATTENDANCE_STATUSES};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a roll call for one class and date. The teacher must either
    /// run the class as homeroom teacher or teach it this semester.
    pub async fn record(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        params: RecordAttendanceDto,
    ) -> Result<Vec<AttendanceDto>, AppError> {
        for entry in &params.entries {
            if !ATTENDANCE_STATUSES.contains(&entry.status.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Unknown attendance status: {}",
                    entry.status
                )));
            }
        }

        self.require_class_access(teacher_id, teacher_user_id, params.class_id, params.semester_id)
            .await?;

        let class_repo = ClassRepository::new(self.db);
        for entry in &params.entries {
            if !class_repo.is_enrolled(entry.student_id, params.class_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Student {} is not enrolled in class {}",
                    entry.student_id, params.class_id
                )));
            }
        }

        let records = AttendanceRepository::new(self.db)
            .upsert_many(params.class_id, params.semester_id, params.date, params.entries)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_class_date(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        class_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceDto>, AppError> {
        // Reads are gated on any relationship with the class, semester
        // unconstrained.
        let is_homeroom = ClassRepository::new(self.db)
            .find_homeroom_by_teacher(teacher_id)
            .await?
            .iter()
            .any(|c| c.id == class_id);
        let teaches = TeachingAssignmentRepository::new(self.db)
            .get_for_teacher(teacher_id, None)
            .await?
            .iter()
            .any(|a| a.class_id == class_id);

        if !is_homeroom && !teaches {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "view attendance for a class they are not connected to".to_string(),
            )
            .into());
        }

        let records = AttendanceRepository::new(self.db)
            .get_by_class_date(class_id, date)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_for_student(&self, student_id: i32) -> Result<Vec<AttendanceDto>, AppError> {
        let records = AttendanceRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn require_class_access(
        &self,
        teacher_id: i32,
        teacher_user_id: i32,
        class_id: i32,
        semester_id: i32,
    ) -> Result<(), AppError> {
        let is_homeroom = ClassRepository::new(self.db)
            .find_homeroom_by_teacher(teacher_id)
            .await?
            .iter()
            .any(|c| c.id == class_id);

        if is_homeroom {
            return Ok(());
        }

        let teaches = TeachingAssignmentRepository::new(self.db)
            .get_for_teacher(teacher_id, Some(semester_id))
            .await?
            .iter()
            .any(|a| a.class_id == class_id);

        if !teaches {
            return Err(AuthError::AccessDenied(
                teacher_user_id,
                "record attendance for a class they are not connected to".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
