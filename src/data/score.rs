use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::score::{GradebookRowDto, StudentScoreDto, UpsertScoreDto};

/// Weighted semester average: (oral + fifteen + 2*midterm + 3*final) / 7,
/// rounded to two decimals. Only defined once all four components exist.
pub fn weighted_average(
    oral: Option<f64>,
    fifteen_minute: Option<f64>,
    midterm: Option<f64>,
    final_exam: Option<f64>,
) -> Option<f64> {
    let raw = (oral? + fifteen_minute? + 2.0 * midterm? + 3.0 * final_exam?) / 7.0;
    Some((raw * 100.0).round() / 100.0)
}

pub struct ScoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_one(
        &self,
        student_id: i32,
        subject_id: i32,
        semester_id: i32,
    ) -> Result<Option<entity::score::Model>, DbErr> {
        entity::prelude::Score::find()
            .filter(entity::score::Column::StudentId.eq(student_id))
            .filter(entity::score::Column::SubjectId.eq(subject_id))
            .filter(entity::score::Column::SemesterId.eq(semester_id))
            .one(self.db)
            .await
    }

    /// Inserts or updates the score row for (student, subject, semester).
    /// Components omitted from `params` keep their stored values; the
    /// average is recomputed from the resulting components.
    pub async fn upsert(&self, params: UpsertScoreDto) -> Result<entity::score::Model, DbErr> {
        let existing = self
            .find_one(params.student_id, params.subject_id, params.semester_id)
            .await?;

        match existing {
            Some(score) => {
                let oral = params.oral.or(score.oral);
                let fifteen_minute = params.fifteen_minute.or(score.fifteen_minute);
                let midterm = params.midterm.or(score.midterm);
                let final_exam = params.final_exam.or(score.final_exam);
                let average = weighted_average(oral, fifteen_minute, midterm, final_exam);

                let mut active_model: entity::score::ActiveModel = score.into();
                active_model.oral = ActiveValue::Set(oral);
                active_model.fifteen_minute = ActiveValue::Set(fifteen_minute);
                active_model.midterm = ActiveValue::Set(midterm);
                active_model.final_exam = ActiveValue::Set(final_exam);
                active_model.average = ActiveValue::Set(average);

                active_model.update(self.db).await
            }
            None => {
                let average = weighted_average(
                    params.oral,
                    params.fifteen_minute,
                    params.midterm,
                    params.final_exam,
                );

                entity::score::ActiveModel {
                    student_id: ActiveValue::Set(params.student_id),
                    subject_id: ActiveValue::Set(params.subject_id),
                    semester_id: ActiveValue::Set(params.semester_id),
                    oral: ActiveValue::Set(params.oral),
                    fifteen_minute: ActiveValue::Set(params.fifteen_minute),
                    midterm: ActiveValue::Set(params.midterm),
                    final_exam: ActiveValue::Set(params.final_exam),
                    average: ActiveValue::Set(average),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Full roster of a class with each student's score for the subject,
    /// for the teacher's gradebook view.
    pub async fn gradebook(
        &self,
        class_id: i32,
        subject_id: i32,
        semester_id: i32,
    ) -> Result<Vec<GradebookRowDto>, DbErr> {
        let roster = super::class::ClassRepository::new(self.db)
            .get_students(class_id)
            .await?;

        let student_ids: Vec<i32> = roster.iter().map(|s| s.student_id).collect();
        let scores: HashMap<i32, entity::score::Model> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Score::find()
                .filter(entity::score::Column::StudentId.is_in(student_ids))
                .filter(entity::score::Column::SubjectId.eq(subject_id))
                .filter(entity::score::Column::SemesterId.eq(semester_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.student_id, s))
                .collect()
        };

        Ok(roster
            .into_iter()
            .map(|student| GradebookRowDto {
                score: scores.get(&student.student_id).cloned().map(Into::into),
                student_id: student.student_id,
                full_name: student.full_name,
            })
            .collect())
    }

    /// All scores of one student, with subject names, optionally narrowed
    /// to a semester.
    pub async fn for_student(
        &self,
        student_id: i32,
        semester_id: Option<i32>,
    ) -> Result<Vec<StudentScoreDto>, DbErr> {
        let mut query = entity::prelude::Score::find()
            .filter(entity::score::Column::StudentId.eq(student_id))
            .order_by_asc(entity::score::Column::SemesterId);

        if let Some(semester_id) = semester_id {
            query = query.filter(entity::score::Column::SemesterId.eq(semester_id));
        }

        let scores = query.all(self.db).await?;

        let subject_names = super::subject::SubjectRepository::new(self.db)
            .names_by_ids(scores.iter().map(|s| s.subject_id).collect())
            .await?;

        Ok(scores
            .into_iter()
            .map(|s| StudentScoreDto {
                subject_name: subject_names.get(&s.subject_id).cloned().unwrap_or_default(),
                semester_id: s.semester_id,
                oral: s.oral,
                fifteen_minute: s.fifteen_minute,
                midterm: s.midterm,
                final_exam: s.final_exam,
                average: s.average,
            })
            .collect())
    }
}
