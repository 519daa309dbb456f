use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::assignment::{AssignmentDto, SaveAssignmentDto};

pub struct TeachingAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeachingAssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: SaveAssignmentDto,
    ) -> Result<entity::teaching_assignment::Model, DbErr> {
        entity::teaching_assignment::ActiveModel {
            teacher_id: ActiveValue::Set(params.teacher_id),
            class_id: ActiveValue::Set(params.class_id),
            subject_id: ActiveValue::Set(params.subject_id),
            semester_id: ActiveValue::Set(params.semester_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::teaching_assignment::Model>, DbErr> {
        entity::prelude::TeachingAssignment::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TeachingAssignment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Duplicate check for (class, subject, semester), one teacher per
    /// subject per class per semester.
    pub async fn exists(
        &self,
        class_id: i32,
        subject_id: i32,
        semester_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::ClassId.eq(class_id))
            .filter(entity::teaching_assignment::Column::SubjectId.eq(subject_id))
            .filter(entity::teaching_assignment::Column::SemesterId.eq(semester_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the teacher is assigned to teach this subject to this class
    /// in this semester. Gates all teacher-side grade and material writes.
    pub async fn exists_for_teacher(
        &self,
        teacher_id: i32,
        class_id: i32,
        subject_id: i32,
        semester_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::TeacherId.eq(teacher_id))
            .filter(entity::teaching_assignment::Column::ClassId.eq(class_id))
            .filter(entity::teaching_assignment::Column::SubjectId.eq(subject_id))
            .filter(entity::teaching_assignment::Column::SemesterId.eq(semester_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_for_teacher(
        &self,
        teacher_id: i32,
        semester_id: Option<i32>,
    ) -> Result<Vec<entity::teaching_assignment::Model>, DbErr> {
        let mut query = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::TeacherId.eq(teacher_id))
            .order_by_asc(entity::teaching_assignment::Column::ClassId);

        if let Some(semester_id) = semester_id {
            query = query.filter(entity::teaching_assignment::Column::SemesterId.eq(semester_id));
        }

        query.all(self.db).await
    }

    pub async fn get_enriched_by_id(&self, id: i32) -> Result<Option<AssignmentDto>, DbErr> {
        let Some(assignment) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let teacher_names = super::user::UserRepository::new(self.db)
            .full_names_for_teachers(vec![assignment.teacher_id])
            .await?;
        let subject_names = super::subject::SubjectRepository::new(self.db)
            .names_by_ids(vec![assignment.subject_id])
            .await?;
        let class = entity::prelude::Class::find_by_id(assignment.class_id)
            .one(self.db)
            .await?;
        let semester = entity::prelude::Semester::find_by_id(assignment.semester_id)
            .one(self.db)
            .await?;

        Ok(Some(AssignmentDto {
            id: assignment.id,
            teacher_id: assignment.teacher_id,
            teacher_name: teacher_names
                .get(&assignment.teacher_id)
                .cloned()
                .unwrap_or_default(),
            class_id: assignment.class_id,
            class_name: class.map(|c| c.name).unwrap_or_default(),
            subject_id: assignment.subject_id,
            subject_name: subject_names
                .get(&assignment.subject_id)
                .cloned()
                .unwrap_or_default(),
            semester_id: assignment.semester_id,
            semester_name: semester.map(|s| s.name).unwrap_or_default(),
        }))
    }

    /// All assignments enriched with teacher, class, subject, and semester
    /// names for the admin listing.
    pub async fn get_enriched(
        &self,
        semester_id: Option<i32>,
    ) -> Result<Vec<AssignmentDto>, DbErr> {
        let mut query = entity::prelude::TeachingAssignment::find()
            .order_by_asc(entity::teaching_assignment::Column::ClassId);

        if let Some(semester_id) = semester_id {
            query = query.filter(entity::teaching_assignment::Column::SemesterId.eq(semester_id));
        }

        let assignments = query.all(self.db).await?;

        self.enrich(assignments).await
    }

    /// One teacher's assignments with names resolved, for the portal view.
    pub async fn get_enriched_for_teacher(
        &self,
        teacher_id: i32,
        semester_id: Option<i32>,
    ) -> Result<Vec<AssignmentDto>, DbErr> {
        let assignments = self.get_for_teacher(teacher_id, semester_id).await?;

        self.enrich(assignments).await
    }

    async fn enrich(
        &self,
        assignments: Vec<entity::teaching_assignment::Model>,
    ) -> Result<Vec<AssignmentDto>, DbErr> {
        let teacher_names = super::user::UserRepository::new(self.db)
            .full_names_for_teachers(assignments.iter().map(|a| a.teacher_id).collect())
            .await?;
        let subject_names = super::subject::SubjectRepository::new(self.db)
            .names_by_ids(assignments.iter().map(|a| a.subject_id).collect())
            .await?;

        let class_ids: Vec<i32> = assignments.iter().map(|a| a.class_id).collect();
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

        let semester_ids: Vec<i32> = assignments.iter().map(|a| a.semester_id).collect();
        let semester_names: HashMap<i32, String> = if semester_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Semester::find()
                .filter(entity::semester::Column::Id.is_in(semester_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect()
        };

        Ok(assignments
            .into_iter()
            .map(|a| AssignmentDto {
                id: a.id,
                teacher_id: a.teacher_id,
                teacher_name: teacher_names.get(&a.teacher_id).cloned().unwrap_or_default(),
                class_id: a.class_id,
                class_name: class_names.get(&a.class_id).cloned().unwrap_or_default(),
                subject_id: a.subject_id,
                subject_name: subject_names.get(&a.subject_id).cloned().unwrap_or_default(),
                semester_id: a.semester_id,
                semester_name: semester_names
                    .get(&a.semester_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect())
    }
}
