use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashSet;

use crate::model::class::{ClassDto, ClassStudentDto, SaveClassDto};

pub struct ClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveClassDto) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            academic_year_id: ActiveValue::Set(params.academic_year_id),
            name: ActiveValue::Set(params.name),
            grade_level: ActiveValue::Set(params.grade_level),
            homeroom_teacher_id: ActiveValue::Set(params.homeroom_teacher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::class::Model>, DbErr> {
        entity::prelude::Class::find_by_id(id).one(self.db).await
    }

    /// Lists classes for a year (or all years) enriched with homeroom
    /// teacher name and student count.
    pub async fn get_enriched(
        &self,
        academic_year_id: Option<i32>,
    ) -> Result<Vec<ClassDto>, DbErr> {
        let mut query = entity::prelude::Class::find()
            .order_by_asc(entity::class::Column::GradeLevel)
            .order_by_asc(entity::class::Column::Name);

        if let Some(year_id) = academic_year_id {
            query = query.filter(entity::class::Column::AcademicYearId.eq(year_id));
        }

        let classes = query.all(self.db).await?;

        let teacher_ids: Vec<i32> = classes
            .iter()
            .filter_map(|c| c.homeroom_teacher_id)
            .collect();
        let teacher_names = super::user::UserRepository::new(self.db)
            .full_names_for_teachers(teacher_ids)
            .await?;

        let mut results = Vec::new();
        for class in classes {
            let student_count = entity::prelude::StudentClass::find()
                .filter(entity::student_class::Column::ClassId.eq(class.id))
                .count(self.db)
                .await?;

            results.push(ClassDto {
                id: class.id,
                academic_year_id: class.academic_year_id,
                name: class.name,
                grade_level: class.grade_level,
                homeroom_teacher_id: class.homeroom_teacher_id,
                homeroom_teacher_name: class
                    .homeroom_teacher_id
                    .and_then(|id| teacher_names.get(&id).cloned()),
                student_count,
            });
        }

        Ok(results)
    }

    /// Single class with the same enrichment as the listing.
    pub async fn get_enriched_by_id(&self, id: i32) -> Result<Option<ClassDto>, DbErr> {
        let Some(class) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let teacher_names = super::user::UserRepository::new(self.db)
            .full_names_for_teachers(class.homeroom_teacher_id.into_iter().collect())
            .await?;
        let student_count = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::ClassId.eq(class.id))
            .count(self.db)
            .await?;

        Ok(Some(ClassDto {
            id: class.id,
            academic_year_id: class.academic_year_id,
            name: class.name,
            grade_level: class.grade_level,
            homeroom_teacher_id: class.homeroom_teacher_id,
            homeroom_teacher_name: class
                .homeroom_teacher_id
                .and_then(|id| teacher_names.get(&id).cloned()),
            student_count,
        }))
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveClassDto,
    ) -> Result<entity::class::Model, DbErr> {
        let class = entity::prelude::Class::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Class with id {id} not found"
            )))?;

        let mut active_model: entity::class::ActiveModel = class.into();
        active_model.academic_year_id = ActiveValue::Set(params.academic_year_id);
        active_model.name = ActiveValue::Set(params.name);
        active_model.grade_level = ActiveValue::Set(params.grade_level);
        active_model.homeroom_teacher_id = ActiveValue::Set(params.homeroom_teacher_id);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Class::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Roster of a class, joined through to user rows for names.
    pub async fn get_students(&self, class_id: i32) -> Result<Vec<ClassStudentDto>, DbErr> {
        let enrollments = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::ClassId.eq(class_id))
            .all(self.db)
            .await?;

        let student_ids: Vec<i32> = enrollments.iter().map(|e| e.student_id).collect();
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let students = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(student_ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut roster: Vec<ClassStudentDto> = students
            .into_iter()
            .filter_map(|(student, user)| {
                user.map(|u| ClassStudentDto {
                    student_id: student.id,
                    user_id: u.id,
                    full_name: u.full_name,
                    enrollment_year: Some(student.enrollment_year),
                })
            })
            .collect();
        roster.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        Ok(roster)
    }

    pub async fn is_enrolled(&self, student_id: i32, class_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::StudentId.eq(student_id))
            .filter(entity::student_class::Column::ClassId.eq(class_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn enroll(&self, student_id: i32, class_id: i32) -> Result<(), DbErr> {
        entity::student_class::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            class_id: ActiveValue::Set(class_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn unenroll(&self, student_id: i32, class_id: i32) -> Result<(), DbErr> {
        entity::prelude::StudentClass::delete_many()
            .filter(entity::student_class::Column::StudentId.eq(student_id))
            .filter(entity::student_class::Column::ClassId.eq(class_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves every student of `source_class_id` into `target_class_id` and
    /// deletes the source class. Enrollments that would duplicate an
    /// existing one in the target are dropped instead of moved. Runs in a
    /// transaction so a failure leaves both classes untouched.
    pub async fn merge_into(
        &self,
        source_class_id: i32,
        target_class_id: i32,
    ) -> Result<(u64, u64), DbErr> {
        let txn = self.db.begin().await?;

        let target_students: HashSet<i32> = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::ClassId.eq(target_class_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|e| e.student_id)
            .collect();

        let source_enrollments = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::ClassId.eq(source_class_id))
            .all(&txn)
            .await?;

        let mut moved = 0u64;
        let mut dropped = 0u64;
        for enrollment in source_enrollments {
            if target_students.contains(&enrollment.student_id) {
                entity::prelude::StudentClass::delete_by_id(enrollment.id)
                    .exec(&txn)
                    .await?;
                dropped += 1;
            } else {
                let mut active_model: entity::student_class::ActiveModel = enrollment.into();
                active_model.class_id = ActiveValue::Set(target_class_id);
                active_model.update(&txn).await?;
                moved += 1;
            }
        }

        entity::prelude::Class::delete_by_id(source_class_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok((moved, dropped))
    }

    /// Classes where the given teacher is homeroom teacher.
    pub async fn find_homeroom_by_teacher(
        &self,
        teacher_id: i32,
    ) -> Result<Vec<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .filter(entity::class::Column::HomeroomTeacherId.eq(teacher_id))
            .order_by_asc(entity::class::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_classes_of_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::class::Model>, DbErr> {
        let class_ids: Vec<i32> = entity::prelude::StudentClass::find()
            .filter(entity::student_class::Column::StudentId.eq(student_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| e.class_id)
            .collect();

        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Class::find()
            .filter(entity::class::Column::Id.is_in(class_ids))
            .order_by_asc(entity::class::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn name_taken_in_year(
        &self,
        academic_year_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Class::find()
            .filter(entity::class::Column::AcademicYearId.eq(academic_year_id))
            .filter(entity::class::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::class::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
