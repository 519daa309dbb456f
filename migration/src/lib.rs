pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_role_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_student_table;
mod m20260105_000004_create_teacher_table;
mod m20260105_000005_create_parent_table;
mod m20260105_000006_create_academic_year_table;
mod m20260105_000007_create_semester_table;
mod m20260105_000008_create_class_table;
mod m20260105_000009_create_subject_table;
mod m20260105_000010_create_teaching_assignment_table;
mod m20260105_000011_create_timetable_table;
mod m20260105_000012_create_score_table;
mod m20260105_000013_create_attendance_table;
mod m20260105_000014_create_conduct_table;
mod m20260105_000015_create_teacher_certificate_table;
mod m20260105_000016_create_class_material_table;
mod m20260105_000017_create_message_table;
mod m20260105_000018_create_student_class_table;
mod m20260105_000019_create_student_parent_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_role_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_student_table::Migration),
            Box::new(m20260105_000004_create_teacher_table::Migration),
            Box::new(m20260105_000005_create_parent_table::Migration),
            Box::new(m20260105_000006_create_academic_year_table::Migration),
            Box::new(m20260105_000007_create_semester_table::Migration),
            Box::new(m20260105_000008_create_class_table::Migration),
            Box::new(m20260105_000009_create_subject_table::Migration),
            Box::new(m20260105_000010_create_teaching_assignment_table::Migration),
            Box::new(m20260105_000011_create_timetable_table::Migration),
            Box::new(m20260105_000012_create_score_table::Migration),
            Box::new(m20260105_000013_create_attendance_table::Migration),
            Box::new(m20260105_000014_create_conduct_table::Migration),
            Box::new(m20260105_000015_create_teacher_certificate_table::Migration),
            Box::new(m20260105_000016_create_class_material_table::Migration),
            Box::new(m20260105_000017_create_message_table::Migration),
            Box::new(m20260105_000018_create_student_class_table::Migration),
            Box::new(m20260105_000019_create_student_parent_table::Migration),
        ]
    }
}
