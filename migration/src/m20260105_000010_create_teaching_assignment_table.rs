use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_teacher_table::Teacher, m20260105_000007_create_semester_table::Semester,
    m20260105_000008_create_class_table::Class, m20260105_000009_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeachingAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(TeachingAssignment::Id))
                    .col(integer(TeachingAssignment::ClassId))
                    .col(integer(TeachingAssignment::SubjectId))
                    .col(integer(TeachingAssignment::TeacherId))
                    .col(integer(TeachingAssignment::SemesterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_class_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_subject_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_teacher_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_semester_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teaching_assignment_slot")
                    .table(TeachingAssignment::Table)
                    .col(TeachingAssignment::ClassId)
                    .col(TeachingAssignment::SubjectId)
                    .col(TeachingAssignment::SemesterId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeachingAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeachingAssignment {
    Table,
    Id,
    ClassId,
    SubjectId,
    TeacherId,
    SemesterId,
}
