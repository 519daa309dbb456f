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
                    .table(Timetable::Table)
                    .if_not_exists()
                    .col(pk_auto(Timetable::Id))
                    .col(integer(Timetable::ClassId))
                    .col(integer(Timetable::SubjectId))
                    .col(integer(Timetable::TeacherId))
                    .col(integer(Timetable::SemesterId))
                    .col(integer(Timetable::DayOfWeek))
                    .col(integer(Timetable::Period))
                    .col(string(Timetable::Room))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_class_id")
                            .from(Timetable::Table, Timetable::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_subject_id")
                            .from(Timetable::Table, Timetable::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_teacher_id")
                            .from(Timetable::Table, Timetable::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_semester_id")
                            .from(Timetable::Table, Timetable::SemesterId)
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
                    .name("idx_timetable_class_slot")
                    .table(Timetable::Table)
                    .col(Timetable::ClassId)
                    .col(Timetable::SemesterId)
                    .col(Timetable::DayOfWeek)
                    .col(Timetable::Period)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_timetable_teacher_slot")
                    .table(Timetable::Table)
                    .col(Timetable::TeacherId)
                    .col(Timetable::SemesterId)
                    .col(Timetable::DayOfWeek)
                    .col(Timetable::Period)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timetable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timetable {
    Table,
    Id,
    ClassId,
    SubjectId,
    TeacherId,
    SemesterId,
    DayOfWeek,
    Period,
    Room,
}
