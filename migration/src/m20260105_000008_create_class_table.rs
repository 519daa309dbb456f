use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_teacher_table::Teacher,
    m20260105_000006_create_academic_year_table::AcademicYear,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(integer(Class::AcademicYearId))
                    .col(integer_null(Class::HomeroomTeacherId))
                    .col(string(Class::Name))
                    .col(integer(Class::GradeLevel))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_academic_year_id")
                            .from(Class::Table, Class::AcademicYearId)
                            .to(AcademicYear::Table, AcademicYear::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_homeroom_teacher_id")
                            .from(Class::Table, Class::HomeroomTeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_year_name")
                    .table(Class::Table)
                    .col(Class::AcademicYearId)
                    .col(Class::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    Table,
    Id,
    AcademicYearId,
    HomeroomTeacherId,
    Name,
    GradeLevel,
}
