use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000006_create_academic_year_table::AcademicYear;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Semester::Table)
                    .if_not_exists()
                    .col(pk_auto(Semester::Id))
                    .col(integer(Semester::AcademicYearId))
                    .col(string(Semester::Name))
                    .col(date(Semester::StartDate))
                    .col(date(Semester::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_semester_academic_year_id")
                            .from(Semester::Table, Semester::AcademicYearId)
                            .to(AcademicYear::Table, AcademicYear::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_semester_year_name")
                    .table(Semester::Table)
                    .col(Semester::AcademicYearId)
                    .col(Semester::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Semester::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Semester {
    Table,
    Id,
    AcademicYearId,
    Name,
    StartDate,
    EndDate,
}
