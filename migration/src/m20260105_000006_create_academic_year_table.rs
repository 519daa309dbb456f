use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicYear::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademicYear::Id))
                    .col(string_uniq(AcademicYear::Name))
                    .col(date(AcademicYear::StartDate))
                    .col(date(AcademicYear::EndDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicYear::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademicYear {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
}
