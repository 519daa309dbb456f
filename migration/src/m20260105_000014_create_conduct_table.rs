use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_student_table::Student, m20260105_000007_create_semester_table::Semester,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conduct::Table)
                    .if_not_exists()
                    .col(pk_auto(Conduct::Id))
                    .col(integer(Conduct::StudentId))
                    .col(integer(Conduct::SemesterId))
                    .col(string(Conduct::Rating))
                    .col(string_null(Conduct::Note))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conduct_student_id")
                            .from(Conduct::Table, Conduct::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conduct_semester_id")
                            .from(Conduct::Table, Conduct::SemesterId)
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
                    .name("idx_conduct_student_semester")
                    .table(Conduct::Table)
                    .col(Conduct::StudentId)
                    .col(Conduct::SemesterId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Conduct {
    Table,
    Id,
    StudentId,
    SemesterId,
    Rating,
    Note,
}
