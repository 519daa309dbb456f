use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_teacher_table::Teacher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeacherCertificate::Table)
                    .if_not_exists()
                    .col(pk_auto(TeacherCertificate::Id))
                    .col(integer(TeacherCertificate::TeacherId))
                    .col(string(TeacherCertificate::Name))
                    .col(string(TeacherCertificate::FileUrl))
                    .col(date(TeacherCertificate::IssuedDate))
                    .col(string(TeacherCertificate::Status).default("pending"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_certificate_teacher_id")
                            .from(TeacherCertificate::Table, TeacherCertificate::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherCertificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeacherCertificate {
    Table,
    Id,
    TeacherId,
    Name,
    FileUrl,
    IssuedDate,
    Status,
}
