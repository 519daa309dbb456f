use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_student_table::Student, m20260105_000008_create_class_table::Class,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentClass::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentClass::Id))
                    .col(integer(StudentClass::StudentId))
                    .col(integer(StudentClass::ClassId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_class_student_id")
                            .from(StudentClass::Table, StudentClass::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_class_class_id")
                            .from(StudentClass::Table, StudentClass::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_class_pair")
                    .table(StudentClass::Table)
                    .col(StudentClass::StudentId)
                    .col(StudentClass::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentClass {
    Table,
    Id,
    StudentId,
    ClassId,
}
