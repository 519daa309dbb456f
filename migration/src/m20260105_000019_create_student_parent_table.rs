use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_student_table::Student, m20260105_000005_create_parent_table::Parent,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentParent::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentParent::Id))
                    .col(integer(StudentParent::StudentId))
                    .col(integer(StudentParent::ParentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_parent_student_id")
                            .from(StudentParent::Table, StudentParent::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_parent_parent_id")
                            .from(StudentParent::Table, StudentParent::ParentId)
                            .to(Parent::Table, Parent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_parent_pair")
                    .table(StudentParent::Table)
                    .col(StudentParent::StudentId)
                    .col(StudentParent::ParentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentParent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentParent {
    Table,
    Id,
    StudentId,
    ParentId,
}
