use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_teacher_table::Teacher, m20260105_000008_create_class_table::Class,
    m20260105_000009_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassMaterial::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassMaterial::Id))
                    .col(integer(ClassMaterial::ClassId))
                    .col(integer(ClassMaterial::SubjectId))
                    .col(integer(ClassMaterial::TeacherId))
                    .col(string(ClassMaterial::Title))
                    .col(text_null(ClassMaterial::Description))
                    .col(string(ClassMaterial::FileUrl))
                    .col(
                        timestamp(ClassMaterial::UploadedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_material_class_id")
                            .from(ClassMaterial::Table, ClassMaterial::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_material_subject_id")
                            .from(ClassMaterial::Table, ClassMaterial::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_material_teacher_id")
                            .from(ClassMaterial::Table, ClassMaterial::TeacherId)
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
            .drop_table(Table::drop().table(ClassMaterial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassMaterial {
    Table,
    Id,
    ClassId,
    SubjectId,
    TeacherId,
    Title,
    Description,
    FileUrl,
    UploadedAt,
}
