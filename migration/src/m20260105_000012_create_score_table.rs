use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_student_table::Student, m20260105_000007_create_semester_table::Semester,
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
                    .table(Score::Table)
                    .if_not_exists()
                    .col(pk_auto(Score::Id))
                    .col(integer(Score::StudentId))
                    .col(integer(Score::SubjectId))
                    .col(integer(Score::SemesterId))
                    .col(double_null(Score::Oral))
                    .col(double_null(Score::FifteenMinute))
                    .col(double_null(Score::Midterm))
                    .col(double_null(Score::FinalExam))
                    .col(double_null(Score::Average))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_score_student_id")
                            .from(Score::Table, Score::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_score_subject_id")
                            .from(Score::Table, Score::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_score_semester_id")
                            .from(Score::Table, Score::SemesterId)
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
                    .name("idx_score_student_subject_semester")
                    .table(Score::Table)
                    .col(Score::StudentId)
                    .col(Score::SubjectId)
                    .col(Score::SemesterId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Score::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Score {
    Table,
    Id,
    StudentId,
    SubjectId,
    SemesterId,
    Oral,
    FifteenMinute,
    Midterm,
    FinalExam,
    Average,
}
