use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub academic_year_id: i32,
    pub homeroom_teacher_id: Option<i32>,
    pub name: String,
    pub grade_level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academic_year::Entity",
        from = "Column::AcademicYearId",
        to = "super::academic_year::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AcademicYear,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::HomeroomTeacherId",
        to = "super::teacher::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(has_many = "super::student_class::Entity")]
    StudentClass,
    #[sea_orm(has_many = "super::timetable::Entity")]
    Timetable,
}

impl Related<super::academic_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicYear.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
