use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables with `with_table()` (in
/// dependency order) or one of the convenience sets, then call `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite syntax. Tables with foreign keys should be added after
    /// their referenced tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables: Role, User, Student, Teacher, Parent.
    pub fn with_account_tables(self) -> Self {
        self.with_table(Role)
            .with_table(User)
            .with_table(Student)
            .with_table(Teacher)
            .with_table(Parent)
            .with_table(StudentParent)
    }

    /// Adds account tables plus the academic structure: AcademicYear,
    /// Semester, Subject, Class, StudentClass.
    pub fn with_academic_tables(self) -> Self {
        self.with_account_tables()
            .with_table(AcademicYear)
            .with_table(Semester)
            .with_table(Subject)
            .with_table(Class)
            .with_table(StudentClass)
    }

    /// Adds academic tables plus TeachingAssignment and Timetable.
    pub fn with_timetable_tables(self) -> Self {
        self.with_academic_tables()
            .with_table(TeachingAssignment)
            .with_table(Timetable)
    }

    /// Adds academic tables plus everything teachers write during a
    /// semester: TeachingAssignment, Score, Attendance, Conduct.
    pub fn with_gradebook_tables(self) -> Self {
        self.with_academic_tables()
            .with_table(TeachingAssignment)
            .with_table(Score)
            .with_table(Attendance)
            .with_table(Conduct)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite connection and executes all CREATE TABLE
    /// statements in the order they were added.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
