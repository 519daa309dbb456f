//! SeaORM entity definitions for the campus schema.
//!
//! One module per table. All uniqueness, nullability, and foreign key
//! invariants live here and in the corresponding migrations; application
//! code builds on top of these definitions and does not restate them.

pub mod prelude;

pub mod academic_year;
pub mod attendance;
pub mod class;
pub mod class_material;
pub mod conduct;
pub mod message;
pub mod parent;
pub mod role;
pub mod score;
pub mod semester;
pub mod student;
pub mod student_class;
pub mod student_parent;
pub mod subject;
pub mod teacher;
pub mod teacher_certificate;
pub mod teaching_assignment;
pub mod timetable;
pub mod user;
