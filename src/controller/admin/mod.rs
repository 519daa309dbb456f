pub mod academic;
pub mod assignment;
pub mod certificate;
pub mod class;
pub mod subject;
pub mod timetable;
pub mod user;
