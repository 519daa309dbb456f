pub mod academic_year;
pub mod attendance;
pub mod certificate;
pub mod class;
pub mod conduct;
pub mod material;
pub mod message;
pub mod score;
pub mod semester;
pub mod subject;
pub mod teaching_assignment;
pub mod timetable;
pub mod user;

#[cfg(test)]
mod test;
