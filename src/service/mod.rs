pub mod academic_year;
pub mod attendance;
pub mod auth;
pub mod captcha;
pub mod certificate;
pub mod class;
pub mod conduct;
pub mod face;
pub mod material;
pub mod message;
pub mod oauth;
pub mod score;
pub mod semester;
pub mod subject;
pub mod teaching_assignment;
pub mod timetable;
pub mod upload;
pub mod user;
