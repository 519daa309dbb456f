mod attendance;
mod class;
mod conduct;
mod message;
mod score;
mod timetable;
mod user;
