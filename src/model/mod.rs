//! Domain models, operation parameters, and API DTOs.
//!
//! DTO structs cross the HTTP boundary (serde + utoipa schemas); `*Params`
//! structs carry validated values from controllers into services and
//! repositories. Entity models are converted to DTOs at this layer so
//! database types never leak into responses.

pub mod academic_year;
pub mod api;
pub mod assignment;
pub mod attendance;
pub mod auth;
pub mod certificate;
pub mod chat;
pub mod class;
pub mod conduct;
pub mod material;
pub mod score;
pub mod semester;
pub mod subject;
pub mod timetable;
pub mod user;
