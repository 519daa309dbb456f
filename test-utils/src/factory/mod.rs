//! Factories for creating school entities in tests.
//!
//! Each factory inserts an entity with sensible defaults and returns the
//! created model. Use the builder-style factories when a test needs
//! specific field values, or the `create_*` shorthands otherwise.

pub mod academic;
pub mod class;
pub mod helpers;
pub mod subject;
pub mod user;
