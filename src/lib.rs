//! lectio - course scheduling and conflict-resolution engine.
//!
//! A library for deciding whether a course session can occupy a given
//! location and teacher at a given date and time window, detecting and
//! reporting conflicts, and choosing among interchangeable allocation
//! policies (a plain conflict check vs. best-fit location selection).

pub mod binding;
pub mod conflict;
pub mod error;
pub mod manager;
pub mod model;
pub mod repository;
pub mod strategy;

pub use error::{SchedulingError, ValidationError};

/// Identifier type used for courses, locations, teachers, and sessions.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
