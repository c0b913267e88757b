//! Error taxonomy for the scheduling core.
//!
//! Conflict findings are collected (never short-circuited) and carried as
//! structured [`Conflict`](crate::conflict::Conflict) values so callers can
//! branch on kind without string matching, while `Display` still renders the
//! joined human-readable message.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::conflict::Conflict;
use crate::repository::RepositoryError;
use crate::Id;

/// Errors raised by planning, cancelling, and strategy selection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchedulingError {
    /// One or more conflict reasons were found. Carries the full list.
    #[error("scheduling conflicts: {}", Conflict::join(.0))]
    Conflicts(Vec<Conflict>),

    /// Best-fit selection found zero candidates after capacity and
    /// compatibility filtering.
    #[error("no available location for course {course_id} on {date}")]
    NoAvailableLocation { course_id: Id, date: NaiveDate },

    /// Operation referenced a session id that does not exist.
    #[error("session not found: {0}")]
    NotFound(Id),

    /// Requested strategy name is not in the fixed registry.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Business-rule failure unrelated to conflicts.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A time window must start strictly before it ends.
    #[error("invalid time slot: start {start} must be before end {end}")]
    InvalidTimeSlot { start: NaiveTime, end: NaiveTime },

    /// A date range must not end before it starts.
    #[error("invalid date range: start {start} must not be after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Infrastructure failure from the repository adapter, propagated
    /// unchanged. Never retried here.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Business-rule failures, surfaced distinctly from [`SchedulingError::Conflicts`]
/// so callers can message them differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date {date} is outside the course's active range [{start}, {end}]")]
    DateOutsideCourseRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("location {location_id} ({location_kind}) cannot host a {course_kind} course")]
    IncompatibleLocation {
        location_id: Id,
        location_kind: crate::model::LocationKind,
        course_kind: crate::model::CourseKind,
    },

    #[error("course {course_id} has no fixed location")]
    MissingFixedLocation { course_id: Id },

    #[error("no location supplied and the active strategy does not select one")]
    MissingLocation,

    #[error("location not found: {0}")]
    UnknownLocation(Id),

    #[error("course not found: {0}")]
    UnknownCourse(Id),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let e = SchedulingError::NotFound("s-42".to_string());
        assert_eq!(e.to_string(), "session not found: s-42");
    }

    #[test]
    fn unknown_strategy_display() {
        let e = SchedulingError::UnknownStrategy("greedy".to_string());
        assert_eq!(e.to_string(), "unknown strategy: greedy");
    }

    #[test]
    fn no_available_location_display() {
        let e = SchedulingError::NoAvailableLocation {
            course_id: "c-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "no available location for course c-1 on 2024-09-02"
        );
    }

    #[test]
    fn validation_error_converts() {
        let v = ValidationError::MissingFixedLocation {
            course_id: "c-1".to_string(),
        };
        let e: SchedulingError = v.clone().into();
        assert_eq!(e, SchedulingError::Validation(v));
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            SchedulingError::NotFound("x".to_string()),
            SchedulingError::NotFound("x".to_string())
        );
        assert_ne!(
            SchedulingError::NotFound("x".to_string()),
            SchedulingError::UnknownStrategy("x".to_string())
        );
    }
}
