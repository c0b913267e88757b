//! Repository boundary for schedule persistence.
//!
//! Persistence lives outside this crate; only the contract is defined here.
//! Every collaborator receives its repository by constructor injection -
//! there is no ambient or global storage handle. [`InMemorySchedule`] is the
//! shipped concrete implementation, used by tests, demos, and callers
//! without a database.

mod memory;

pub use memory::InMemorySchedule;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Course, Location, Session, TimeSlot};

/// Infrastructure errors signalled by a repository implementation.
///
/// These are distinct from scheduling outcomes: the core never retries them
/// and propagates them unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read/write contract the scheduling core consumes.
///
/// The conflict detector re-queries current state on every evaluation; no
/// session data is cached across calls, so implementations must return the
/// committed state as of the call.
///
/// Check-then-commit is not atomic across concurrent callers: serializing
/// overlapping `plan` calls for the same location or teacher and date is the
/// storage layer's job (a transaction with row-level locking, or a
/// uniqueness constraint that turns a racing write into an error).
pub trait ScheduleRepository: Send + Sync + std::fmt::Debug {
    /// Committed sessions for a location on a calendar day.
    fn sessions_for_location(
        &self,
        location_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Session>, RepositoryError>;

    /// Committed sessions for a teacher on a calendar day.
    fn sessions_for_teacher(
        &self,
        teacher_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Session>, RepositoryError>;

    /// All sessions belonging to a course, in insertion order.
    fn sessions_for_course(&self, course_id: &str) -> Result<Vec<Session>, RepositoryError>;

    /// Locations with no committed session overlapping the given window.
    fn available_locations(
        &self,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Vec<Location>, RepositoryError>;

    fn session_by_id(&self, id: &str) -> Result<Option<Session>, RepositoryError>;

    /// Persists the session, assigning an id on first insert, and returns
    /// the materialized row.
    fn save_session(&self, session: Session) -> Result<Session, RepositoryError>;

    /// Removes a session row. Returns false if the id was unknown.
    fn delete_session(&self, id: &str) -> Result<bool, RepositoryError>;

    fn location_by_id(&self, id: &str) -> Result<Option<Location>, RepositoryError>;

    fn course_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError>;
}
