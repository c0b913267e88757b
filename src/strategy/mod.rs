//! Interchangeable allocation strategies.
//!
//! Each strategy implements [`AllocationStrategy`]: validate a candidate
//! session, commit it through the repository, and report conflicts. The set
//! is small and known at compile time, so dispatch goes through the closed
//! [`Strategy`] enum rather than open-ended trait objects.

mod best_fit;
mod compat;
mod direct;

pub use best_fit::BestFitStrategy;
pub use compat::Compatibility;
pub use direct::DirectStrategy;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::conflict::Conflict;
use crate::error::SchedulingError;
use crate::model::{Course, Location, Session, TimeSlot};
use crate::repository::ScheduleRepository;

/// One allocation policy: plan, cancel, and conflict reporting.
///
/// `location` is optional on [`plan`](AllocationStrategy::plan): the direct
/// strategy requires the caller to supply it, while the best-fit strategy
/// selects its own and ignores any hint.
pub trait AllocationStrategy {
    /// Validates and commits one candidate session.
    ///
    /// Never persists anything when validation fails.
    fn plan(
        &self,
        course: &Course,
        location: Option<&Location>,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError>;

    /// Cancels a committed session.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::NotFound`] if the id does not exist.
    fn cancel_plan(&self, session_id: &str) -> Result<(), SchedulingError>;

    /// Reports every conflict for the candidate (empty means schedulable).
    fn conflicts(
        &self,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Vec<Conflict>, SchedulingError>;

    /// Returns true if [`conflicts`](AllocationStrategy::conflicts) is empty.
    fn is_available(
        &self,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<bool, SchedulingError> {
        Ok(self.conflicts(course, location, date, slot)?.is_empty())
    }

    /// Registry name of this strategy.
    fn name(&self) -> &'static str;

    /// Human-readable description for introspection.
    fn description(&self) -> &'static str;
}

/// Closed set of the available strategies.
#[derive(Debug)]
pub enum Strategy {
    Direct(DirectStrategy),
    BestFit(BestFitStrategy),
}

impl Strategy {
    /// Registry names accepted by [`Strategy::from_name`].
    pub const NAMES: [&'static str; 2] = [DirectStrategy::NAME, BestFitStrategy::NAME];

    /// Builds the named strategy over the given repository.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::UnknownStrategy`] for any name outside the
    /// registry.
    pub fn from_name(
        name: &str,
        repo: Arc<dyn ScheduleRepository>,
    ) -> Result<Self, SchedulingError> {
        match name {
            DirectStrategy::NAME => Ok(Strategy::Direct(DirectStrategy::new(repo))),
            BestFitStrategy::NAME => Ok(Strategy::BestFit(BestFitStrategy::new(repo))),
            other => Err(SchedulingError::UnknownStrategy(other.to_string())),
        }
    }

    fn inner(&self) -> &dyn AllocationStrategy {
        match self {
            Strategy::Direct(s) => s,
            Strategy::BestFit(s) => s,
        }
    }
}

impl AllocationStrategy for Strategy {
    fn plan(
        &self,
        course: &Course,
        location: Option<&Location>,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        self.inner().plan(course, location, date, slot)
    }

    fn cancel_plan(&self, session_id: &str) -> Result<(), SchedulingError> {
        self.inner().cancel_plan(session_id)
    }

    fn conflicts(
        &self,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Vec<Conflict>, SchedulingError> {
        self.inner().conflicts(course, location, date, slot)
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }
}

/// Builds a new session row for a validated candidate.
///
/// The teacher id is copied from the course; it is never independently
/// settable on a plan request.
fn build_session(course: &Course, location: &Location, date: NaiveDate, slot: TimeSlot) -> Session {
    Session::new(
        course.id(),
        location.id(),
        course.teacher_id().map(str::to_string),
        date,
        slot,
    )
}

/// Shared cancel implementation: delete by id, `NotFound` when missing.
fn cancel_session(
    repo: &dyn ScheduleRepository,
    session_id: &str,
) -> Result<(), SchedulingError> {
    if repo.delete_session(session_id)? {
        Ok(())
    } else {
        Err(SchedulingError::NotFound(session_id.to_string()))
    }
}

#[cfg(test)]
mod tests;
