//! Direct conflict-resolution strategy: caller supplies the location.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{build_session, cancel_session, AllocationStrategy};
use crate::conflict::{self, Conflict};
use crate::error::{SchedulingError, ValidationError};
use crate::model::{Course, Location, Session, TimeSlot};
use crate::repository::ScheduleRepository;

/// Validates a single proposed (course, location, date, window) candidate
/// for conflicts, then commits it. Never picks a location itself.
#[derive(Debug)]
pub struct DirectStrategy {
    repo: Arc<dyn ScheduleRepository>,
}

impl DirectStrategy {
    pub const NAME: &'static str = "direct";

    pub fn new(repo: Arc<dyn ScheduleRepository>) -> Self {
        Self { repo }
    }

    /// Replaces a committed session with a new candidate: cancel, then plan.
    ///
    /// The cancelled session no longer counts during the re-check, so moving
    /// a session within its own former window succeeds. On a conflicting
    /// replacement the old session is already gone; callers wanting
    /// all-or-nothing semantics need storage-level transactions.
    pub fn update_plan(
        &self,
        session_id: &str,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        self.cancel_plan(session_id)?;
        self.plan(course, Some(location), date, slot)
    }
}

impl AllocationStrategy for DirectStrategy {
    fn plan(
        &self,
        course: &Course,
        location: Option<&Location>,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        let location = location.ok_or(ValidationError::MissingLocation)?;
        let conflicts = conflict::find_conflicts(self.repo.as_ref(), course, location, date, slot)?;
        if !conflicts.is_empty() {
            return Err(SchedulingError::Conflicts(conflicts));
        }
        let session = build_session(course, location, date, slot);
        Ok(self.repo.save_session(session)?)
    }

    fn cancel_plan(&self, session_id: &str) -> Result<(), SchedulingError> {
        cancel_session(self.repo.as_ref(), session_id)
    }

    fn conflicts(
        &self,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Vec<Conflict>, SchedulingError> {
        Ok(conflict::find_conflicts(
            self.repo.as_ref(),
            course,
            location,
            date,
            slot,
        )?)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "plans a session in a caller-supplied location after a full conflict check"
    }
}
