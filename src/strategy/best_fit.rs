//! Best-fit allocation strategy: selects the location before committing.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{build_session, cancel_session, AllocationStrategy, Compatibility};
use crate::conflict::{self, Conflict};
use crate::error::SchedulingError;
use crate::model::{Course, Location, Session, TimeSlot};
use crate::repository::ScheduleRepository;

/// Picks the free location with the smallest viable capacity surplus, then
/// runs the same conflict-check/commit sequence as the direct strategy.
///
/// A bin-packing best-fit heuristic, not first-fit: among the free locations
/// whose capacity and kind fit the course, the one minimizing
/// `capacity - required_capacity` wins; ties break by ascending location id
/// so selection is deterministic regardless of repository iteration order.
#[derive(Debug)]
pub struct BestFitStrategy {
    repo: Arc<dyn ScheduleRepository>,
    compat: Compatibility,
}

impl BestFitStrategy {
    pub const NAME: &'static str = "best_fit";

    /// Creates the strategy with the default compatibility table.
    pub fn new(repo: Arc<dyn ScheduleRepository>) -> Self {
        Self {
            repo,
            compat: Compatibility::default(),
        }
    }

    /// Replaces the compatibility table.
    pub fn with_compatibility(mut self, compat: Compatibility) -> Self {
        self.compat = compat;
        self
    }

    /// Selects the best-fitting free location for the course and window.
    ///
    /// Returns `None` when no free location passes the capacity and
    /// compatibility filters.
    pub fn select_best_location(
        &self,
        course: &Course,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Option<Location>, SchedulingError> {
        let required = course.required_capacity();
        let candidates = self.repo.available_locations(date, slot)?;
        let best = candidates
            .into_iter()
            .filter(|loc| {
                loc.capacity() >= required && self.compat.allows(course.kind(), loc.kind())
            })
            .min_by(|a, b| {
                (a.capacity() - required)
                    .cmp(&(b.capacity() - required))
                    .then_with(|| a.id().cmp(b.id()))
            });
        Ok(best)
    }
}

impl AllocationStrategy for BestFitStrategy {
    /// Plans the course in the best-fitting free location.
    ///
    /// Any caller-supplied location is ignored; selection is this strategy's
    /// job. The conflict check re-runs against the chosen location before
    /// commit: the selection step already filtered for availability, but the
    /// detector is the single source of truth and always runs last.
    fn plan(
        &self,
        course: &Course,
        _location: Option<&Location>,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        let chosen = self.select_best_location(course, date, slot)?.ok_or_else(|| {
            SchedulingError::NoAvailableLocation {
                course_id: course.id().to_string(),
                date,
            }
        })?;

        let conflicts = conflict::find_conflicts(self.repo.as_ref(), course, &chosen, date, slot)?;
        if !conflicts.is_empty() {
            return Err(SchedulingError::Conflicts(conflicts));
        }
        let session = build_session(course, &chosen, date, slot);
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
        "selects the free location with the smallest viable capacity surplus, then plans"
    }
}
