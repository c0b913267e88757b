//! Schedule helper for courses whose location and teacher are fixed by the
//! course definition.
//!
//! A narrower planning path than the strategies: the location comes from the
//! course itself, and the schedule date must fall inside the course's active
//! range. The range check is real here; the source system shipped it stubbed
//! to always pass.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::conflict;
use crate::error::{SchedulingError, ValidationError};
use crate::model::{Course, DateRange, Location, Session, TimeSlot};
use crate::repository::ScheduleRepository;
use crate::strategy::Compatibility;

/// A partial update to a committed session: only present fields change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulePatch {
    pub date: Option<NaiveDate>,
    pub slot: Option<TimeSlot>,
}

impl SchedulePatch {
    pub fn date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn slot(slot: TimeSlot) -> Self {
        Self {
            slot: Some(slot),
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slot = Some(slot);
        self
    }
}

/// Ties sessions to a course's own location and teacher attributes.
#[derive(Debug)]
pub struct CourseScheduleBinding {
    repo: Arc<dyn ScheduleRepository>,
    compat: Compatibility,
}

impl CourseScheduleBinding {
    /// Creates the binding helper with the default compatibility table.
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

    /// Validates that `date` falls inside the course's active range.
    pub fn validate_schedule_date(
        &self,
        course: &Course,
        date: NaiveDate,
    ) -> Result<(), ValidationError> {
        let range = course.active_range();
        if range.contains(date) {
            Ok(())
        } else {
            Err(ValidationError::DateOutsideCourseRange {
                date,
                start: range.start(),
                end: range.end(),
            })
        }
    }

    fn fixed_location(&self, course: &Course) -> Result<Location, SchedulingError> {
        let location_id =
            course
                .location_id()
                .ok_or_else(|| ValidationError::MissingFixedLocation {
                    course_id: course.id().to_string(),
                })?;
        let location = self
            .repo
            .location_by_id(location_id)?
            .ok_or_else(|| ValidationError::UnknownLocation(location_id.to_string()))?;
        if !self.compat.allows(course.kind(), location.kind()) {
            return Err(ValidationError::IncompatibleLocation {
                location_id: location.id().to_string(),
                location_kind: location.kind(),
                course_kind: course.kind(),
            }
            .into());
        }
        Ok(location)
    }

    /// Plans a session in the course's own fixed location.
    ///
    /// Validates the date against the active range and the fixed location
    /// against the compatibility table, then runs the full conflict check
    /// before persisting. Nothing is persisted on failure.
    pub fn create_schedule_for_course(
        &self,
        course: &Course,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        self.validate_schedule_date(course, date)?;
        let location = self.fixed_location(course)?;

        let conflicts =
            conflict::find_conflicts(self.repo.as_ref(), course, &location, date, slot)?;
        if !conflicts.is_empty() {
            return Err(SchedulingError::Conflicts(conflicts));
        }

        let session = Session::new(
            course.id(),
            location.id(),
            course.teacher_id().map(str::to_string),
            date,
            slot,
        );
        Ok(self.repo.save_session(session)?)
    }

    /// Merges the patch into an existing session and persists it.
    ///
    /// The merged date is re-validated against the owning course's active
    /// range when the course is known to the repository.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::NotFound`] when the session id does not exist.
    pub fn update_course_schedule(
        &self,
        session_id: &str,
        patch: SchedulePatch,
    ) -> Result<Session, SchedulingError> {
        let mut session = self
            .repo
            .session_by_id(session_id)?
            .ok_or_else(|| SchedulingError::NotFound(session_id.to_string()))?;

        if let Some(date) = patch.date {
            session.set_date(date);
        }
        if let Some(slot) = patch.slot {
            session.set_slot(slot);
        }

        if let Some(course) = self.repo.course_by_id(session.course_id())? {
            self.validate_schedule_date(&course, session.date())?;
        }

        Ok(self.repo.save_session(session)?)
    }

    /// Removes a session row.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::NotFound`] when the session id does not exist.
    pub fn delete_course_schedule(&self, session_id: &str) -> Result<(), SchedulingError> {
        if self.repo.delete_session(session_id)? {
            Ok(())
        } else {
            Err(SchedulingError::NotFound(session_id.to_string()))
        }
    }

    /// Sessions belonging to a course, in insertion order.
    ///
    /// With a range, only sessions whose date falls inside it are returned;
    /// without one, every session of the course.
    pub fn schedules_for_course(
        &self,
        course_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<Session>, SchedulingError> {
        let sessions = self.repo.sessions_for_course(course_id)?;
        Ok(match range {
            Some(range) => sessions
                .into_iter()
                .filter(|s| range.contains(s.date()))
                .collect(),
            None => sessions,
        })
    }
}
