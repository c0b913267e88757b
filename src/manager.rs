//! Strategy facade: the entry point callers schedule through.
//!
//! Holds one active [`Strategy`] (direct by default) over a shared
//! repository. Planning is synchronous and request-scoped: each call runs to
//! completion, and the check-then-commit sequence is not atomic across
//! concurrent callers; serializing racing plans is the storage layer's job.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::conflict::Conflict;
use crate::error::SchedulingError;
use crate::model::{Course, Location, Session, TimeSlot};
use crate::repository::ScheduleRepository;
use crate::strategy::{AllocationStrategy, BestFitStrategy, DirectStrategy, Strategy};
use crate::Id;

/// Strategy identity for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One candidate session in a batch request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub course: Course,
    /// Required by the direct strategy; ignored by best-fit.
    pub location: Option<Location>,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

/// Per-item outcome of a batch request.
///
/// Carries the originating course id so callers can correlate results with
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    pub course_id: Id,
    pub success: bool,
    pub session: Option<Session>,
    pub message: String,
}

/// Facade over the active allocation strategy.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use lectio::manager::ScheduleManager;
/// use lectio::model::{Course, CourseKind, DateRange, Location, LocationKind, TimeSlot};
/// use lectio::repository::InMemorySchedule;
///
/// let repo = Arc::new(InMemorySchedule::new());
/// repo.add_location(Location::new("room-101", "Room 101", 30, LocationKind::Classroom))
///     .unwrap();
///
/// let term = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
/// )
/// .unwrap();
/// let algebra = Course::new("algebra-1", "Algebra I", "math", 25, CourseKind::Lecture, term)
///     .with_teacher("dupont");
///
/// let manager = ScheduleManager::new(repo);
/// assert_eq!(manager.strategy_info().name, "direct");
///
/// // Best-fit selection needs no location: the tightest free room wins
/// let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// let morning = TimeSlot::from_hm(10, 0, 11, 30).unwrap();
/// let session = manager.plan_best_fit(&algebra, monday, morning).unwrap();
/// assert_eq!(session.location_id(), "room-101");
///
/// // The committed session now blocks its window
/// let room = Location::new("room-101", "Room 101", 30, LocationKind::Classroom);
/// assert!(!manager.is_available(&algebra, &room, monday, morning).unwrap());
/// ```
pub struct ScheduleManager {
    repo: Arc<dyn ScheduleRepository>,
    active: Strategy,
}

impl ScheduleManager {
    /// Creates a manager with the direct strategy active.
    pub fn new(repo: Arc<dyn ScheduleRepository>) -> Self {
        let active = Strategy::Direct(DirectStrategy::new(repo.clone()));
        Self { repo, active }
    }

    /// Swaps the active strategy by registry name.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::UnknownStrategy`] for names outside
    /// [`Strategy::NAMES`].
    pub fn set_strategy(&mut self, name: &str) -> Result<(), SchedulingError> {
        self.active = Strategy::from_name(name, self.repo.clone())?;
        Ok(())
    }

    /// Identity of the active strategy.
    pub fn strategy_info(&self) -> StrategyInfo {
        StrategyInfo {
            name: self.active.name(),
            description: self.active.description(),
        }
    }

    /// Plans one candidate session through the active strategy.
    pub fn plan(
        &self,
        course: &Course,
        location: Option<&Location>,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        self.active.plan(course, location, date, slot)
    }

    /// Plans through best-fit location selection, whatever the active
    /// strategy: only the course and window are given, the location is
    /// chosen for minimal viable capacity surplus.
    pub fn plan_best_fit(
        &self,
        course: &Course,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Session, SchedulingError> {
        BestFitStrategy::new(self.repo.clone()).plan(course, None, date, slot)
    }

    /// Cancels a committed session.
    pub fn cancel_plan(&self, session_id: &str) -> Result<(), SchedulingError> {
        self.active.cancel_plan(session_id)
    }

    /// Returns true if the candidate has no conflicts.
    pub fn is_available(
        &self,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<bool, SchedulingError> {
        self.active.is_available(course, location, date, slot)
    }

    /// Reports every conflict for the candidate.
    pub fn conflicts(
        &self,
        course: &Course,
        location: &Location,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Vec<Conflict>, SchedulingError> {
        self.active.conflicts(course, location, date, slot)
    }

    /// Best-effort batch scheduling, not a transaction.
    ///
    /// Requests are evaluated independently and in the order given; a
    /// failure in one item never undoes earlier items. Failures are caught
    /// per item and recorded in the corresponding [`PlanResult`] instead of
    /// propagating.
    pub fn schedule_many(&self, requests: &[PlanRequest]) -> Vec<PlanResult> {
        requests
            .iter()
            .map(|req| {
                let outcome = self.plan(&req.course, req.location.as_ref(), req.date, req.slot);
                match outcome {
                    Ok(session) => PlanResult {
                        course_id: req.course.id().to_string(),
                        success: true,
                        session: Some(session),
                        message: "planned".to_string(),
                    },
                    Err(err) => PlanResult {
                        course_id: req.course.id().to_string(),
                        success: false,
                        session: None,
                        message: err.to_string(),
                    },
                }
            })
            .collect()
    }
}
