//! Conflict detection for candidate sessions.
//!
//! Stateless evaluation of a candidate (course, location, date, time window)
//! against the committed sessions held by the repository. Reused by every
//! allocation strategy; all findings are collected per call rather than
//! short-circuiting on the first, so callers can surface every problem at
//! once.

use std::fmt::Display;

use chrono::NaiveDate;

use crate::model::{Course, Location, Session, SessionStatus, TimeSlot};
use crate::repository::{RepositoryError, ScheduleRepository};
use crate::Id;

/// A detected violation preventing a session from being committed.
///
/// Each variant carries the context a caller needs to branch on kind;
/// `Display` renders the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conflict {
    /// The location seats fewer people than the course requires.
    InsufficientCapacity {
        location_id: Id,
        capacity: u32,
        required: u32,
    },
    /// Another committed session occupies the location in this window.
    LocationOccupied {
        location_id: Id,
        date: NaiveDate,
        occupied_by: Id,
    },
    /// The course's teacher is already committed elsewhere in this window.
    TeacherOccupied {
        teacher_id: Id,
        date: NaiveDate,
        occupied_by: Id,
    },
}

impl Conflict {
    /// Renders the reasons as one joined message, the way the original
    /// surfaced them.
    pub fn join(conflicts: &[Conflict]) -> String {
        conflicts
            .iter()
            .map(Conflict::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conflict::InsufficientCapacity {
                location_id,
                capacity,
                required,
            } => write!(
                f,
                "insufficient capacity: location {location_id} seats {capacity}, course requires {required}"
            ),
            Conflict::LocationOccupied {
                location_id,
                date,
                occupied_by,
            } => write!(
                f,
                "location {location_id} already occupied on {date} by course {occupied_by}"
            ),
            Conflict::TeacherOccupied {
                teacher_id,
                date,
                occupied_by,
            } => write!(
                f,
                "teacher {teacher_id} already occupied on {date} by course {occupied_by}"
            ),
        }
    }
}

/// Returns true if the session is committed and occupies the window.
///
/// Cancelled sessions never count.
fn blocks(session: &Session, slot: TimeSlot) -> bool {
    session.status() == SessionStatus::Planned && session.slot().overlaps(&slot)
}

/// Evaluates a candidate session against the committed schedule.
///
/// Checks, in order:
/// 1. capacity: `location.capacity >= course.required_capacity`;
/// 2. location occupancy on `(location, date)`;
/// 3. teacher occupancy on `(teacher, date)`, only when the course has an
///    assigned teacher.
///
/// All three categories are evaluated; within the occupancy categories only
/// the first overlapping session is reported (one reason per category).
/// An empty result means the candidate can be committed.
///
/// # Errors
///
/// Repository failures propagate unchanged.
pub fn find_conflicts(
    repo: &dyn ScheduleRepository,
    course: &Course,
    location: &Location,
    date: NaiveDate,
    slot: TimeSlot,
) -> Result<Vec<Conflict>, RepositoryError> {
    let mut conflicts = Vec::new();

    if location.capacity() < course.required_capacity() {
        conflicts.push(Conflict::InsufficientCapacity {
            location_id: location.id().to_string(),
            capacity: location.capacity(),
            required: course.required_capacity(),
        });
    }

    let existing = repo.sessions_for_location(location.id(), date)?;
    if let Some(hit) = existing.iter().find(|s| blocks(s, slot)) {
        conflicts.push(Conflict::LocationOccupied {
            location_id: location.id().to_string(),
            date,
            occupied_by: hit.course_id().to_string(),
        });
    }

    if let Some(teacher_id) = course.teacher_id() {
        let existing = repo.sessions_for_teacher(teacher_id, date)?;
        if let Some(hit) = existing.iter().find(|s| blocks(s, slot)) {
            conflicts.push(Conflict::TeacherOccupied {
                teacher_id: teacher_id.to_string(),
                date,
                occupied_by: hit.course_id().to_string(),
            });
        }
    }

    Ok(conflicts)
}

/// Returns true if [`find_conflicts`] reports nothing.
pub fn can_schedule(
    repo: &dyn ScheduleRepository,
    course: &Course,
    location: &Location,
    date: NaiveDate,
    slot: TimeSlot,
) -> Result<bool, RepositoryError> {
    Ok(find_conflicts(repo, course, location, date, slot)?.is_empty())
}
