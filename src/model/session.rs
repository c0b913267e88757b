//! A scheduled occurrence of a course at a location, date, and time window.

use chrono::NaiveDate;

use crate::model::TimeSlot;
use crate::Id;

/// Lifecycle state of a session row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    Planned,
    Cancelled,
}

/// The entity this crate creates and cancels.
///
/// The id is absent until the repository persists the session; the teacher id
/// is copied from the course at planning time, never set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    id: Option<Id>,
    course_id: Id,
    location_id: Id,
    teacher_id: Option<Id>,
    date: NaiveDate,
    slot: TimeSlot,
    status: SessionStatus,
}

impl Session {
    /// Creates a new unpersisted session with status `Planned`.
    pub fn new(
        course_id: impl Into<Id>,
        location_id: impl Into<Id>,
        teacher_id: Option<Id>,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Self {
        Self {
            id: None,
            course_id: course_id.into(),
            location_id: location_id.into(),
            teacher_id,
            date,
            slot,
            status: SessionStatus::Planned,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn teacher_id(&self) -> Option<&str> {
        self.teacher_id.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn slot(&self) -> TimeSlot {
        self.slot
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Assigns the persistent id. The repository calls this on first insert.
    pub fn assign_id(&mut self, id: impl Into<Id>) {
        self.id = Some(id.into());
    }

    /// Moves the session to another calendar day.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Moves the session to another time window.
    pub fn set_slot(&mut self, slot: TimeSlot) {
        self.slot = slot;
    }

    pub fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
    }
}
