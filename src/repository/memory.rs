//! In-process repository backed by hash maps.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use super::{RepositoryError, ScheduleRepository};
use crate::model::{Course, Location, Session, SessionStatus, TimeSlot};
use crate::Id;

#[derive(Debug, Default)]
struct Store {
    // Insertion-ordered session ids so course listings are stable.
    session_order: Vec<Id>,
    sessions: HashMap<Id, Session>,
    // BTreeMap gives deterministic ascending-id iteration for availability
    // queries, which is what makes best-fit tie-breaking reproducible.
    locations: BTreeMap<Id, Location>,
    courses: HashMap<Id, Course>,
}

/// In-memory [`ScheduleRepository`] implementation.
///
/// Interior mutability behind a `Mutex`, so a single instance can be shared
/// across components via `Arc`. Assigns UUID ids on first insert.
#[derive(Debug, Default)]
pub struct InMemorySchedule {
    store: Mutex<Store>,
}

impl InMemorySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location in the catalog.
    pub fn add_location(&self, location: Location) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        store.locations.insert(location.id().to_string(), location);
        Ok(())
    }

    /// Registers a course in the catalog.
    pub fn add_course(&self, course: Course) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        store.courses.insert(course.id().to_string(), course);
        Ok(())
    }

    /// Number of persisted sessions.
    pub fn session_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.sessions.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Backend("schedule store lock poisoned".to_string()))
    }
}

fn occupies(session: &Session, date: NaiveDate, slot: TimeSlot) -> bool {
    session.status() == SessionStatus::Planned
        && session.date() == date
        && session.slot().overlaps(&slot)
}

impl ScheduleRepository for InMemorySchedule {
    fn sessions_for_location(
        &self,
        location_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Session>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .session_order
            .iter()
            .filter_map(|id| store.sessions.get(id))
            .filter(|s| s.location_id() == location_id && s.date() == date)
            .cloned()
            .collect())
    }

    fn sessions_for_teacher(
        &self,
        teacher_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Session>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .session_order
            .iter()
            .filter_map(|id| store.sessions.get(id))
            .filter(|s| s.teacher_id() == Some(teacher_id) && s.date() == date)
            .cloned()
            .collect())
    }

    fn sessions_for_course(&self, course_id: &str) -> Result<Vec<Session>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .session_order
            .iter()
            .filter_map(|id| store.sessions.get(id))
            .filter(|s| s.course_id() == course_id)
            .cloned()
            .collect())
    }

    fn available_locations(
        &self,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Vec<Location>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .locations
            .values()
            .filter(|loc| {
                !store
                    .sessions
                    .values()
                    .any(|s| s.location_id() == loc.id() && occupies(s, date, slot))
            })
            .cloned()
            .collect())
    }

    fn session_by_id(&self, id: &str) -> Result<Option<Session>, RepositoryError> {
        Ok(self.lock()?.sessions.get(id).cloned())
    }

    fn save_session(&self, mut session: Session) -> Result<Session, RepositoryError> {
        let mut store = self.lock()?;
        let id = match session.id() {
            Some(id) => id.to_string(),
            None => {
                let id = crate::generate_id();
                session.assign_id(id.clone());
                id
            }
        };
        if !store.sessions.contains_key(&id) {
            store.session_order.push(id.clone());
        }
        store.sessions.insert(id, session.clone());
        Ok(session)
    }

    fn delete_session(&self, id: &str) -> Result<bool, RepositoryError> {
        let mut store = self.lock()?;
        let removed = store.sessions.remove(id).is_some();
        if removed {
            store.session_order.retain(|s| s != id);
        }
        Ok(removed)
    }

    fn location_by_id(&self, id: &str) -> Result<Option<Location>, RepositoryError> {
        Ok(self.lock()?.locations.get(id).cloned())
    }

    fn course_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError> {
        Ok(self.lock()?.courses.get(id).cloned())
    }
}
