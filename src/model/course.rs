//! Course definition as read from the external catalog.

use std::fmt::Display;

use chrono::NaiveDate;

use crate::error::SchedulingError;
use crate::Id;

/// Kind tag used to match a course against compatible location kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CourseKind {
    Lecture,
    Seminar,
    Lab,
}

impl Display for CourseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CourseKind::Lecture => "lecture",
            CourseKind::Seminar => "seminar",
            CourseKind::Lab => "lab",
        };
        write!(f, "{s}")
    }
}

/// Inclusive calendar range `[start, end]` during which a course runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SchedulingError> {
        if start > end {
            return Err(SchedulingError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` ∈ `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A teachable unit.
///
/// Created and updated by the external course catalog; read-only here.
/// The location id is optional: it is fixed when the course always runs in
/// the same place, and absent when the location is chosen at planning time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    id: Id,
    title: String,
    subject_id: Id,
    teacher_id: Option<Id>,
    location_id: Option<Id>,
    required_capacity: u32,
    kind: CourseKind,
    active_range: DateRange,
}

impl Course {
    /// Creates a new course with no assigned teacher or fixed location.
    pub fn new(
        id: impl Into<Id>,
        title: impl Into<String>,
        subject_id: impl Into<Id>,
        required_capacity: u32,
        kind: CourseKind,
        active_range: DateRange,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subject_id: subject_id.into(),
            teacher_id: None,
            location_id: None,
            required_capacity,
            kind,
            active_range,
        }
    }

    /// Assigns a teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<Id>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Fixes the location this course always runs in.
    pub fn with_location(mut self, location_id: impl Into<Id>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn teacher_id(&self) -> Option<&str> {
        self.teacher_id.as_deref()
    }

    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    pub fn required_capacity(&self) -> u32 {
        self.required_capacity
    }

    pub fn kind(&self) -> CourseKind {
        self.kind
    }

    pub fn active_range(&self) -> DateRange {
        self.active_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        let result = DateRange::new(date(2024, 12, 20), date(2024, 9, 2));
        assert!(matches!(
            result,
            Err(SchedulingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date(2024, 9, 2), date(2024, 9, 2)).unwrap();
        assert!(range.contains(date(2024, 9, 2)));
    }

    #[test]
    fn contains_is_inclusive() {
        let range = DateRange::new(date(2024, 9, 2), date(2024, 12, 20)).unwrap();
        assert!(range.contains(date(2024, 9, 2)));
        assert!(range.contains(date(2024, 12, 20)));
        assert!(!range.contains(date(2024, 12, 21)));
        assert!(!range.contains(date(2024, 9, 1)));
    }

    #[test]
    fn builder_assigns_teacher_and_location() {
        let range = DateRange::new(date(2024, 9, 2), date(2024, 12, 20)).unwrap();
        let course = Course::new("c-1", "Algebra I", "math", 25, CourseKind::Lecture, range)
            .with_teacher("t-7")
            .with_location("l-3");
        assert_eq!(course.teacher_id(), Some("t-7"));
        assert_eq!(course.location_id(), Some("l-3"));
        assert_eq!(course.required_capacity(), 25);
    }

    #[test]
    fn course_without_teacher() {
        let range = DateRange::new(date(2024, 9, 2), date(2024, 12, 20)).unwrap();
        let course = Course::new("c-2", "Self Study", "misc", 10, CourseKind::Seminar, range);
        assert_eq!(course.teacher_id(), None);
        assert_eq!(course.location_id(), None);
    }
}
