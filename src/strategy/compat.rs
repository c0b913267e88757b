//! Course-kind to location-kind compatibility table.

use std::collections::HashSet;

use crate::model::{CourseKind, LocationKind};

/// Which location kinds may host which course kinds.
///
/// This is configuration handed to the best-fit strategy and the binding
/// helper, not logic scattered through the selection algorithm. The default
/// table:
///
/// | course  | locations                 |
/// |---------|---------------------------|
/// | Lecture | Amphitheater, Classroom   |
/// | Seminar | Classroom                 |
/// | Lab     | Laboratory                |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compatibility {
    pairs: HashSet<(CourseKind, LocationKind)>,
}

impl Compatibility {
    /// Creates an empty table allowing nothing.
    pub fn empty() -> Self {
        Self {
            pairs: HashSet::new(),
        }
    }

    /// Additionally allows `course` kinds to run in `location` kinds.
    pub fn allow(mut self, course: CourseKind, location: LocationKind) -> Self {
        self.pairs.insert((course, location));
        self
    }

    /// Returns true if a course of this kind may use a location of that kind.
    pub fn allows(&self, course: CourseKind, location: LocationKind) -> bool {
        self.pairs.contains(&(course, location))
    }
}

impl Default for Compatibility {
    fn default() -> Self {
        Self::empty()
            .allow(CourseKind::Lecture, LocationKind::Amphitheater)
            .allow(CourseKind::Lecture, LocationKind::Classroom)
            .allow(CourseKind::Seminar, LocationKind::Classroom)
            .allow(CourseKind::Lab, LocationKind::Laboratory)
    }
}
