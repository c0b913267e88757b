//! Bookable location (the unified room/class concept).

use std::fmt::Display;

use crate::Id;

/// Capability tag describing what a location can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    Classroom,
    Amphitheater,
    Laboratory,
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LocationKind::Classroom => "classroom",
            LocationKind::Amphitheater => "amphitheater",
            LocationKind::Laboratory => "laboratory",
        };
        write!(f, "{s}")
    }
}

/// A bookable location with a seating capacity and a capability tag.
///
/// Managed by the external catalog; read-only to this crate apart from
/// availability queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    id: Id,
    name: String,
    capacity: u32,
    kind: LocationKind,
    equipment: Option<String>,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, capacity: u32, kind: LocationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            kind,
            equipment: None,
        }
    }

    /// Attaches an equipment descriptor (projector, fume hoods, ...).
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_equipment() {
        let lab = Location::new("l-1", "Chemistry Lab", 24, LocationKind::Laboratory)
            .with_equipment("fume hoods");
        assert_eq!(lab.id(), "l-1");
        assert_eq!(lab.capacity(), 24);
        assert_eq!(lab.kind(), LocationKind::Laboratory);
        assert_eq!(lab.equipment(), Some("fume hoods"));
    }

    #[test]
    fn kind_display() {
        assert_eq!(LocationKind::Amphitheater.to_string(), "amphitheater");
    }
}
