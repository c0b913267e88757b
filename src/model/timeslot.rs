//! Half-open time window on a single calendar day.

use std::fmt::Display;

use chrono::{Duration, NaiveTime};

use crate::error::SchedulingError;

/// Time window `[start, end)` within one day.
///
/// Endpoints follow the half-open rule: two slots overlap iff
/// `a.start < b.end && a.end > b.start`. A session ending exactly when
/// another starts is NOT a conflict; this is the tie-break policy for
/// back-to-back sessions and must be preserved.
///
/// # Examples
///
/// ```
/// use lectio::model::TimeSlot;
///
/// let morning = TimeSlot::from_hm(10, 0, 11, 0).unwrap();
///
/// // Back-to-back slots do not overlap
/// let next = TimeSlot::from_hm(11, 0, 12, 0).unwrap();
/// assert!(!morning.overlaps(&next));
///
/// // Any shared minute is an overlap, in both directions
/// let late = TimeSlot::from_hm(10, 30, 11, 30).unwrap();
/// assert!(morning.overlaps(&late));
/// assert!(late.overlaps(&morning));
///
/// assert_eq!(morning.duration().num_minutes(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Creates the slot `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidTimeSlot`] if `start >= end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, SchedulingError> {
        if start >= end {
            return Err(SchedulingError::InvalidTimeSlot { start, end });
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from hour/minute pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidTimeSlot`] if the pair does not form
    /// a valid time of day or the window is empty or inverted.
    pub fn from_hm(
        start_hour: u32,
        start_min: u32,
        end_hour: u32,
        end_min: u32,
    ) -> Result<Self, SchedulingError> {
        let start = NaiveTime::from_hms_opt(start_hour, start_min, 0);
        let end = NaiveTime::from_hms_opt(end_hour, end_min, 0);
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(SchedulingError::InvalidTimeSlot {
                start: start.unwrap_or_default(),
                end: end.unwrap_or_default(),
            }),
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks if this slot overlaps with another slot.
    ///
    /// Symmetric; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns true if `time` ∈ `[start, end)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
