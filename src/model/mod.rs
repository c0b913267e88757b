//! Scheduling domain types.
//!
//! Courses and locations are managed by external catalogs and are read-only
//! here; sessions are the rows this crate creates and cancels. The source
//! system kept two parallel bookable concepts (a generic room and a numbered
//! class); they are unified into [`Location`] with a [`LocationKind`]
//! capability tag.

mod course;
mod location;
mod session;
mod timeslot;

pub use course::{Course, CourseKind, DateRange};
pub use location::{Location, LocationKind};
pub use session::{Session, SessionStatus};
pub use timeslot::TimeSlot;
