//! Example demonstrating best-fit location selection.
//!
//! Run with: `cargo run --example best_fit_usage`

use std::sync::Arc;

use chrono::NaiveDate;
use lectio::manager::ScheduleManager;
use lectio::model::{Course, CourseKind, DateRange, Location, LocationKind, TimeSlot};
use lectio::repository::InMemorySchedule;

fn main() {
    println!("=== Best-Fit Allocation Example ===\n");

    let repo = Arc::new(InMemorySchedule::new());
    repo.add_location(Location::new("room-s", "Small Room", 25, LocationKind::Classroom))
        .unwrap();
    repo.add_location(Location::new("room-m", "Medium Room", 30, LocationKind::Classroom))
        .unwrap();
    repo.add_location(Location::new("amphi", "Amphi", 50, LocationKind::Amphitheater))
        .unwrap();
    repo.add_location(Location::new("lab", "Chem Lab", 24, LocationKind::Laboratory))
        .unwrap();

    let term = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
    )
    .unwrap();

    let mut manager = ScheduleManager::new(repo.clone());
    manager.set_strategy("best_fit").unwrap();
    let info = manager.strategy_info();
    println!("Active strategy: {} - {}", info.name, info.description);

    let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let morning = TimeSlot::from_hm(9, 0, 10, 30).unwrap();

    // 22 students: the 25-seat room wins (surplus 3)
    let lecture = Course::new("hist-1", "History", "hist", 22, CourseKind::Lecture, term);
    let session = manager.plan(&lecture, None, monday, morning).unwrap();
    println!("History (22 students) -> {}", session.location_id());

    // Same window again: the 25-seat room is taken, the 30-seat room is next
    let session = manager.plan(&lecture, None, monday, morning).unwrap();
    println!("History again         -> {}", session.location_id());

    // Lab courses only fit laboratories, whatever the capacities say
    let chem = Course::new("chem-1", "Chemistry", "chem", 20, CourseKind::Lab, term);
    let session = manager.plan(&chem, None, monday, morning).unwrap();
    println!("Chemistry (lab)       -> {}", session.location_id());

    // Nothing seats 60, occupied or not
    let big = Course::new("bio-1", "Biology", "bio", 60, CourseKind::Lecture, term);
    match manager.plan(&big, None, monday, morning) {
        Ok(s) => println!("Biology -> {}", s.location_id()),
        Err(e) => println!("Biology rejected: {e}"),
    }
}
