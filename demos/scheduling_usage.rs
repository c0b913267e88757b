//! Example demonstrating planning, conflict detection, and cancellation.
//!
//! Run with: `cargo run --example scheduling_usage`

use std::sync::Arc;

use chrono::NaiveDate;
use lectio::manager::{PlanRequest, ScheduleManager};
use lectio::model::{Course, CourseKind, DateRange, Location, LocationKind, TimeSlot};
use lectio::repository::{InMemorySchedule, ScheduleRepository};

fn main() {
    println!("=== Course Scheduling Usage Example ===\n");

    // Catalog: two rooms and a lecture course
    let repo = Arc::new(InMemorySchedule::new());
    repo.add_location(Location::new("room-101", "Room 101", 30, LocationKind::Classroom))
        .unwrap();
    repo.add_location(Location::new("amphi-a", "Amphi A", 120, LocationKind::Amphitheater))
        .unwrap();

    let term = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
    )
    .unwrap();
    let algebra = Course::new("algebra-1", "Algebra I", "math", 25, CourseKind::Lecture, term)
        .with_teacher("dupont");

    let manager = ScheduleManager::new(repo.clone());
    println!("Active strategy: {}", manager.strategy_info().name);

    // Plan a session
    println!("\n--- Planning ---");
    let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let morning = TimeSlot::from_hm(10, 0, 11, 30).unwrap();
    let room = repo.location_by_id("room-101").unwrap().unwrap();
    let session = manager.plan(&algebra, Some(&room), monday, morning).unwrap();
    println!(
        "Planned session {} in {} at {}",
        session.id().unwrap(),
        session.location_id(),
        session.slot()
    );

    // An overlapping candidate is rejected with every reason
    println!("\n--- Conflict Detection ---");
    let overlapping = TimeSlot::from_hm(11, 0, 12, 30).unwrap();
    match manager.plan(&algebra, Some(&room), monday, overlapping) {
        Ok(_) => println!("unexpectedly planned"),
        Err(e) => println!("Rejected: {e}"),
    }

    // A back-to-back candidate is fine
    let next = TimeSlot::from_hm(11, 30, 13, 0).unwrap();
    println!(
        "Back-to-back slot {} available: {}",
        next,
        manager.is_available(&algebra, &room, monday, next).unwrap()
    );

    // Batch scheduling: failures are per-item
    println!("\n--- Batch Scheduling ---");
    let requests = vec![
        PlanRequest {
            course: algebra.clone(),
            location: Some(room.clone()),
            date: monday,
            slot: next,
        },
        PlanRequest {
            course: algebra.clone(),
            location: Some(room.clone()),
            date: monday,
            slot: TimeSlot::from_hm(12, 0, 13, 0).unwrap(),
        },
    ];
    for result in manager.schedule_many(&requests) {
        println!(
            "{}: success={} ({})",
            result.course_id, result.success, result.message
        );
    }

    // Cancel frees the slot
    println!("\n--- Cancellation ---");
    manager.cancel_plan(session.id().unwrap()).unwrap();
    println!(
        "After cancel, original slot available: {}",
        manager.is_available(&algebra, &room, monday, morning).unwrap()
    );
}
