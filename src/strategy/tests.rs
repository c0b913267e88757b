//! Test suite for the allocation strategies.

use std::sync::Arc;

use chrono::NaiveDate;

use super::*;
use crate::conflict::Conflict;
use crate::error::{SchedulingError, ValidationError};
use crate::model::{Course, CourseKind, DateRange, Location, LocationKind};
use crate::repository::InMemorySchedule;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
}

fn slot(sh: u32, eh: u32) -> TimeSlot {
    TimeSlot::from_hm(sh, 0, eh, 0).unwrap()
}

fn course(id: &str, required: u32, kind: CourseKind, teacher: Option<&str>) -> Course {
    let range = DateRange::new(date(1), date(30)).unwrap();
    let c = Course::new(id, "Course", "subj", required, kind, range);
    match teacher {
        Some(t) => c.with_teacher(t),
        None => c,
    }
}

fn repo_with(locations: &[(&str, u32, LocationKind)]) -> Arc<InMemorySchedule> {
    let repo = Arc::new(InMemorySchedule::new());
    for (id, capacity, kind) in locations {
        repo.add_location(Location::new(*id, *id, *capacity, *kind))
            .unwrap();
    }
    repo
}

mod direct {
    use super::*;

    #[test]
    fn plan_persists_and_returns_materialized_session() {
        let repo = repo_with(&[("l-1", 30, LocationKind::Classroom)]);
        let strategy = DirectStrategy::new(repo.clone());
        let c = course("c-1", 20, CourseKind::Lecture, Some("t-1"));
        let loc = repo.location_by_id("l-1").unwrap().unwrap();

        let session = strategy
            .plan(&c, Some(&loc), date(2), slot(10, 11))
            .unwrap();
        assert!(session.id().is_some());
        assert_eq!(session.course_id(), "c-1");
        assert_eq!(session.location_id(), "l-1");
        assert_eq!(session.teacher_id(), Some("t-1"));
        assert_eq!(repo.session_count().unwrap(), 1);
    }

    #[test]
    fn plan_without_location_is_a_validation_error() {
        let repo = repo_with(&[]);
        let strategy = DirectStrategy::new(repo);
        let c = course("c-1", 20, CourseKind::Lecture, None);
        let result = strategy.plan(&c, None, date(2), slot(10, 11));
        assert_eq!(
            result,
            Err(SchedulingError::Validation(ValidationError::MissingLocation))
        );
    }

    #[test]
    fn conflicting_plan_reports_all_reasons_and_persists_nothing() {
        let repo = repo_with(&[("l-1", 20, LocationKind::Classroom)]);
        let strategy = DirectStrategy::new(repo.clone());
        let loc = repo.location_by_id("l-1").unwrap().unwrap();

        let first = course("c-a", 10, CourseKind::Lecture, Some("t-1"));
        strategy
            .plan(&first, Some(&loc), date(2), slot(10, 12))
            .unwrap();

        // Oversized course, occupied location, busy teacher: three reasons.
        let second = course("c-b", 50, CourseKind::Lecture, Some("t-1"));
        let result = strategy.plan(&second, Some(&loc), date(2), slot(11, 13));
        match result {
            Err(SchedulingError::Conflicts(conflicts)) => {
                assert_eq!(conflicts.len(), 3);
                assert!(matches!(conflicts[0], Conflict::InsufficientCapacity { .. }));
                assert!(matches!(conflicts[1], Conflict::LocationOccupied { .. }));
                assert!(matches!(conflicts[2], Conflict::TeacherOccupied { .. }));
            }
            other => panic!("expected conflicts, got {other:?}"),
        }
        // Only the first session was committed.
        assert_eq!(repo.session_count().unwrap(), 1);
    }

    #[test]
    fn no_double_booking_for_location_and_teacher() {
        let repo = repo_with(&[
            ("l-1", 30, LocationKind::Classroom),
            ("l-2", 30, LocationKind::Classroom),
        ]);
        let strategy = DirectStrategy::new(repo.clone());
        let l1 = repo.location_by_id("l-1").unwrap().unwrap();
        let l2 = repo.location_by_id("l-2").unwrap().unwrap();

        let c = course("c-a", 10, CourseKind::Lecture, Some("t-1"));
        strategy.plan(&c, Some(&l1), date(2), slot(10, 12)).unwrap();

        // Same location, overlapping window.
        let other = course("c-b", 10, CourseKind::Lecture, None);
        assert!(strategy
            .plan(&other, Some(&l1), date(2), slot(11, 13))
            .is_err());

        // Different location, same teacher, overlapping window.
        let same_teacher = course("c-c", 10, CourseKind::Lecture, Some("t-1"));
        assert!(strategy
            .plan(&same_teacher, Some(&l2), date(2), slot(11, 13))
            .is_err());

        // Different day is fine.
        assert!(strategy
            .plan(&same_teacher, Some(&l2), date(3), slot(11, 13))
            .is_ok());
    }

    #[test]
    fn back_to_back_sessions_commit() {
        let repo = repo_with(&[("l-1", 30, LocationKind::Classroom)]);
        let strategy = DirectStrategy::new(repo.clone());
        let loc = repo.location_by_id("l-1").unwrap().unwrap();
        let c = course("c-a", 10, CourseKind::Lecture, Some("t-1"));

        strategy.plan(&c, Some(&loc), date(2), slot(10, 11)).unwrap();
        strategy.plan(&c, Some(&loc), date(2), slot(11, 12)).unwrap();
        assert_eq!(repo.session_count().unwrap(), 2);
    }

    #[test]
    fn cancel_unknown_session_is_not_found() {
        let repo = repo_with(&[]);
        let strategy = DirectStrategy::new(repo);
        assert_eq!(
            strategy.cancel_plan("missing"),
            Err(SchedulingError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn cancel_then_replan_frees_the_slot() {
        let repo = repo_with(&[("l-1", 30, LocationKind::Classroom)]);
        let strategy = DirectStrategy::new(repo.clone());
        let loc = repo.location_by_id("l-1").unwrap().unwrap();
        let c = course("c-a", 10, CourseKind::Lecture, Some("t-1"));

        let session = strategy.plan(&c, Some(&loc), date(2), slot(10, 11)).unwrap();
        strategy.cancel_plan(session.id().unwrap()).unwrap();

        // The cancelled session no longer counts against its former slot.
        assert!(strategy.is_available(&c, &loc, date(2), slot(10, 11)).unwrap());
        strategy.plan(&c, Some(&loc), date(2), slot(10, 11)).unwrap();
    }

    #[test]
    fn update_plan_is_cancel_then_replan() {
        let repo = repo_with(&[("l-1", 30, LocationKind::Classroom)]);
        let strategy = DirectStrategy::new(repo.clone());
        let loc = repo.location_by_id("l-1").unwrap().unwrap();
        let c = course("c-a", 10, CourseKind::Lecture, Some("t-1"));

        let session = strategy.plan(&c, Some(&loc), date(2), slot(10, 11)).unwrap();
        // Moving within the former window must succeed.
        let moved = strategy
            .update_plan(session.id().unwrap(), &c, &loc, date(2), slot(10, 12))
            .unwrap();
        assert_eq!(repo.session_count().unwrap(), 1);
        assert_eq!(moved.slot(), slot(10, 12));
        assert_ne!(moved.id(), session.id());
    }
}

mod best_fit {
    use super::*;

    #[test]
    fn selects_minimal_viable_surplus() {
        let repo = repo_with(&[
            ("l-25", 25, LocationKind::Classroom),
            ("l-30", 30, LocationKind::Classroom),
            ("l-50", 50, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo);
        let c = course("c-1", 22, CourseKind::Lecture, None);

        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap()
            .unwrap();
        assert_eq!(chosen.id(), "l-25");
        assert_eq!(chosen.capacity(), 25);
    }

    #[test]
    fn ties_break_by_ascending_location_id() {
        let repo = repo_with(&[
            ("l-b", 25, LocationKind::Classroom),
            ("l-a", 25, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo);
        let c = course("c-1", 20, CourseKind::Lecture, None);

        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap()
            .unwrap();
        assert_eq!(chosen.id(), "l-a");
    }

    #[test]
    fn undersized_locations_are_filtered_out() {
        let repo = repo_with(&[
            ("l-1", 15, LocationKind::Classroom),
            ("l-2", 40, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo);
        let c = course("c-1", 20, CourseKind::Lecture, None);

        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap()
            .unwrap();
        assert_eq!(chosen.id(), "l-2");
    }

    #[test]
    fn exact_capacity_match_is_viable() {
        let repo = repo_with(&[("l-1", 20, LocationKind::Classroom)]);
        let strategy = BestFitStrategy::new(repo);
        let c = course("c-1", 20, CourseKind::Lecture, None);

        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap();
        assert!(chosen.is_some());
    }

    #[test]
    fn lab_course_requires_laboratory() {
        let repo = repo_with(&[
            ("l-room", 100, LocationKind::Classroom),
            ("l-lab", 24, LocationKind::Laboratory),
        ]);
        let strategy = BestFitStrategy::new(repo);
        let c = course("c-1", 20, CourseKind::Lab, None);

        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap()
            .unwrap();
        assert_eq!(chosen.id(), "l-lab");
    }

    #[test]
    fn custom_compatibility_table_is_honored() {
        let repo = repo_with(&[("l-amphi", 100, LocationKind::Amphitheater)]);
        let strategy = BestFitStrategy::new(repo.clone()).with_compatibility(
            Compatibility::empty().allow(CourseKind::Seminar, LocationKind::Amphitheater),
        );
        let c = course("c-1", 20, CourseKind::Seminar, None);

        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap();
        assert!(chosen.is_some());
    }

    #[test]
    fn occupied_locations_are_not_candidates() {
        let repo = repo_with(&[
            ("l-1", 25, LocationKind::Classroom),
            ("l-2", 30, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo.clone());
        let c = course("c-1", 22, CourseKind::Lecture, None);

        // Occupy the best-fitting room; selection falls to the next one.
        strategy.plan(&c, None, date(2), slot(10, 11)).unwrap();
        let chosen = strategy
            .select_best_location(&c, date(2), slot(10, 11))
            .unwrap()
            .unwrap();
        assert_eq!(chosen.id(), "l-2");
    }

    #[test]
    fn plan_commits_in_the_chosen_location() {
        let repo = repo_with(&[
            ("l-25", 25, LocationKind::Classroom),
            ("l-50", 50, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo.clone());
        let c = course("c-1", 22, CourseKind::Lecture, Some("t-1"));

        let session = strategy.plan(&c, None, date(2), slot(10, 11)).unwrap();
        assert_eq!(session.location_id(), "l-25");
        assert_eq!(session.teacher_id(), Some("t-1"));
        assert_eq!(repo.session_count().unwrap(), 1);
    }

    #[test]
    fn no_candidate_raises_and_persists_nothing() {
        let repo = repo_with(&[
            ("l-1", 15, LocationKind::Classroom),
            ("l-2", 18, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo.clone());
        let c = course("c-1", 40, CourseKind::Lecture, None);

        let result = strategy.plan(&c, None, date(2), slot(10, 11));
        assert_eq!(
            result,
            Err(SchedulingError::NoAvailableLocation {
                course_id: "c-1".to_string(),
                date: date(2),
            })
        );
        assert_eq!(repo.session_count().unwrap(), 0);
    }

    #[test]
    fn busy_teacher_still_fails_after_selection() {
        // The chosen room is free but the teacher is committed elsewhere;
        // the defensive re-check must catch it.
        let repo = repo_with(&[
            ("l-1", 25, LocationKind::Classroom),
            ("l-2", 30, LocationKind::Classroom),
        ]);
        let strategy = BestFitStrategy::new(repo.clone());

        let first = course("c-a", 22, CourseKind::Lecture, Some("t-1"));
        strategy.plan(&first, None, date(2), slot(10, 11)).unwrap();

        let second = course("c-b", 22, CourseKind::Lecture, Some("t-1"));
        let result = strategy.plan(&second, None, date(2), slot(10, 11));
        match result {
            Err(SchedulingError::Conflicts(conflicts)) => {
                assert_eq!(conflicts.len(), 1);
                assert!(matches!(conflicts[0], Conflict::TeacherOccupied { .. }));
            }
            other => panic!("expected teacher conflict, got {other:?}"),
        }
        assert_eq!(repo.session_count().unwrap(), 1);
    }
}

mod registry {
    use super::*;

    #[test]
    fn from_name_builds_each_registered_strategy() {
        let repo = repo_with(&[]);
        for name in Strategy::NAMES {
            let strategy = Strategy::from_name(name, repo.clone()).unwrap();
            assert_eq!(strategy.name(), name);
            assert!(!strategy.description().is_empty());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let repo = repo_with(&[]);
        let result = Strategy::from_name("round_robin", repo);
        assert!(matches!(
            result,
            Err(SchedulingError::UnknownStrategy(name)) if name == "round_robin"
        ));
    }
}
