//! Tests for the program builder.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;

use super::*;
use crate::{
    catalog::Catalog,
    models::{Difficulty, PredefinedProgram, ProgramSummary, ValidationError, ValidationWarning},
    ProgramError,
};

fn course(id: u64, duration: u32, difficulty: Difficulty, prerequisites: &[u64]) -> Arc<Course> {
    Arc::new(Course {
        id,
        title: format!("Course {id}"),
        description: String::new(),
        category: None,
        duration,
        tools: vec![],
        topics: vec![],
        practical_tasks: vec![],
        prerequisites: prerequisites.iter().copied().collect::<BTreeSet<_>>(),
        difficulty,
        price: 0.0,
    })
}

fn sample_course(catalog: &Catalog, id: u64) -> Arc<Course> {
    Arc::clone(catalog.get_by_id(id).expect("course exists in sample"))
}

/// Builds a program from sample courses, in the given order.
fn program_with(catalog: &Catalog, ids: &[u64]) -> ProgramBuilder {
    let mut program = ProgramBuilder::new();
    for id in ids {
        program
            .add(sample_course(catalog, *id))
            .expect("Failed to add course");
    }
    program
}

fn subscribed(program: &mut ProgramBuilder) -> EventLog {
    let log = EventLog::new();
    program.subscribe(log.clone());
    log
}

fn selected(course_id: u64, selected: bool) -> ProgramEvent {
    ProgramEvent::SelectionChanged {
        course_id,
        selected,
    }
}

#[test]
fn test_add_appends_and_emits_events() {
    let catalog = Catalog::sample();
    let mut program = ProgramBuilder::new();
    let log = subscribed(&mut program);

    program
        .add(sample_course(&catalog, 1))
        .expect("Failed to add course");
    program
        .add(sample_course(&catalog, 2))
        .expect("Failed to add course");

    assert_eq!(program.course_ids(), vec![1, 2]);
    assert_eq!(
        log.events(),
        vec![
            selected(1, true),
            ProgramEvent::ProgramMutated,
            selected(2, true),
            ProgramEvent::ProgramMutated,
        ]
    );
}

#[test]
fn test_duplicate_add_is_rejected_without_events() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1]);
    let log = subscribed(&mut program);

    let err = program
        .add(sample_course(&catalog, 1))
        .expect_err("duplicate");
    assert!(matches!(err, ProgramError::DuplicateMember { id: 1, .. }));
    assert_eq!(program.course_ids(), vec![1]);
    assert!(log.events().is_empty());
}

#[test]
fn test_unmet_prerequisites_list_every_missing_course() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 2, 3, 4]);
    let log = subscribed(&mut program);

    match program.add(sample_course(&catalog, 8)) {
        Err(ProgramError::UnmetPrerequisite { id, missing, .. }) => {
            assert_eq!(id, 8);
            assert_eq!(missing, vec![5]);
        }
        other => panic!("expected unmet prerequisite, got {other:?}"),
    }

    let mut empty = ProgramBuilder::new();
    match empty.add(sample_course(&catalog, 8)) {
        Err(ProgramError::UnmetPrerequisite { missing, .. }) => assert_eq!(missing, vec![4, 5]),
        other => panic!("expected unmet prerequisite, got {other:?}"),
    }

    assert_eq!(program.len(), 4);
    assert!(log.events().is_empty());
}

#[test]
fn test_only_direct_prerequisites_are_checked() {
    // Course 3 needs 2, which needs 1; with 2 present the chain is not walked
    let catalog = Catalog::sample();
    let mut program = ProgramBuilder::new();
    program.replace(vec![sample_course(&catalog, 2)]);
    program
        .add(sample_course(&catalog, 3))
        .expect("direct prerequisite is present");
    assert_eq!(program.course_ids(), vec![2, 3]);
}

#[test]
fn test_remove_blocked_by_all_dependents() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 2, 6, 10]);
    let log = subscribed(&mut program);

    match program.remove(1) {
        Err(ProgramError::BlockedByDependents { id, dependents }) => {
            assert_eq!(id, 1);
            let ids: Vec<u64> = dependents.iter().map(|d| d.id).collect();
            assert_eq!(ids, vec![2, 6, 10]);
        }
        other => panic!("expected blocked removal, got {other:?}"),
    }
    assert_eq!(program.course_ids(), vec![1, 2, 6, 10]);
    assert!(log.events().is_empty());
}

#[test]
fn test_remove_keeps_order_and_ignores_absent_courses() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 2, 6, 10]);
    let log = subscribed(&mut program);

    let removed = program.remove(6).expect("Failed to remove course");
    assert_eq!(removed.map(|course| course.id), Some(6));
    assert_eq!(program.course_ids(), vec![1, 2, 10]);
    assert_eq!(
        log.take(),
        vec![selected(6, false), ProgramEvent::ProgramMutated]
    );

    assert!(program.remove(42).expect("absent course").is_none());
    assert!(log.events().is_empty());
}

#[test]
fn test_move_up_and_down_at_the_edges() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 2, 10]);
    let log = subscribed(&mut program);

    assert!(!program.move_up(1));
    assert!(!program.move_down(10));
    assert!(!program.move_up(42));
    assert!(log.events().is_empty());

    assert!(program.move_up(10));
    assert_eq!(program.course_ids(), vec![1, 10, 2]);
    assert!(program.move_down(1));
    assert_eq!(program.course_ids(), vec![10, 1, 2]);
    assert_eq!(
        log.events(),
        vec![ProgramEvent::ProgramMutated, ProgramEvent::ProgramMutated]
    );
}

#[test]
fn test_reordering_does_not_check_prerequisites() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 2]);

    // Course 2 may end up before its prerequisite
    assert!(program.move_up(2));
    assert_eq!(program.course_ids(), vec![2, 1]);
    assert!(program.validate().is_valid);
}

#[test]
fn test_clear_deselects_everything() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 2]);
    let log = subscribed(&mut program);

    assert_eq!(program.clear(), 2);
    assert!(program.is_empty());
    assert_eq!(
        log.take(),
        vec![
            selected(1, false),
            selected(2, false),
            ProgramEvent::ProgramMutated
        ]
    );

    assert_eq!(program.clear(), 0);
    assert!(log.events().is_empty());
}

#[test]
fn test_load_predefined_replaces_program() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 6]);
    let log = subscribed(&mut program);

    let loaded = program
        .load_predefined("basic", &catalog)
        .expect("Failed to load program");
    assert_eq!(loaded, 3);
    assert_eq!(program.course_ids(), vec![1, 2, 10]);
    assert_eq!(program.summarize().total_duration, 165);
    assert_eq!(
        log.events(),
        vec![
            selected(1, false),
            selected(6, false),
            selected(1, true),
            selected(2, true),
            selected(10, true),
            ProgramEvent::ProgramMutated,
        ]
    );
}

#[test]
fn test_load_predefined_skips_unknown_and_repeated_ids() {
    let courses = vec![
        (*course(1, 60, Difficulty::Beginner, &[])).clone(),
        (*course(2, 30, Difficulty::Beginner, &[])).clone(),
    ];
    let mut programs = BTreeMap::new();
    programs.insert(
        "mixed".to_string(),
        PredefinedProgram {
            name: "Mixed".to_string(),
            courses: vec![2, 99, 1, 2],
            duration: 90,
        },
    );
    programs.insert(
        "ghost".to_string(),
        PredefinedProgram {
            name: "Ghost".to_string(),
            courses: vec![98, 99],
            duration: 0,
        },
    );
    let catalog = Catalog::new(courses, programs).expect("valid catalog");

    let mut program = ProgramBuilder::new();
    assert_eq!(
        program
            .load_predefined("mixed", &catalog)
            .expect("Failed to load program"),
        2
    );
    assert_eq!(program.course_ids(), vec![2, 1]);

    let log = subscribed(&mut program);
    let err = program
        .load_predefined("ghost", &catalog)
        .expect_err("nothing resolves");
    assert!(matches!(err, ProgramError::EmptyResolution { .. }));
    assert_eq!(program.course_ids(), vec![2, 1]);
    assert!(log.events().is_empty());

    let err = program
        .load_predefined("missing", &catalog)
        .expect_err("unknown program");
    assert!(matches!(err, ProgramError::ProgramNotFound { .. }));
}

#[test]
fn test_summary_totals() {
    let mut program = ProgramBuilder::new();
    assert_eq!(program.summarize(), ProgramSummary::default());

    let mut paid = (*course(1, 90, Difficulty::Beginner, &[])).clone();
    paid.price = 1500.5;
    program.add(Arc::new(paid)).expect("Failed to add course");
    program
        .add(course(2, 45, Difficulty::Beginner, &[]))
        .expect("Failed to add course");

    let summary = program.summarize();
    assert_eq!(summary.total_duration, 135);
    assert_eq!(summary.total_lessons, 2);
    assert!((summary.total_price - 1500.5).abs() < f64::EPSILON);
}

#[test]
fn test_validate_empty_program() {
    let report = ProgramBuilder::new().validate();
    assert!(!report.is_valid);
    assert_eq!(report.errors, vec![ValidationError::Empty]);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_validate_warnings() {
    let mut program = ProgramBuilder::new();
    program
        .add(course(1, 30, Difficulty::Advanced, &[]))
        .expect("Failed to add course");
    let report = program.validate();
    assert!(report.is_valid);
    assert_eq!(
        report.warnings,
        vec![
            ValidationWarning::AdvancedWithoutBeginner,
            ValidationWarning::TooShort { total_duration: 30 },
        ]
    );

    program
        .add(course(2, 500, Difficulty::Beginner, &[]))
        .expect("Failed to add course");
    assert_eq!(
        program.validate().warnings,
        vec![ValidationWarning::TooLong {
            total_duration: 530
        }]
    );
}

#[test]
fn test_validate_recommended_range_is_inclusive() {
    let mut program = ProgramBuilder::new();
    program
        .add(course(1, 60, Difficulty::Beginner, &[]))
        .expect("Failed to add course");
    assert!(program.validate().warnings.is_empty());

    program
        .add(course(2, 420, Difficulty::Intermediate, &[]))
        .expect("Failed to add course");
    assert!(program.validate().warnings.is_empty());
}

#[test]
fn test_snapshot_restores_order_and_totals() {
    let catalog = Catalog::sample();
    let mut original = program_with(&catalog, &[1, 2, 3]);
    assert!(original.move_down(1));

    let snapshot = original.serialize();
    assert_eq!(snapshot.total_duration, 195);
    assert!(snapshot.created_at.is_some());
    let blob = serde_json::to_value(&snapshot).expect("Failed to serialize snapshot");

    let mut restored = ProgramBuilder::new();
    let log = subscribed(&mut restored);
    let loaded = restored.restore(&blob).expect("Failed to restore snapshot");

    assert_eq!(loaded.created_at, snapshot.created_at);
    assert_eq!(restored.course_ids(), vec![2, 1, 3]);
    assert_eq!(restored.summarize(), original.summarize());
    assert_eq!(
        log.events(),
        vec![
            selected(2, true),
            selected(1, true),
            selected(3, true),
            ProgramEvent::ProgramMutated,
        ]
    );
}

#[test]
fn test_restore_tolerates_missing_optional_fields() {
    let blob = json!({
        "courses": [
            { "id": 7, "title": "Copilot", "duration": 60, "difficulty": "intermediate" }
        ],
        "createdAt": "not a timestamp"
    });

    let mut program = ProgramBuilder::new();
    let snapshot = program.restore(&blob).expect("Failed to restore snapshot");
    assert!(snapshot.created_at.is_none());
    assert_eq!(snapshot.total_duration, 0);
    assert_eq!(program.course_ids(), vec![7]);
}

#[test]
fn test_duration_totals_saturate_for_huge_snapshots() {
    let blob = json!({
        "courses": [
            { "id": 1, "title": "Marathon", "duration": 4_000_000_000_u32, "difficulty": "beginner" },
            { "id": 2, "title": "Ultra", "duration": 4_000_000_000_u32, "difficulty": "beginner" }
        ]
    });

    let mut program = ProgramBuilder::new();
    program.restore(&blob).expect("Failed to restore snapshot");

    let summary = program.summarize();
    assert_eq!(summary.total_duration, u32::MAX);
    assert_eq!(summary.total_lessons, 2);
    assert_eq!(program.serialize().total_duration, u32::MAX);

    let report = program.validate();
    assert!(report.warnings.contains(&ValidationWarning::TooLong {
        total_duration: u32::MAX
    }));

    let text = program.export_text();
    assert!(text.contains("1. Marathon"));
    assert!(text.ends_with("LESSON COUNT: 2"));
}

#[test]
fn test_malformed_snapshots_leave_program_unchanged() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1]);
    let log = subscribed(&mut program);

    let entry = json!({ "id": 1, "title": "A", "duration": 60, "difficulty": "beginner" });
    let blobs = [
        json!({}),
        json!({ "courses": "nope" }),
        json!({ "courses": [] }),
        json!({ "courses": [{ "id": 1 }] }),
        json!({ "courses": [entry.clone(), entry] }),
    ];
    for blob in &blobs {
        let err = program.restore(blob).expect_err("malformed snapshot");
        assert!(
            matches!(err, ProgramError::MalformedSnapshot { .. }),
            "unexpected error for {blob}: {err}"
        );
    }

    assert_eq!(program.course_ids(), vec![1]);
    assert!(log.events().is_empty());
}

#[test]
fn test_listener_default_hooks() {
    #[derive(Default)]
    struct Counter {
        selected: usize,
        mutated: usize,
    }

    impl ProgramListener for Counter {
        fn on_selection_changed(&mut self, _course_id: u64, selected: bool) {
            if selected {
                self.selected += 1;
            }
        }

        fn on_program_mutated(&mut self) {
            self.mutated += 1;
        }
    }

    let mut counter = Counter::default();
    counter.on_event(&selected(1, true));
    counter.on_event(&selected(1, false));
    counter.on_event(&ProgramEvent::ProgramMutated);
    assert_eq!(counter.selected, 1);
    assert_eq!(counter.mutated, 1);
}

#[test]
fn test_export_text_follows_program_order() {
    let catalog = Catalog::sample();
    let mut program = program_with(&catalog, &[1, 10]);
    assert!(program.move_up(10));

    let text = program.export_text();
    let ethics = text.find("1. AI ethics and safety").expect("first course");
    let intro = text
        .find("2. Introduction to artificial intelligence")
        .expect("second course");
    assert!(ethics < intro);
    assert!(text.ends_with("LESSON COUNT: 2"));
}
