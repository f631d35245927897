// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the assignment engine: guarded assignment, error classes, and
//! the bulk resets.

use shift_roster_persistence::Persistence;

use crate::tests::{create_test_exclusion, create_test_persistence, create_test_shift};
use crate::{
    AssignmentEngine, AssignmentFilter, AssignmentUpdate, AvailabilityLedger, EngineError,
    NewShift, ShiftCatalog,
};

fn seed_shift(persistence: &mut Persistence, name: &str, start: &str, max: i32) -> i64 {
    ShiftCatalog::new(persistence)
        .create(&NewShift {
            max_members: Some(max),
            min_members: Some(1),
            ..create_test_shift(name, start, "23:00")
        })
        .unwrap()
        .shift_id
}

#[test]
fn test_assign_success_returns_joined_view() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let view = AssignmentEngine::new(&mut persistence)
        .assign("2026-09-01", shift_id, alice, "supervisor")
        .unwrap();

    assert_eq!(view.status, "assigned");
    assert_eq!(view.employee_name, "Alice");
    assert_eq!(view.shift_name, "Morning");
}

#[test]
fn test_assign_error_classes() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);

    // Bad inputs are validation failures
    assert!(matches!(
        engine.assign("not-a-date", shift_id, alice, "supervisor"),
        Err(EngineError::Validation(_))
    ));
    assert!(matches!(
        engine.assign("2026-09-01", shift_id, alice, "  "),
        Err(EngineError::Validation(_))
    ));

    // Missing targets are not-found failures
    assert!(matches!(
        engine.assign("2026-09-01", shift_id, 999, "supervisor"),
        Err(EngineError::NotFound(_))
    ));
    assert!(matches!(
        engine.assign("2026-09-01", 999, alice, "supervisor"),
        Err(EngineError::NotFound(_))
    ));

    // A second seat on the same date is a conflict
    engine.assign("2026-09-01", shift_id, alice, "supervisor").unwrap();
    assert!(matches!(
        engine.assign("2026-09-01", shift_id, alice, "supervisor"),
        Err(EngineError::Conflict(_))
    ));
}

#[test]
fn test_assign_excluded_employee_is_conflict_even_with_open_slots() {
    let mut persistence = create_test_persistence();
    let employee = persistence.insert_employee("Employee 5", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    AvailabilityLedger::new(&mut persistence)
        .exclude(&create_test_exclusion(employee, "2024-06-02"))
        .unwrap();

    let result = AssignmentEngine::new(&mut persistence).assign(
        "2024-06-02",
        shift_id,
        employee,
        "supervisor",
    );
    assert!(matches!(result, Err(EngineError::Conflict(_))));
}

#[test]
fn test_assign_full_shift_is_capacity_error() {
    let mut persistence = create_test_persistence();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 2);
    let first = persistence.insert_employee("Employee 1", None).unwrap();
    let second = persistence.insert_employee("Employee 2", None).unwrap();
    let third = persistence.insert_employee("Employee 3", None).unwrap();

    let mut engine = AssignmentEngine::new(&mut persistence);
    engine.assign("2024-06-01", shift_id, first, "supervisor").unwrap();
    engine.assign("2024-06-01", shift_id, second, "supervisor").unwrap();

    let result = engine.assign("2024-06-01", shift_id, third, "supervisor");
    assert!(matches!(result, Err(EngineError::Capacity(_))));
}

#[test]
fn test_update_rejects_unknown_status() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);
    let view = engine.assign("2026-09-01", shift_id, alice, "supervisor").unwrap();

    let update = AssignmentUpdate {
        status: Some(String::from("cancelled")),
        ..Default::default()
    };
    assert!(matches!(
        engine.update(view.assignment_id, &update),
        Err(EngineError::Validation(_))
    ));

    // The known status goes through
    let update = AssignmentUpdate {
        status: Some(String::from("assigned")),
        ..Default::default()
    };
    assert_eq!(
        engine.update(view.assignment_id, &update).unwrap().status,
        "assigned"
    );
}

#[test]
fn test_update_with_no_fields_returns_current_record() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);
    let view = engine.assign("2026-09-01", shift_id, alice, "supervisor").unwrap();

    let unchanged = engine
        .update(view.assignment_id, &AssignmentUpdate::default())
        .unwrap();
    assert_eq!(unchanged, view);
}

#[test]
fn test_remove_unknown_assignment_is_not_found() {
    let mut persistence = create_test_persistence();
    let mut engine = AssignmentEngine::new(&mut persistence);

    assert!(matches!(engine.remove(999), Err(EngineError::NotFound(_))));
}

#[test]
fn test_reset_range_empties_range_and_is_idempotent() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);
    for date in ["2026-09-01", "2026-09-10", "2026-10-01"] {
        engine.assign(date, shift_id, alice, "supervisor").unwrap();
    }

    let deleted = engine.reset_range("2026-09-01", "2026-09-30").unwrap();
    assert_eq!(deleted, 2);

    // The range now lists empty
    let filter = AssignmentFilter {
        month: Some(9),
        year: Some(2026),
        ..Default::default()
    };
    assert!(engine.list(&filter).unwrap().is_empty());

    // Second call deletes nothing and still succeeds
    assert_eq!(engine.reset_range("2026-09-01", "2026-09-30").unwrap(), 0);
}

#[test]
fn test_reset_range_rejects_inverted_range() {
    let mut persistence = create_test_persistence();
    let mut engine = AssignmentEngine::new(&mut persistence);

    let result = engine.reset_range("2026-09-30", "2026-09-01");
    assert!(matches!(result, Err(EngineError::Validation(_))));
}

#[test]
fn test_reset_employee_month_spares_adjacent_months_and_other_employees() {
    let mut persistence = create_test_persistence();
    let employee_seven = persistence.insert_employee("Employee 7", None).unwrap();
    let other = persistence.insert_employee("Other", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);
    for date in ["2024-05-31", "2024-06-01", "2024-06-30", "2024-07-01"] {
        engine.assign(date, shift_id, employee_seven, "supervisor").unwrap();
    }
    engine.assign("2024-06-15", shift_id, other, "supervisor").unwrap();

    let deleted = engine.reset_employee_month(employee_seven, 2024, 6).unwrap();
    assert_eq!(deleted, 2);

    // May and July survive for employee 7, June survives for the other
    let remaining = engine.list(&AssignmentFilter::default()).unwrap();
    assert_eq!(remaining.len(), 3);
}

#[test]
fn test_reset_employee_month_rejects_invalid_month() {
    let mut persistence = create_test_persistence();
    let mut engine = AssignmentEngine::new(&mut persistence);

    assert!(matches!(
        engine.reset_employee_month(1, 2026, 0),
        Err(EngineError::Validation(_))
    ));
    assert!(matches!(
        engine.reset_employee_month(1, 2026, 13),
        Err(EngineError::Validation(_))
    ));
}

#[test]
fn test_reset_day_and_employee_all() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let bob = persistence.insert_employee("Bob", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);
    engine.assign("2026-09-01", shift_id, alice, "supervisor").unwrap();
    engine.assign("2026-09-01", shift_id, bob, "supervisor").unwrap();
    engine.assign("2026-09-02", shift_id, alice, "supervisor").unwrap();

    assert_eq!(engine.reset_day("2026-09-01").unwrap(), 2);
    assert_eq!(engine.reset_day("2026-09-01").unwrap(), 0);

    assert_eq!(engine.reset_employee_all(alice).unwrap(), 1);
    assert_eq!(engine.reset_employee_all(alice).unwrap(), 0);
}

#[test]
fn test_reset_month_clears_whole_month() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let shift_id = seed_shift(&mut persistence, "Morning", "07:00", 5);

    let mut engine = AssignmentEngine::new(&mut persistence);
    // February of a leap year: the month window must reach the 29th
    engine.assign("2024-02-29", shift_id, alice, "supervisor").unwrap();
    engine.assign("2024-03-01", shift_id, alice, "supervisor").unwrap();

    assert_eq!(engine.reset_month(2024, 2).unwrap(), 1);
    assert_eq!(engine.list(&AssignmentFilter::default()).unwrap().len(), 1);
}
