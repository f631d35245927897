// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for shift catalog persistence operations.

use crate::tests::{create_test_employee, create_test_persistence, create_test_shift};
use crate::{PersistenceError, ShiftChangeset};

#[test]
fn test_create_shift_returns_stored_record() {
    let mut persistence = create_test_persistence();

    let shift_id = create_test_shift(&mut persistence, "Morning", "07:00", "15:00");

    let shift = persistence.get_shift(shift_id).unwrap().unwrap();
    assert_eq!(shift.name, "Morning");
    assert_eq!(shift.start_time, "07:00");
    assert_eq!(shift.end_time, "15:00");
    assert_eq!(shift.min_members, 3);
    assert_eq!(shift.max_members, 5);
}

#[test]
fn test_get_shift_returns_none_for_unknown_id() {
    let mut persistence = create_test_persistence();

    assert!(persistence.get_shift(999).unwrap().is_none());
}

#[test]
fn test_list_shifts_orders_by_window_start() {
    let mut persistence = create_test_persistence();

    create_test_shift(&mut persistence, "Night", "23:00", "07:00");
    create_test_shift(&mut persistence, "Morning", "07:00", "15:00");
    create_test_shift(&mut persistence, "Evening", "15:00", "23:00");

    let shifts = persistence.list_shifts().unwrap();
    let names: Vec<&str> = shifts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Morning", "Evening", "Night"]);
}

#[test]
fn test_update_shift_applies_partial_changeset() {
    let mut persistence = create_test_persistence();

    let shift_id = create_test_shift(&mut persistence, "Morning", "07:00", "15:00");

    let changeset = ShiftChangeset {
        name: Some(String::from("Early")),
        max_members: Some(7),
        ..Default::default()
    };
    let updated = persistence.update_shift(shift_id, &changeset).unwrap();

    assert_eq!(updated.name, "Early");
    assert_eq!(updated.max_members, 7);
    // Untouched fields survive
    assert_eq!(updated.start_time, "07:00");
    assert_eq!(updated.min_members, 3);
}

#[test]
fn test_update_shift_with_empty_changeset_returns_current_record() {
    let mut persistence = create_test_persistence();

    let shift_id = create_test_shift(&mut persistence, "Morning", "07:00", "15:00");

    let unchanged = persistence
        .update_shift(shift_id, &ShiftChangeset::default())
        .unwrap();
    assert_eq!(unchanged.name, "Morning");
}

#[test]
fn test_update_shift_fails_for_unknown_id() {
    let mut persistence = create_test_persistence();

    let changeset = ShiftChangeset {
        name: Some(String::from("Ghost")),
        ..Default::default()
    };
    let result = persistence.update_shift(999, &changeset);
    assert_eq!(result, Err(PersistenceError::ShiftNotFound(999)));
}

#[test]
fn test_delete_shift_succeeds_when_not_referenced() {
    let mut persistence = create_test_persistence();

    let shift_id = create_test_shift(&mut persistence, "Morning", "07:00", "15:00");
    persistence.delete_shift(shift_id).unwrap();

    assert!(persistence.get_shift(shift_id).unwrap().is_none());
}

#[test]
fn test_delete_shift_fails_when_assignments_reference_it() {
    let mut persistence = create_test_persistence();

    let shift_id = create_test_shift(&mut persistence, "Morning", "07:00", "15:00");
    let employee_id = create_test_employee(&mut persistence, "Alice");
    persistence
        .create_assignment("2026-09-01", shift_id, employee_id, "test-actor")
        .unwrap();

    let result = persistence.delete_shift(shift_id);
    assert_eq!(result, Err(PersistenceError::ShiftReferenced { shift_id }));

    // The shift is still there
    assert!(persistence.get_shift(shift_id).unwrap().is_some());
}

#[test]
fn test_delete_shift_fails_for_unknown_id() {
    let mut persistence = create_test_persistence();

    let result = persistence.delete_shift(999);
    assert_eq!(result, Err(PersistenceError::ShiftNotFound(999)));
}
