// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the bulk reset deletes.
//!
//! Every reset is idempotent: clearing an already-empty scope succeeds and
//! reports zero rows.

use crate::Persistence;
use crate::tests::{create_test_employee, create_test_persistence, create_test_shift};

/// Seeds two employees with assignments across September and October 2026.
///
/// Returns `(alice, bob)`. Alice holds 2026-09-01, 2026-09-15, 2026-10-01;
/// Bob holds 2026-09-01 and 2026-09-20.
fn seed_roster(persistence: &mut Persistence) -> (i64, i64) {
    let shift_id = create_test_shift(persistence, "Morning", "07:00", "15:00");
    let alice = create_test_employee(persistence, "Alice");
    let bob = create_test_employee(persistence, "Bob");

    for date in ["2026-09-01", "2026-09-15", "2026-10-01"] {
        persistence
            .create_assignment(date, shift_id, alice, "test-actor")
            .unwrap();
    }
    for date in ["2026-09-01", "2026-09-20"] {
        persistence
            .create_assignment(date, shift_id, bob, "test-actor")
            .unwrap();
    }

    (alice, bob)
}

fn total_assignments(persistence: &mut Persistence) -> usize {
    persistence
        .list_assignments(&crate::AssignmentQuery::default())
        .unwrap()
        .len()
}

#[test]
fn test_delete_assignments_on_date_clears_one_day() {
    let mut persistence = create_test_persistence();
    seed_roster(&mut persistence);

    let deleted = persistence.delete_assignments_on_date("2026-09-01").unwrap();
    assert_eq!(deleted, 2);
    assert_eq!(total_assignments(&mut persistence), 3);

    // Repeating the reset deletes nothing and still succeeds
    let deleted = persistence.delete_assignments_on_date("2026-09-01").unwrap();
    assert_eq!(deleted, 0);
}

#[test]
fn test_delete_assignments_for_employee_in_range_spares_others() {
    let mut persistence = create_test_persistence();
    let (alice, _bob) = seed_roster(&mut persistence);

    let deleted = persistence
        .delete_assignments_for_employee_in_range(alice, "2026-09-01", "2026-09-30")
        .unwrap();
    assert_eq!(deleted, 2);

    // Alice keeps October; Bob keeps everything
    assert_eq!(total_assignments(&mut persistence), 3);
}

#[test]
fn test_delete_assignments_for_employee_clears_full_history() {
    let mut persistence = create_test_persistence();
    let (alice, _bob) = seed_roster(&mut persistence);

    let deleted = persistence.delete_assignments_for_employee(alice).unwrap();
    assert_eq!(deleted, 3);
    assert_eq!(total_assignments(&mut persistence), 2);

    let deleted = persistence.delete_assignments_for_employee(alice).unwrap();
    assert_eq!(deleted, 0);
}

#[test]
fn test_delete_assignments_in_range_is_inclusive_on_both_ends() {
    let mut persistence = create_test_persistence();
    seed_roster(&mut persistence);

    let deleted = persistence
        .delete_assignments_in_range("2026-09-15", "2026-09-20")
        .unwrap();
    assert_eq!(deleted, 2);
    assert_eq!(total_assignments(&mut persistence), 3);
}

#[test]
fn test_resets_on_empty_store_report_zero() {
    let mut persistence = create_test_persistence();

    assert_eq!(
        persistence.delete_assignments_on_date("2026-09-01").unwrap(),
        0
    );
    assert_eq!(persistence.delete_assignments_for_employee(1).unwrap(), 0);
    assert_eq!(
        persistence
            .delete_assignments_in_range("2026-09-01", "2026-09-30")
            .unwrap(),
        0
    );
}
