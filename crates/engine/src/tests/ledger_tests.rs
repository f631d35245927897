// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the availability ledger.

use crate::tests::{create_test_exclusion, create_test_persistence};
use crate::{AvailabilityLedger, EngineError, ExclusionUpdate, NewExclusion};

#[test]
fn test_exclude_records_and_lists() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();

    let mut ledger = AvailabilityLedger::new(&mut persistence);
    let view = ledger.exclude(&create_test_exclusion(alice, "2026-09-01")).unwrap();
    assert_eq!(view.reason, "Annual leave");
    assert_eq!(view.employee_name, "Alice");

    let listed = ledger.list(Some(alice), Some("2026-09-01")).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].exclusion_id, view.exclusion_id);
}

#[test]
fn test_exclude_unknown_employee_is_not_found() {
    let mut persistence = create_test_persistence();
    let mut ledger = AvailabilityLedger::new(&mut persistence);

    let result = ledger.exclude(&create_test_exclusion(999, "2026-09-01"));
    assert!(matches!(result, Err(EngineError::NotFound(_))));
}

#[test]
fn test_exclude_rejects_empty_reason_and_bad_date() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let mut ledger = AvailabilityLedger::new(&mut persistence);

    let exclusion = NewExclusion {
        reason: String::from("   "),
        ..create_test_exclusion(alice, "2026-09-01")
    };
    assert!(matches!(
        ledger.exclude(&exclusion),
        Err(EngineError::Validation(_))
    ));

    let exclusion = create_test_exclusion(alice, "01/09/2026");
    assert!(matches!(
        ledger.exclude(&exclusion),
        Err(EngineError::Validation(_))
    ));
}

#[test]
fn test_exclude_twice_for_same_date_is_conflict() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let mut ledger = AvailabilityLedger::new(&mut persistence);

    ledger.exclude(&create_test_exclusion(alice, "2026-09-01")).unwrap();
    let result = ledger.exclude(&create_test_exclusion(alice, "2026-09-01"));
    assert!(matches!(result, Err(EngineError::Conflict(_))));
}

#[test]
fn test_update_rejects_empty_reason() {
    let mut persistence = create_test_persistence();
    let alice = persistence.insert_employee("Alice", None).unwrap();
    let mut ledger = AvailabilityLedger::new(&mut persistence);

    let view = ledger.exclude(&create_test_exclusion(alice, "2026-09-01")).unwrap();

    let update = ExclusionUpdate {
        reason: Some(String::new()),
        ..Default::default()
    };
    assert!(matches!(
        ledger.update(view.exclusion_id, &update),
        Err(EngineError::Validation(_))
    ));
}

#[test]
fn test_delete_unknown_exclusion_is_not_found() {
    let mut persistence = create_test_persistence();
    let mut ledger = AvailabilityLedger::new(&mut persistence);

    assert!(matches!(
        ledger.delete(999),
        Err(EngineError::NotFound(_))
    ));
}
