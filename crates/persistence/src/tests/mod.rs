// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod reset_tests;
mod shift_tests;

use crate::{NewExclusionRow, NewShiftRow, Persistence};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_shift(persistence: &mut Persistence, name: &str, start: &str, end: &str) -> i64 {
    persistence
        .create_shift(&NewShiftRow {
            name: String::from(name),
            name_ar: format!("{name} (ar)"),
            start_time: String::from(start),
            end_time: String::from(end),
            min_members: 3,
            max_members: 5,
        })
        .unwrap()
        .shift_id
}

pub fn create_test_employee(persistence: &mut Persistence, name: &str) -> i64 {
    persistence.insert_employee(name, None).unwrap()
}

pub fn create_test_exclusion(employee_id: i64, date: &str) -> NewExclusionRow {
    NewExclusionRow {
        employee_id,
        date: String::from(date),
        reason: String::from("Annual leave"),
        reason_ar: None,
        note: None,
        created_by: String::from("test-actor"),
    }
}
