// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod engine_tests;
mod ledger_tests;

use shift_roster_persistence::Persistence;

use crate::{NewExclusion, NewShift};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_shift(name: &str, start: &str, end: &str) -> NewShift {
    NewShift {
        name: String::from(name),
        name_ar: format!("{name} (ar)"),
        start_time: String::from(start),
        end_time: String::from(end),
        min_members: None,
        max_members: None,
    }
}

pub fn create_test_exclusion(employee_id: i64, date: &str) -> NewExclusion {
    NewExclusion {
        employee_id,
        date: String::from(date),
        reason: String::from("Annual leave"),
        reason_ar: None,
        note: None,
        created_by: String::from("test-actor"),
    }
}
