// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shift_roster::Persistence;

use crate::{CreateAssignmentRequest, CreateExclusionRequest, CreateShiftRequest};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_employee(persistence: &mut Persistence, name: &str) -> i64 {
    persistence.insert_employee(name, None).unwrap()
}

pub fn create_shift_request(name: &str, start: &str, end: &str) -> CreateShiftRequest {
    CreateShiftRequest {
        name: String::from(name),
        name_ar: format!("{name} (ar)"),
        start_time: String::from(start),
        end_time: String::from(end),
        min_members: None,
        max_members: None,
    }
}

pub fn create_assignment_request(
    date: &str,
    shift_id: i64,
    employee_id: i64,
) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        date: String::from(date),
        shift_id,
        employee_id,
        assigned_by: String::from("scheduler-1"),
    }
}

pub fn create_exclusion_request(employee_id: i64, date: &str) -> CreateExclusionRequest {
    CreateExclusionRequest {
        employee_id,
        date: String::from(date),
        reason: String::from("Annual leave"),
        reason_ar: None,
        note: None,
        created_by: String::from("scheduler-1"),
    }
}
