// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row models for the roster store.
//!
//! `*Record` structs mirror raw table rows; `*View` structs are the joined
//! shapes the engine hands back to callers (employee and department names
//! resolved for display). Field order in `Queryable` structs must match the
//! select clauses in the `queries` module.

use diesel::prelude::*;

use crate::diesel_schema::{assignments, availability_exclusions, shifts};

/// An employee as seen by the core: identity, name, department for display.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct EmployeeRecord {
    /// The employee identifier.
    pub employee_id: i64,
    /// The employee's display name.
    pub name: String,
    /// The department name, if the employee belongs to one.
    pub department: Option<String>,
}

/// A shift template row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct ShiftRecord {
    /// The shift identifier.
    pub shift_id: i64,
    /// The primary display name.
    pub name: String,
    /// The Arabic display name.
    pub name_ar: String,
    /// Window start (`HH:MM` wall clock).
    pub start_time: String,
    /// Window end (`HH:MM` wall clock).
    pub end_time: String,
    /// Minimum headcount.
    pub min_members: i32,
    /// Maximum headcount (the capacity gate).
    pub max_members: i32,
}

/// A new shift row for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = shifts)]
pub struct NewShiftRow {
    pub name: String,
    pub name_ar: String,
    pub start_time: String,
    pub end_time: String,
    pub min_members: i32,
    pub max_members: i32,
}

/// Partial update for a shift row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = shifts)]
pub struct ShiftChangeset {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub min_members: Option<i32>,
    pub max_members: Option<i32>,
}

impl ShiftChangeset {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.name_ar.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.min_members.is_none()
            && self.max_members.is_none()
    }
}

/// A raw assignment row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct AssignmentRecord {
    /// The assignment identifier.
    pub assignment_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The assigned employee.
    pub employee_id: i64,
    /// The shift held.
    pub shift_id: i64,
    /// The assignment status.
    pub status: String,
    /// The actor who created the assignment.
    pub assigned_by: String,
    /// Creation timestamp (set by the store).
    pub created_at: String,
}

/// Partial update for an assignment row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = assignments)]
pub struct AssignmentChangeset {
    pub status: Option<String>,
    pub assigned_by: Option<String>,
}

impl AssignmentChangeset {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_by.is_none()
    }
}

/// An assignment joined with employee, department, and shift for display.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct AssignmentView {
    /// The assignment identifier.
    pub assignment_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The assignment status.
    pub status: String,
    /// The actor who created the assignment.
    pub assigned_by: String,
    /// Creation timestamp.
    pub created_at: String,
    /// The assigned employee.
    pub employee_id: i64,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department name, if any.
    pub department: Option<String>,
    /// The shift held.
    pub shift_id: i64,
    /// The shift's primary display name.
    pub shift_name: String,
    /// The shift's Arabic display name.
    pub shift_name_ar: String,
    /// The shift window start (`HH:MM`).
    pub shift_start_time: String,
    /// The shift window end (`HH:MM`).
    pub shift_end_time: String,
}

/// A raw availability exclusion row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct ExclusionRecord {
    /// The exclusion identifier.
    pub exclusion_id: i64,
    /// The excluded employee.
    pub employee_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The reason for the exclusion.
    pub reason: String,
    /// The Arabic reason, if provided.
    pub reason_ar: Option<String>,
    /// A free-text note, if provided.
    pub note: Option<String>,
    /// The actor who created the exclusion.
    pub created_by: String,
    /// Creation timestamp (set by the store).
    pub created_at: String,
}

/// A new availability exclusion row for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = availability_exclusions)]
pub struct NewExclusionRow {
    pub employee_id: i64,
    pub date: String,
    pub reason: String,
    pub reason_ar: Option<String>,
    pub note: Option<String>,
    pub created_by: String,
}

/// Partial update for an exclusion row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = availability_exclusions)]
pub struct ExclusionChangeset {
    pub reason: Option<String>,
    pub reason_ar: Option<String>,
    pub note: Option<String>,
}

impl ExclusionChangeset {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reason.is_none() && self.reason_ar.is_none() && self.note.is_none()
    }
}

/// An exclusion joined with employee and department for display.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct ExclusionView {
    /// The exclusion identifier.
    pub exclusion_id: i64,
    /// The calendar date (ISO 8601).
    pub date: String,
    /// The reason for the exclusion.
    pub reason: String,
    /// The Arabic reason, if provided.
    pub reason_ar: Option<String>,
    /// A free-text note, if provided.
    pub note: Option<String>,
    /// The actor who created the exclusion.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: String,
    /// The excluded employee.
    pub employee_id: i64,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department name, if any.
    pub department: Option<String>,
}
