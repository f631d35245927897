// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries.
//!
//! Listing queries return `AssignmentView` rows (joined with employee,
//! department, and shift for display). The guard checks used by the
//! assignment engine (`find_for_employee_on_date`, `count_assigned_for_shift`)
//! return raw rows and counts so they can run inside a write transaction.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{AssignmentRecord, AssignmentView};
use crate::diesel_schema::{assignments, departments, employees, shifts};
use crate::error::PersistenceError;
use shift_roster_domain::AssignmentStatus;

/// Storage-level filter for assignment listings.
///
/// Month and year filters from the engine are resolved to an inclusive
/// `[start_date, end_date]` window before reaching this layer. Dates are
/// ISO 8601 strings, so lexicographic comparison matches chronological order.
#[derive(Debug, Clone, Default)]
pub struct AssignmentQuery {
    /// Restrict to a single employee.
    pub employee_id: Option<i64>,
    /// Inclusive lower bound on the assignment date.
    pub start_date: Option<String>,
    /// Inclusive upper bound on the assignment date.
    pub end_date: Option<String>,
}

/// The joined select clause shared by all `AssignmentView` queries.
macro_rules! assignment_view_select {
    () => {
        (
            assignments::assignment_id,
            assignments::date,
            assignments::status,
            assignments::assigned_by,
            assignments::created_at,
            employees::employee_id,
            employees::name,
            departments::name.nullable(),
            shifts::shift_id,
            shifts::name,
            shifts::name_ar,
            shifts::start_time,
            shifts::end_time,
        )
    };
}

/// Retrieves a single assignment by ID, joined for display.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the assignment is not found.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<Option<AssignmentView>, PersistenceError> {
    debug!("Looking up assignment by ID: {}", assignment_id);

    let result: Result<AssignmentView, diesel::result::Error> = assignments::table
        .inner_join(employees::table.left_join(departments::table))
        .inner_join(shifts::table)
        .filter(assignments::assignment_id.eq(assignment_id))
        .select(assignment_view_select!())
        .first(conn);

    match result {
        Ok(view) => Ok(Some(view)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists assignments matching the given filter, joined for display.
///
/// Results are ordered by date, then shift window start, then employee name,
/// so a day's roster reads top-to-bottom in shift order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `filter` - The storage-level filter to apply
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments(
    conn: &mut SqliteConnection,
    filter: &AssignmentQuery,
) -> Result<Vec<AssignmentView>, PersistenceError> {
    debug!("Listing assignments with filter: {:?}", filter);

    let mut query = assignments::table
        .inner_join(employees::table.left_join(departments::table))
        .inner_join(shifts::table)
        .select(assignment_view_select!())
        .into_boxed();

    if let Some(employee_id) = filter.employee_id {
        query = query.filter(assignments::employee_id.eq(employee_id));
    }
    if let Some(start_date) = &filter.start_date {
        query = query.filter(assignments::date.ge(start_date.clone()));
    }
    if let Some(end_date) = &filter.end_date {
        query = query.filter(assignments::date.le(end_date.clone()));
    }

    let rows: Vec<AssignmentView> = query
        .order_by((
            assignments::date.asc(),
            shifts::start_time.asc(),
            employees::name.asc(),
        ))
        .load(conn)?;

    Ok(rows)
}

/// Finds the employee's assignment on a given date, if any.
///
/// The one-assignment-per-employee-per-date rule means at most one row can
/// match; this is the duplicate-assignment guard.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The employee ID
/// * `date` - The date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee holds no assignment on the date.
pub fn find_for_employee_on_date(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: &str,
) -> Result<Option<AssignmentRecord>, PersistenceError> {
    let result: Result<AssignmentRecord, diesel::result::Error> = assignments::table
        .filter(assignments::employee_id.eq(employee_id))
        .filter(assignments::date.eq(date))
        .select((
            assignments::assignment_id,
            assignments::date,
            assignments::employee_id,
            assignments::shift_id,
            assignments::status,
            assignments::assigned_by,
            assignments::created_at,
        ))
        .first(conn);

    match result {
        Ok(record) => Ok(Some(record)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Counts assigned-status members holding a shift on a date.
///
/// This is the capacity guard: the count is compared against the shift's
/// `max_members` before a new member is seated.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift ID
/// * `date` - The date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_assigned_for_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
    date: &str,
) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = assignments::table
        .filter(assignments::shift_id.eq(shift_id))
        .filter(assignments::date.eq(date))
        .filter(assignments::status.eq(AssignmentStatus::Assigned.as_str()))
        .select(count(assignments::assignment_id))
        .first(conn)?;

    Ok(count)
}

/// Lists the employee IDs holding any assignment on a date.
///
/// Used by the reassignment workflow to skip pool candidates who are
/// already seated somewhere that day.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn assigned_employee_ids_on_date(
    conn: &mut SqliteConnection,
    date: &str,
) -> Result<Vec<i64>, PersistenceError> {
    let ids: Vec<i64> = assignments::table
        .filter(assignments::date.eq(date))
        .select(assignments::employee_id)
        .load(conn)?;

    Ok(ids)
}
