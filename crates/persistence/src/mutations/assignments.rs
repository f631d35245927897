// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment mutations.
//!
//! `create_assignment` is the guarded write at the heart of the store: the
//! existence, duplicate, availability, and capacity checks run in the same
//! immediate transaction as the insert, so two concurrent writers cannot both
//! seat the last slot of a shift or double-book an employee.
//!
//! The bulk reset deletes are idempotent: deleting an empty scope succeeds
//! and reports zero rows.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::data_models::{AssignmentChangeset, AssignmentView, ShiftRecord};
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;
use crate::queries::assignments::{count_assigned_for_shift, find_for_employee_on_date, get_assignment};
use crate::queries::directory::employee_exists;
use crate::queries::exclusions::is_employee_excluded;
use crate::queries::shifts::get_shift;
use crate::sqlite::get_last_insert_rowid;
use shift_roster_domain::AssignmentStatus;

/// Seats an employee into a shift on a date and returns the stored view.
///
/// The checks run in order inside one immediate transaction:
///
/// 1. The employee must exist in the directory.
/// 2. The shift must exist in the catalog.
/// 3. The employee must not already hold an assignment on the date.
/// 4. The employee must not have an availability exclusion on the date.
/// 5. The shift must have an open slot (assigned members < `max_members`).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The date (ISO 8601)
/// * `shift_id` - The shift to seat into
/// * `employee_id` - The employee to seat
/// * `assigned_by` - The actor recording the assignment
///
/// # Errors
///
/// Returns `EmployeeNotFound`, `ShiftNotFound`, `DuplicateAssignment`,
/// `EmployeeUnavailable`, or `ShiftAtCapacity` when a check fails, in that
/// order of precedence.
pub fn create_assignment(
    conn: &mut SqliteConnection,
    date: &str,
    shift_id: i64,
    employee_id: i64,
    assigned_by: &str,
) -> Result<AssignmentView, PersistenceError> {
    info!(
        "Assigning employee {} to shift {} on {}",
        employee_id, shift_id, date
    );

    conn.immediate_transaction(|conn| {
        if !employee_exists(conn, employee_id)? {
            return Err(PersistenceError::EmployeeNotFound(employee_id));
        }

        let shift: ShiftRecord =
            get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id))?;

        if find_for_employee_on_date(conn, employee_id, date)?.is_some() {
            return Err(PersistenceError::DuplicateAssignment {
                employee_id,
                date: date.to_string(),
            });
        }

        if is_employee_excluded(conn, employee_id, date)? {
            return Err(PersistenceError::EmployeeUnavailable {
                employee_id,
                date: date.to_string(),
            });
        }

        let held: i64 = count_assigned_for_shift(conn, shift_id, date)?;
        if held >= i64::from(shift.max_members) {
            return Err(PersistenceError::ShiftAtCapacity {
                shift_id,
                date: date.to_string(),
                max_members: shift.max_members,
            });
        }

        insert_assignment_row(conn, date, shift_id, employee_id, assigned_by)
    })
}

/// Inserts an assignment row and loads the joined view.
///
/// Callers are responsible for running the guard checks first, inside the
/// same transaction.
pub(crate) fn insert_assignment_row(
    conn: &mut SqliteConnection,
    date: &str,
    shift_id: i64,
    employee_id: i64,
    assigned_by: &str,
) -> Result<AssignmentView, PersistenceError> {
    diesel::insert_into(assignments::table)
        .values((
            assignments::date.eq(date),
            assignments::employee_id.eq(employee_id),
            assignments::shift_id.eq(shift_id),
            assignments::status.eq(AssignmentStatus::Assigned.as_str()),
            assignments::assigned_by.eq(assigned_by),
        ))
        .execute(conn)?;

    let assignment_id: i64 = get_last_insert_rowid(conn)?;

    info!(assignment_id, "Assignment created");
    get_assignment(conn, assignment_id)?.ok_or(PersistenceError::AssignmentNotFound(assignment_id))
}

/// Applies a partial update to an assignment and returns the updated view.
///
/// A changeset with no fields set leaves the row untouched and returns the
/// current view.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
/// * `changeset` - The fields to change; `None` fields are left unchanged
///
/// # Errors
///
/// Returns `AssignmentNotFound` if the assignment does not exist, or an
/// error if the update fails.
pub fn update_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
    changeset: &AssignmentChangeset,
) -> Result<AssignmentView, PersistenceError> {
    debug!("Updating assignment {}: {:?}", assignment_id, changeset);

    // Diesel rejects an empty changeset, so short-circuit to a plain read.
    if changeset.is_empty() {
        return get_assignment(conn, assignment_id)?
            .ok_or(PersistenceError::AssignmentNotFound(assignment_id));
    }

    let rows_affected: usize = diesel::update(assignments::table)
        .filter(assignments::assignment_id.eq(assignment_id))
        .set(changeset)
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AssignmentNotFound(assignment_id));
    }

    get_assignment(conn, assignment_id)?
        .ok_or(PersistenceError::AssignmentNotFound(assignment_id))
}

/// Deletes an assignment, vacating its seat.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
///
/// # Errors
///
/// Returns `AssignmentNotFound` if the assignment does not exist.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<(), PersistenceError> {
    info!("Deleting assignment: {}", assignment_id);

    let rows_affected: usize = diesel::delete(assignments::table)
        .filter(assignments::assignment_id.eq(assignment_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AssignmentNotFound(assignment_id));
    }

    info!(assignment_id, "Assignment deleted");
    Ok(())
}

/// Deletes every assigned-status assignment on a date. Returns the number of
/// rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_on_date(conn: &mut SqliteConnection, date: &str) -> Result<usize, PersistenceError> {
    info!("Clearing all assignments on {}", date);

    let deleted: usize = diesel::delete(assignments::table)
        .filter(assignments::date.eq(date))
        .filter(assignments::status.eq(AssignmentStatus::Assigned.as_str()))
        .execute(conn)?;

    info!(deleted, "Day cleared");
    Ok(deleted)
}

/// Deletes an employee's assignments in an inclusive date range. Returns the
/// number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_for_employee_in_range(
    conn: &mut SqliteConnection,
    employee_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<usize, PersistenceError> {
    info!(
        "Clearing assignments for employee {} from {} to {}",
        employee_id, start_date, end_date
    );

    let deleted: usize = diesel::delete(assignments::table)
        .filter(assignments::employee_id.eq(employee_id))
        .filter(assignments::date.ge(start_date))
        .filter(assignments::date.le(end_date))
        .execute(conn)?;

    info!(deleted, "Employee range cleared");
    Ok(deleted)
}

/// Deletes every assigned-status assignment an employee holds, across all
/// dates. Returns the number of rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<usize, PersistenceError> {
    info!("Clearing all assignments for employee {}", employee_id);

    let deleted: usize = diesel::delete(assignments::table)
        .filter(assignments::employee_id.eq(employee_id))
        .filter(assignments::status.eq(AssignmentStatus::Assigned.as_str()))
        .execute(conn)?;

    info!(deleted, "Employee history cleared");
    Ok(deleted)
}

/// Deletes every assignment in an inclusive date range. Returns the number of
/// rows deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_in_range(
    conn: &mut SqliteConnection,
    start_date: &str,
    end_date: &str,
) -> Result<usize, PersistenceError> {
    info!("Clearing all assignments from {} to {}", start_date, end_date);

    let deleted: usize = diesel::delete(assignments::table)
        .filter(assignments::date.ge(start_date))
        .filter(assignments::date.le(end_date))
        .execute(conn)?;

    info!(deleted, "Range cleared");
    Ok(deleted)
}
