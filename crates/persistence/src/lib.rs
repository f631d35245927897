// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the shift roster.
//!
//! This crate stores the shift catalog, the assignment roster, the
//! availability ledger, and the employee directory. It is built on Diesel
//! over `SQLite`.
//!
//! ## Guarded writes
//!
//! Every write with a precondition (seating an assignment, recording an
//! exclusion, deleting a shift, the reassignment workflow) runs its checks
//! and its writes inside a single immediate transaction, so concurrent
//! writers observe each other's completed writes, never a half-applied one.
//!
//! ## Testing
//!
//! Tests run against in-memory `SQLite` databases. Each `new_in_memory()`
//! call receives a unique shared-memory database via an atomic counter, so
//! tests are isolated without external infrastructure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    AssignmentChangeset, AssignmentRecord, AssignmentView, EmployeeRecord, ExclusionChangeset,
    ExclusionRecord, ExclusionView, NewExclusionRow, NewShiftRow, ShiftChangeset, ShiftRecord,
};
pub use error::PersistenceError;
pub use mutations::reassignment::{AbsenceDetails, ReassignmentOutcome, select_replacement};
pub use queries::assignments::AssignmentQuery;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the shift roster store.
///
/// Owns a single `SQLite` connection. Construction runs migrations and
/// verifies that foreign key enforcement is active.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via `Diesel`.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Employee Directory
    // ========================================================================

    /// Inserts a department and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_department(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::directory::insert_department(&mut self.conn, name)
    }

    /// Inserts an employee and returns their ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_employee(
        &mut self,
        name: &str,
        department_id: Option<i64>,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::insert_employee(&mut self.conn, name, department_id)
    }

    /// Retrieves an employee by ID, with the department name resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the
    /// employee is not found.
    pub fn get_employee(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<EmployeeRecord>, PersistenceError> {
        queries::directory::get_employee(&mut self.conn, employee_id)
    }

    /// Lists all employees, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self) -> Result<Vec<EmployeeRecord>, PersistenceError> {
        queries::directory::list_employees(&mut self.conn)
    }

    // ========================================================================
    // Shift Catalog
    // ========================================================================

    /// Creates a shift and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_shift(
        &mut self,
        new_shift: &NewShiftRow,
    ) -> Result<ShiftRecord, PersistenceError> {
        mutations::shifts::create_shift(&mut self.conn, new_shift)
    }

    /// Retrieves a shift by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the shift
    /// is not found.
    pub fn get_shift(&mut self, shift_id: i64) -> Result<Option<ShiftRecord>, PersistenceError> {
        queries::shifts::get_shift(&mut self.conn, shift_id)
    }

    /// Lists all shifts, ordered by window start then name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shifts(&mut self) -> Result<Vec<ShiftRecord>, PersistenceError> {
        queries::shifts::list_shifts(&mut self.conn)
    }

    /// Applies a partial update to a shift and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `ShiftNotFound` if the shift does not exist.
    pub fn update_shift(
        &mut self,
        shift_id: i64,
        changeset: &ShiftChangeset,
    ) -> Result<ShiftRecord, PersistenceError> {
        mutations::shifts::update_shift(&mut self.conn, shift_id, changeset)
    }

    /// Deletes a shift if no assignments reference it.
    ///
    /// # Errors
    ///
    /// Returns `ShiftReferenced` if assignments still hold the shift, or
    /// `ShiftNotFound` if the shift does not exist.
    pub fn delete_shift(&mut self, shift_id: i64) -> Result<(), PersistenceError> {
        mutations::shifts::delete_shift(&mut self.conn, shift_id)
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Seats an employee into a shift on a date and returns the stored view.
    ///
    /// The existence, duplicate, availability, and capacity checks run in
    /// the same immediate transaction as the insert.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound`, `ShiftNotFound`, `DuplicateAssignment`,
    /// `EmployeeUnavailable`, or `ShiftAtCapacity` when a check fails.
    pub fn create_assignment(
        &mut self,
        date: &str,
        shift_id: i64,
        employee_id: i64,
        assigned_by: &str,
    ) -> Result<AssignmentView, PersistenceError> {
        mutations::assignments::create_assignment(
            &mut self.conn,
            date,
            shift_id,
            employee_id,
            assigned_by,
        )
    }

    /// Retrieves a single assignment by ID, joined for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the
    /// assignment is not found.
    pub fn get_assignment(
        &mut self,
        assignment_id: i64,
    ) -> Result<Option<AssignmentView>, PersistenceError> {
        queries::assignments::get_assignment(&mut self.conn, assignment_id)
    }

    /// Lists assignments matching the given filter, joined for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_assignments(
        &mut self,
        filter: &AssignmentQuery,
    ) -> Result<Vec<AssignmentView>, PersistenceError> {
        queries::assignments::list_assignments(&mut self.conn, filter)
    }

    /// Finds the employee's assignment on a given date, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_assignment_for_employee_on_date(
        &mut self,
        employee_id: i64,
        date: &str,
    ) -> Result<Option<AssignmentRecord>, PersistenceError> {
        queries::assignments::find_for_employee_on_date(&mut self.conn, employee_id, date)
    }

    /// Counts assigned-status members holding a shift on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_assigned_for_shift(
        &mut self,
        shift_id: i64,
        date: &str,
    ) -> Result<i64, PersistenceError> {
        queries::assignments::count_assigned_for_shift(&mut self.conn, shift_id, date)
    }

    /// Applies a partial update to an assignment and returns the updated view.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentNotFound` if the assignment does not exist.
    pub fn update_assignment(
        &mut self,
        assignment_id: i64,
        changeset: &AssignmentChangeset,
    ) -> Result<AssignmentView, PersistenceError> {
        mutations::assignments::update_assignment(&mut self.conn, assignment_id, changeset)
    }

    /// Deletes an assignment, vacating its seat.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentNotFound` if the assignment does not exist.
    pub fn delete_assignment(&mut self, assignment_id: i64) -> Result<(), PersistenceError> {
        mutations::assignments::delete_assignment(&mut self.conn, assignment_id)
    }

    /// Deletes every assigned-status assignment on a date. Returns the
    /// number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_assignments_on_date(&mut self, date: &str) -> Result<usize, PersistenceError> {
        mutations::assignments::delete_on_date(&mut self.conn, date)
    }

    /// Deletes an employee's assignments in an inclusive date range. Returns
    /// the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_assignments_for_employee_in_range(
        &mut self,
        employee_id: i64,
        start_date: &str,
        end_date: &str,
    ) -> Result<usize, PersistenceError> {
        mutations::assignments::delete_for_employee_in_range(
            &mut self.conn,
            employee_id,
            start_date,
            end_date,
        )
    }

    /// Deletes every assigned-status assignment an employee holds. Returns
    /// the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_assignments_for_employee(
        &mut self,
        employee_id: i64,
    ) -> Result<usize, PersistenceError> {
        mutations::assignments::delete_for_employee(&mut self.conn, employee_id)
    }

    /// Deletes every assignment in an inclusive date range. Returns the
    /// number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_assignments_in_range(
        &mut self,
        start_date: &str,
        end_date: &str,
    ) -> Result<usize, PersistenceError> {
        mutations::assignments::delete_in_range(&mut self.conn, start_date, end_date)
    }

    // ========================================================================
    // Availability Exclusions
    // ========================================================================

    /// Records an availability exclusion and returns the stored view.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the employee does not exist, or
    /// `DuplicateExclusion` if the employee is already excluded on the date.
    pub fn create_exclusion(
        &mut self,
        new_exclusion: &NewExclusionRow,
    ) -> Result<ExclusionView, PersistenceError> {
        mutations::exclusions::create_exclusion(&mut self.conn, new_exclusion)
    }

    /// Retrieves a single exclusion by ID, joined for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the
    /// exclusion is not found.
    pub fn get_exclusion(
        &mut self,
        exclusion_id: i64,
    ) -> Result<Option<ExclusionView>, PersistenceError> {
        queries::exclusions::get_exclusion(&mut self.conn, exclusion_id)
    }

    /// Lists exclusions, optionally filtered by employee and/or date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_exclusions(
        &mut self,
        employee_id: Option<i64>,
        date: Option<&str>,
    ) -> Result<Vec<ExclusionView>, PersistenceError> {
        queries::exclusions::list_exclusions(&mut self.conn, employee_id, date)
    }

    /// Checks whether the employee is excluded on a given date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_employee_excluded(
        &mut self,
        employee_id: i64,
        date: &str,
    ) -> Result<bool, PersistenceError> {
        queries::exclusions::is_employee_excluded(&mut self.conn, employee_id, date)
    }

    /// Applies a partial update to an exclusion and returns the updated view.
    ///
    /// # Errors
    ///
    /// Returns `ExclusionNotFound` if the exclusion does not exist.
    pub fn update_exclusion(
        &mut self,
        exclusion_id: i64,
        changeset: &ExclusionChangeset,
    ) -> Result<ExclusionView, PersistenceError> {
        mutations::exclusions::update_exclusion(&mut self.conn, exclusion_id, changeset)
    }

    /// Deletes an exclusion, restoring the employee's availability.
    ///
    /// # Errors
    ///
    /// Returns `ExclusionNotFound` if the exclusion does not exist.
    pub fn delete_exclusion(&mut self, exclusion_id: i64) -> Result<(), PersistenceError> {
        mutations::exclusions::delete_exclusion(&mut self.conn, exclusion_id)
    }

    // ========================================================================
    // Reassignment
    // ========================================================================

    /// Runs the full reassignment workflow for an employee on a date.
    ///
    /// Locates the employee's assigned-status assignment, records (or keeps)
    /// an availability exclusion, vacates the seat, and seats the first
    /// eligible pool candidate into the vacated shift. All steps run in one
    /// immediate transaction.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentNotFoundForDate` if the employee holds no
    /// assigned-status assignment on the date.
    pub fn reassign(
        &mut self,
        employee_id: i64,
        date: &str,
        absence: &AbsenceDetails,
        pool: &[i64],
        actor: &str,
    ) -> Result<ReassignmentOutcome, PersistenceError> {
        mutations::reassignment::reassign(&mut self.conn, employee_id, date, absence, pool, actor)
    }
}
