// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee directory queries.
//!
//! The directory is a read-mostly surface: the engine consults it to verify
//! that an employee exists before assigning, and to resolve display names
//! for joined views.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::EmployeeRecord;
use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;

/// Retrieves an employee by ID, with the department name resolved.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The employee ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<EmployeeRecord>, PersistenceError> {
    debug!("Looking up employee by ID: {}", employee_id);

    let result: Result<EmployeeRecord, diesel::result::Error> = employees::table
        .left_join(departments::table)
        .filter(employees::employee_id.eq(employee_id))
        .select((
            employees::employee_id,
            employees::name,
            departments::name.nullable(),
        ))
        .first(conn);

    match result {
        Ok(record) => Ok(Some(record)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Checks whether an employee ID exists in the directory.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - The employee ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employee_exists(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(count(employees::employee_id))
        .first(conn)?;

    Ok(count > 0)
}

/// Lists all employees, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(
    conn: &mut SqliteConnection,
) -> Result<Vec<EmployeeRecord>, PersistenceError> {
    debug!("Listing all employees");

    let rows: Vec<EmployeeRecord> = employees::table
        .left_join(departments::table)
        .select((
            employees::employee_id,
            employees::name,
            departments::name.nullable(),
        ))
        .order_by(employees::name.asc())
        .load(conn)?;

    Ok(rows)
}
