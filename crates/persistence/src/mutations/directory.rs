// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department and employee inserts.
//!
//! The directory is populated out-of-band (bootstrap scripts and test
//! fixtures); the scheduling surfaces only read it.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a department and returns its ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The department name
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_department(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating department: {}", name);

    diesel::insert_into(departments::table)
        .values(departments::name.eq(name))
        .execute(conn)?;

    let department_id: i64 = get_last_insert_rowid(conn)?;

    info!(department_id, "Department created");
    Ok(department_id)
}

/// Inserts an employee and returns their ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The employee's display name
/// * `department_id` - The department the employee belongs to, if any
///
/// # Errors
///
/// Returns an error if the insert fails (including a foreign key violation
/// when `department_id` does not exist).
pub fn insert_employee(
    conn: &mut SqliteConnection,
    name: &str,
    department_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    info!("Creating employee: {}", name);

    diesel::insert_into(employees::table)
        .values((
            employees::name.eq(name),
            employees::department_id.eq(department_id),
        ))
        .execute(conn)?;

    let employee_id: i64 = get_last_insert_rowid(conn)?;

    info!(employee_id, "Employee created");
    Ok(employee_id)
}
