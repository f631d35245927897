// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability exclusion queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{ExclusionRecord, ExclusionView};
use crate::diesel_schema::{availability_exclusions, departments, employees};
use crate::error::PersistenceError;

/// The joined select clause shared by all `ExclusionView` queries.
macro_rules! exclusion_view_select {
    () => {
        (
            availability_exclusions::exclusion_id,
            availability_exclusions::date,
            availability_exclusions::reason,
            availability_exclusions::reason_ar,
            availability_exclusions::note,
            availability_exclusions::created_by,
            availability_exclusions::created_at,
            employees::employee_id,
            employees::name,
            departments::name.nullable(),
        )
    };
}

/// Retrieves a single exclusion by ID, joined for display.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `exclusion_id` - The exclusion ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the exclusion is not found.
pub fn get_exclusion(
    conn: &mut SqliteConnection,
    exclusion_id: i64,
) -> Result<Option<ExclusionView>, PersistenceError> {
    debug!("Looking up exclusion by ID: {}", exclusion_id);

    let result: Result<ExclusionView, diesel::result::Error> = availability_exclusions::table
        .inner_join(employees::table.left_join(departments::table))
        .filter(availability_exclusions::exclusion_id.eq(exclusion_id))
        .select(exclusion_view_select!())
        .first(conn);

    match result {
        Ok(view) => Ok(Some(view)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists exclusions, optionally filtered by employee and/or date.
///
/// Results are ordered by date, then employee name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_id` - Restrict to a single employee, if set
/// * `date` - Restrict to a single date (ISO 8601), if set
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_exclusions(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
    date: Option<&str>,
) -> Result<Vec<ExclusionView>, PersistenceError> {
    debug!(
        "Listing exclusions (employee_id: {:?}, date: {:?})",
        employee_id, date
    );

    let mut query = availability_exclusions::table
        .inner_join(employees::table.left_join(departments::table))
        .select(exclusion_view_select!())
        .into_boxed();

    if let Some(employee_id) = employee_id {
        query = query.filter(availability_exclusions::employee_id.eq(employee_id));
    }
    if let Some(date) = date {
        query = query.filter(availability_exclusions::date.eq(date.to_string()));
    }

    let rows: Vec<ExclusionView> = query
        .order_by((availability_exclusions::date.asc(), employees::name.asc()))
        .load(conn)?;

    Ok(rows)
}

/// Finds the employee's exclusion on a given date, if any.
///
/// Exclusions are unique per employee per date, so at most one row can match.
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
/// Returns `Ok(None)` if no exclusion exists for the employee on the date.
pub fn find_for_employee_on_date(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: &str,
) -> Result<Option<ExclusionRecord>, PersistenceError> {
    let result: Result<ExclusionRecord, diesel::result::Error> = availability_exclusions::table
        .filter(availability_exclusions::employee_id.eq(employee_id))
        .filter(availability_exclusions::date.eq(date))
        .select((
            availability_exclusions::exclusion_id,
            availability_exclusions::employee_id,
            availability_exclusions::date,
            availability_exclusions::reason,
            availability_exclusions::reason_ar,
            availability_exclusions::note,
            availability_exclusions::created_by,
            availability_exclusions::created_at,
        ))
        .first(conn);

    match result {
        Ok(record) => Ok(Some(record)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Checks whether the employee is excluded on a given date.
///
/// This is the availability guard consulted before seating an assignment.
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
pub fn is_employee_excluded(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: &str,
) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = availability_exclusions::table
        .filter(availability_exclusions::employee_id.eq(employee_id))
        .filter(availability_exclusions::date.eq(date))
        .select(count(availability_exclusions::exclusion_id))
        .first(conn)?;

    Ok(count > 0)
}

/// Lists the employee IDs excluded on a date.
///
/// Used by the reassignment workflow to skip pool candidates who are
/// unavailable that day.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn excluded_employee_ids_on_date(
    conn: &mut SqliteConnection,
    date: &str,
) -> Result<Vec<i64>, PersistenceError> {
    let ids: Vec<i64> = availability_exclusions::table
        .filter(availability_exclusions::date.eq(date))
        .select(availability_exclusions::employee_id)
        .load(conn)?;

    Ok(ids)
}
