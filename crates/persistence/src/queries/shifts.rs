// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift catalog queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::ShiftRecord;
use crate::diesel_schema::{assignments, shifts};
use crate::error::PersistenceError;

/// Retrieves a shift by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the shift is not found.
pub fn get_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
) -> Result<Option<ShiftRecord>, PersistenceError> {
    debug!("Looking up shift by ID: {}", shift_id);

    let result: Result<ShiftRecord, diesel::result::Error> = shifts::table
        .filter(shifts::shift_id.eq(shift_id))
        .select((
            shifts::shift_id,
            shifts::name,
            shifts::name_ar,
            shifts::start_time,
            shifts::end_time,
            shifts::min_members,
            shifts::max_members,
        ))
        .first(conn);

    match result {
        Ok(record) => Ok(Some(record)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all shifts, ordered by window start then name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_shifts(conn: &mut SqliteConnection) -> Result<Vec<ShiftRecord>, PersistenceError> {
    debug!("Listing all shifts");

    let rows: Vec<ShiftRecord> = shifts::table
        .select((
            shifts::shift_id,
            shifts::name,
            shifts::name_ar,
            shifts::start_time,
            shifts::end_time,
            shifts::min_members,
            shifts::max_members,
        ))
        .order_by((shifts::start_time.asc(), shifts::name.asc()))
        .load(conn)?;

    Ok(rows)
}

/// Checks if a shift is referenced by any assignments.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_shift_referenced(
    conn: &mut SqliteConnection,
    shift_id: i64,
) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    debug!("Checking if shift ID {} is referenced by assignments", shift_id);

    let count: i64 = assignments::table
        .filter(assignments::shift_id.eq(shift_id))
        .select(count(assignments::assignment_id))
        .first(conn)?;

    Ok(count > 0)
}
