// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift catalog mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::data_models::{NewShiftRow, ShiftChangeset, ShiftRecord};
use crate::diesel_schema::shifts;
use crate::error::PersistenceError;
use crate::queries::shifts::{get_shift, is_shift_referenced};
use crate::sqlite::get_last_insert_rowid;

/// Creates a shift and returns the stored record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_shift` - The validated shift fields to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_shift(
    conn: &mut SqliteConnection,
    new_shift: &NewShiftRow,
) -> Result<ShiftRecord, PersistenceError> {
    info!(
        "Creating shift: {} ({} - {})",
        new_shift.name, new_shift.start_time, new_shift.end_time
    );

    diesel::insert_into(shifts::table)
        .values(new_shift)
        .execute(conn)?;

    let shift_id: i64 = get_last_insert_rowid(conn)?;

    info!(shift_id, "Shift created");
    get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id))
}

/// Applies a partial update to a shift and returns the updated record.
///
/// A changeset with no fields set leaves the row untouched and returns the
/// current record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift ID
/// * `changeset` - The fields to change; `None` fields are left unchanged
///
/// # Errors
///
/// Returns `ShiftNotFound` if the shift does not exist, or an error if the
/// update fails.
pub fn update_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
    changeset: &ShiftChangeset,
) -> Result<ShiftRecord, PersistenceError> {
    debug!("Updating shift {}: {:?}", shift_id, changeset);

    // Diesel rejects an empty changeset, so short-circuit to a plain read.
    if changeset.is_empty() {
        return get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id));
    }

    let rows_affected: usize = diesel::update(shifts::table)
        .filter(shifts::shift_id.eq(shift_id))
        .set(changeset)
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::ShiftNotFound(shift_id));
    }

    get_shift(conn, shift_id)?.ok_or(PersistenceError::ShiftNotFound(shift_id))
}

/// Deletes a shift if no assignments reference it.
///
/// The referential check and the delete run in one immediate transaction so
/// an assignment cannot be seated between them.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `shift_id` - The shift ID
///
/// # Errors
///
/// Returns `ShiftReferenced` if assignments still hold the shift, or
/// `ShiftNotFound` if the shift does not exist.
pub fn delete_shift(conn: &mut SqliteConnection, shift_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting shift: {}", shift_id);

    conn.immediate_transaction(|conn| {
        if is_shift_referenced(conn, shift_id)? {
            return Err(PersistenceError::ShiftReferenced { shift_id });
        }

        let rows_affected: usize = diesel::delete(shifts::table)
            .filter(shifts::shift_id.eq(shift_id))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::ShiftNotFound(shift_id));
        }

        info!(shift_id, "Shift deleted");
        Ok(())
    })
}
