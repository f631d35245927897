// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability exclusion mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::data_models::{ExclusionChangeset, ExclusionView, NewExclusionRow};
use crate::diesel_schema::availability_exclusions;
use crate::error::PersistenceError;
use crate::queries::directory::employee_exists;
use crate::queries::exclusions::{find_for_employee_on_date, get_exclusion};
use crate::sqlite::get_last_insert_rowid;

/// Records an availability exclusion and returns the stored view.
///
/// The employee-exists check, the per-date uniqueness check, and the insert
/// run in one immediate transaction. The `UNIQUE(employee_id, date)` index
/// backstops the uniqueness check.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_exclusion` - The validated exclusion fields to insert
///
/// # Errors
///
/// Returns `EmployeeNotFound` if the employee does not exist, or
/// `DuplicateExclusion` if the employee is already excluded on the date.
pub fn create_exclusion(
    conn: &mut SqliteConnection,
    new_exclusion: &NewExclusionRow,
) -> Result<ExclusionView, PersistenceError> {
    info!(
        "Recording exclusion for employee {} on {}",
        new_exclusion.employee_id, new_exclusion.date
    );

    conn.immediate_transaction(|conn| {
        if !employee_exists(conn, new_exclusion.employee_id)? {
            return Err(PersistenceError::EmployeeNotFound(new_exclusion.employee_id));
        }

        if find_for_employee_on_date(conn, new_exclusion.employee_id, &new_exclusion.date)?
            .is_some()
        {
            return Err(PersistenceError::DuplicateExclusion {
                employee_id: new_exclusion.employee_id,
                date: new_exclusion.date.clone(),
            });
        }

        diesel::insert_into(availability_exclusions::table)
            .values(new_exclusion)
            .execute(conn)?;

        let exclusion_id: i64 = get_last_insert_rowid(conn)?;

        info!(exclusion_id, "Exclusion recorded");
        get_exclusion(conn, exclusion_id)?.ok_or(PersistenceError::ExclusionNotFound(exclusion_id))
    })
}

/// Applies a partial update to an exclusion and returns the updated view.
///
/// A changeset with no fields set leaves the row untouched and returns the
/// current view.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `exclusion_id` - The exclusion ID
/// * `changeset` - The fields to change; `None` fields are left unchanged
///
/// # Errors
///
/// Returns `ExclusionNotFound` if the exclusion does not exist, or an error
/// if the update fails.
pub fn update_exclusion(
    conn: &mut SqliteConnection,
    exclusion_id: i64,
    changeset: &ExclusionChangeset,
) -> Result<ExclusionView, PersistenceError> {
    debug!("Updating exclusion {}: {:?}", exclusion_id, changeset);

    // Diesel rejects an empty changeset, so short-circuit to a plain read.
    if changeset.is_empty() {
        return get_exclusion(conn, exclusion_id)?
            .ok_or(PersistenceError::ExclusionNotFound(exclusion_id));
    }

    let rows_affected: usize = diesel::update(availability_exclusions::table)
        .filter(availability_exclusions::exclusion_id.eq(exclusion_id))
        .set(changeset)
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::ExclusionNotFound(exclusion_id));
    }

    get_exclusion(conn, exclusion_id)?.ok_or(PersistenceError::ExclusionNotFound(exclusion_id))
}

/// Deletes an exclusion, restoring the employee's availability on the date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `exclusion_id` - The exclusion ID
///
/// # Errors
///
/// Returns `ExclusionNotFound` if the exclusion does not exist.
pub fn delete_exclusion(
    conn: &mut SqliteConnection,
    exclusion_id: i64,
) -> Result<(), PersistenceError> {
    info!("Deleting exclusion: {}", exclusion_id);

    let rows_affected: usize = diesel::delete(availability_exclusions::table)
        .filter(availability_exclusions::exclusion_id.eq(exclusion_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::ExclusionNotFound(exclusion_id));
    }

    info!(exclusion_id, "Exclusion deleted");
    Ok(())
}
