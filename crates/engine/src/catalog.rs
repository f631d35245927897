// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shift catalog.
//!
//! Shifts are recurring daily time windows with a staffing headcount range.
//! The catalog validates every field through the domain types before it
//! touches the store; partial updates are validated against the merged
//! record so an update can never leave a shift in a state creation would
//! have rejected.

use tracing::debug;

use shift_roster_domain::{HeadcountRange, LocalizedText, ShiftTime};
use shift_roster_persistence::{NewShiftRow, Persistence, ShiftChangeset, ShiftRecord};

use crate::error::EngineError;

/// Input for creating a shift.
///
/// Headcounts default to the domain's `3`/`5` when omitted.
#[derive(Debug, Clone)]
pub struct NewShift {
    /// The primary display name.
    pub name: String,
    /// The Arabic display name.
    pub name_ar: String,
    /// Window start (`HH:MM` wall clock).
    pub start_time: String,
    /// Window end (`HH:MM` wall clock).
    pub end_time: String,
    /// Minimum headcount; defaults when omitted.
    pub min_members: Option<i32>,
    /// Maximum headcount; defaults when omitted.
    pub max_members: Option<i32>,
}

/// Partial update for a shift. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ShiftUpdate {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub min_members: Option<i32>,
    pub max_members: Option<i32>,
}

/// The shift catalog, constructed over an injected store.
pub struct ShiftCatalog<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> ShiftCatalog<'a> {
    /// Creates a catalog over the given store.
    #[must_use]
    pub fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Lists all shifts, ordered by window start.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store fails.
    pub fn list(&mut self) -> Result<Vec<ShiftRecord>, EngineError> {
        Ok(self.persistence.list_shifts()?)
    }

    /// Creates a shift after validating every field.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a missing name, a malformed `HH:MM` time,
    /// or an invalid headcount pair.
    pub fn create(&mut self, new_shift: &NewShift) -> Result<ShiftRecord, EngineError> {
        debug!("Creating shift: {}", new_shift.name);

        let names: LocalizedText = LocalizedText::new(&new_shift.name, &new_shift.name_ar)?;
        let start_time: ShiftTime = ShiftTime::new(&new_shift.start_time)?;
        let end_time: ShiftTime = ShiftTime::new(&new_shift.end_time)?;
        let headcount: HeadcountRange =
            HeadcountRange::new(new_shift.min_members, new_shift.max_members)?;

        let row = NewShiftRow {
            name: names.primary().to_string(),
            name_ar: names.arabic().to_string(),
            start_time: start_time.value().to_string(),
            end_time: end_time.value().to_string(),
            min_members: headcount.min_members(),
            max_members: headcount.max_members(),
        };

        Ok(self.persistence.create_shift(&row)?)
    }

    /// Applies a partial update, validating the merged record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the shift does not exist, or `Validation` if
    /// any merged field is invalid (including a headcount pair that only
    /// becomes inverted when combined with the stored values).
    pub fn update(
        &mut self,
        shift_id: i64,
        update: &ShiftUpdate,
    ) -> Result<ShiftRecord, EngineError> {
        debug!("Updating shift {}", shift_id);

        let current: ShiftRecord = self
            .persistence
            .get_shift(shift_id)?
            .ok_or_else(|| EngineError::NotFound(format!("Shift {shift_id} not found")))?;

        // Validate the record as it would look after the update.
        let merged_name: &str = update.name.as_deref().unwrap_or(&current.name);
        let merged_name_ar: &str = update.name_ar.as_deref().unwrap_or(&current.name_ar);
        let names: LocalizedText = LocalizedText::new(merged_name, merged_name_ar)?;

        let start_time: ShiftTime =
            ShiftTime::new(update.start_time.as_deref().unwrap_or(&current.start_time))?;
        let end_time: ShiftTime =
            ShiftTime::new(update.end_time.as_deref().unwrap_or(&current.end_time))?;
        let headcount: HeadcountRange = HeadcountRange::from_bounds(
            update.min_members.unwrap_or(current.min_members),
            update.max_members.unwrap_or(current.max_members),
        )?;

        let changeset = ShiftChangeset {
            name: update.name.as_ref().map(|_| names.primary().to_string()),
            name_ar: update.name_ar.as_ref().map(|_| names.arabic().to_string()),
            start_time: update
                .start_time
                .as_ref()
                .map(|_| start_time.value().to_string()),
            end_time: update
                .end_time
                .as_ref()
                .map(|_| end_time.value().to_string()),
            min_members: update.min_members.map(|_| headcount.min_members()),
            max_members: update.max_members.map(|_| headcount.max_members()),
        };

        Ok(self.persistence.update_shift(shift_id, &changeset)?)
    }

    /// Deletes a shift if no assignments reference it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the shift does not exist, or `Conflict` if
    /// assignments still hold it.
    pub fn delete(&mut self, shift_id: i64) -> Result<(), EngineError> {
        debug!("Deleting shift {}", shift_id);

        Ok(self.persistence.delete_shift(shift_id)?)
    }
}
