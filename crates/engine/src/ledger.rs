// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability ledger.
//!
//! An exclusion records that an employee must not be assigned on a date,
//! with a reason. The ledger never touches assignments: recording an
//! exclusion does not vacate an existing seat (the reassignment workflow
//! does that), it only blocks new ones.

use tracing::debug;

use shift_roster_domain::{AssigningActor, DomainError, parse_date};
use shift_roster_persistence::{ExclusionChangeset, ExclusionView, NewExclusionRow, Persistence};

use crate::error::EngineError;

/// Input for recording an availability exclusion.
#[derive(Debug, Clone)]
pub struct NewExclusion {
    /// The employee to exclude.
    pub employee_id: i64,
    /// The date (ISO 8601).
    pub date: String,
    /// The reason for the exclusion.
    pub reason: String,
    /// The Arabic reason, if provided.
    pub reason_ar: Option<String>,
    /// A free-text note, if provided.
    pub note: Option<String>,
    /// The actor recording the exclusion.
    pub created_by: String,
}

/// Partial update for an exclusion. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ExclusionUpdate {
    pub reason: Option<String>,
    pub reason_ar: Option<String>,
    pub note: Option<String>,
}

/// Validates that an exclusion reason is non-empty.
pub(crate) fn validate_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::InvalidReason(String::from(
            "reason must not be empty",
        )));
    }
    Ok(())
}

/// The availability ledger, constructed over an injected store.
pub struct AvailabilityLedger<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> AvailabilityLedger<'a> {
    /// Creates a ledger over the given store.
    #[must_use]
    pub fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Lists exclusions, optionally narrowed by employee and/or date.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the date is unparseable.
    pub fn list(
        &mut self,
        employee_id: Option<i64>,
        date: Option<&str>,
    ) -> Result<Vec<ExclusionView>, EngineError> {
        if let Some(date) = date {
            parse_date(date)?;
        }
        Ok(self.persistence.list_exclusions(employee_id, date)?)
    }

    /// Records an exclusion for an employee on a date.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unparseable date, an empty reason, or an
    /// empty actor; `NotFound` if the employee does not exist; `Conflict`
    /// if the employee is already excluded on the date.
    pub fn exclude(&mut self, new_exclusion: &NewExclusion) -> Result<ExclusionView, EngineError> {
        debug!(
            "Excluding employee {} on {}",
            new_exclusion.employee_id, new_exclusion.date
        );

        parse_date(&new_exclusion.date)?;
        validate_reason(&new_exclusion.reason)?;
        let actor: AssigningActor = AssigningActor::new(&new_exclusion.created_by)?;

        let row = NewExclusionRow {
            employee_id: new_exclusion.employee_id,
            date: new_exclusion.date.clone(),
            reason: new_exclusion.reason.clone(),
            reason_ar: new_exclusion.reason_ar.clone(),
            note: new_exclusion.note.clone(),
            created_by: actor.id().to_string(),
        };

        Ok(self.persistence.create_exclusion(&row)?)
    }

    /// Applies a partial update to an exclusion.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exclusion does not exist, or `Validation`
    /// if the new reason is empty.
    pub fn update(
        &mut self,
        exclusion_id: i64,
        update: &ExclusionUpdate,
    ) -> Result<ExclusionView, EngineError> {
        debug!("Updating exclusion {}", exclusion_id);

        if let Some(reason) = &update.reason {
            validate_reason(reason)?;
        }

        let changeset = ExclusionChangeset {
            reason: update.reason.clone(),
            reason_ar: update.reason_ar.clone(),
            note: update.note.clone(),
        };

        Ok(self.persistence.update_exclusion(exclusion_id, &changeset)?)
    }

    /// Deletes an exclusion, restoring availability on the date.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the exclusion does not exist.
    pub fn delete(&mut self, exclusion_id: i64) -> Result<(), EngineError> {
        debug!("Deleting exclusion {}", exclusion_id);

        Ok(self.persistence.delete_exclusion(exclusion_id)?)
    }
}
