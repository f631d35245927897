// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::DomainError;
use shift_roster_persistence::PersistenceError;

/// Errors that can occur in the scheduling components.
///
/// The variants are the error classes callers map onto their own surface:
/// `Validation` for rejected input, `NotFound` for missing records,
/// `Conflict` for duplicate seats, exclusions, and referential guards,
/// `Capacity` for full shifts, and `Storage` for everything the store
/// could not do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The input failed validation.
    Validation(String),
    /// The referenced record does not exist.
    NotFound(String),
    /// The operation conflicts with existing records.
    Conflict(String),
    /// The shift already holds its maximum headcount.
    Capacity(String),
    /// The storage layer failed.
    Storage(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Capacity(msg) => write!(f, "Capacity exceeded: {msg}"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PersistenceError> for EngineError {
    fn from(err: PersistenceError) -> Self {
        match &err {
            PersistenceError::EmployeeNotFound(_)
            | PersistenceError::ShiftNotFound(_)
            | PersistenceError::AssignmentNotFound(_)
            | PersistenceError::ExclusionNotFound(_)
            | PersistenceError::AssignmentNotFoundForDate { .. }
            | PersistenceError::NotFound(_) => Self::NotFound(err.to_string()),
            PersistenceError::DuplicateAssignment { .. }
            | PersistenceError::EmployeeUnavailable { .. }
            | PersistenceError::DuplicateExclusion { .. }
            | PersistenceError::ShiftReferenced { .. } => Self::Conflict(err.to_string()),
            PersistenceError::ShiftAtCapacity { .. } => Self::Capacity(err.to_string()),
            _ => Self::Storage(err.to_string()),
        }
    }
}
