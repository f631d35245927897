// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shift_roster::EngineError;
use thiserror::Error;
use tracing::error;

/// API-level errors.
///
/// These represent the API contract: each variant corresponds to one HTTP
/// status class. Storage failures are reduced to a stable `Internal` shape
/// so diagnostic detail never leaks to callers; the detail goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided (400).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found (404).
    #[error("Not found: {message}")]
    ResourceNotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation conflicts with existing records (409).
    #[error("Conflict: {message}")]
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The shift already holds its maximum headcount (409).
    #[error("Capacity exceeded: {message}")]
    CapacityExceeded {
        /// A human-readable description of the capacity violation.
        message: String,
    },
    /// An internal error occurred (500).
    #[error("Internal error: {message}")]
    Internal {
        /// A stable description; details are logged, not returned.
        message: String,
    },
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(message) => Self::InvalidInput { message },
            EngineError::NotFound(message) => Self::ResourceNotFound { message },
            EngineError::Conflict(message) => Self::Conflict { message },
            EngineError::Capacity(message) => Self::CapacityExceeded { message },
            EngineError::Storage(message) => {
                error!(error = %message, "Storage failure behind the API boundary");
                Self::Internal {
                    message: String::from("An internal storage error occurred"),
                }
            }
        }
    }
}
