// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The reserved actor identity used by automated workflows.
const SYSTEM_ACTOR_ID: &str = "system";

/// The actor recorded against a write: an administrator identifier, or the
/// system identity when an automated workflow (reassignment) performs the
/// write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigningActor {
    id: String,
}

impl AssigningActor {
    /// Creates a new actor from an identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidActor` if the identifier is empty or
    /// whitespace-only.
    pub fn new(id: &str) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::InvalidActor(
                "actor identifier cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id: id.trim().to_string(),
        })
    }

    /// Returns the system identity used by automated workflows.
    #[must_use]
    pub fn system() -> Self {
        Self {
            id: SYSTEM_ACTOR_ID.to_string(),
        }
    }

    /// Returns the actor identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}
