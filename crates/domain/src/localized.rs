// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A bilingual display name: the primary text and its Arabic counterpart.
///
/// Shift templates carry both forms; either being empty is a validation
/// failure because every catalog entry is rendered in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    primary: String,
    arabic: String,
}

impl LocalizedText {
    /// Creates a new `LocalizedText` pair.
    ///
    /// # Arguments
    ///
    /// * `primary` - The primary-language text
    /// * `arabic` - The Arabic text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShiftName` if either text is empty or
    /// whitespace-only.
    pub fn new(primary: &str, arabic: &str) -> Result<Self, DomainError> {
        if primary.trim().is_empty() {
            return Err(DomainError::InvalidShiftName(
                "primary name cannot be empty".to_string(),
            ));
        }
        if arabic.trim().is_empty() {
            return Err(DomainError::InvalidShiftName(
                "Arabic name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            primary: primary.trim().to_string(),
            arabic: arabic.trim().to_string(),
        })
    }

    /// Returns the primary-language text.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Returns the Arabic text.
    #[must_use]
    pub fn arabic(&self) -> &str {
        &self.arabic
    }
}
