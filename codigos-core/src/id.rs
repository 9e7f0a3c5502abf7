use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Number of characters in every generated [`CodeId`].
pub const CODE_ID_LEN: usize = 12;

/// Identifier of a stored code record.
///
/// Always non-empty and restricted to ASCII letters, digits and `-`, which is
/// also the shape accepted by the `GET /codigos/{id}` route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeId(String);

impl CodeId {
    /// Draws a fresh random identifier.
    ///
    /// Takes the first [`CODE_ID_LEN`] characters of a hyphenated v4 UUID, so
    /// the result looks like `3f2a9c1e-7b4d`. Uniqueness against existing
    /// records is the caller's job (see [`crate::RecordStore::create`]).
    #[must_use]
    pub fn generate() -> Self {
        let token = Uuid::new_v4().hyphenated().to_string();
        Self(token.chars().take(CODE_ID_LEN).collect())
    }

    /// Validates `value` against the id pattern `[A-Za-z0-9-]+`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidCodeId`] if `value` is empty or contains any
    /// other character.
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if is_valid_code_id(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidCodeId { value })
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `value` matches `[A-Za-z0-9-]+`.
#[must_use]
pub fn is_valid_code_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl fmt::Display for CodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CodeId {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
