use serde::{Deserialize, Serialize};

use crate::id::CodeId;

/// Type tag assigned when a create request omits `type` or leaves it empty.
pub const DEFAULT_KIND: &str = "qr";

/// A stored code: an opaque payload plus a free-form type tag.
///
/// Records are never mutated once stored; the store hands out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Record {
    /// Store-assigned identifier, unique within the store.
    pub id: CodeId,
    /// Client payload, usually a URL or free text. Never empty.
    pub data: String,
    /// Type tag, `"qr"` unless the client chose another.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Record {
    /// Assembles a record from already-validated parts.
    #[must_use]
    pub fn new(id: CodeId, data: String, kind: String) -> Self {
        Self { id, data, kind }
    }
}

/// Resolves the client-supplied tag, falling back to [`DEFAULT_KIND`].
#[must_use]
pub fn kind_or_default(kind: Option<String>) -> String {
    match kind {
        Some(kind) if !kind.is_empty() => kind,
        _ => DEFAULT_KIND.to_owned(),
    }
}
