/// Errors produced by the `codigos-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A create request carried no `data`, or an empty one.
    #[error("record data is missing or empty")]
    MissingData,

    /// A code identifier contained characters outside `[A-Za-z0-9-]`.
    #[error("invalid code id '{value}': expected letters, digits or '-'")]
    InvalidCodeId { value: String },
}
