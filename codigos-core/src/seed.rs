//! Sample records loaded into the store at startup.

use crate::id::CodeId;
use crate::record::{Record, DEFAULT_KIND};

/// Returns the two sample records every fresh service starts with.
///
/// # Panics
/// Never panics: both ids are hard-coded values matching the id pattern.
#[must_use]
pub fn seed_records() -> Vec<Record> {
    #[expect(clippy::unwrap_used, reason = "a1b2c3d4e5f6 is a valid code id")]
    let url = Record::new(
        CodeId::parse("a1b2c3d4e5f6").unwrap(),
        "https://ejemplo.com".to_owned(),
        DEFAULT_KIND.to_owned(),
    );

    #[expect(clippy::unwrap_used, reason = "b2c3d4e5f6g7 is a valid code id")]
    let contact = Record::new(
        CodeId::parse("b2c3d4e5f6g7").unwrap(),
        "Contacto: Juan Pérez, Tel: 555-1234".to_owned(),
        DEFAULT_KIND.to_owned(),
    );

    vec![url, contact]
}
