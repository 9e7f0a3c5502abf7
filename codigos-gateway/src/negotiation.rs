//! JSON content negotiation precondition for `POST /codigos`.
//!
//! Only the create handler calls [`require_json`]; list, get-one and delete
//! are served regardless of what the client sends in these headers.

use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderMap, HeaderName,
};

use crate::error::GatewayError;

/// Media type both negotiation headers must mention.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Check that the request declares a JSON body and accepts a JSON response.
///
/// A header passes when any of its values contains `application/json`, so
/// parameters such as `;encoding=utf-8` are fine while a bare `*/*` is not.
///
/// # Errors
/// Returns [`GatewayError::NotAcceptable`] if `Content-Type` or `Accept` is
/// missing or does not mention JSON.
pub fn require_json(headers: &HeaderMap) -> Result<(), GatewayError> {
    if mentions_json(headers, &CONTENT_TYPE) && mentions_json(headers, &ACCEPT) {
        Ok(())
    } else {
        Err(GatewayError::NotAcceptable)
    }
}

// Matches on raw bytes so values carrying non-ASCII octets (which
// `HeaderValue::to_str` refuses) are still searched.
fn mentions_json(headers: &HeaderMap, name: &HeaderName) -> bool {
    let needle = JSON_MEDIA_TYPE.as_bytes();
    headers
        .get_all(name)
        .iter()
        .any(|value| value.as_bytes().windows(needle.len()).any(|window| window == needle))
}
