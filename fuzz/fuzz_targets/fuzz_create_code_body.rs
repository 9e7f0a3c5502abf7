//! Fuzz target: decoding of `POST /codigos` bodies.
//!
//! Arbitrary bytes must either decode into a `CreateCodeBody` or yield a
//! `BadRequest`, never panic. Decoded bodies are pushed through a store to
//! check the non-empty `data` invariant.

#![no_main]

use codigos_core::RecordStore;
use codigos_gateway::{error::GatewayError, routes::CreateCodeBody};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match CreateCodeBody::from_json(data) {
        Ok(body) => {
            let store = RecordStore::new();
            if let Ok(record) = store.create(body.data.unwrap_or_default(), body.kind) {
                assert!(!record.data.is_empty());
                assert!(!record.kind.is_empty());
                assert_eq!(store.len(), 1);
            } else {
                assert!(store.is_empty());
            }
        }
        Err(GatewayError::BadRequest(_)) => {}
        Err(other) => panic!("unexpected error kind: {other:?}"),
    }
});
