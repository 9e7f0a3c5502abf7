//! Core types for the codigos record service.
//!
//! Defines the code record, its identifier, and the in-memory store that
//! owns every record for the lifetime of the process.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod record;
pub mod seed;
pub mod store;

pub use error::CoreError;
pub use id::{is_valid_code_id, CodeId, CODE_ID_LEN};
pub use record::{Record, DEFAULT_KIND};
pub use store::RecordStore;
