//! HTTP API gateway for the codigos record service.
//!
//! Exposes list, get-one, create and delete over the in-memory
//! [`codigos_core::RecordStore`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod negotiation;
pub mod routes;
