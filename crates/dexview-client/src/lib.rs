//! dexview-client
//!
//! This crate provides a small, focused async client for the upstream
//! creature-database REST API.
//!
//! It includes:
//! - the bulk collection fetcher (list + concurrent detail requests)
//! - species lookup with structural validation
//! - evolution chain resolution into level-ordered columns
//! - a typed error taxonomy distinguishing list, detail and evolution failures
//!
//! Pure transformations (filtering, formatting, flattening) live in
//! `dexview-core`; this crate only adds the network boundary.

pub mod catalog_client;
pub mod constants;
pub mod error;
pub mod profile;

pub use catalog_client::*;
pub use error::{FetchError, FetchResult};
pub use profile::{EntityProfile, Evolution};
