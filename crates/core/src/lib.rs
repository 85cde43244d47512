//! Domain types and pure logic for the project tracker.
//!
//! This crate has no I/O so it can be shared by the storage layer, the HTTP
//! layer, and their tests.

pub mod error;
pub mod pagination;
pub mod project;
pub mod search;
pub mod stats;
pub mod types;
