//! Row models and DTOs.

pub mod project;
pub mod stats;
