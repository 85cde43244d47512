//! Query parameter types for API handlers.

use serde::Deserialize;

/// Page selector for the project listing (`?page=`).
///
/// Kept as a raw string so malformed values fall back to page 1 instead of
/// being rejected; see [`tracker_core::pagination::parse_page`].
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
