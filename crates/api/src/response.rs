//! Response envelope types for the project endpoints.

use serde::Serialize;
use tracker_db::models::project::Project;

/// One page of the project listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<Project>,
}

/// Acknowledgement for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub project: Project,
}

/// Acknowledgement for a mutation that does not echo the entity.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: &'static str,
}
