//! Aggregate statistics shown on the dashboard.

use serde::Serialize;
use sqlx::FromRow;
use tracker_core::stats::completion_percentage;

/// Project counts by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: i64,
    pub running_projects: i64,
    pub closed_projects: i64,
    pub cancelled_projects: i64,
    /// Running projects whose end date has already passed.
    pub delayed_projects: i64,
}

/// Per-department totals as produced by the grouping query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DepartmentCounts {
    pub department: Option<String>,
    pub total_projects: i64,
    pub closed_projects: i64,
}

/// Per-department breakdown with completion percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    /// `None` groups projects that have no department.
    pub department: Option<String>,
    pub total_projects: i64,
    pub closed_projects: i64,
    pub completion_percentage: i64,
}

impl From<DepartmentCounts> for DepartmentStats {
    fn from(counts: DepartmentCounts) -> Self {
        Self {
            completion_percentage: completion_percentage(
                counts.closed_projects,
                counts.total_projects,
            ),
            department: counts.department,
            total_projects: counts.total_projects,
            closed_projects: counts.closed_projects,
        }
    }
}
