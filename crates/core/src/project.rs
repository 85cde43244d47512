//! Project status and sort-field vocabularies.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::deserialize_opt_text;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Status string for projects currently in progress.
pub const STATUS_RUNNING: &str = "running";

/// Status string for completed projects.
pub const STATUS_CLOSED: &str = "closed";

/// Status string for abandoned projects.
pub const STATUS_CANCELLED: &str = "cancelled";

/// Lifecycle status of a project.
///
/// The three well-known values get their own variants. Any other string is
/// kept verbatim in [`ProjectStatus::Other`] so callers can use custom
/// statuses without losing data. No transition rules are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Running,
    Closed,
    Cancelled,
    Other(String),
}

impl ProjectStatus {
    /// Return the status as stored and sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => STATUS_RUNNING,
            Self::Closed => STATUS_CLOSED,
            Self::Cancelled => STATUS_CANCELLED,
            Self::Other(s) => s,
        }
    }

    /// Parse a status supplied by a client. Blank input is rejected.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.trim().is_empty() {
            return Err(CoreError::Validation("status must not be empty".into()));
        }
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ProjectStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            STATUS_RUNNING => Self::Running,
            STATUS_CLOSED => Self::Closed,
            STATUS_CANCELLED => Self::Cancelled,
            _ => Self::Other(s),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde helper for an optional status in request bodies.
///
/// Accepts the same scalars as [`deserialize_opt_text`].
pub fn deserialize_opt_status<'de, D>(deserializer: D) -> Result<Option<ProjectStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_text(deserializer)?.map(ProjectStatus::from))
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Fields the full project list may be sorted by (always ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Priority,
    UpdatedAt,
    StartDate,
    EndDate,
    Status,
}

/// Accepted `sortBy` path values, in wire form.
pub const VALID_SORT_FIELDS: &[&str] = &["priority", "updatedAt", "startDate", "endDate", "status"];

impl SortField {
    /// Return the field name as it appears in the URL and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::UpdatedAt => "updatedAt",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Status => "status",
        }
    }

    /// Return the backing column in the `projects` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::UpdatedAt => "updated_at",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Status => "status",
        }
    }

    /// Parse a `sortBy` value. Matching is exact (case-sensitive).
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "priority" => Ok(Self::Priority),
            "updatedAt" => Ok(Self::UpdatedAt),
            "startDate" => Ok(Self::StartDate),
            "endDate" => Ok(Self::EndDate),
            "status" => Ok(Self::Status),
            other => Err(CoreError::InvalidSortField(other.to_string())),
        }
    }
}
