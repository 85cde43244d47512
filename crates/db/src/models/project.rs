//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::project::{deserialize_opt_status, ProjectStatus};
use tracker_core::types::{deserialize_opt_text, deserialize_opt_timestamp, DbId, Timestamp};

/// A project as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub division: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub priority: Option<String>,
    pub reason: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Values of the fields that free-text search looks at.
    pub fn search_text_fields(&self) -> [Option<&str>; 9] {
        [
            self.title.as_deref(),
            self.location.as_deref(),
            self.category.as_deref(),
            self.status.as_ref().map(ProjectStatus::as_str),
            self.department.as_deref(),
            self.division.as_deref(),
            self.project_type.as_deref(),
            self.priority.as_deref(),
            self.reason.as_deref(),
        ]
    }
}

/// A raw row from the `projects` table.
///
/// `status` is stored as plain text and lifted into [`ProjectStatus`] when
/// converting to [`Project`].
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub title: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub project_type: Option<String>,
    pub priority: Option<String>,
    pub reason: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            location: row.location,
            category: row.category,
            department: row.department,
            division: row.division,
            project_type: row.project_type,
            priority: row.priority,
            reason: row.reason,
            status: row.status.map(ProjectStatus::from),
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new project. Every field is optional and unknown keys
/// are ignored. Text fields also accept numbers and booleans, which are stored
/// in their string form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub division: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_opt_text")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_status")]
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub end_date: Option<Timestamp>,
}
