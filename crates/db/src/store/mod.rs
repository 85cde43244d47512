//! Storage abstraction injected into the HTTP handlers.
//!
//! [`PgProjectStore`] is the production backend. [`MemoryProjectStore`]
//! keeps everything in process and backs local runs and the API tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use tracker_core::project::{ProjectStatus, SortField};
use tracker_core::types::DbId;

use crate::models::project::{CreateProject, Project};
use crate::models::stats::{DepartmentStats, ProjectStats};

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

/// Errors surfaced by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Query operations over the project collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;

    /// Confirm the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Total number of projects.
    async fn count(&self) -> Result<i64, StoreError>;

    /// One slice of projects in insertion order.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Project>, StoreError>;

    /// Every project ascending by `field` (missing values first, ties by id).
    async fn list_sorted(&self, field: SortField) -> Result<Vec<Project>, StoreError>;

    /// Projects with any searchable field containing `text`, ignoring case.
    async fn search(&self, text: &str) -> Result<Vec<Project>, StoreError>;

    /// Insert a project and return it with its assigned id.
    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError>;

    /// Set the status of project `id`. `None` means no such project.
    async fn update_status(
        &self,
        id: DbId,
        status: &ProjectStatus,
    ) -> Result<Option<Project>, StoreError>;

    /// Counts by status plus the delayed count.
    async fn project_stats(&self) -> Result<ProjectStats, StoreError>;

    /// Per-department totals and completion percentage.
    async fn department_stats(&self) -> Result<Vec<DepartmentStats>, StoreError>;
}
