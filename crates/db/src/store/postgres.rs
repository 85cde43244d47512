use async_trait::async_trait;
use tracker_core::project::{ProjectStatus, SortField};
use tracker_core::types::DbId;

use super::{ProjectStore, StoreError};
use crate::models::project::{CreateProject, Project};
use crate::models::stats::{DepartmentStats, ProjectStats};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// [`ProjectStore`] backed by PostgreSQL through [`ProjectRepo`].
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, verify the connection, and apply pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = crate::create_pool(database_url).await?;
        tracing::info!("Database connection pool created");

        crate::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(ProjectRepo::count(&self.pool).await?)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list_page(&self.pool, offset, limit).await?)
    }

    async fn list_sorted(&self, field: SortField) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list_sorted(&self.pool, field).await?)
    }

    async fn search(&self, text: &str) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::search(&self.pool, text).await?)
    }

    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update_status(
        &self,
        id: DbId,
        status: &ProjectStatus,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update_status(&self.pool, id, status).await?)
    }

    async fn project_stats(&self) -> Result<ProjectStats, StoreError> {
        Ok(ProjectRepo::project_stats(&self.pool).await?)
    }

    async fn department_stats(&self) -> Result<Vec<DepartmentStats>, StoreError> {
        let counts = ProjectRepo::department_counts(&self.pool).await?;
        Ok(counts.into_iter().map(DepartmentStats::from).collect())
    }
}
