//! Repository for the `projects` table.

use sqlx::PgPool;
use tracker_core::project::{ProjectStatus, SortField, STATUS_CANCELLED, STATUS_CLOSED, STATUS_RUNNING};
use tracker_core::search::contains_pattern;
use tracker_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectRow};
use crate::models::stats::{DepartmentCounts, ProjectStats};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, location, category, department, division, project_type, \
                       priority, reason, status, start_date, end_date, created_at, updated_at";

/// Provides query operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Count all projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of projects in insertion order.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id ASC LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// List every project ascending by `field`. Nulls sort first, ties by id.
    ///
    /// Text columns compare bytewise (`COLLATE "C"`), independent of the
    /// database locale.
    pub async fn list_sorted(pool: &PgPool, field: SortField) -> Result<Vec<Project>, sqlx::Error> {
        // `field.column()` comes from a closed enum, never from user input.
        let order_by = match field {
            SortField::Priority | SortField::Status => format!("{} COLLATE \"C\"", field.column()),
            SortField::UpdatedAt | SortField::StartDate | SortField::EndDate => {
                field.column().to_string()
            }
        };
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY {order_by} ASC NULLS FIRST, id ASC"
        );
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Case-insensitive substring search across the free-text columns.
    pub async fn search(pool: &PgPool, text: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE title ILIKE $1
                OR location ILIKE $1
                OR category ILIKE $1
                OR status ILIKE $1
                OR department ILIKE $1
                OR division ILIKE $1
                OR project_type ILIKE $1
                OR priority ILIKE $1
                OR reason ILIKE $1
             ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(contains_pattern(text))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, location, category, department, division,
                                   project_type, priority, reason, status, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.department)
            .bind(&input.division)
            .bind(&input.project_type)
            .bind(&input.priority)
            .bind(&input.reason)
            .bind(input.status.as_ref().map(ProjectStatus::as_str))
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Set `status` and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// Status counts, computed in a single statement so they share a snapshot.
    pub async fn project_stats(pool: &PgPool) -> Result<ProjectStats, sqlx::Error> {
        sqlx::query_as::<_, ProjectStats>(
            "SELECT
                COUNT(*) AS total_projects,
                COUNT(*) FILTER (WHERE status = $1) AS running_projects,
                COUNT(*) FILTER (WHERE status = $2) AS closed_projects,
                COUNT(*) FILTER (WHERE status = $3) AS cancelled_projects,
                COUNT(*) FILTER (WHERE status = $1 AND end_date < NOW()) AS delayed_projects
             FROM projects",
        )
        .bind(STATUS_RUNNING)
        .bind(STATUS_CLOSED)
        .bind(STATUS_CANCELLED)
        .fetch_one(pool)
        .await
    }

    /// Total and closed counts grouped by department, null group first, then
    /// bytewise by department name.
    pub async fn department_counts(pool: &PgPool) -> Result<Vec<DepartmentCounts>, sqlx::Error> {
        sqlx::query_as::<_, DepartmentCounts>(
            r#"SELECT
                department,
                COUNT(*) AS total_projects,
                COUNT(*) FILTER (WHERE status = $1) AS closed_projects
             FROM projects
             GROUP BY department
             ORDER BY department COLLATE "C" ASC NULLS FIRST"#,
        )
        .bind(STATUS_CLOSED)
        .fetch_all(pool)
        .await
    }
}
