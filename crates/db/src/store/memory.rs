use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracker_core::project::{ProjectStatus, SortField};
use tracker_core::search::contains_ignore_case;
use tracker_core::stats::is_delayed;
use tracker_core::types::DbId;

use super::{ProjectStore, StoreError};
use crate::models::project::{CreateProject, Project};
use crate::models::stats::{DepartmentCounts, DepartmentStats, ProjectStats};

#[derive(Default)]
struct Inner {
    next_id: DbId,
    projects: Vec<Project>,
}

/// In-process [`ProjectStore`]. Nothing survives a restart.
///
/// Projects are kept in insertion order, which is also id order.
#[derive(Default)]
pub struct MemoryProjectStore {
    inner: RwLock<Inner>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ascending comparison on `field`, missing values first.
fn compare_by(field: SortField, a: &Project, b: &Project) -> Ordering {
    match field {
        SortField::Priority => a.priority.cmp(&b.priority),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
        SortField::EndDate => a.end_date.cmp(&b.end_date),
        SortField::Status => a
            .status
            .as_ref()
            .map(ProjectStatus::as_str)
            .cmp(&b.status.as_ref().map(ProjectStatus::as_str)),
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.projects.len() as i64)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Project>, StoreError> {
        let inner = self.inner.read().await;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(inner.projects.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn list_sorted(&self, field: SortField) -> Result<Vec<Project>, StoreError> {
        let mut projects = self.inner.read().await.projects.clone();
        projects.sort_by(|a, b| compare_by(field, a, b).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    async fn search(&self, text: &str) -> Result<Vec<Project>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .iter()
            .filter(|p| {
                p.search_text_fields()
                    .into_iter()
                    .flatten()
                    .any(|value| contains_ignore_case(value, text))
            })
            .cloned()
            .collect())
    }

    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let project = Project {
            id: inner.next_id,
            title: input.title.clone(),
            location: input.location.clone(),
            category: input.category.clone(),
            department: input.department.clone(),
            division: input.division.clone(),
            project_type: input.project_type.clone(),
            priority: input.priority.clone(),
            reason: input.reason.clone(),
            status: input.status.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: now,
            updated_at: now,
        };
        inner.projects.push(project.clone());
        Ok(project)
    }

    async fn update_status(
        &self,
        id: DbId,
        status: &ProjectStatus,
    ) -> Result<Option<Project>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(project) = inner.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        project.status = Some(status.clone());
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn project_stats(&self) -> Result<ProjectStats, StoreError> {
        let inner = self.inner.read().await;
        let now = Utc::now();
        let mut stats = ProjectStats {
            total_projects: inner.projects.len() as i64,
            ..ProjectStats::default()
        };
        for project in &inner.projects {
            match project.status {
                Some(ProjectStatus::Running) => stats.running_projects += 1,
                Some(ProjectStatus::Closed) => stats.closed_projects += 1,
                Some(ProjectStatus::Cancelled) => stats.cancelled_projects += 1,
                _ => {}
            }
            if is_delayed(project.status.as_ref(), project.end_date, now) {
                stats.delayed_projects += 1;
            }
        }
        Ok(stats)
    }

    async fn department_stats(&self) -> Result<Vec<DepartmentStats>, StoreError> {
        let inner = self.inner.read().await;
        let mut groups: BTreeMap<Option<String>, (i64, i64)> = BTreeMap::new();
        for project in &inner.projects {
            let entry = groups.entry(project.department.clone()).or_default();
            entry.0 += 1;
            if project.status == Some(ProjectStatus::Closed) {
                entry.1 += 1;
            }
        }
        Ok(groups
            .into_iter()
            .map(|(department, (total_projects, closed_projects))| {
                DepartmentStats::from(DepartmentCounts {
                    department,
                    total_projects,
                    closed_projects,
                })
            })
            .collect())
    }
}
