//! Handlers for the `/projects` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracker_core::pagination::{offset_for, parse_page, total_pages, PAGE_SIZE};
use tracker_core::project::{ProjectStatus, SortField};
use tracker_core::types::{deserialize_opt_text, DbId};
use tracker_db::models::project::{CreateProject, Project};
use tracker_db::models::stats::{DepartmentStats, ProjectStats};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{CreatedResponse, ProjectPage, SuccessResponse};
use crate::state::AppState;

/// Request body for `PUT /update-status/{id}`.
///
/// `status` is optional at the serde level so a missing field is reported by
/// validation rather than as a malformed body.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    #[validate(required, length(min = 1, max = 100))]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/projects?page=N
///
/// Fixed-size pages in insertion order. Pages past the end are empty.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ProjectPage>> {
    let page = parse_page(params.page.as_deref());

    let total = state.store.count().await?;
    let data = state.store.list_page(offset_for(page), PAGE_SIZE).await?;

    tracing::debug!(page, total, returned = data.len(), "Listed projects");

    Ok(Json(ProjectPage {
        page,
        per_page: PAGE_SIZE,
        total,
        total_pages: total_pages(total),
        data,
    }))
}

/// GET /api/v1/projects/sort/{sort_by}
pub async fn list_sorted(
    State(state): State<AppState>,
    sort_by: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<Project>>> {
    let Path(sort_by) = sort_by.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let field = SortField::from_str(&sort_by)?;
    let projects = state.store.list_sorted(field).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/search/{query}
pub async fn search(
    State(state): State<AppState>,
    query: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<Project>>> {
    let Path(query) = query.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let projects = state.store.search(&query).await?;
    tracing::debug!(query = %query, hits = projects.len(), "Project search");
    Ok(Json(projects))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/new-project
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;

    let project = state.store.create(&input).await?;

    tracing::info!(project_id = project.id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Project saved successfully",
            project,
        }),
    ))
}

/// PUT /api/v1/projects/update-status/{id}
///
/// An unknown `id` is not an error: the response still reports success.
pub async fn update_status(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Path(id) = id.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let Json(input) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    input.validate()?;
    let status = ProjectStatus::parse(input.status.as_deref().unwrap_or_default())?;

    match state.store.update_status(id, &status).await? {
        Some(project) => {
            tracing::info!(project_id = project.id, status = %status, "Project status updated");
        }
        None => {
            tracing::warn!(project_id = id, status = %status, "Status update matched no project");
        }
    }

    Ok(Json(SuccessResponse {
        success: true,
        message: "Project updated successfully",
    }))
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/project-stats
pub async fn project_stats(State(state): State<AppState>) -> AppResult<Json<ProjectStats>> {
    let stats = state.store.project_stats().await?;
    Ok(Json(stats))
}

/// GET /api/v1/projects/department-stats
pub async fn department_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentStats>>> {
    let stats = state.store.department_stats().await?;
    Ok(Json(stats))
}
