//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                      -> list
/// GET    /sort/{sort_by}        -> list_sorted
/// GET    /search/{query}        -> search
/// POST   /new-project           -> create
/// PUT    /update-status/{id}    -> update_status
/// GET    /project-stats         -> project_stats
/// GET    /department-stats      -> department_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/sort/{sort_by}", get(project::list_sorted))
        .route("/search/{query}", get(project::search))
        .route("/new-project", post(project::create))
        .route("/update-status/{id}", put(project::update_status))
        .route("/project-stats", get(project::project_stats))
        .route("/department-stats", get(project::department_stats))
}
