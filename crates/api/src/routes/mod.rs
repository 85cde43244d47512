pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects, /projects/              paginated list (?page=N)
/// /projects/sort/{sort_by}           full list sorted ascending
/// /projects/search/{query}           case-insensitive substring search
/// /projects/new-project              create (POST)
/// /projects/update-status/{id}       set status (PUT)
/// /projects/project-stats            counts by status
/// /projects/department-stats         per-department completion
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // The nested `/` route only matches `/projects`; accept the trailing
        // slash form for the listing as well.
        .route("/projects/", get(handlers::project::list))
        .nest("/projects", project::router())
}
