//! HTTP-level integration tests for the `/api/v1/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, backed by the in-memory store.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{body_json, build_test_app, get, memory_store, post_json, put_json, seed};
use serde_json::json;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_defaults_to_first_page() {
    let store = memory_store();
    for i in 0..10 {
        seed(&store, json!({"title": format!("Project {i}")})).await;
    }

    let json = body_json(get(build_test_app(store), "/api/v1/projects").await).await;

    assert_eq!(json["page"], 1);
    assert_eq!(json["perPage"], 8);
    assert_eq!(json["total"], 10);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 8);
    assert_eq!(json["data"][0]["title"], "Project 0");
}

#[tokio::test]
async fn list_second_page_holds_the_remainder() {
    let store = memory_store();
    for i in 0..10 {
        seed(&store, json!({"title": format!("Project {i}")})).await;
    }

    let response = get(build_test_app(store), "/api/v1/projects?page=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(json["page"], 2);
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["title"], "Project 8");
}

#[tokio::test]
async fn list_page_count_matches_ceiling_for_every_page() {
    let store = memory_store();
    for i in 0..17 {
        seed(&store, json!({"title": format!("P{i}")})).await;
    }

    for page in 1..=4 {
        let uri = format!("/api/v1/projects?page={page}");
        let json = body_json(get(build_test_app(store.clone()), &uri).await).await;
        assert_eq!(json["totalPages"], 3);
        assert!(json["data"].as_array().unwrap().len() <= 8);
    }
}

#[tokio::test]
async fn list_out_of_range_page_is_empty_not_error() {
    let store = memory_store();
    seed(&store, json!({"title": "Only"})).await;

    let response = get(build_test_app(store), "/api/v1/projects?page=50").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], 50);
    assert_eq!(json["total"], 1);
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_malformed_page_falls_back_to_first() {
    let store = memory_store();
    seed(&store, json!({"title": "Only"})).await;

    for query in ["page=abc", "page=0", "page=-3", "page="] {
        let uri = format!("/api/v1/projects?{query}");
        let json = body_json(get(build_test_app(store.clone()), &uri).await).await;
        assert_eq!(json["page"], 1, "query {query}");
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn list_accepts_trailing_slash() {
    let store = memory_store();
    seed(&store, json!({"title": "Only"})).await;

    let response = get(build_test_app(store), "/api/v1/projects/?page=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["data"][0]["title"], "Only");
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sort_rejects_unknown_field() {
    let app = build_test_app(memory_store());
    let response = get(app, "/api/v1/projects/sort/title").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "INVALID_SORT_FIELD");
    assert_eq!(json["message"], "Invalid sort field");
}

#[tokio::test]
async fn sort_by_priority_is_non_decreasing() {
    let store = memory_store();
    for priority in ["medium", "high", "low", "high"] {
        seed(&store, json!({"priority": priority})).await;
    }

    let response = get(build_test_app(store), "/api/v1/projects/sort/priority").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let priorities: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["priority"].as_str().unwrap())
        .collect();
    assert_eq!(priorities, vec!["high", "high", "low", "medium"]);
}

#[tokio::test]
async fn sort_by_end_date_is_non_decreasing() {
    let store = memory_store();
    for end in ["2025-06-01", "2024-01-15", "2024-09-30T12:00:00Z"] {
        seed(&store, json!({"endDate": end})).await;
    }

    let json = body_json(get(build_test_app(store), "/api/v1/projects/sort/endDate").await).await;
    let ends: Vec<DateTime<Utc>> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["endDate"].as_str().unwrap().parse().unwrap())
        .collect();

    assert_eq!(ends.len(), 3);
    assert!(ends.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn every_allowed_sort_field_succeeds() {
    let store = memory_store();
    seed(&store, json!({"title": "x", "status": "running"})).await;

    for field in ["priority", "updatedAt", "startDate", "endDate", "status"] {
        let uri = format!("/api/v1/projects/sort/{field}");
        let response = get(build_test_app(store.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "field {field}");
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let store = memory_store();
    seed(&store, json!({"title": "Bridge Repair", "department": "Roads"})).await;
    seed(&store, json!({"title": "Clinic Extension", "department": "Health"})).await;

    for query in ["bridge", "BRIDGE", "ridge"] {
        let uri = format!("/api/v1/projects/search/{query}");
        let json = body_json(get(build_test_app(store.clone()), &uri).await).await;
        let hits = json.as_array().unwrap();
        assert_eq!(hits.len(), 1, "query {query}");
        assert_eq!(hits[0]["title"], "Bridge Repair");
    }
}

#[tokio::test]
async fn search_matches_any_text_field() {
    let store = memory_store();
    seed(&store, json!({"title": "A", "division": "North Division"})).await;
    seed(&store, json!({"title": "B", "type": "Northern works"})).await;
    seed(&store, json!({"title": "C", "status": "running"})).await;

    let json = body_json(get(build_test_app(store.clone()), "/api/v1/projects/search/north").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let json = body_json(get(build_test_app(store), "/api/v1/projects/search/RUN").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_with_no_match_returns_empty_list() {
    let store = memory_store();
    seed(&store, json!({"title": "Bridge Repair"})).await;

    let response = get(build_test_app(store), "/api/v1/projects/search/tunnel").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_treats_pattern_characters_literally() {
    let store = memory_store();
    seed(&store, json!({"title": "Upgrade 50% done"})).await;
    seed(&store, json!({"title": "Upgrade 500"})).await;

    let json = body_json(get(build_test_app(store.clone()), "/api/v1/projects/search/50%25").await).await;
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Upgrade 50% done");

    let json = body_json(get(build_test_app(store), "/api/v1/projects/search/.*").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_path_encoding_uses_the_envelope() {
    for uri in ["/api/v1/projects/search/%FF", "/api/v1/projects/sort/%FF"] {
        let response = get(build_test_app(memory_store()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(body_json(response).await["kind"], "BAD_REQUEST", "uri {uri}");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_echoed_fields() {
    let store = memory_store();
    let payload = json!({
        "title": "Bridge Repair",
        "location": "River Road",
        "category": "Infrastructure",
        "department": "Roads",
        "division": "North",
        "type": "Civil",
        "priority": "high",
        "reason": "Flood damage",
        "status": "running",
        "startDate": "2024-01-01T00:00:00Z",
        "endDate": "2024-12-31T00:00:00Z",
    });

    let response = post_json(build_test_app(store.clone()), "/api/v1/projects/new-project", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Project saved successfully");

    let project = &json["project"];
    assert!(project["id"].is_number());
    for key in ["title", "location", "category", "department", "division", "type", "priority", "reason", "status"] {
        assert_eq!(project[key], payload[key], "field {key}");
    }
    let start: DateTime<Utc> = project["startDate"].as_str().unwrap().parse().unwrap();
    assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[tokio::test]
async fn create_increments_count_by_one() {
    let store = memory_store();
    seed(&store, json!({"title": "First"})).await;

    let before = body_json(get(build_test_app(store.clone()), "/api/v1/projects").await).await["total"]
        .as_i64()
        .unwrap();
    seed(&store, json!({"title": "Second"})).await;
    let after = body_json(get(build_test_app(store), "/api/v1/projects").await).await["total"]
        .as_i64()
        .unwrap();

    assert_eq!(after, before + 1);
}

#[tokio::test]
async fn create_accepts_empty_payload() {
    let response = post_json(build_test_app(memory_store()), "/api/v1/projects/new-project", json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["project"]["title"].is_null());
}

#[tokio::test]
async fn create_stores_scalar_text_fields_as_strings() {
    let response = post_json(
        build_test_app(memory_store()),
        "/api/v1/projects/new-project",
        json!({"title": "x", "priority": 1, "reason": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let project = &body_json(response).await["project"];
    assert_eq!(project["priority"], "1");
    assert_eq!(project["reason"], "true");
}

#[tokio::test]
async fn create_rejects_malformed_dates_with_envelope() {
    let response = post_json(
        build_test_app(memory_store()),
        "/api/v1/projects/new-project",
        json!({"title": "Bad", "endDate": "someday"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_status_changes_status_and_updated_at() {
    let store = memory_store();
    let created = seed(&store, json!({"title": "Road", "status": "running"})).await;
    let id = created["id"].as_i64().unwrap();
    let before: DateTime<Utc> = created["updatedAt"].as_str().unwrap().parse().unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/v1/projects/update-status/{id}"),
        json!({"status": "closed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let found = body_json(get(build_test_app(store), "/api/v1/projects/search/Road").await).await;
    let project = &found[0];
    assert_eq!(project["status"], "closed");
    let after: DateTime<Utc> = project["updatedAt"].as_str().unwrap().parse().unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn update_status_on_missing_id_still_reports_success() {
    let store = memory_store();
    seed(&store, json!({"title": "Untouched", "status": "running"})).await;

    let response = put_json(
        build_test_app(store.clone()),
        "/api/v1/projects/update-status/999999",
        json!({"status": "closed"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Project updated successfully");

    let stats = body_json(get(build_test_app(store), "/api/v1/projects/project-stats").await).await;
    assert_eq!(stats["closedProjects"], 0);
}

#[tokio::test]
async fn update_status_accepts_custom_values() {
    let store = memory_store();
    let created = seed(&store, json!({"title": "Park"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/v1/projects/update-status/{id}"),
        json!({"status": "on-hold"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(store), "/api/v1/projects/search/on-hold").await).await;
    assert_eq!(json[0]["status"], "on-hold");
}

#[tokio::test]
async fn update_status_rejects_empty_status() {
    let store = memory_store();
    let created = seed(&store, json!({"title": "Park"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(store),
        &format!("/api/v1/projects/update-status/{id}"),
        json!({"status": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_status_requires_a_status_key() {
    let store = memory_store();
    let created = seed(&store, json!({"title": "Park"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(store),
        &format!("/api/v1/projects/update-status/{id}"),
        json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_status_rejects_overlong_status() {
    let store = memory_store();
    let created = seed(&store, json!({"title": "Park"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(store),
        &format!("/api/v1/projects/update-status/{id}"),
        json!({"status": "x".repeat(101)}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_status_rejects_non_numeric_id() {
    let response = put_json(
        build_test_app(memory_store()),
        "/api/v1/projects/update-status/not-a-number",
        json!({"status": "closed"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["kind"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_stats_counts_by_status_and_delay() {
    let store = memory_store();
    let past = (Utc::now() - chrono::Duration::days(2)).to_rfc3339();
    let future = (Utc::now() + chrono::Duration::days(2)).to_rfc3339();

    seed(&store, json!({"status": "running", "endDate": past})).await;
    seed(&store, json!({"status": "running", "endDate": future})).await;
    seed(&store, json!({"status": "running"})).await;
    seed(&store, json!({"status": "closed", "endDate": past})).await;
    seed(&store, json!({"status": "cancelled"})).await;
    seed(&store, json!({"status": "proposed"})).await;

    let response = get(build_test_app(store), "/api/v1/projects/project-stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        body_json(response).await,
        json!({
            "totalProjects": 6,
            "runningProjects": 3,
            "closedProjects": 1,
            "cancelledProjects": 1,
            "delayedProjects": 1,
        })
    );
}

#[tokio::test]
async fn department_stats_report_completion_percentage() {
    let store = memory_store();
    seed(&store, json!({"department": "Roads", "status": "closed"})).await;
    seed(&store, json!({"department": "Roads", "status": "running"})).await;
    seed(&store, json!({"department": "Roads", "status": "cancelled"})).await;
    seed(&store, json!({"department": "Health", "status": "closed"})).await;

    let response = get(build_test_app(store), "/api/v1/projects/department-stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let roads = rows.iter().find(|r| r["department"] == "Roads").unwrap();
    assert_eq!(roads["totalProjects"], 3);
    assert_eq!(roads["closedProjects"], 1);
    assert_eq!(roads["completionPercentage"], 33);

    let health = rows.iter().find(|r| r["department"] == "Health").unwrap();
    assert_eq!(health["completionPercentage"], 100);
}

#[tokio::test]
async fn department_stats_on_empty_store_is_empty() {
    let response = get(build_test_app(memory_store()), "/api/v1/projects/department-stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
