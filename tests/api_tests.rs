mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{app_with_store, call, doc, setup, setup_variant, CountingStore};
use fleet_dispatch::config::ApiVariant;
use fleet_dispatch::store::DocumentStore;

fn task_body(route: &str) -> serde_json::Value {
    json!({
        "title": "Entregar palés",
        "description": "Muelle 3, antes de las 10",
        "dueDate": "2024-06-01",
        "route": route
    })
}

fn vehicle_body() -> serde_json::Value {
    json!({
        "number": "AB-123-CD",
        "length": 6.2,
        "width": 2.1,
        "height": 2.6,
        "weight": 3500,
        "idealFor": "pallets",
        "facilities": ["tail-lift"]
    })
}

// ── Tasks ──

#[tokio::test]
async fn created_task_is_listed_for_its_route() {
    let (r, _) = setup();
    let (s, created) = call(&r, "POST", "/api/tasks", Some(task_body("northline"))).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["completed"], false);
    assert!(created["createdAt"].as_str().unwrap().ends_with('Z'));

    let (s, tasks) = call(&r, "GET", "/api/tasks?route=northline", None).await;
    assert_eq!(s, StatusCode::OK);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], created["id"]);
    assert_eq!(tasks[0]["title"], "Entregar palés");
}

#[tokio::test]
async fn tasks_are_scoped_per_route() {
    let (r, _) = setup();
    call(&r, "POST", "/api/tasks", Some(task_body("northline"))).await;

    let (s, tasks) = call(&r, "GET", "/api/tasks?route=southline", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn repeated_route_param_joins_values() {
    let (r, store) = setup();
    let (s, created) = call(&r, "POST", "/api/tasks", Some(task_body("a,b"))).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(store.count("tasks_a,b").await, 1);

    let (s, tasks) = call(&r, "GET", "/api/tasks?route=a&route=b", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(tasks[0]["id"], created["id"]);

    let (s, assignments) = call(&r, "GET", "/api/assignments?route=a&route=b", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(assignments, json!([]));
}

#[tokio::test]
async fn empty_route_param_is_json_400() {
    let (r, _) = setup();
    let (s, body) = call(&r, "GET", "/api/tasks?route=", None).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Route is required" }));
}

#[tokio::test]
async fn task_endpoints_without_route_touch_no_store() {
    let store = CountingStore::default();
    let r = app_with_store(Arc::new(store.clone()), ApiVariant::Admin);

    let (s, body) = call(&r, "GET", "/api/tasks", None).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Route is required" }));

    let (s, _) = call(&r, "GET", "/api/tasks?route=", None).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);

    let (s, body) = call(&r, "DELETE", "/api/tasks/abc", None).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Route is required");

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn task_create_requires_all_fields() {
    let (r, store) = setup();
    let (s, body) = call(
        &r,
        "POST",
        "/api/tasks",
        Some(json!({ "title": "Entregar", "route": "northline" })),
    )
    .await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Task title, description, due date, and route are required");

    let (s, _) = call(&r, "POST", "/api/tasks", None).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert!(store.list_collections().await.unwrap().is_empty());
}

#[tokio::test]
async fn task_route_cannot_escape_collection() {
    let (r, store) = setup();
    let (s, body) = call(&r, "POST", "/api/tasks", Some(task_body("north/users"))).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid route name");
    assert!(store.list_collections().await.unwrap().is_empty());
}

#[tokio::test]
async fn task_delete_does_not_check_existence() {
    let (r, _) = setup();
    let (_, created) = call(&r, "POST", "/api/tasks", Some(task_body("northline"))).await;
    let id = created["id"].as_str().unwrap();

    let uri = format!("/api/tasks/{}?route=northline", id);
    let (s, body) = call(&r, "DELETE", &uri, None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted successfully" }));

    let (s, _) = call(&r, "DELETE", &uri, None).await;
    assert_eq!(s, StatusCode::OK);

    let (_, tasks) = call(&r, "GET", "/api/tasks?route=northline", None).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn legacy_task_lands_in_flat_collection() {
    let (r, store) = setup_variant(ApiVariant::Legacy);
    let (s, created) = call(
        &r,
        "POST",
        "/api/tasks",
        Some(json!({ "name": "Revisar frenos", "route": "northline" })),
    )
    .await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(created["route"], "northline");
    assert_eq!(store.count("tasks").await, 1);

    // La lectura sigue usando la colección por ruta
    let (_, tasks) = call(&r, "GET", "/api/tasks?route=northline", None).await;
    assert_eq!(tasks, json!([]));

    let (s, body) = call(&r, "POST", "/api/tasks", Some(json!({ "route": "northline" }))).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Task name and route are required");
}

// ── Vehicles ──

#[tokio::test]
async fn vehicle_create_and_list() {
    let (r, _) = setup();
    let (s, created) = call(&r, "POST", "/api/vehicles", Some(vehicle_body())).await;
    assert_eq!(s, StatusCode::CREATED);
    assert!(created["id"].is_string());
    assert_eq!(created["idealFor"], "pallets");

    let (s, vehicles) = call(&r, "GET", "/api/vehicles", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(vehicles.as_array().unwrap().len(), 1);
    assert_eq!(vehicles[0]["id"], created["id"]);
}

#[tokio::test]
async fn vehicle_missing_any_field_creates_nothing() {
    let (r, _) = setup();
    call(&r, "POST", "/api/vehicles", Some(vehicle_body())).await;

    for field in ["number", "length", "width", "height", "weight", "idealFor"] {
        let mut body = vehicle_body();
        body.as_object_mut().unwrap().remove(field);

        let (s, err) = call(&r, "POST", "/api/vehicles", Some(body)).await;
        assert_eq!(s, StatusCode::BAD_REQUEST, "missing {}", field);
        assert_eq!(err["error"], "All fields are required");
    }

    let (_, vehicles) = call(&r, "GET", "/api/vehicles", None).await;
    assert_eq!(vehicles.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn legacy_vehicle_fields() {
    let (r, _) = setup_variant(ApiVariant::Legacy);
    let (s, _) = call(&r, "POST", "/api/vehicles", Some(vehicle_body())).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);

    let (s, created) = call(
        &r,
        "POST",
        "/api/vehicles",
        Some(json!({ "number": "12", "type": "van", "length": 5, "width": 2, "name": "Blanca" })),
    )
    .await;
    assert_eq!(s, StatusCode::CREATED);
    assert!(created["createdAt"].is_string());
}

#[tokio::test]
async fn vehicle_delete_unknown_id_still_succeeds() {
    let (r, _) = setup();
    let (s, body) = call(&r, "DELETE", "/api/vehicles/does-not-exist", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Vehicle deleted successfully" }));
}

// ── Users ──

#[tokio::test]
async fn users_empty_is_not_found() {
    let (r, store) = setup();
    let (s, body) = call(&r, "GET", "/api/users", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No users found" }));

    store
        .add("users", doc(json!({ "name": "Lucía", "role": "driver" })))
        .await
        .unwrap();
    let (s, users) = call(&r, "GET", "/api/users", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(users[0]["name"], "Lucía");
}

// ── Routes ──

#[tokio::test]
async fn routes_are_derived_from_task_collections() {
    let (r, store) = setup();
    let (s, body) = call(&r, "GET", "/api/routes", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No routes found");

    call(&r, "POST", "/api/tasks", Some(task_body("northline"))).await;
    store.add("vehicles", doc(json!({ "number": "1" }))).await.unwrap();

    let (s, routes) = call(&r, "GET", "/api/routes", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(routes, json!([{ "id": "tasks_northline", "name": "northline" }]));
}

#[tokio::test]
async fn saved_route_returns_only_id() {
    let (r, store) = setup();
    let route = json!({ "name": "Centro", "stops": [{ "lat": 40.4, "lng": -3.7 }] });
    let (s, body) = call(&r, "POST", "/api/routes", Some(route)).await;
    assert_eq!(s, StatusCode::CREATED);
    assert_eq!(body.as_object().unwrap().len(), 1);

    let id = body["id"].as_str().unwrap();
    let saved = store.get("routes", id).await.unwrap().unwrap();
    assert_eq!(saved.data["stops"][0]["lat"], 40.4);

    // `routes` no empieza por `tasks_`, así que no aparece en el listado
    let (s, _) = call(&r, "GET", "/api/routes", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn saved_route_must_be_an_object() {
    let (r, _) = setup();
    let (s, body) = call(&r, "POST", "/api/routes", Some(json!(["a", "b"]))).await;
    assert_eq!(s, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to save route" }));
}

// ── Assignments ──

#[tokio::test]
async fn assignments_filter_by_route() {
    let (r, _) = setup();
    for (route, driver) in [("northline", "Lucía"), ("northline", "Marco"), ("southline", "Ana")] {
        let (s, _) = call(
            &r,
            "POST",
            "/api/assignments",
            Some(json!({ "route": route, "vehicle": "AB-123", "driver": driver })),
        )
        .await;
        assert_eq!(s, StatusCode::CREATED);
    }

    let (s, list) = call(&r, "GET", "/api/assignments?route=northline", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 2);

    let (s, list) = call(&r, "GET", "/api/assignments?route=eastline", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (s, _) = call(&r, "GET", "/api/assignments", None).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assignment_create_requires_fields() {
    let (r, store) = setup();
    let (s, body) = call(
        &r,
        "POST",
        "/api/assignments",
        Some(json!({ "route": "northline", "vehicle": "AB-123" })),
    )
    .await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Route, vehicle, and driver are required");
    assert_eq!(store.count("assignments").await, 0);
}

#[tokio::test]
async fn assignment_update_returns_pre_update_read() {
    let (r, store) = setup();
    let (_, created) = call(
        &r,
        "POST",
        "/api/assignments",
        Some(json!({ "route": "northline", "vehicle": "AB-123", "driver": "Lucía" })),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (s, updated) = call(
        &r,
        "PUT",
        &format!("/api/assignments/{}", id),
        Some(json!({ "route": "southline", "vehicle": "XY-987", "driver": "Marco" })),
    )
    .await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["driver"], "Lucía");
    assert_eq!(updated["assignedAt"], created["assignedAt"]);

    let stored = store.get("assignments", &id).await.unwrap().unwrap();
    assert_eq!(stored.data["driver"], "Marco");
    assert_eq!(stored.data["route"], "southline");
}

#[tokio::test]
async fn assignment_update_unknown_id_is_not_found() {
    let (r, store) = setup();
    call(
        &r,
        "POST",
        "/api/assignments",
        Some(json!({ "route": "northline", "vehicle": "AB-123", "driver": "Lucía" })),
    )
    .await;
    let before = store.list("assignments").await.unwrap();

    let (s, body) = call(
        &r,
        "PUT",
        "/api/assignments/does-not-exist",
        Some(json!({ "route": "southline", "vehicle": "XY-987", "driver": "Marco" })),
    )
    .await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Assignment not found" }));
    assert_eq!(store.list("assignments").await.unwrap(), before);

    let (s, _) = call(&r, "PUT", "/api/assignments/does-not-exist", Some(json!({}))).await;
    assert_eq!(s, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assignment_delete_checks_existence() {
    let (r, _) = setup();
    let (s, body) = call(&r, "DELETE", "/api/assignments/does-not-exist", None).await;
    assert_eq!(s, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Assignment not found");

    let (_, created) = call(
        &r,
        "POST",
        "/api/assignments",
        Some(json!({ "route": "northline", "vehicle": "AB-123", "driver": "Lucía" })),
    )
    .await;
    let uri = format!("/api/assignments/{}", created["id"].as_str().unwrap());
    let (s, body) = call(&r, "DELETE", &uri, None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Assignment deleted successfully" }));
}

#[tokio::test]
async fn concurrent_identical_assignments_are_not_deduplicated() {
    let (r, store) = setup();
    let body = json!({ "route": "northline", "vehicle": "AB-123", "driver": "Lucía" });

    let ((s1, a), (s2, b)) = futures::join!(
        call(&r, "POST", "/api/assignments", Some(body.clone())),
        call(&r, "POST", "/api/assignments", Some(body.clone())),
    );
    assert_eq!(s1, StatusCode::CREATED);
    assert_eq!(s2, StatusCode::CREATED);
    assert_ne!(a["id"], b["id"]);
    assert_eq!(store.count("assignments").await, 2);
}

// ── Ambient ──

#[tokio::test]
async fn health_reports_variant_and_store() {
    let (r, _) = setup_variant(ApiVariant::Legacy);
    let (s, body) = call(&r, "GET", "/health", None).await;
    assert_eq!(s, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["variant"], "legacy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let (r, _) = setup();
    let req = Request::builder()
        .uri("/api/vehicles")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let resp = r.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
