
use agenda_common::tenant::TENANT_HEADER;
use agenda_db::SqlScheduleStore;
use agenda_scheduling::handlers::SchedulingState;
use agenda_scheduling::routes::routes;
use agenda_scheduling::BookingTransactor;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fixtures::{create_mock_config, seeded_store};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(store: SqlScheduleStore) -> Router {
    routes(Arc::new(SchedulingState {
        config: create_mock_config(),
        booking: BookingTransactor::new(store.clone()),
        store,
    }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(TENANT_HEADER, "1");
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn booking(start: &str, end: &str, client: &str) -> Value {
    json!({
        "professionalId": 5,
        "date": "2025-06-03",
        "start": start,
        "end": end,
        "serviceId": 1,
        "clientId": 40,
        "clientName": client,
        "clientPhone": "+54 9 11 5555-0000",
        "amountDue": 2500.0
    })
}

const AVAILABILITY: &str = "/availability?professionalId=5&date=2025-06-03&durationMinutes=60";

fn slot_starts(body: &Value) -> Vec<String> {
    body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot["start"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_needs_no_tenant() {
    let (_dir, store) = seeded_store().await;
    let response = app(store)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_tenant_header_is_bad_request() {
    let (_dir, store) = seeded_store().await;
    let response = app(store)
        .oneshot(Request::builder().uri(AVAILABILITY).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_availability_endpoint_lists_split_day() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);

    let (status, body) = send(&app, "GET", AVAILABILITY, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        slot_starts(&body),
        ["09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00"]
    );
    assert_eq!(body["slots"][0]["origin"], "regular");
}

#[tokio::test]
async fn test_non_positive_duration_is_bad_request() {
    let (_dir, store) = seeded_store().await;
    let (status, body) = send(
        &app(store),
        "GET",
        "/availability?professionalId=5&date=2025-06-03&durationMinutes=0",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn test_double_booking_returns_conflict() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);

    let (status, created) = send(
        &app,
        "POST",
        "/appointments",
        Some(booking("10:00", "11:00", "Ana")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");

    let (status, body) = send(
        &app,
        "POST",
        "/appointments",
        Some(booking("10:00", "11:00", "Bea")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("this time is already reserved"));

    let (_, body) = send(&app, "GET", AVAILABILITY, None).await;
    assert!(!slot_starts(&body).contains(&"10:00".to_string()));
}

#[tokio::test]
async fn test_cancel_via_status_and_delete_is_gone() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);

    let (_, created) = send(
        &app,
        "POST",
        "/appointments",
        Some(booking("10:00", "11:00", "Ana")),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/appointments/{}", id), None).await;
    assert_eq!(status, StatusCode::GONE);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/appointments/{}/status", id),
        Some(json!({"status": "cancelled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "cancelled");

    let (_, body) = send(&app, "GET", AVAILABILITY, None).await;
    assert!(slot_starts(&body).contains(&"10:00".to_string()));

    let (status, _) = send(&app, "GET", "/appointments/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_overtime_and_block_shape_availability() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);

    let (status, overtime) = send(
        &app,
        "POST",
        "/admin/overtime",
        Some(json!({"professionalId": 5, "date": "2025-06-03", "start": "18:00", "end": "19:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "POST",
        "/admin/blocked",
        Some(json!({
            "professionalId": 5,
            "date": "2025-06-03",
            "start": "15:00",
            "end": "16:00",
            "reason": "dentist"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", AVAILABILITY, None).await;
    let starts = slot_starts(&body);
    assert!(!starts.contains(&"15:00".to_string()));
    assert_eq!(starts.last().map(String::as_str), Some("18:00"));
    assert_eq!(body["slots"][7]["origin"], "overtime");

    let (status, listed) = send(
        &app,
        "GET",
        "/admin/overtime?professionalId=5&date=2025-06-03",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["windows"].as_array().unwrap().len(), 1);

    let id = overtime["id"].as_i64().unwrap();
    let (status, _) = send(&app, "DELETE", &format!("/admin/overtime/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/admin/overtime/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_agenda_classifies_entries() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);
    send(&app, "POST", "/appointments", Some(booking("10:00", "11:00", "Ana"))).await;

    // grid defaults to the configured 60 minutes
    let (status, body) = send(
        &app,
        "GET",
        "/admin/agenda?professionalId=5&date=2025-06-03",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["durationMinutes"], 60);
    let entries = body["entries"].as_array().unwrap();
    let ten = entries.iter().find(|e| e["start"] == "10:00").unwrap();
    assert_eq!(ten["state"], "booked");
    assert_eq!(ten["appointment"]["clientName"], "Ana");
    let gap = entries.iter().find(|e| e["start"] == "13:00").unwrap();
    assert_eq!(gap["state"], "closed");
}

#[tokio::test]
async fn test_working_hours_admin() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);

    let (status, stored) = send(
        &app,
        "PUT",
        "/admin/professionals/5/working-hours/Saturday",
        Some(json!({"morningStart": "9:00", "morningEnd": "12:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["dayOfWeek"], "saturday");
    assert_eq!(stored["morningStart"], "09:00");
    assert_eq!(stored["active"], true);

    let (status, _) = send(
        &app,
        "PUT",
        "/admin/professionals/5/working-hours/saturday",
        Some(json!({"morningStart": "09:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PUT",
        "/admin/professionals/5/working-hours/sabado",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, public) = send(&app, "GET", "/professionals/5/working-hours", None).await;
    let days: Vec<&str> = public["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["dayOfWeek"].as_str().unwrap())
        .collect();
    assert_eq!(days, ["tuesday", "saturday"]);
}

#[tokio::test]
async fn test_appointment_listing_filters() {
    let (_dir, store) = seeded_store().await;
    let app = app(store);
    send(&app, "POST", "/appointments", Some(booking("09:00", "10:00", "Ana"))).await;
    send(&app, "POST", "/appointments", Some(booking("14:00", "15:00", "Bea"))).await;

    let (status, body) = send(
        &app,
        "GET",
        "/appointments?professionalId=5&status=pending&order=asc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["appointments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["clientName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ana", "Bea"]);

    let (status, _) = send(&app, "GET", "/appointments?status=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, history) = send(&app, "GET", "/clients/40/appointments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["appointments"].as_array().unwrap().len(), 2);
}
