use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|a| a["id"].as_u64().expect("numeric id"))
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_reference_scenario() {
    let ctx = TestContext::new();

    let a = ctx
        .book(json!({ "patient": "Bob", "date": "2024-01-10", "time": "09:00" }))
        .await;
    a.assert_status(StatusCode::CREATED);
    assert_eq!(a.json::<Value>()["id"], 1);

    let b = ctx
        .book(json!({ "patient": "Bob", "date": "2024-01-10", "time": "09:00" }))
        .await;
    b.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        b.json::<Value>(),
        json!({ "error": "Appointment time slot is already booked" })
    );

    let c = ctx
        .book(json!({ "patient": "Ann", "date": "2024-01-11", "time": "10:00" }))
        .await;
    c.assert_status(StatusCode::CREATED);
    assert_eq!(c.json::<Value>()["id"], 2);

    let window = ctx
        .server
        .get("/appointments/byTimePeriod")
        .add_query_param("startDate", "2024-01-10")
        .add_query_param("startTime", "09:30")
        .await;
    window.assert_status_ok();
    assert_eq!(
        window.json::<Value>(),
        json!([{ "id": 2, "patient": "Ann", "date": "2024-01-11", "time": "10:00" }])
    );

    let deleted = ctx.server.delete("/appointments/1").await;
    deleted.assert_status_ok();
    assert_eq!(
        deleted.json::<Value>(),
        json!({ "message": "Appointment deleted successfully" })
    );

    let gone = ctx.server.get("/appointments/1").await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(gone.json::<Value>(), json!({ "error": "Appointment not found" }));
}

#[tokio::test]
async fn test_create_echoes_extra_fields() {
    let ctx = TestContext::new();

    let response = ctx
        .book(json!({
            "id": 42,
            "patient": "Bob",
            "date": "2024-01-10",
            "time": "09:00",
            "service": "checkup",
            "insurance": { "provider": "Acme", "covered": true },
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": 1,
            "patient": "Bob",
            "date": "2024-01-10",
            "time": "09:00",
            "service": "checkup",
            "insurance": { "provider": "Acme", "covered": true },
        })
    );
}

#[tokio::test]
async fn test_create_rejects_invalid_bodies() {
    let ctx = TestContext::new();

    let missing_time = ctx.book(json!({ "patient": "Bob", "date": "2024-01-10" })).await;
    missing_time.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        missing_time.json::<Value>(),
        json!({ "error": "Invalid request body" })
    );

    let not_json = ctx
        .server
        .post("/appointments")
        .text("{ patient: Bob")
        .content_type("application/json")
        .await;
    not_json.assert_status(StatusCode::BAD_REQUEST);

    let plain_text = ctx.server.post("/appointments").text("Bob at nine").await;
    plain_text.assert_status(StatusCode::BAD_REQUEST);

    let listing = ctx.server.get("/appointments").await;
    assert_eq!(listing.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let ctx = TestContext::new();
    ctx.book_ok("Cy", "2024-03-01", "09:00").await;
    ctx.book_ok("Ann", "2024-01-01", "09:00").await;
    ctx.book_ok("Bob", "2024-02-01", "09:00").await;

    let response = ctx.server.get("/appointments").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let patients: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["patient"].as_str().unwrap())
        .collect();
    assert_eq!(patients, vec!["Cy", "Ann", "Bob"]);
}

#[tokio::test]
async fn test_get_by_id() {
    let ctx = TestContext::new();
    ctx.book_ok("Bob", "2024-01-10", "09:00").await;

    let found = ctx.server.get("/appointments/1").await;
    found.assert_status_ok();
    assert_eq!(found.json::<Value>()["patient"], "Bob");

    ctx.server
        .get("/appointments/2")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .get("/appointments/first")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_by_service() {
    let ctx = TestContext::new();
    ctx.book(json!({ "patient": "Bob", "date": "2024-01-10", "time": "09:00", "service": "dental" }))
        .await;
    ctx.book(json!({ "patient": "Ann", "date": "2024-01-11", "time": "09:00", "service": "eye exam" }))
        .await;
    ctx.book(json!({ "patient": "Cy", "date": "2024-01-12", "time": "09:00", "service": "dental" }))
        .await;

    let dental = ctx
        .server
        .get("/appointments/byService")
        .add_query_param("service", "dental")
        .await;
    dental.assert_status_ok();
    assert_eq!(ids(&dental.json::<Value>()), vec![1, 3]);

    let eye = ctx
        .server
        .get("/appointments/byService")
        .add_query_param("service", "eye exam")
        .await;
    assert_eq!(ids(&eye.json::<Value>()), vec![2]);

    let none = ctx
        .server
        .get("/appointments/byService")
        .add_query_param("service", "surgery")
        .await;
    none.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        none.json::<Value>(),
        json!({ "error": "Appointments not found for the specified service" })
    );
}

#[tokio::test]
async fn test_by_name() {
    let ctx = TestContext::new();
    ctx.book_ok("Bob", "2024-01-10", "09:00").await;
    ctx.book_ok("Ann", "2024-01-11", "09:00").await;
    ctx.book_ok("Bob", "2024-01-12", "09:00").await;

    let bobs = ctx
        .server
        .get("/appointments/byName")
        .add_query_param("patient", "Bob")
        .await;
    bobs.assert_status_ok();
    assert_eq!(ids(&bobs.json::<Value>()), vec![1, 3]);

    let missing = ctx.server.get("/appointments/byName").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        missing.json::<Value>(),
        json!({ "error": "Appointments not found for the specified patient name" })
    );
}

#[tokio::test]
async fn test_by_time_period_without_matches() {
    let ctx = TestContext::new();
    ctx.book_ok("Bob", "2024-01-10", "09:00").await;

    let late = ctx
        .server
        .get("/appointments/byTimePeriod")
        .add_query_param("startDate", "2024-01-10")
        .add_query_param("startTime", "09:00:01")
        .await;
    late.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        late.json::<Value>(),
        json!({ "error": "Appointments not found for the specified time period" })
    );

    ctx.server
        .get("/appointments/byTimePeriod")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_merges_and_keeps_id() {
    let ctx = TestContext::new();
    ctx.book(json!({
        "patient": "Bob",
        "date": "2024-01-10",
        "time": "09:00",
        "service": "dental",
        "room": 4,
    }))
    .await;

    let response = ctx
        .server
        .put("/appointments/1")
        .json(&json!({
            "id": 9,
            "patient": "Bob",
            "date": "2024-01-15",
            "time": "14:30",
            "notes": "rescheduled",
        }))
        .await;

    response.assert_status_ok();
    let expected = json!({
        "id": 1,
        "patient": "Bob",
        "date": "2024-01-15",
        "time": "14:30",
        "service": "dental",
        "room": 4,
        "notes": "rescheduled",
    });
    assert_eq!(response.json::<Value>(), expected);
    assert_eq!(ctx.server.get("/appointments/1").await.json::<Value>(), expected);
}

#[tokio::test]
async fn test_update_errors() {
    let ctx = TestContext::new();
    ctx.book_ok("Bob", "2024-01-10", "09:00").await;

    let unknown = ctx
        .server
        .put("/appointments/7")
        .json(&json!({ "patient": "Bob", "date": "2024-01-10", "time": "09:00" }))
        .await;
    unknown.assert_status(StatusCode::NOT_FOUND);

    let partial = ctx
        .server
        .put("/appointments/1")
        .json(&json!({ "date": "2024-01-11" }))
        .await;
    partial.assert_status(StatusCode::BAD_REQUEST);

    // Body validation comes before the id lookup.
    let both = ctx
        .server
        .put("/appointments/7")
        .json(&json!({ "patient": "" }))
        .await;
    both.assert_status(StatusCode::BAD_REQUEST);

    let unchanged = ctx.server.get("/appointments/1").await.json::<Value>();
    assert_eq!(unchanged["date"], "2024-01-10");
}

#[tokio::test]
async fn test_delete_unknown_and_repeat() {
    let ctx = TestContext::new();
    ctx.book_ok("Bob", "2024-01-10", "09:00").await;
    ctx.book_ok("Ann", "2024-01-11", "09:00").await;

    ctx.server
        .delete("/appointments/3")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server.delete("/appointments/1").await.assert_status_ok();
    ctx.server
        .delete("/appointments/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let survivor = ctx.server.get("/appointments/2").await;
    survivor.assert_status_ok();
    assert_eq!(survivor.json::<Value>()["patient"], "Ann");
}

#[tokio::test]
async fn test_health_reports_store_size() {
    let ctx = TestContext::new();
    ctx.book_ok("Bob", "2024-01-10", "09:00").await;

    let health = ctx.server.get("/health").await;

    health.assert_status_ok();
    assert_eq!(health.json::<Value>(), json!({ "status": "ok", "appointments": 1 }));
}

#[tokio::test]
async fn test_create_with_null_service_stores_no_service() {
    let ctx = TestContext::new();

    let response = ctx
        .book(json!({ "patient": "Bob", "date": "2024-01-10", "time": "09:00", "service": null }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "patient": "Bob", "date": "2024-01-10", "time": "09:00" })
    );

    let unserviced = ctx.server.get("/appointments/byService").await;
    unserviced.assert_status_ok();
    assert_eq!(ids(&unserviced.json::<Value>()), vec![1]);
}
