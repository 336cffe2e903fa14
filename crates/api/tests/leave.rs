mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn admin_list_joins_the_requesting_employee() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/hr/leave", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], json!("EMP000001"));
    assert_eq!(rows[0]["employee_name"], json!("Amina Osei"));
    assert_eq!(rows[0]["employee_email"], json!("amina.osei@hrsuite.test"));
    assert_eq!(rows[0]["leave_type"], json!("vacation"));
    assert_eq!(rows[0]["days_requested"], json!(5));
    assert_eq!(rows[0]["status"], json!("pending"));
}

#[tokio::test]
async fn decision_updates_the_request_status() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (_, list) = app
        .request(Method::GET, "/api/hr/leave", Some(&token), None)
        .await;
    let id = list["data"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/hr/leave/{id}"),
            Some(&token),
            Some(json!({"status": "approved"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["status"], json!("approved"));

    let (_, list) = app
        .request(Method::GET, "/api/hr/leave", Some(&token), None)
        .await;
    assert_eq!(list["data"][0]["status"], json!("approved"));
}

#[tokio::test]
async fn decision_validates_status_and_target() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (_, list) = app
        .request(Method::GET, "/api/hr/leave", Some(&token), None)
        .await;
    let id = list["data"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/hr/leave/{id}"),
            Some(&token),
            Some(json!({"status": "maybe"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Valid status (approved, rejected, pending) is required")
    );

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/hr/leave/{}", uuid::Uuid::new_v4()),
            Some(&token),
            Some(json!({"status": "approved"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Leave request not found"));
}

#[tokio::test]
async fn request_counts_days_inclusively_when_omitted() {
    let app = TestApp::seeded().await;
    let token = app.portal_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "sick",
                "start_date": "2026-09-14",
                "end_date": "2026-09-16",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["days_requested"], json!(3));
    assert_eq!(body["data"]["status"], json!("pending"));

    // Single-day absence.
    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "personal",
                "start_date": "2026-09-21",
                "end_date": "2026-09-21",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["days_requested"], json!(1));
}

#[tokio::test]
async fn request_trusts_a_positive_day_count() {
    let app = TestApp::seeded().await;
    let token = app.portal_token().await;

    // Half-week arrangements submit their own figure.
    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "vacation",
                "start_date": "2026-09-14",
                "end_date": "2026-09-18",
                "days_requested": 2,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["days_requested"], json!(2));

    // Zero and negative figures fall back to the computed span.
    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "vacation",
                "start_date": "2026-09-14",
                "end_date": "2026-09-18",
                "days_requested": 0,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["days_requested"], json!(5));
}

#[tokio::test]
async fn request_validates_type_and_range() {
    let app = TestApp::seeded().await;
    let token = app.portal_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "sabbatical",
                "start_date": "2026-09-14",
                "end_date": "2026-09-16",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Valid leave_type (vacation, sick, personal, other) is required")
    );

    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({"leave_type": "sick", "start_date": "2026-09-14"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("start_date and end_date are required"));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "sick",
                "start_date": "2026-09-16",
                "end_date": "2026-09-14",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("end_date must not precede start_date"));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "sick",
                "start_date": "soon",
                "end_date": "2026-09-16",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("start_date must be a valid date"));
}

#[tokio::test]
async fn portal_list_shows_only_own_requests() {
    let app = TestApp::seeded().await;
    let token = app.portal_token().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/api/leave/request",
            Some(&token),
            Some(json!({
                "leave_type": "other",
                "start_date": "2026-11-02",
                "end_date": "2026-11-03",
                "reason": "Moving day.",
            })),
        )
        .await;
    let new_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(Method::GET, "/api/leave", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|row| row["id"] == json!(new_id)));
    for row in rows {
        assert_eq!(row["employee_id"], json!("EMP000001"));
    }
}
