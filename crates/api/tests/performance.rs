mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn admin_list_resolves_reviewer_and_employee_names() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/hr/performance", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["rating"], json!(4));
    assert_eq!(rows[0]["employee_id"], json!("EMP000001"));
    assert_eq!(rows[0]["employee_name"], json!("Amina Osei"));
    assert_eq!(rows[0]["reviewer_name"], json!("admin"));
    assert_eq!(rows[0]["status"], json!("completed"));
    assert_eq!(rows[0]["goals"], json!(["Mentor the new platform hire"]));
}

#[tokio::test]
async fn create_records_the_signed_in_reviewer() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;
    let priya = app.seeded.employee_badge("EMP000003").unwrap();

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/performance",
            Some(&token),
            Some(json!({
                "employee_id": "EMP000003",
                "rating": 5,
                "comments": "Ran the onboarding overhaul end to end.",
                "review_period_start": "2026-01-01",
                "review_period_end": "2026-06-30",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["rating"], json!(5));
    assert_eq!(body["data"]["employee_id"].as_str().unwrap(), priya.id.to_string());
    assert_eq!(
        body["data"]["reviewer_id"].as_str().unwrap(),
        app.seeded.admins[0].id.to_string()
    );
    assert_eq!(body["data"]["status"], json!("completed"));
    assert_eq!(body["data"]["goals"], json!([]));
}

#[tokio::test]
async fn ratings_are_bounded_one_to_five() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/performance",
            Some(&token),
            Some(json!({"employee_id": "EMP000003"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("employee_id and rating are required"));

    for rating in [0, 6] {
        let (status, body) = app
            .request(
                Method::POST,
                "/api/hr/performance",
                Some(&token),
                Some(json!({"employee_id": "EMP000003", "rating": rating})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "rating {rating}");
        assert_eq!(body["error"], json!("rating must be between 1 and 5"));
    }
}

#[tokio::test]
async fn create_checks_badge_and_period_dates() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/performance",
            Some(&token),
            Some(json!({"employee_id": "EMP404404", "rating": 3})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Employee not found"));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/performance",
            Some(&token),
            Some(json!({
                "employee_id": "EMP000003",
                "rating": 3,
                "review_period_start": "H1 2026",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("review_period_start must be a valid date"));
}

#[tokio::test]
async fn portal_list_shows_only_own_reviews() {
    let app = TestApp::seeded().await;
    let token = app.portal_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/performance", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], json!("EMP000001"));
    assert_eq!(rows[0]["reviewer_name"], json!("admin"));
    assert_eq!(rows[0]["rating"], json!(4));
}
