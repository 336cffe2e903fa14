mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn list_orders_by_posting_date() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/hr/jobs", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["title"], json!("Backend Engineer"));
    assert_eq!(rows[0]["status"], json!("active"));
    assert_eq!(rows[0]["employment_type"], json!("full-time"));
    assert_eq!(
        rows[0]["benefits"],
        json!(["Health insurance", "Remote stipend"])
    );

    assert_eq!(rows[1]["title"], json!("Office Manager"));
    assert_eq!(rows[1]["status"], json!("closed"));
    assert_eq!(rows[1]["employment_type"], json!("part-time"));
}

#[tokio::test]
async fn admin_routes_reject_portal_sessions() {
    let app = TestApp::seeded().await;
    let portal = app.portal_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/hr/jobs", Some(&portal), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid session"));
}

#[tokio::test]
async fn create_defaults_to_an_active_posting() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/jobs",
            Some(&token),
            Some(json!({
                "title": "Payroll Specialist",
                "department": "Finance",
                "location": "Remote",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["status"], json!("active"));
    assert_eq!(body["data"]["benefits"], json!([]));
    assert!(body["data"]["employment_type"].is_null());
    assert!(body["data"]["posted_date"].as_str().is_some());
}

#[tokio::test]
async fn create_validates_the_payload() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/jobs",
            Some(&token),
            Some(json!({"title": "Recruiter", "department": "People Ops"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("title, department, and location are required"));

    let (status, body) = app
        .request(
            Method::POST,
            "/api/hr/jobs",
            Some(&token),
            Some(json!({
                "title": "Recruiter",
                "department": "People Ops",
                "location": "Remote",
                "employment_type": "gig",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Valid employment_type (full-time, part-time, contract, internship) is required")
    );
}

#[tokio::test]
async fn update_replaces_the_posting() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;
    let backend = app.seeded.job_titled("Backend Engineer").unwrap();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/hr/jobs/{}", backend.id),
            Some(&token),
            Some(json!({
                "title": "Staff Backend Engineer",
                "department": "Engineering",
                "location": "Remote",
                "employment_type": "contract",
                "status": "draft",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["title"], json!("Staff Backend Engineer"));
    assert_eq!(body["data"]["status"], json!("draft"));
    assert_eq!(body["data"]["employment_type"], json!("contract"));
    // Replaced wholesale: omitted fields fall back to their defaults.
    assert!(body["data"]["salary_range"].is_null());
    assert_eq!(body["data"]["benefits"], json!([]));

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/hr/jobs/{}", backend.id),
            Some(&token),
            Some(json!({
                "title": "Staff Backend Engineer",
                "department": "Engineering",
                "location": "Remote",
                "status": "archived",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Valid status (active, draft, closed) is required")
    );

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/hr/jobs/{}", uuid::Uuid::new_v4()),
            Some(&token),
            Some(json!({
                "title": "Ghost",
                "department": "Nowhere",
                "location": "Nowhere",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Job not found"));
}

#[tokio::test]
async fn delete_removes_the_posting() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;
    let office = app.seeded.job_titled("Office Manager").unwrap();

    let (status, body) = app
        .request(
            Method::DELETE,
            &format!("/api/hr/jobs/{}", office.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Job deleted"));

    let (status, body) = app
        .request(
            Method::DELETE,
            &format!("/api/hr/jobs/{}", office.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Job not found"));
}

#[tokio::test]
async fn deleting_a_posting_detaches_its_candidates() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;
    let backend = app.seeded.job_titled("Backend Engineer").unwrap();

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/hr/jobs/{}", backend.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(Method::GET, "/api/recruitment/candidates", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    let dana = rows
        .iter()
        .find(|row| row["email"] == json!("dana.whitfield@example.test"))
        .unwrap();
    assert!(dana["job_id"].is_null());
    assert!(dana["job_title"].is_null());
}
