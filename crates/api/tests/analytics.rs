mod common;

use axum::http::{Method, StatusCode};
use entity::compliance_record;
use sea_orm::EntityTrait;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn banking_totals_cover_every_active_employee() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/banking", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();

    // Alphabetical, actives only: Marco is inactive and stays out.
    let names: Vec<_> = rows.iter().map(|row| row["name"].clone()).collect();
    assert_eq!(
        names,
        vec![json!("Amina Osei"), json!("Jonas Berg"), json!("Priya Nair")]
    );

    // Only the settled run counts toward the total.
    assert_eq!(rows[0]["employee_id"], json!("EMP000001"));
    assert_eq!(rows[0]["total_paid"], json!(6125.0));
    assert_eq!(rows[0]["payment_count"], json!(1));
    assert_eq!(rows[0]["salary"], json!(98000.0));

    // Pending-only and payroll-free employees still appear, zeroed.
    assert_eq!(rows[1]["total_paid"], json!(0.0));
    assert_eq!(rows[1]["payment_count"], json!(0));
    assert_eq!(rows[2]["total_paid"], json!(0.0));
    assert_eq!(rows[2]["payment_count"], json!(0));
}

#[tokio::test]
async fn banking_requires_an_admin_session() {
    let app = TestApp::seeded().await;
    let portal = app.portal_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/banking", Some(&portal), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid session"));
}

#[tokio::test]
async fn analytics_counts_the_dashboard_tiles() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/analytics", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalEmployees"], json!(3));
    assert_eq!(body["data"]["activeJobs"], json!(1));
    assert_eq!(body["data"]["pendingInterviews"], json!(1));
    // Mean of the 92 and 84 scores.
    assert_eq!(body["data"]["complianceScore"], json!(88));
}

#[tokio::test]
async fn compliance_score_defaults_to_full_marks() {
    let app = TestApp::seeded().await;
    let token = app.admin_token().await;

    compliance_record::Entity::delete_many()
        .exec(app.db.as_ref())
        .await
        .unwrap();

    let (status, body) = app
        .request(Method::GET, "/api/analytics", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["complianceScore"], json!(100));
}

#[tokio::test]
async fn health_is_public_and_reports_the_database() {
    let app = TestApp::seeded().await;

    let (status, body) = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["db_ok"], json!(true));
    assert!(body["version"].as_str().is_some());
}
