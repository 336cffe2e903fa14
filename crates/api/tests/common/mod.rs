use std::sync::Arc;

use api::auth::AuthConfig;
use api::seed::{seed_hr_demo, SeededHrRecords};
use api::{build_router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use serde_json::{json, Value};
use tower::ServiceExt;

/// In-memory application with the demo dataset loaded, driven through the
/// real router via `oneshot`.
pub struct TestApp {
    pub db: Arc<DatabaseConnection>,
    pub router: Router,
    pub seeded: SeededHrRecords,
}

impl TestApp {
    pub async fn seeded() -> Self {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        bootstrap_sqlite(&conn).await;
        let seeded = seed_hr_demo(&conn)
            .await
            .unwrap()
            .expect("fresh database accepts the demo dataset");
        let db = Arc::new(conn);
        let router = build_router(AppState {
            db: db.clone(),
            auth: Arc::new(AuthConfig {
                jwt_secret: "test-secret".to_string(),
                session_ttl_minutes: 60,
            }),
            cors_allowed_origins: Vec::new(),
        });
        Self { db, router, seeded }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn admin_token(&self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"username": "admin", "password": "adminpass"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "admin login: {body}");
        body["token"].as_str().expect("login token").to_string()
    }

    pub async fn portal_token(&self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/employee/login",
                None,
                Some(json!({
                    "email": "amina.osei@hrsuite.test",
                    "password": "employeepass",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "portal login: {body}");
        body["token"].as_str().expect("login token").to_string()
    }
}

async fn bootstrap_sqlite(db: &DatabaseConnection) {
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "PRAGMA foreign_keys = ON;",
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE admins (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE employees (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT,
            department TEXT,
            position TEXT,
            salary REAL,
            phone TEXT,
            address TEXT,
            start_date TEXT,
            status TEXT NOT NULL DEFAULT 'active',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE jobs (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            department TEXT NOT NULL,
            location TEXT NOT NULL,
            employment_type TEXT,
            salary_range TEXT,
            description TEXT,
            requirements TEXT,
            benefits TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL DEFAULT 'active',
            posted_date TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE candidates (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            job_id TEXT,
            resume_url TEXT,
            notes TEXT,
            status TEXT NOT NULL DEFAULT 'applied',
            applied_date TEXT NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY(job_id) REFERENCES jobs(id) ON DELETE SET NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE interviews (
            id TEXT PRIMARY KEY,
            candidate_id TEXT NOT NULL,
            interviewer_id TEXT,
            scheduled_date TEXT,
            notes TEXT,
            status TEXT NOT NULL DEFAULT 'scheduled',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY(candidate_id) REFERENCES candidates(id) ON DELETE CASCADE,
            FOREIGN KEY(interviewer_id) REFERENCES admins(id) ON DELETE SET NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE payroll (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL,
            pay_period_start TEXT,
            pay_period_end TEXT,
            gross_salary REAL,
            net_salary REAL,
            deductions TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL DEFAULT 'pending',
            payment_date TEXT,
            created_at TEXT NOT NULL,
            FOREIGN KEY(employee_id) REFERENCES employees(id) ON DELETE CASCADE
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE performance_reviews (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL,
            reviewer_id TEXT,
            review_period_start TEXT,
            review_period_end TEXT,
            rating INTEGER,
            comments TEXT,
            goals TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL DEFAULT 'completed',
            created_at TEXT NOT NULL,
            FOREIGN KEY(employee_id) REFERENCES employees(id) ON DELETE CASCADE,
            FOREIGN KEY(reviewer_id) REFERENCES admins(id) ON DELETE SET NULL
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE leave_requests (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL,
            leave_type TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            days_requested INTEGER NOT NULL,
            reason TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY(employee_id) REFERENCES employees(id) ON DELETE CASCADE
        );
        "#,
    ))
    .await
    .unwrap();

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE compliance_records (
            id TEXT PRIMARY KEY,
            employee_id TEXT,
            record_type TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            compliance_date TEXT,
            score INTEGER,
            notes TEXT,
            created_at TEXT NOT NULL,
            FOREIGN KEY(employee_id) REFERENCES employees(id) ON DELETE SET NULL
        );
        "#,
    ))
    .await
    .unwrap();
}
