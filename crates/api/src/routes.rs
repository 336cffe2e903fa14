use std::sync::Arc;

use axum::{
    extract::State,
    http::{self, HeaderName, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{auth::AuthConfig, handlers};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub auth: Arc<AuthConfig>,
    pub cors_allowed_origins: Vec<String>,
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.cors_allowed_origins)),
        )
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/employee/login", post(handlers::portal::login))
        .route("/employee/me", get(handlers::portal::me))
        .route(
            "/employee/profile",
            get(handlers::portal::profile).put(handlers::portal::update_profile),
        )
        .route(
            "/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/employees/{id}",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::remove),
        )
        .route(
            "/hr/jobs",
            get(handlers::jobs::list).post(handlers::jobs::create),
        )
        .route(
            "/hr/jobs/{id}",
            put(handlers::jobs::update).delete(handlers::jobs::remove),
        )
        .route(
            "/recruitment/candidates",
            get(handlers::recruitment::list_candidates).post(handlers::recruitment::create_candidate),
        )
        .route(
            "/recruitment/interviews",
            get(handlers::recruitment::list_interviews).post(handlers::recruitment::create_interview),
        )
        .route(
            "/recruitment/interviews/{id}",
            put(handlers::recruitment::update_interview)
                .delete(handlers::recruitment::delete_interview),
        )
        .route(
            "/hr/payroll",
            get(handlers::payroll::list).post(handlers::payroll::create),
        )
        .route("/payroll", get(handlers::payroll::list_own))
        .route(
            "/hr/performance",
            get(handlers::performance::list).post(handlers::performance::create),
        )
        .route("/performance", get(handlers::performance::list_own))
        .route("/hr/leave", get(handlers::leave::list))
        .route("/hr/leave/{id}", put(handlers::leave::decide))
        .route("/leave", get(handlers::leave::list_own))
        .route("/leave/request", post(handlers::leave::request))
        .route(
            "/compliance",
            get(handlers::compliance::list).post(handlers::compliance::create),
        )
        .route("/banking", get(handlers::insights::banking))
        .route("/analytics", get(handlers::insights::analytics))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    let layer = CorsLayer::new()
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(allow_origin);
    // allow_credentials(true) cannot be combined with a wildcard origin.
    if origins.is_empty() {
        layer
    } else {
        layer.allow_credentials(true)
    }
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = state.db.ping().await.is_ok();
    Json(HealthResponse {
        ok: true,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}
