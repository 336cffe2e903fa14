use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::auth::SESSION_COOKIE;

pub mod auth;
pub mod compliance;
pub mod employees;
pub mod insights;
pub mod jobs;
pub mod leave;
pub mod payroll;
pub mod performance;
pub mod portal;
pub mod recruitment;

pub(crate) fn session_cookie(token: &str, ttl_minutes: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(ttl_minutes))
        .build()
}

pub(crate) fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .build()
}
