use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use entity::{admin, employee};
use sea_orm::EntityTrait;

use crate::{
    auth::{decode_token, Role, SessionClaims, SESSION_COOKIE},
    error::ApiError,
    routes::AppState,
};

/// Authenticated admin, resolved from the bearer token or session cookie.
pub struct AdminSession(pub admin::Model);

/// Authenticated portal employee.
pub struct EmployeeSession(pub employee::Model);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = session_claims(parts, state, Role::Admin)?;
        let admin = admin::Entity::find_by_id(claims.sub)
            .one(state.db.as_ref())
            .await?
            .ok_or(ApiError::Unauthorized("Invalid session"))?;
        Ok(AdminSession(admin))
    }
}

impl FromRequestParts<AppState> for EmployeeSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = session_claims(parts, state, Role::Employee)?;
        let employee = employee::Entity::find_by_id(claims.sub)
            .one(state.db.as_ref())
            .await?
            .ok_or(ApiError::Unauthorized("Invalid session"))?;
        Ok(EmployeeSession(employee))
    }
}

fn session_claims(
    parts: &Parts,
    state: &AppState,
    expected: Role,
) -> Result<SessionClaims, ApiError> {
    let token =
        extract_token(parts).ok_or(ApiError::Unauthorized("Authentication required"))?;
    let claims = decode_token(&token, &state.auth)
        .map_err(|_| ApiError::Unauthorized("Invalid session"))?;
    if claims.role() != Some(expected) {
        return Err(ApiError::Unauthorized("Invalid session"));
    }
    Ok(claims)
}

fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(text) = value.to_str() {
            if let Some(rest) = text.strip_prefix("Bearer ") {
                return Some(rest.trim().to_string());
            }
        }
    }
    if let Some(cookie) = parts.headers.get(header::COOKIE) {
        if let Ok(text) = cookie.to_str() {
            for part in text.split(';') {
                let trimmed = part.trim();
                if let Some(rest) = trimmed.strip_prefix(SESSION_COOKIE) {
                    if let Some(value) = rest.strip_prefix('=') {
                        return Some(value.trim().to_string());
                    }
                }
            }
        }
    }
    None
}
