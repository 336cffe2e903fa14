use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use entity::admin;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    auth::{issue_token, verify_password, Role},
    error::{ApiError, ApiResult},
    extract::AdminSession,
    handlers::{expired_session_cookie, session_cookie},
    routes::AppState,
    validate::required_text,
};

#[derive(Deserialize)]
pub struct LoginBody {
    username: Option<String>,
    password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> ApiResult<(CookieJar, Json<Value>)> {
    let username = required_text(
        body.username.as_deref(),
        "username and password are required",
    )?;
    let password = required_text(
        body.password.as_deref(),
        "username and password are required",
    )?;

    let admin = admin::Entity::find()
        .filter(admin::Column::Username.eq(&username))
        .one(state.db.as_ref())
        .await?
        .ok_or(ApiError::Unauthorized("Invalid credentials"))?;
    if !verify_password(&password, &admin.password_hash) {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    let token = issue_token(admin.id, Role::Admin, &state.auth)
        .map_err(|err| ApiError::Internal(format!("token signing failed: {err}")))?;
    let jar = jar.add(session_cookie(&token, state.auth.session_ttl_minutes));
    Ok((
        jar,
        Json(json!({
            "success": true,
            "token": token,
            "admin": { "id": admin.id, "username": admin.username },
        })),
    ))
}

pub async fn me(AdminSession(admin): AdminSession) -> Json<Value> {
    Json(json!({
        "success": true,
        "admin": { "id": admin.id, "username": admin.username },
    }))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.remove(expired_session_cookie());
    (jar, Json(json!({ "success": true })))
}
