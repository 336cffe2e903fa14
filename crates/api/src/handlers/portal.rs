use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::{NaiveDate, Utc};
use entity::employee;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    auth::{issue_token, verify_password, Role},
    error::{ApiError, ApiResult},
    extract::EmployeeSession,
    handlers::{employees::EmployeeRow, session_cookie},
    routes::AppState,
    validate::{normalize_email, optional_text, required_text},
};

#[derive(Deserialize)]
pub struct PortalLoginBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct MeRow {
    id: Uuid,
    employee_id: String,
    name: String,
    email: String,
    department: Option<String>,
    position: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    start_date: Option<NaiveDate>,
    status: &'static str,
}

impl From<employee::Model> for MeRow {
    fn from(model: employee::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            name: model.name,
            email: model.email,
            department: model.department,
            position: model.position,
            phone: model.phone,
            address: model.address,
            start_date: model.start_date,
            status: model.status.as_str(),
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<PortalLoginBody>,
) -> ApiResult<(CookieJar, Json<Value>)> {
    let email = required_text(body.email.as_deref(), "email and password are required")?;
    let password = required_text(body.password.as_deref(), "email and password are required")?;
    let email = normalize_email(&email);

    let employee = employee::Entity::find()
        .filter(employee::Column::Email.eq(&email))
        .one(state.db.as_ref())
        .await?
        .ok_or(ApiError::Unauthorized("Invalid credentials"))?;
    // No portal password provisioned yet counts as a failed login, not a 404.
    let Some(hash) = employee.password_hash.as_deref() else {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    };
    if !verify_password(&password, hash) {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    let token = issue_token(employee.id, Role::Employee, &state.auth)
        .map_err(|err| ApiError::Internal(format!("token signing failed: {err}")))?;
    let jar = jar.add(session_cookie(&token, state.auth.session_ttl_minutes));
    Ok((
        jar,
        Json(json!({
            "success": true,
            "token": token,
            "employee": {
                "id": employee.id,
                "employee_id": employee.employee_id,
                "name": employee.name,
                "email": employee.email,
            },
        })),
    ))
}

pub async fn me(EmployeeSession(employee): EmployeeSession) -> Json<Value> {
    Json(json!({ "success": true, "employee": MeRow::from(employee) }))
}

pub async fn profile(EmployeeSession(employee): EmployeeSession) -> Json<Value> {
    Json(json!({ "success": true, "data": EmployeeRow::from(employee) }))
}

#[derive(Deserialize)]
pub struct ProfileBody {
    phone: Option<String>,
    address: Option<String>,
}

pub async fn update_profile(
    EmployeeSession(employee): EmployeeSession,
    State(state): State<AppState>,
    Json(body): Json<ProfileBody>,
) -> ApiResult<Json<Value>> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut active: employee::ActiveModel = employee.into();
    active.phone = Set(optional_text(body.phone.as_deref()));
    active.address = Set(optional_text(body.address.as_deref()));
    active.updated_at = Set(now);
    let updated = active.update(state.db.as_ref()).await?;
    Ok(Json(
        json!({ "success": true, "data": EmployeeRow::from(updated) }),
    ))
}
