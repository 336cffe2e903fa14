use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use entity::employee;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    auth::hash_password,
    error::{ApiError, ApiResult},
    extract::AdminSession,
    routes::AppState,
    validate::{normalize_email, optional_date, optional_text, required_text},
};

/// Profile shape shared by the admin endpoints and the portal. Never carries
/// the password hash.
#[derive(Serialize)]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub status: &'static str,
}

impl From<employee::Model> for EmployeeRow {
    fn from(model: employee::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            name: model.name,
            email: model.email,
            department: model.department,
            position: model.position,
            salary: model.salary,
            phone: model.phone,
            address: model.address,
            start_date: model.start_date,
            status: model.status.as_str(),
        }
    }
}

#[derive(Serialize)]
struct EmployeeListRow {
    #[serde(flatten)]
    profile: EmployeeRow,
    needs_password: bool,
}

impl From<employee::Model> for EmployeeListRow {
    fn from(model: employee::Model) -> Self {
        Self {
            needs_password: model.password_hash.is_none(),
            profile: EmployeeRow::from(model),
        }
    }
}

#[derive(Deserialize)]
pub struct EmployeeBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    department: Option<String>,
    position: Option<String>,
    salary: Option<f64>,
    phone: Option<String>,
    address: Option<String>,
    start_date: Option<String>,
    status: Option<String>,
}

pub async fn list(_session: AdminSession, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows: Vec<EmployeeListRow> = employee::Entity::find()
        .order_by_desc(employee::Column::CreatedAt)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(EmployeeListRow::from)
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<EmployeeBody>,
) -> ApiResult<Json<Value>> {
    let name = required_text(body.name.as_deref(), "name and email are required")?;
    let email = required_text(body.email.as_deref(), "name and email are required")?;
    let password = required_text(body.password.as_deref(), "password is required")?;
    let email = normalize_email(&email);
    let start_date = optional_date(body.start_date.as_deref(), "start_date must be a valid date")?;

    let db = state.db.as_ref();
    let duplicate = employee::Entity::find()
        .filter(employee::Column::Email.eq(&email))
        .one(db)
        .await?;
    if duplicate.is_some() {
        return Err(ApiError::validation("Email already exists"));
    }

    // Sequential EMP badge numbers, padded to six digits.
    let count = employee::Entity::find().count(db).await?;
    let badge = format!("EMP{:06}", count + 1);
    let password_hash = hash_password(&password)
        .map_err(|err| ApiError::Internal(format!("password hashing failed: {err}")))?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let created = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(badge),
        name: Set(name),
        email: Set(email),
        department: Set(optional_text(body.department.as_deref())),
        position: Set(optional_text(body.position.as_deref())),
        salary: Set(body.salary),
        phone: Set(optional_text(body.phone.as_deref())),
        address: Set(optional_text(body.address.as_deref())),
        start_date: Set(start_date),
        status: Set(employee::Status::Active),
        password_hash: Set(Some(password_hash)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "id": created.id,
            "employee_id": created.employee_id,
            "name": created.name,
            "email": created.email,
            "department": created.department,
            "position": created.position,
            "salary": created.salary,
            "start_date": created.start_date,
            "status": created.status.as_str(),
        },
    })))
}

pub async fn get(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let employee = employee::Entity::find_by_id(id)
        .one(state.db.as_ref())
        .await?
        .ok_or(ApiError::NotFound("Employee"))?;
    Ok(Json(
        json!({ "success": true, "data": EmployeeRow::from(employee) }),
    ))
}

pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<EmployeeBody>,
) -> ApiResult<Json<Value>> {
    let name = required_text(body.name.as_deref(), "name and email are required")?;
    let email = required_text(body.email.as_deref(), "name and email are required")?;
    let email = normalize_email(&email);
    let start_date = optional_date(body.start_date.as_deref(), "start_date must be a valid date")?;
    let status = match optional_text(body.status.as_deref()) {
        Some(raw) => employee::Status::from_str(&raw).ok_or_else(|| {
            ApiError::validation("Valid status (active, inactive) is required")
        })?,
        None => employee::Status::Active,
    };

    let db = state.db.as_ref();
    let existing = employee::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Employee"))?;
    let duplicate = employee::Entity::find()
        .filter(employee::Column::Email.eq(&email))
        .filter(employee::Column::Id.ne(id))
        .one(db)
        .await?;
    if duplicate.is_some() {
        return Err(ApiError::validation("Email already exists"));
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut active: employee::ActiveModel = existing.into();
    active.name = Set(name);
    active.email = Set(email);
    active.department = Set(optional_text(body.department.as_deref()));
    active.position = Set(optional_text(body.position.as_deref()));
    active.salary = Set(body.salary);
    active.phone = Set(optional_text(body.phone.as_deref()));
    active.address = Set(optional_text(body.address.as_deref()));
    active.start_date = Set(start_date);
    active.status = Set(status);
    if let Some(password) = optional_text(body.password.as_deref()) {
        let password_hash = hash_password(&password)
            .map_err(|err| ApiError::Internal(format!("password hashing failed: {err}")))?;
        active.password_hash = Set(Some(password_hash));
    }
    active.updated_at = Set(now);
    let updated = active.update(db).await?;

    Ok(Json(
        json!({ "success": true, "data": EmployeeRow::from(updated) }),
    ))
}

pub async fn remove(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let result = employee::Entity::delete_by_id(id)
        .exec(state.db.as_ref())
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Employee"));
    }
    Ok(Json(json!({ "success": true, "message": "Employee deleted" })))
}
