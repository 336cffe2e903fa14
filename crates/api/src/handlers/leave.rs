use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use entity::{employee, leave_request};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    extract::{AdminSession, EmployeeSession},
    routes::AppState,
    validate::{inclusive_days, optional_text, parse_date, required_text},
};

#[derive(Serialize)]
struct LeaveRow {
    id: Uuid,
    employee_id: Uuid,
    leave_type: &'static str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days_requested: i32,
    reason: Option<String>,
    status: &'static str,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl From<leave_request::Model> for LeaveRow {
    fn from(model: leave_request::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            leave_type: model.leave_type.as_str(),
            start_date: model.start_date,
            end_date: model.end_date,
            days_requested: model.days_requested,
            reason: model.reason,
            status: model.status.as_str(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// List shape: `employee_id` carries the `EMP...` badge from the join.
#[derive(Serialize)]
struct LeaveListRow {
    id: Uuid,
    employee_id: Option<String>,
    leave_type: &'static str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days_requested: i32,
    reason: Option<String>,
    status: &'static str,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
    employee_name: Option<String>,
    employee_email: Option<String>,
    department: Option<String>,
}

fn joined_row(model: leave_request::Model, employee: Option<&employee::Model>) -> LeaveListRow {
    LeaveListRow {
        id: model.id,
        employee_id: employee.map(|e| e.employee_id.clone()),
        leave_type: model.leave_type.as_str(),
        start_date: model.start_date,
        end_date: model.end_date,
        days_requested: model.days_requested,
        reason: model.reason,
        status: model.status.as_str(),
        created_at: model.created_at,
        updated_at: model.updated_at,
        employee_name: employee.map(|e| e.name.clone()),
        employee_email: employee.map(|e| e.email.clone()),
        department: employee.and_then(|e| e.department.clone()),
    }
}

pub async fn list(_session: AdminSession, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows: Vec<LeaveListRow> = leave_request::Entity::find()
        .find_also_related(employee::Entity)
        .order_by_desc(leave_request::Column::CreatedAt)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|(model, employee)| joined_row(model, employee.as_ref()))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Deserialize)]
pub struct DecisionBody {
    status: Option<String>,
}

pub async fn decide(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DecisionBody>,
) -> ApiResult<Json<Value>> {
    let status = optional_text(body.status.as_deref())
        .and_then(|value| leave_request::Status::from_str(&value))
        .ok_or_else(|| {
            ApiError::validation("Valid status (approved, rejected, pending) is required")
        })?;

    let db = state.db.as_ref();
    let existing = leave_request::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Leave request"))?;

    let mut active: leave_request::ActiveModel = existing.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(db).await?;

    Ok(Json(
        json!({ "success": true, "data": LeaveRow::from(updated) }),
    ))
}

pub async fn list_own(
    EmployeeSession(me): EmployeeSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let rows: Vec<LeaveListRow> = leave_request::Entity::find()
        .filter(leave_request::Column::EmployeeId.eq(me.id))
        .order_by_desc(leave_request::Column::CreatedAt)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|model| joined_row(model, Some(&me)))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Deserialize)]
pub struct RequestBody {
    leave_type: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    days_requested: Option<i32>,
    reason: Option<String>,
}

pub async fn request(
    EmployeeSession(me): EmployeeSession,
    State(state): State<AppState>,
    Json(body): Json<RequestBody>,
) -> ApiResult<Json<Value>> {
    let leave_type = optional_text(body.leave_type.as_deref())
        .and_then(|value| leave_request::LeaveType::from_str(&value))
        .ok_or_else(|| {
            ApiError::validation("Valid leave_type (vacation, sick, personal, other) is required")
        })?;
    let required = "start_date and end_date are required";
    let start_raw = required_text(body.start_date.as_deref(), required)?;
    let end_raw = required_text(body.end_date.as_deref(), required)?;
    let start_date = parse_date(&start_raw, "start_date must be a valid date")?;
    let end_date = parse_date(&end_raw, "end_date must be a valid date")?;
    if end_date < start_date {
        return Err(ApiError::validation("end_date must not precede start_date"));
    }
    let days_requested = match body.days_requested {
        Some(days) if days >= 1 => days,
        _ => inclusive_days(start_date, end_date),
    };

    let now: DateTimeWithTimeZone = Utc::now().into();
    let created = leave_request::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(me.id),
        leave_type: Set(leave_type),
        start_date: Set(start_date),
        end_date: Set(end_date),
        days_requested: Set(days_requested),
        reason: Set(optional_text(body.reason.as_deref())),
        status: Set(leave_request::Status::Pending),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(state.db.as_ref())
    .await?;

    Ok(Json(
        json!({ "success": true, "data": LeaveRow::from(created) }),
    ))
}
