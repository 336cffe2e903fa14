use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use entity::{compliance_record, employee};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::ApiResult,
    extract::AdminSession,
    routes::AppState,
    validate::{optional_date, optional_text, required_text},
};

/// `employee_name` is null for company-wide records.
#[derive(Serialize)]
struct ComplianceRow {
    id: Uuid,
    employee_id: Option<Uuid>,
    record_type: String,
    description: Option<String>,
    status: String,
    compliance_date: Option<NaiveDate>,
    score: Option<i32>,
    notes: Option<String>,
    created_at: DateTimeWithTimeZone,
    employee_name: Option<String>,
}

fn joined_row(model: compliance_record::Model, employee_name: Option<String>) -> ComplianceRow {
    ComplianceRow {
        id: model.id,
        employee_id: model.employee_id,
        record_type: model.record_type,
        description: model.description,
        status: model.status,
        compliance_date: model.compliance_date,
        score: model.score,
        notes: model.notes,
        created_at: model.created_at,
        employee_name,
    }
}

pub async fn list(_session: AdminSession, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows: Vec<ComplianceRow> = compliance_record::Entity::find()
        .find_also_related(employee::Entity)
        .order_by_desc(compliance_record::Column::CreatedAt)
        .limit(50)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|(model, employee)| joined_row(model, employee.map(|e| e.name)))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Deserialize)]
pub struct ComplianceBody {
    record_type: Option<String>,
    employee_id: Option<String>,
    description: Option<String>,
    status: Option<String>,
    compliance_date: Option<String>,
    score: Option<i32>,
    notes: Option<String>,
}

pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<ComplianceBody>,
) -> ApiResult<Json<Value>> {
    let record_type = required_text(body.record_type.as_deref(), "record_type is required")?;
    let compliance_date = optional_date(
        body.compliance_date.as_deref(),
        "compliance_date must be a valid date",
    )?;

    let db = state.db.as_ref();
    // An unmatched badge makes this a company-wide record, not an error.
    let target = match optional_text(body.employee_id.as_deref()) {
        Some(badge) => {
            employee::Entity::find()
                .filter(employee::Column::EmployeeId.eq(badge))
                .one(db)
                .await?
        }
        None => None,
    };

    let created = compliance_record::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(target.as_ref().map(|e| e.id)),
        record_type: Set(record_type),
        description: Set(optional_text(body.description.as_deref())),
        status: Set(optional_text(body.status.as_deref()).unwrap_or_else(|| "pending".to_string())),
        compliance_date: Set(compliance_date),
        score: Set(body.score),
        notes: Set(optional_text(body.notes.as_deref())),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;

    let row = joined_row(created, target.map(|e| e.name));
    Ok(Json(json!({ "success": true, "data": row })))
}
