use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use entity::{employee, payroll};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    extract::{AdminSession, EmployeeSession},
    routes::AppState,
    validate::{parse_date, required_text},
};

/// Payroll row as stored, returned from the create endpoint.
#[derive(Serialize)]
struct PayrollRow {
    id: Uuid,
    employee_id: Uuid,
    pay_period_start: Option<NaiveDate>,
    pay_period_end: Option<NaiveDate>,
    gross_salary: Option<f64>,
    net_salary: Option<f64>,
    deductions: Value,
    status: &'static str,
    payment_date: Option<NaiveDate>,
    created_at: DateTimeWithTimeZone,
}

impl From<payroll::Model> for PayrollRow {
    fn from(model: payroll::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            pay_period_start: model.pay_period_start,
            pay_period_end: model.pay_period_end,
            gross_salary: model.gross_salary,
            net_salary: model.net_salary,
            deductions: model.deductions,
            status: model.status.as_str(),
            payment_date: model.payment_date,
            created_at: model.created_at,
        }
    }
}

/// List shape: `employee_id` carries the `EMP...` badge from the joined
/// employee, not the row's foreign key.
#[derive(Serialize)]
struct PayrollListRow {
    id: Uuid,
    employee_id: Option<String>,
    pay_period_start: Option<NaiveDate>,
    pay_period_end: Option<NaiveDate>,
    gross_salary: Option<f64>,
    net_salary: Option<f64>,
    deductions: Value,
    status: &'static str,
    payment_date: Option<NaiveDate>,
    created_at: DateTimeWithTimeZone,
    employee_name: Option<String>,
    department: Option<String>,
    position: Option<String>,
}

fn joined_row(model: payroll::Model, employee: Option<&employee::Model>) -> PayrollListRow {
    PayrollListRow {
        id: model.id,
        employee_id: employee.map(|e| e.employee_id.clone()),
        pay_period_start: model.pay_period_start,
        pay_period_end: model.pay_period_end,
        gross_salary: model.gross_salary,
        net_salary: model.net_salary,
        deductions: model.deductions,
        status: model.status.as_str(),
        payment_date: model.payment_date,
        created_at: model.created_at,
        employee_name: employee.map(|e| e.name.clone()),
        department: employee.and_then(|e| e.department.clone()),
        position: employee.and_then(|e| e.position.clone()),
    }
}

fn recency() -> SimpleExpr {
    Expr::cust("COALESCE(payroll.pay_period_start, payroll.created_at)")
}

pub async fn list(_session: AdminSession, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows: Vec<PayrollListRow> = payroll::Entity::find()
        .find_also_related(employee::Entity)
        .order_by(recency(), Order::Desc)
        .limit(100)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|(model, employee)| joined_row(model, employee.as_ref()))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Deserialize)]
pub struct PayrollBody {
    employee_id: Option<String>,
    pay_period_start: Option<String>,
    pay_period_end: Option<String>,
    gross_salary: Option<f64>,
    net_salary: Option<f64>,
    deductions: Option<Value>,
}

pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<PayrollBody>,
) -> ApiResult<Json<Value>> {
    let required =
        "employee_id, pay_period_start, pay_period_end, gross_salary, and net_salary are required";
    let badge = required_text(body.employee_id.as_deref(), required)?;
    let start_raw = required_text(body.pay_period_start.as_deref(), required)?;
    let end_raw = required_text(body.pay_period_end.as_deref(), required)?;
    let gross_salary = body
        .gross_salary
        .ok_or_else(|| ApiError::validation(required))?;
    let net_salary = body
        .net_salary
        .ok_or_else(|| ApiError::validation(required))?;
    let pay_period_start = parse_date(&start_raw, "pay_period_start must be a valid date")?;
    let pay_period_end = parse_date(&end_raw, "pay_period_end must be a valid date")?;

    let db = state.db.as_ref();
    let target = employee::Entity::find()
        .filter(employee::Column::EmployeeId.eq(badge))
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Employee"))?;

    let created = payroll::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(target.id),
        pay_period_start: Set(Some(pay_period_start)),
        pay_period_end: Set(Some(pay_period_end)),
        gross_salary: Set(Some(gross_salary)),
        net_salary: Set(Some(net_salary)),
        deductions: Set(body.deductions.unwrap_or_else(|| json!([]))),
        status: Set(payroll::Status::Pending),
        payment_date: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;

    Ok(Json(
        json!({ "success": true, "data": PayrollRow::from(created) }),
    ))
}

pub async fn list_own(
    EmployeeSession(me): EmployeeSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let rows: Vec<PayrollListRow> = payroll::Entity::find()
        .filter(payroll::Column::EmployeeId.eq(me.id))
        .order_by(recency(), Order::Desc)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|model| joined_row(model, Some(&me)))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}
