use axum::{extract::State, Json};
use entity::{compliance_record, employee, interview, job, payroll};
use sea_orm::sea_query::{Expr, Func, IntoCondition};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{error::ApiResult, extract::AdminSession, routes::AppState};

#[derive(Debug, FromQueryResult, Serialize)]
struct BankingRow {
    id: Uuid,
    employee_id: String,
    name: String,
    email: String,
    department: Option<String>,
    position: Option<String>,
    salary: Option<f64>,
    total_paid: f64,
    payment_count: i64,
}

/// Paid-out totals per active employee. Employees without a single paid
/// payroll row still appear, with zeros.
pub async fn banking(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let rows = employee::Entity::find()
        .select_only()
        .column(employee::Column::Id)
        .column(employee::Column::EmployeeId)
        .column(employee::Column::Name)
        .column(employee::Column::Email)
        .column(employee::Column::Department)
        .column(employee::Column::Position)
        .column(employee::Column::Salary)
        .expr_as_(
            Func::coalesce([
                payroll::Column::NetSalary.sum(),
                Expr::value(0.0_f64),
            ]),
            "total_paid",
        )
        .expr_as_(payroll::Column::Id.count(), "payment_count")
        .join(
            JoinType::LeftJoin,
            employee::Relation::Payroll
                .def()
                .on_condition(|_left, right| {
                    Expr::col((right, payroll::Column::Status))
                        .eq(payroll::Status::Paid)
                        .into_condition()
                }),
        )
        .filter(employee::Column::Status.eq(employee::Status::Active))
        .group_by(employee::Column::Id)
        .group_by(employee::Column::EmployeeId)
        .group_by(employee::Column::Name)
        .group_by(employee::Column::Email)
        .group_by(employee::Column::Department)
        .group_by(employee::Column::Position)
        .group_by(employee::Column::Salary)
        .order_by_asc(employee::Column::Name)
        .into_model::<BankingRow>()
        .all(state.db.as_ref())
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

pub async fn analytics(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let db = state.db.as_ref();
    let total_employees = employee::Entity::find()
        .filter(employee::Column::Status.eq(employee::Status::Active))
        .count(db)
        .await?;
    let active_jobs = job::Entity::find()
        .filter(job::Column::Status.eq(job::Status::Active))
        .count(db)
        .await?;
    let pending_interviews = interview::Entity::find()
        .filter(interview::Column::Status.eq(interview::Status::Scheduled))
        .count(db)
        .await?;

    let scores: Vec<i32> = compliance_record::Entity::find()
        .select_only()
        .column(compliance_record::Column::Score)
        .filter(compliance_record::Column::Score.is_not_null())
        .into_tuple()
        .all(db)
        .await?;
    // No scored records reads as fully compliant on the dashboard.
    let compliance_score = if scores.is_empty() {
        100
    } else {
        let total: i64 = scores.iter().map(|s| i64::from(*s)).sum();
        (total as f64 / scores.len() as f64).round() as i64
    };

    Ok(Json(json!({
        "success": true,
        "data": {
            "totalEmployees": total_employees,
            "activeJobs": active_jobs,
            "pendingInterviews": pending_interviews,
            "complianceScore": compliance_score,
        }
    })))
}
