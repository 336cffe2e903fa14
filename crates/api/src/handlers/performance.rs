use std::collections::HashMap;

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use entity::{admin, employee, performance_review};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    extract::{AdminSession, EmployeeSession},
    routes::AppState,
    validate::{optional_date, optional_text, required_text},
};

#[derive(Serialize)]
struct ReviewRow {
    id: Uuid,
    employee_id: Uuid,
    reviewer_id: Option<Uuid>,
    review_period_start: Option<NaiveDate>,
    review_period_end: Option<NaiveDate>,
    rating: Option<i32>,
    comments: Option<String>,
    goals: Value,
    status: String,
    created_at: DateTimeWithTimeZone,
}

impl From<performance_review::Model> for ReviewRow {
    fn from(model: performance_review::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            reviewer_id: model.reviewer_id,
            review_period_start: model.review_period_start,
            review_period_end: model.review_period_end,
            rating: model.rating,
            comments: model.comments,
            goals: model.goals,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// List shape: `employee_id` carries the `EMP...` badge, `reviewer_name`
/// the admin username.
#[derive(Serialize)]
struct ReviewListRow {
    id: Uuid,
    employee_id: Option<String>,
    reviewer_id: Option<Uuid>,
    review_period_start: Option<NaiveDate>,
    review_period_end: Option<NaiveDate>,
    rating: Option<i32>,
    comments: Option<String>,
    goals: Value,
    status: String,
    created_at: DateTimeWithTimeZone,
    employee_name: Option<String>,
    department: Option<String>,
    position: Option<String>,
    reviewer_name: Option<String>,
}

fn joined_row(
    model: performance_review::Model,
    employee: Option<&employee::Model>,
    reviewers: &HashMap<Uuid, String>,
) -> ReviewListRow {
    ReviewListRow {
        id: model.id,
        employee_id: employee.map(|e| e.employee_id.clone()),
        reviewer_id: model.reviewer_id,
        review_period_start: model.review_period_start,
        review_period_end: model.review_period_end,
        rating: model.rating,
        comments: model.comments,
        goals: model.goals,
        status: model.status,
        created_at: model.created_at,
        employee_name: employee.map(|e| e.name.clone()),
        department: employee.and_then(|e| e.department.clone()),
        position: employee.and_then(|e| e.position.clone()),
        reviewer_name: model
            .reviewer_id
            .and_then(|id| reviewers.get(&id).cloned()),
    }
}

fn recency() -> SimpleExpr {
    Expr::cust("COALESCE(performance_reviews.review_period_end, performance_reviews.created_at)")
}

async fn reviewer_names(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(admin::Entity::find()
        .filter(admin::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|a| (a.id, a.username))
        .collect())
}

pub async fn list(_session: AdminSession, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let db = state.db.as_ref();
    let found = performance_review::Entity::find()
        .find_also_related(employee::Entity)
        .order_by(recency(), Order::Desc)
        .limit(100)
        .all(db)
        .await?;
    let reviewers = reviewer_names(
        db,
        found.iter().filter_map(|(r, _)| r.reviewer_id).collect(),
    )
    .await?;
    let rows: Vec<ReviewListRow> = found
        .into_iter()
        .map(|(model, employee)| joined_row(model, employee.as_ref(), &reviewers))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Deserialize)]
pub struct ReviewBody {
    employee_id: Option<String>,
    review_period_start: Option<String>,
    review_period_end: Option<String>,
    rating: Option<i32>,
    comments: Option<String>,
    goals: Option<Value>,
}

pub async fn create(
    AdminSession(reviewer): AdminSession,
    State(state): State<AppState>,
    Json(body): Json<ReviewBody>,
) -> ApiResult<Json<Value>> {
    let required = "employee_id and rating are required";
    let badge = required_text(body.employee_id.as_deref(), required)?;
    let rating = body.rating.ok_or_else(|| ApiError::validation(required))?;
    if !(1..=5).contains(&rating) {
        return Err(ApiError::validation("rating must be between 1 and 5"));
    }
    let review_period_start = optional_date(
        body.review_period_start.as_deref(),
        "review_period_start must be a valid date",
    )?;
    let review_period_end = optional_date(
        body.review_period_end.as_deref(),
        "review_period_end must be a valid date",
    )?;

    let db = state.db.as_ref();
    let target = employee::Entity::find()
        .filter(employee::Column::EmployeeId.eq(badge))
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Employee"))?;

    let created = performance_review::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(target.id),
        reviewer_id: Set(Some(reviewer.id)),
        review_period_start: Set(review_period_start),
        review_period_end: Set(review_period_end),
        rating: Set(Some(rating)),
        comments: Set(optional_text(body.comments.as_deref())),
        goals: Set(body.goals.unwrap_or_else(|| json!([]))),
        status: Set("completed".to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;

    Ok(Json(
        json!({ "success": true, "data": ReviewRow::from(created) }),
    ))
}

pub async fn list_own(
    EmployeeSession(me): EmployeeSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let db = state.db.as_ref();
    let found = performance_review::Entity::find()
        .filter(performance_review::Column::EmployeeId.eq(me.id))
        .order_by(recency(), Order::Desc)
        .all(db)
        .await?;
    let reviewers = reviewer_names(
        db,
        found.iter().filter_map(|r| r.reviewer_id).collect(),
    )
    .await?;
    let rows: Vec<ReviewListRow> = found
        .into_iter()
        .map(|model| joined_row(model, Some(&me), &reviewers))
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}
