use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use entity::job;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    extract::AdminSession,
    routes::AppState,
    validate::{optional_text, required_text},
};

#[derive(Serialize)]
struct JobRow {
    id: Uuid,
    title: String,
    department: String,
    location: String,
    employment_type: Option<&'static str>,
    salary_range: Option<String>,
    description: Option<String>,
    requirements: Option<String>,
    benefits: Value,
    status: &'static str,
    posted_date: DateTimeWithTimeZone,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl From<job::Model> for JobRow {
    fn from(model: job::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            department: model.department,
            location: model.location,
            employment_type: model.employment_type.map(|t| t.as_str()),
            salary_range: model.salary_range,
            description: model.description,
            requirements: model.requirements,
            benefits: model.benefits,
            status: model.status.as_str(),
            posted_date: model.posted_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct JobBody {
    title: Option<String>,
    department: Option<String>,
    location: Option<String>,
    employment_type: Option<String>,
    salary_range: Option<String>,
    description: Option<String>,
    requirements: Option<String>,
    benefits: Option<Value>,
    status: Option<String>,
}

fn parse_employment_type(raw: Option<&str>) -> ApiResult<Option<job::EmploymentType>> {
    match optional_text(raw) {
        Some(value) => job::EmploymentType::from_str(&value)
            .map(Some)
            .ok_or_else(|| {
                ApiError::validation(
                    "Valid employment_type (full-time, part-time, contract, internship) is required",
                )
            }),
        None => Ok(None),
    }
}

fn parse_status(raw: Option<&str>) -> ApiResult<job::Status> {
    match optional_text(raw) {
        Some(value) => job::Status::from_str(&value)
            .ok_or_else(|| ApiError::validation("Valid status (active, draft, closed) is required")),
        None => Ok(job::Status::Active),
    }
}

pub async fn list(_session: AdminSession, State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows: Vec<JobRow> = job::Entity::find()
        .order_by_desc(job::Column::PostedDate)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(JobRow::from)
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<JobBody>,
) -> ApiResult<Json<Value>> {
    let required = "title, department, and location are required";
    let title = required_text(body.title.as_deref(), required)?;
    let department = required_text(body.department.as_deref(), required)?;
    let location = required_text(body.location.as_deref(), required)?;
    let employment_type = parse_employment_type(body.employment_type.as_deref())?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let created = job::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        department: Set(department),
        location: Set(location),
        employment_type: Set(employment_type),
        salary_range: Set(optional_text(body.salary_range.as_deref())),
        description: Set(optional_text(body.description.as_deref())),
        requirements: Set(optional_text(body.requirements.as_deref())),
        benefits: Set(body.benefits.unwrap_or_else(|| json!([]))),
        status: Set(job::Status::Active),
        posted_date: Set(now),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(state.db.as_ref())
    .await?;

    Ok(Json(
        json!({ "success": true, "data": JobRow::from(created) }),
    ))
}

pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<JobBody>,
) -> ApiResult<Json<Value>> {
    let required = "title, department, and location are required";
    let title = required_text(body.title.as_deref(), required)?;
    let department = required_text(body.department.as_deref(), required)?;
    let location = required_text(body.location.as_deref(), required)?;
    let employment_type = parse_employment_type(body.employment_type.as_deref())?;
    let status = parse_status(body.status.as_deref())?;

    let db = state.db.as_ref();
    let existing = job::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Job"))?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut active: job::ActiveModel = existing.into();
    active.title = Set(title);
    active.department = Set(department);
    active.location = Set(location);
    active.employment_type = Set(employment_type);
    active.salary_range = Set(optional_text(body.salary_range.as_deref()));
    active.description = Set(optional_text(body.description.as_deref()));
    active.requirements = Set(optional_text(body.requirements.as_deref()));
    active.benefits = Set(body.benefits.unwrap_or_else(|| json!([])));
    active.status = Set(status);
    active.updated_at = Set(now);
    let updated = active.update(db).await?;

    Ok(Json(
        json!({ "success": true, "data": JobRow::from(updated) }),
    ))
}

pub async fn remove(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let result = job::Entity::delete_by_id(id).exec(state.db.as_ref()).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Job"));
    }
    Ok(Json(json!({ "success": true, "message": "Job deleted" })))
}
