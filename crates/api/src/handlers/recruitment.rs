use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use entity::{candidate, interview, job};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, EntityTrait, Order, QueryOrder, Set};
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
struct CandidateRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    job_id: Option<Uuid>,
    resume_url: Option<String>,
    notes: Option<String>,
    status: &'static str,
    applied_date: DateTimeWithTimeZone,
    created_at: DateTimeWithTimeZone,
}

impl From<candidate::Model> for CandidateRow {
    fn from(model: candidate::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            job_id: model.job_id,
            resume_url: model.resume_url,
            notes: model.notes,
            status: model.status.as_str(),
            applied_date: model.applied_date,
            created_at: model.created_at,
        }
    }
}

#[derive(Serialize)]
struct CandidateListRow {
    #[serde(flatten)]
    candidate: CandidateRow,
    job_title: Option<String>,
}

#[derive(Serialize)]
struct InterviewRow {
    id: Uuid,
    candidate_id: Uuid,
    interviewer_id: Option<Uuid>,
    scheduled_date: Option<DateTimeWithTimeZone>,
    notes: Option<String>,
    status: &'static str,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl From<interview::Model> for InterviewRow {
    fn from(model: interview::Model) -> Self {
        Self {
            id: model.id,
            candidate_id: model.candidate_id,
            interviewer_id: model.interviewer_id,
            scheduled_date: model.scheduled_date,
            notes: model.notes,
            status: model.status.as_str(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize)]
struct InterviewListRow {
    #[serde(flatten)]
    interview: InterviewRow,
    candidate_name: Option<String>,
    candidate_email: Option<String>,
}

#[derive(Deserialize)]
pub struct CandidateBody {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    job_id: Option<Uuid>,
    resume_url: Option<String>,
    notes: Option<String>,
}

#[derive(Deserialize)]
pub struct InterviewBody {
    candidate_id: Option<Uuid>,
    scheduled_date: Option<String>,
    notes: Option<String>,
}

#[derive(Deserialize)]
pub struct InterviewUpdateBody {
    status: Option<String>,
    result: Option<String>,
}

fn parse_scheduled_date(raw: &str) -> ApiResult<DateTimeWithTimeZone> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed);
    }
    // The admin UI posts datetime-local values without an offset.
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc().into());
        }
    }
    Err(ApiError::validation(
        "scheduled_date must be a valid date-time",
    ))
}

pub async fn list_candidates(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let rows: Vec<CandidateListRow> = candidate::Entity::find()
        .find_also_related(job::Entity)
        .order_by_desc(candidate::Column::CreatedAt)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|(model, job)| CandidateListRow {
            candidate: CandidateRow::from(model),
            job_title: job.map(|j| j.title),
        })
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

pub async fn create_candidate(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(body): Json<CandidateBody>,
) -> ApiResult<Json<Value>> {
    let required = "name and email are required";
    let name = required_text(body.name.as_deref(), required)?;
    let email = required_text(body.email.as_deref(), required)?;

    let db = state.db.as_ref();
    let job_title = match body.job_id {
        Some(job_id) => {
            let job = job::Entity::find_by_id(job_id)
                .one(db)
                .await?
                .ok_or(ApiError::NotFound("Job"))?;
            Some(job.title)
        }
        None => None,
    };

    let now: DateTimeWithTimeZone = Utc::now().into();
    let created = candidate::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        email: Set(email),
        phone: Set(optional_text(body.phone.as_deref())),
        job_id: Set(body.job_id),
        resume_url: Set(optional_text(body.resume_url.as_deref())),
        notes: Set(optional_text(body.notes.as_deref())),
        status: Set(candidate::Status::Applied),
        applied_date: Set(now),
        created_at: Set(now),
    }
    .insert(db)
    .await?;

    let row = CandidateListRow {
        candidate: CandidateRow::from(created),
        job_title,
    };
    Ok(Json(json!({ "success": true, "data": row })))
}

pub async fn list_interviews(
    _session: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let rows: Vec<InterviewListRow> = interview::Entity::find()
        .find_also_related(candidate::Entity)
        // Unscheduled interviews sort after dated ones on every backend.
        .order_by(Expr::cust("(interviews.scheduled_date IS NULL)"), Order::Asc)
        .order_by_desc(interview::Column::ScheduledDate)
        .all(state.db.as_ref())
        .await?
        .into_iter()
        .map(|(model, candidate)| {
            let (candidate_name, candidate_email) = match candidate {
                Some(c) => (Some(c.name), Some(c.email)),
                None => (None, None),
            };
            InterviewListRow {
                interview: InterviewRow::from(model),
                candidate_name,
                candidate_email,
            }
        })
        .collect();
    Ok(Json(json!({ "success": true, "data": rows })))
}

pub async fn create_interview(
    AdminSession(admin): AdminSession,
    State(state): State<AppState>,
    Json(body): Json<InterviewBody>,
) -> ApiResult<Json<Value>> {
    let required = "candidate_id and scheduled_date are required";
    let candidate_id = body
        .candidate_id
        .ok_or_else(|| ApiError::validation(required))?;
    let scheduled_raw = required_text(body.scheduled_date.as_deref(), required)?;
    let scheduled_date = parse_scheduled_date(&scheduled_raw)?;

    let db = state.db.as_ref();
    let found = candidate::Entity::find_by_id(candidate_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Candidate"))?;
    let candidate_name = found.name.clone();
    let candidate_email = found.email.clone();

    let now: DateTimeWithTimeZone = Utc::now().into();
    let created = interview::ActiveModel {
        id: Set(Uuid::new_v4()),
        candidate_id: Set(candidate_id),
        interviewer_id: Set(Some(admin.id)),
        scheduled_date: Set(Some(scheduled_date)),
        notes: Set(optional_text(body.notes.as_deref())),
        status: Set(interview::Status::Scheduled),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    let mut moved: candidate::ActiveModel = found.into();
    moved.status = Set(candidate::Status::Interview);
    moved.update(db).await?;

    let row = InterviewListRow {
        interview: InterviewRow::from(created),
        candidate_name: Some(candidate_name),
        candidate_email: Some(candidate_email),
    };
    Ok(Json(json!({ "success": true, "data": row })))
}

pub async fn update_interview(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<InterviewUpdateBody>,
) -> ApiResult<Json<Value>> {
    let explicit = match optional_text(body.status.as_deref()) {
        Some(value) => Some(interview::Status::from_str(&value).ok_or_else(|| {
            ApiError::validation("Valid status (scheduled, completed, failed) is required")
        })?),
        None => None,
    };
    let result = optional_text(body.result.as_deref());
    let final_status = explicit.unwrap_or(match result.as_deref() {
        Some("failed") => interview::Status::Failed,
        _ => interview::Status::Completed,
    });

    let db = state.db.as_ref();
    let existing = interview::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("Interview"))?;
    let candidate_id = existing.candidate_id;

    let appended_notes = result.as_deref().map(|r| {
        let mut notes = existing.notes.clone().unwrap_or_default();
        notes.push_str(&format!(" Result: {r}."));
        notes
    });

    let now: DateTimeWithTimeZone = Utc::now().into();
    let mut active: interview::ActiveModel = existing.into();
    active.status = Set(final_status);
    if let Some(notes) = appended_notes {
        active.notes = Set(Some(notes));
    }
    active.updated_at = Set(now);
    let updated = active.update(db).await?;

    // A terminal interview settles the candidate as well.
    if matches!(
        final_status,
        interview::Status::Completed | interview::Status::Failed
    ) {
        if let Some(found) = candidate::Entity::find_by_id(candidate_id).one(db).await? {
            let outcome = if result.as_deref() == Some("passed") {
                candidate::Status::Hired
            } else {
                candidate::Status::Rejected
            };
            let mut moved: candidate::ActiveModel = found.into();
            moved.status = Set(outcome);
            moved.update(db).await?;
        }
    }

    Ok(Json(
        json!({ "success": true, "data": InterviewRow::from(updated) }),
    ))
}

pub async fn delete_interview(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let outcome = interview::Entity::delete_by_id(id)
        .exec(state.db.as_ref())
        .await?;
    if outcome.rows_affected == 0 {
        return Err(ApiError::NotFound("Interview"));
    }
    Ok(Json(
        json!({ "success": true, "message": "Interview deleted" }),
    ))
}
