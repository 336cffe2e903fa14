use chrono::NaiveDate;

use crate::error::{ApiError, ApiResult};

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Required text field: present and non-blank after trimming.
pub fn required_text(value: Option<&str>, message: &str) -> ApiResult<String> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ApiError::validation(message)),
    }
}

/// Optional text field. Blank strings from form submissions count as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

pub fn parse_date(value: &str, message: &str) -> ApiResult<NaiveDate> {
    value
        .trim()
        .parse::<NaiveDate>()
        .map_err(|_| ApiError::validation(message))
}

pub fn optional_date(value: Option<&str>, message: &str) -> ApiResult<Option<NaiveDate>> {
    match optional_text(value) {
        Some(text) => parse_date(&text, message).map(Some),
        None => Ok(None),
    }
}

/// Calendar days covered by a leave request, both endpoints included.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i32 {
    ((end - start).num_days() + 1) as i32
}
