use crate::errors::AppError;

/// HTML forms submit untouched inputs as empty strings; treat those as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid associate id".to_string()))
}

pub fn optional_id(raw: Option<String>) -> Result<Option<i32>, AppError> {
    non_blank(raw).map(|id| parse_id(&id)).transpose()
}

pub fn required_id(raw: Option<String>) -> Result<i32, AppError> {
    optional_id(raw)?.ok_or_else(|| AppError::BadRequest("Associate id is required".to_string()))
}
