use crate::errors::AppError;
use chrono::NaiveDate;

pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_hire_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), HIRE_DATE_FORMAT).map_err(|_| {
        AppError::BadRequest("Invalid hire date format. Please use YYYY-MM-DD format.".to_string())
    })
}
