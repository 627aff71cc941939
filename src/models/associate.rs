use chrono::NaiveDate;
use validator::Validate;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Associate {
    pub id: i32,
    pub name: String,
    pub hire_date: NaiveDate,
    pub manager: String,
    pub department: String,
}

#[derive(Validate, Debug, Clone, PartialEq)]
pub struct NewAssociate {
    #[validate(custom = "not_blank")]
    pub name: String,
    pub hire_date: NaiveDate,
    #[validate(custom = "not_blank")]
    pub manager: String,
    #[validate(custom = "not_blank")]
    pub department: String,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("must not be empty"));
    }
    Ok(())
}

/// A value bound into an `UPDATE ... SET` assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Date(NaiveDate),
}

/// Partial update: only the `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssociatePatch {
    pub name: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub manager: Option<String>,
    pub department: Option<String>,
}

impl AssociatePatch {
    /// Supplied fields in column order: name, hire_date, manager, department.
    pub fn assignments(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        let ordered = [
            ("name", self.name.as_deref().map(FieldValue::Text)),
            ("hire_date", self.hire_date.map(FieldValue::Date)),
            ("manager", self.manager.as_deref().map(FieldValue::Text)),
            ("department", self.department.as_deref().map(FieldValue::Text)),
        ];
        ordered
            .into_iter()
            .filter_map(|(column, value)| value.map(|v| (column, v)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

/// Lookup criteria. `id` matches exactly, the text fields match as
/// case-insensitive substrings, and all supplied criteria must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssociateFilter {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub manager: Option<String>,
    pub department: Option<String>,
}

impl AssociateFilter {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.manager.is_none()
            && self.department.is_none()
    }
}
