//! Local table client. Every action runs to completion on the calling thread
//! against a fresh database connection, then reloads the table.

pub mod console;

use crate::errors::AppError;
use crate::models::associate::{Associate, NewAssociate};
use crate::service::AssociateService;
use crate::store::OneShotStore;
use crate::utils::date::parse_hire_date;
use crate::utils::form::{non_blank, optional_id};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

pub const COLUMNS: [&str; 5] = ["ID", "Name", "Hire Date", "Manager", "Department"];

/// Raw text from the insert form.
#[derive(Debug, Clone, Default)]
pub struct InsertForm {
    pub id: String,
    pub name: String,
    pub hire_date: String,
    pub manager: String,
    pub department: String,
}

impl InsertForm {
    /// A blank id leaves id assignment to the database.
    pub fn parse(&self) -> Result<(Option<i32>, NewAssociate), AppError> {
        let id = optional_id(Some(self.id.clone()))?;
        let required = |value: &str, field: &str| {
            non_blank(Some(value.to_string()))
                .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
        };
        let new = NewAssociate {
            name: required(&self.name, "Name")?,
            hire_date: parse_hire_date(&self.hire_date)?,
            manager: required(&self.manager, "Manager")?,
            department: required(&self.department, "Department")?,
        };
        Ok((id, new))
    }
}

/// A change that reached the database. `refresh` says whether the table was
/// reloaded afterwards; if not, the rows on screen are the ones from before.
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    pub refresh: Result<(), AppError>,
}

pub struct Desk {
    runtime: Runtime,
    service: AssociateService,
    rows: Vec<Associate>,
}

impl Desk {
    pub fn connect(database_url: &str) -> Result<Self, AppError> {
        let service = AssociateService::new(Arc::new(OneShotStore::new(database_url)));
        Desk::with_service(service)
    }

    pub fn with_service(service: AssociateService) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| {
                AppError::InternalServerError(format!("Failed to start runtime: {}", err))
            })?;
        Ok(Desk {
            runtime,
            service,
            rows: Vec::new(),
        })
    }

    pub fn rows(&self) -> &[Associate] {
        &self.rows
    }

    /// Reloads every row. On failure the previously displayed rows are kept.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        let rows = self.runtime.block_on(self.service.list())?;
        self.rows = rows;
        Ok(())
    }

    pub fn insert(&mut self, form: &InsertForm) -> Result<Applied<Associate>, AppError> {
        let (id, new) = form.parse()?;
        let created = match id {
            Some(id) => self.runtime.block_on(self.service.create_with_id(id, &new))?,
            None => self.runtime.block_on(self.service.create(&new))?,
        };
        Ok(Applied {
            value: created,
            refresh: self.refresh(),
        })
    }

    pub fn delete_selected(&mut self, index: usize) -> Result<Applied<i32>, AppError> {
        let id = self
            .rows
            .get(index)
            .map(|row| row.id)
            .ok_or_else(|| AppError::BadRequest("No row selected".to_string()))?;
        self.runtime.block_on(self.service.delete(id))?;
        Ok(Applied {
            value: id,
            refresh: self.refresh(),
        })
    }
}

fn cells(row: &Associate) -> [String; 5] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.hire_date.to_string(),
        row.manager.clone(),
        row.department.clone(),
    ]
}

/// One line per row, columns padded to the widest cell.
pub fn render_rows(rows: &[Associate]) -> (String, Vec<String>) {
    let cells: Vec<[String; 5]> = rows.iter().map(cells).collect();
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |values: &[&str]| -> String {
        values
            .iter()
            .zip(widths.iter())
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header = line(&COLUMNS);
    let lines = cells
        .iter()
        .map(|row| line(&row.iter().map(String::as_str).collect::<Vec<_>>()))
        .collect();
    (header, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    fn form(id: &str) -> InsertForm {
        InsertForm {
            id: id.into(),
            name: "Alice".into(),
            hire_date: "2023-05-01".into(),
            manager: "Bob".into(),
            department: "IT".into(),
        }
    }

    #[test]
    fn insert_form_parses_optional_id() {
        let (id, new) = form("").parse().unwrap();
        assert_eq!(id, None);
        assert_eq!(new.hire_date, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());

        let (id, _) = form("17").parse().unwrap();
        assert_eq!(id, Some(17));
    }

    #[test]
    fn insert_form_rejects_bad_input() {
        assert!(matches!(form("abc").parse(), Err(AppError::BadRequest(_))));

        let mut bad_date = form("");
        bad_date.hire_date = "1 May 2023".into();
        assert!(matches!(bad_date.parse(), Err(AppError::BadRequest(_))));

        let mut no_manager = form("");
        no_manager.manager = " ".into();
        assert!(matches!(no_manager.parse(), Err(AppError::BadRequest(_))));
    }

    fn desk_over(store: Arc<MemoryStore>) -> Desk {
        Desk::with_service(AssociateService::new(store)).unwrap()
    }

    #[test]
    fn insert_and_delete_refresh_the_table() {
        let mut desk = desk_over(Arc::new(MemoryStore::default()));

        desk.insert(&form("5")).unwrap().refresh.unwrap();
        let generated = desk.insert(&form("")).unwrap();
        assert_eq!(generated.value.id, 6);
        let ids: Vec<_> = desk.rows().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 6]);

        let deleted = desk.delete_selected(1).unwrap();
        assert_eq!(deleted.value, 6);
        assert!(deleted.refresh.is_ok());
        assert_eq!(desk.rows().len(), 1);
        assert!(matches!(desk.delete_selected(3), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn failed_refresh_keeps_displayed_rows() {
        let mut desk = desk_over(Arc::new(MemoryStore::failing()));
        assert!(desk.refresh().is_err());
        assert!(desk.rows().is_empty());
    }

    #[test]
    fn insert_succeeds_even_when_reload_fails() {
        let store = Arc::new(MemoryStore::failing_reads());
        let mut desk = desk_over(store.clone());

        let applied = desk.insert(&form("")).unwrap();
        assert_eq!(applied.value.name, "Alice");
        assert!(matches!(applied.refresh, Err(AppError::DatabaseError(_))));
        assert!(desk.rows().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn table_columns_line_up() {
        let rows = vec![Associate {
            id: 12,
            name: "Alice".into(),
            hire_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            manager: "Bob".into(),
            department: "Engineering".into(),
        }];
        let (header, lines) = render_rows(&rows);
        assert_eq!(header, "ID | Name  | Hire Date  | Manager | Department");
        assert_eq!(lines, vec!["12 | Alice | 2023-05-01 | Bob     | Engineering"]);
    }
}
