use super::AssociateStore;
use crate::errors::AppError;
use crate::models::associate::{Associate, AssociateFilter, AssociatePatch, NewAssociate};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    rows: Vec<Associate>,
    // last value handed out by the id sequence
    sequence: i32,
}

impl Table {
    fn push(&mut self, row: Associate) -> Result<Associate, AppError> {
        if self.rows.iter().any(|a| a.id == row.id) {
            return Err(AppError::Conflict("Associate id already exists".to_string()));
        }
        self.rows.push(row.clone());
        Ok(row)
    }
}

/// In-process stand-in for `associates_info`, used by handler and service tests.
///
/// Ids are unique like the primary key, and generated ids come from a
/// sequence that only moves forward when asked to, as `SERIAL` does.
#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
    calls: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// A store whose every call fails the way an unreachable database would.
    pub fn failing() -> Self {
        MemoryStore {
            fail_reads: true,
            fail_writes: true,
            ..Default::default()
        }
    }

    /// Writes succeed, but `list` and `lookup` fail.
    pub fn failing_reads() -> Self {
        MemoryStore {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i32) -> Option<Associate> {
        self.table.lock().unwrap().rows.iter().find(|a| a.id == id).cloned()
    }

    fn enter(&self, fail: bool) -> Result<MutexGuard<'_, Table>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(self.table.lock().unwrap())
    }
}

fn row_from(id: i32, new: &NewAssociate) -> Associate {
    Associate {
        id,
        name: new.name.clone(),
        hire_date: new.hire_date,
        manager: new.manager.clone(),
        department: new.department.clone(),
    }
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    needle
        .as_ref()
        .map_or(true, |n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

/// Same semantics as the `WHERE` clause built by `queries::lookup_query`.
fn matches(filter: &AssociateFilter, associate: &Associate) -> bool {
    filter.id.map_or(true, |id| associate.id == id)
        && contains_ci(&associate.name, &filter.name)
        && contains_ci(&associate.manager, &filter.manager)
        && contains_ci(&associate.department, &filter.department)
}

fn apply(patch: &AssociatePatch, associate: &mut Associate) {
    if let Some(name) = &patch.name {
        associate.name = name.clone();
    }
    if let Some(hire_date) = patch.hire_date {
        associate.hire_date = hire_date;
    }
    if let Some(manager) = &patch.manager {
        associate.manager = manager.clone();
    }
    if let Some(department) = &patch.department {
        associate.department = department.clone();
    }
}

#[async_trait]
impl AssociateStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Associate>, AppError> {
        let table = self.enter(self.fail_reads)?;
        let mut rows = table.rows.clone();
        rows.sort_by_key(|a| a.id);
        Ok(rows)
    }

    async fn lookup(&self, filter: &AssociateFilter) -> Result<Vec<Associate>, AppError> {
        let table = self.enter(self.fail_reads)?;
        let mut rows: Vec<_> = table.rows.iter().filter(|a| matches(filter, a)).cloned().collect();
        rows.sort_by_key(|a| a.id);
        Ok(rows)
    }

    async fn insert(&self, new: &NewAssociate) -> Result<Associate, AppError> {
        let mut table = self.enter(self.fail_writes)?;
        table.sequence += 1;
        let id = table.sequence;
        table.push(row_from(id, new))
    }

    async fn insert_with_id(&self, id: i32, new: &NewAssociate) -> Result<Associate, AppError> {
        let mut table = self.enter(self.fail_writes)?;
        let row = table.push(row_from(id, new))?;
        // setval(..., MAX(id))
        table.sequence = table.rows.iter().map(|a| a.id).max().unwrap_or(0);
        Ok(row)
    }

    async fn update(&self, id: i32, patch: &AssociatePatch) -> Result<u64, AppError> {
        let mut table = self.enter(self.fail_writes)?;
        match table.rows.iter_mut().find(|a| a.id == id) {
            Some(row) => {
                apply(patch, row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut table = self.enter(self.fail_writes)?;
        let before = table.rows.len();
        table.rows.retain(|a| a.id != id);
        Ok((before - table.rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn alice() -> Associate {
        Associate {
            id: 1,
            name: "Alice".into(),
            hire_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            manager: "Bob".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn manager_only_patch_leaves_other_fields() {
        let mut row = alice();
        let patch = AssociatePatch {
            manager: Some("Dana".into()),
            ..Default::default()
        };
        apply(&patch, &mut row);
        assert_eq!(row.manager, "Dana");
        assert_eq!(row.name, "Alice");
        assert_eq!(row.department, "Engineering");
        assert_eq!(row.hire_date, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
    }

    #[test]
    fn department_substring_is_case_insensitive() {
        let filter = AssociateFilter {
            department: Some("eng".into()),
            ..Default::default()
        };
        assert!(matches(&filter, &alice()));
    }

    #[test]
    fn filter_criteria_are_conjunctive() {
        let filter = AssociateFilter {
            name: Some("ali".into()),
            manager: Some("zed".into()),
            ..Default::default()
        };
        assert!(!matches(&filter, &alice()));
    }

    #[test]
    fn exact_id_filter() {
        let filter = AssociateFilter {
            id: Some(2),
            ..Default::default()
        };
        assert!(!matches(&filter, &alice()));
    }
}
