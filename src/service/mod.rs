use crate::errors::AppError;
use crate::models::associate::{Associate, AssociateFilter, AssociatePatch, NewAssociate};
use crate::models::department::DepartmentGroups;
use crate::store::AssociateStore;
use crate::utils::validation::validate_payload;
use std::sync::Arc;
use log::info;

/// Associate operations shared by the web handlers and the desktop client.
#[derive(Clone)]
pub struct AssociateService {
    store: Arc<dyn AssociateStore>,
}

impl AssociateService {
    pub fn new(store: Arc<dyn AssociateStore>) -> Self {
        AssociateService { store }
    }

    pub async fn list(&self) -> Result<Vec<Associate>, AppError> {
        self.store.list().await
    }

    pub async fn grouped(&self) -> Result<DepartmentGroups, AppError> {
        Ok(DepartmentGroups::partition(self.store.list().await?))
    }

    /// An empty filter is rejected before the store is touched.
    pub async fn lookup(&self, filter: &AssociateFilter) -> Result<Vec<Associate>, AppError> {
        if filter.is_empty() {
            return Err(AppError::BadRequest(
                "At least one search criteria must be provided".to_string(),
            ));
        }
        self.store.lookup(filter).await
    }

    pub async fn create(&self, new: &NewAssociate) -> Result<Associate, AppError> {
        validate_payload(new)?;
        let created = self.store.insert(new).await?;
        info!("Created associate {}", created.id);
        Ok(created)
    }

    pub async fn create_with_id(
        &self,
        id: i32,
        new: &NewAssociate,
    ) -> Result<Associate, AppError> {
        validate_payload(new)?;
        let created = self.store.insert_with_id(id, new).await?;
        info!("Created associate {} with caller-supplied id", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i32, patch: &AssociatePatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::BadRequest(
                "At least one field must be provided to update".to_string(),
            ));
        }
        match self.store.update(id, patch).await? {
            0 => Err(AppError::NotFound("Associate not found".to_string())),
            _ => {
                info!("Updated associate {}", id);
                Ok(())
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        match self.store.delete(id).await? {
            0 => Err(AppError::NotFound("Associate not found".to_string())),
            _ => {
                info!("Deleted associate {}", id);
                Ok(())
            }
        }
    }
}
