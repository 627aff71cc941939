pub mod queries;
pub mod pg;

#[cfg(test)]
pub mod memory;

use crate::errors::AppError;
use crate::models::associate::{Associate, AssociateFilter, AssociatePatch, NewAssociate};
use async_trait::async_trait;

pub use pg::{OneShotStore, PgStore};

/// Persistence for the `associates_info` table.
///
/// `update` and `delete` report the number of rows touched; deciding
/// whether zero is an error is left to the caller.
#[async_trait]
pub trait AssociateStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Associate>, AppError>;
    async fn lookup(&self, filter: &AssociateFilter) -> Result<Vec<Associate>, AppError>;
    async fn insert(&self, new: &NewAssociate) -> Result<Associate, AppError>;
    async fn insert_with_id(&self, id: i32, new: &NewAssociate) -> Result<Associate, AppError>;
    async fn update(&self, id: i32, patch: &AssociatePatch) -> Result<u64, AppError>;
    async fn delete(&self, id: i32) -> Result<u64, AppError>;
}
