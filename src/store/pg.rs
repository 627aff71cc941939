use super::{queries, AssociateStore};
use crate::db;
use crate::errors::AppError;
use crate::models::associate::{Associate, AssociateFilter, AssociatePatch, NewAssociate};
use async_trait::async_trait;
use sqlx::{Connection, PgPool};
use log::error;

/// Pooled store for the web service. Each operation holds one pooled
/// connection and hands it back when the guard drops, on success or error.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl AssociateStore for PgStore {
    async fn list(&self) -> Result<Vec<Associate>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(queries::list(&mut conn).await?)
    }

    async fn lookup(&self, filter: &AssociateFilter) -> Result<Vec<Associate>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(queries::lookup(&mut conn, filter).await?)
    }

    async fn insert(&self, new: &NewAssociate) -> Result<Associate, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(queries::insert(&mut conn, new).await?)
    }

    async fn insert_with_id(&self, id: i32, new: &NewAssociate) -> Result<Associate, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(queries::insert_with_id(&mut conn, id, new).await?)
    }

    async fn update(&self, id: i32, patch: &AssociatePatch) -> Result<u64, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(queries::update(&mut conn, id, patch).await?)
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(queries::delete(&mut conn, id).await?)
    }
}

/// Unpooled store: opens a fresh connection for every operation and closes it afterwards.
#[derive(Clone)]
pub struct OneShotStore {
    database_url: String,
}

impl OneShotStore {
    pub fn new(database_url: impl Into<String>) -> Self {
        OneShotStore {
            database_url: database_url.into(),
        }
    }
}

macro_rules! one_shot {
    ($store:expr, |$conn:ident| $body:expr) => {{
        let mut $conn = db::connect_once(&$store.database_url).await?;
        let result = $body.await;
        if let Err(err) = $conn.close().await {
            error!("Error while closing database connection: {}", err);
        }
        Ok(result?)
    }};
}

#[async_trait]
impl AssociateStore for OneShotStore {
    async fn list(&self) -> Result<Vec<Associate>, AppError> {
        one_shot!(self, |conn| queries::list(&mut conn))
    }

    async fn lookup(&self, filter: &AssociateFilter) -> Result<Vec<Associate>, AppError> {
        one_shot!(self, |conn| queries::lookup(&mut conn, filter))
    }

    async fn insert(&self, new: &NewAssociate) -> Result<Associate, AppError> {
        one_shot!(self, |conn| queries::insert(&mut conn, new))
    }

    async fn insert_with_id(&self, id: i32, new: &NewAssociate) -> Result<Associate, AppError> {
        one_shot!(self, |conn| queries::insert_with_id(&mut conn, id, new))
    }

    async fn update(&self, id: i32, patch: &AssociatePatch) -> Result<u64, AppError> {
        one_shot!(self, |conn| queries::update(&mut conn, id, patch))
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        one_shot!(self, |conn| queries::delete(&mut conn, id))
    }
}
