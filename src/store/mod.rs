// src/store/mod.rs

//! Catalog storage.
//!
//! [`CatalogStore`] is the only thing the catalog needs from a database:
//! run a [`Filter`] over the cakes, look a cake up by id, list categories,
//! and answer a connectivity check.
//!
//! - **`mongo`**: MongoDB collections `cakes` and `categories`. Connects on
//!   first use and reuses the connection afterwards.
//! - **`memory`**: a seed file loaded into RAM once.
//!
//! Ids are 24-hex ObjectIds in both stores. A malformed id is an error, a
//! well-formed id that matches nothing is `None`.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::model::{Cake, Category};
use crate::query::Filter;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("MONGO_URL environment variable is not set")]
    MissingUrl,

    #[error("connection failed: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("query failed: {0}")]
    Query(#[from] mongodb::error::Error),

    #[error("invalid id {0:?}")]
    InvalidId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Cakes matching `filter`, at most `limit` of them when given.
    async fn find_cakes(&self, filter: &Filter, limit: Option<usize>) -> StoreResult<Vec<Cake>>;

    async fn find_cake(&self, id: &str) -> StoreResult<Option<Cake>>;

    async fn find_categories(&self) -> StoreResult<Vec<Category>>;

    /// Succeeds once the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

pub fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
