// src/store/mongo.rs
//
// MongoDB-backed catalog.
// - Connects on first use. Concurrent first callers await the same attempt,
//   whether it succeeds or fails.
// - A failed attempt is dropped once settled; the next call tries again.
// - Every literal from a Filter is regex-escaped before it reaches the server.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures_util::{
    future::{BoxFuture, Shared},
    FutureExt, TryStreamExt,
};
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document, Regex},
    Client, Collection, Database,
};
use serde::Deserialize;
use tokio::sync::{Mutex, OnceCell};
use tracing::{error, info};

use super::{parse_id, CatalogStore, StoreError, StoreResult};
use crate::config::Config;
use crate::model::{Cake, Category};
use crate::query::{Filter, Match};

pub const CAKES: &str = "cakes";
pub const CATEGORIES: &str = "categories";
const DEFAULT_DB: &str = "test";

/// A stored document: the ObjectId plus the catalog fields.
#[derive(Deserialize)]
struct Stored<T> {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(flatten)]
    doc: T,
}

impl Stored<Cake> {
    fn into_cake(self) -> Cake {
        Cake {
            id: self.id.to_hex(),
            ..self.doc
        }
    }
}

impl Stored<Category> {
    fn into_category(self) -> Category {
        Category {
            id: self.id.to_hex(),
            ..self.doc
        }
    }
}

type Connecting = Shared<BoxFuture<'static, StoreResult<Database>>>;

pub struct MongoStore {
    url: Option<String>,
    db_name: Option<String>,
    db: OnceCell<Database>,
    connecting: Mutex<Option<Connecting>>,
    attempts: AtomicUsize,
}

impl MongoStore {
    pub fn new(url: Option<String>, db_name: Option<String>) -> Self {
        Self {
            url,
            db_name,
            db: OnceCell::new(),
            connecting: Mutex::new(None),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mongo_url.clone(), config.mongo_db.clone())
    }

    pub fn is_connected(&self) -> bool {
        self.db.initialized()
    }

    /// Number of connection attempts started so far.
    pub fn connect_attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Connect-or-reuse.
    async fn database(&self) -> StoreResult<&Database> {
        if let Some(db) = self.db.get() {
            return Ok(db);
        }

        let attempt = {
            let mut slot = self.connecting.lock().await;
            match &*slot {
                Some(attempt) => attempt.clone(),
                None => {
                    let n = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
                    let attempt = connect(self.url.clone(), self.db_name.clone(), n)
                        .boxed()
                        .shared();
                    *slot = Some(attempt.clone());
                    attempt
                }
            }
        };

        let settled = match attempt.clone().await {
            Ok(db) => Ok(self.db.get_or_init(|| async { db }).await),
            Err(e) => Err(e),
        };

        let mut slot = self.connecting.lock().await;
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
            *slot = None;
        }

        settled
    }

    async fn cakes(&self) -> StoreResult<Collection<Stored<Cake>>> {
        Ok(self.database().await?.collection(CAKES))
    }
}

async fn connect(url: Option<String>, db_name: Option<String>, attempt: usize) -> StoreResult<Database> {
    let result = try_connect(url, db_name).await;
    match &result {
        Ok(db) => info!("MongoDB connected to database {} (attempt {attempt})", db.name()),
        Err(e) => error!("MongoDB connection error (attempt {attempt}): {e}"),
    }
    result
}

async fn try_connect(url: Option<String>, db_name: Option<String>) -> StoreResult<Database> {
    let url = url.ok_or(StoreError::MissingUrl)?;
    let client = Client::with_uri_str(&url)
        .await
        .map_err(StoreError::Connection)?;

    let db = match db_name {
        Some(name) => client.database(&name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DB)),
    };

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(StoreError::Connection)?;

    Ok(db)
}

#[async_trait]
impl CatalogStore for MongoStore {
    async fn find_cakes(&self, filter: &Filter, limit: Option<usize>) -> StoreResult<Vec<Cake>> {
        let query = to_document(filter)?;
        let collection = self.cakes().await?;

        let mut find = collection.find(query);
        if let Some(n) = limit {
            find = find.limit(n as i64);
        }

        let stored: Vec<Stored<Cake>> = find.await?.try_collect().await?;
        Ok(stored.into_iter().map(Stored::into_cake).collect())
    }

    async fn find_cake(&self, id: &str) -> StoreResult<Option<Cake>> {
        let oid = parse_id(id)?;
        let found = self.cakes().await?.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(Stored::into_cake))
    }

    async fn find_categories(&self) -> StoreResult<Vec<Category>> {
        let collection: Collection<Stored<Category>> =
            self.database().await?.collection(CATEGORIES);

        let stored: Vec<Stored<Category>> = collection.find(doc! {}).await?.try_collect().await?;
        Ok(stored.into_iter().map(Stored::into_category).collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database().await.map(|_| ())
    }
}

/// Translates a filter into a MongoDB query document.
pub fn to_document(filter: &Filter) -> StoreResult<Document> {
    let query = match filter {
        Filter::Field(field, m) => {
            let mut query = Document::new();
            query.insert(field.key(), match_value(m));
            query
        }
        Filter::Veg(veg) => doc! { "veg": *veg },
        Filter::ExcludeId(id) => {
            let oid = parse_id(id)?;
            doc! { "_id": { "$ne": oid } }
        }
        // every document has an _id
        Filter::Any(clauses) if clauses.is_empty() => doc! { "_id": { "$exists": false } },
        Filter::Any(clauses) => {
            let clauses = to_documents(clauses)?;
            doc! { "$or": clauses }
        }
        Filter::Every(clauses) if clauses.is_empty() => Document::new(),
        Filter::Every(clauses) => {
            let clauses = to_documents(clauses)?;
            doc! { "$and": clauses }
        }
    };
    Ok(query)
}

fn to_documents(filters: &[Filter]) -> StoreResult<Vec<Document>> {
    filters.iter().map(to_document).collect()
}

fn match_value(m: &Match) -> Bson {
    match m {
        Match::Exact(s) => case_insensitive(format!("^{}$", regex::escape(s))),
        Match::Contains(s) => case_insensitive(regex::escape(s)),
        Match::Equals(s) => Bson::String(s.clone()),
    }
}

fn case_insensitive(pattern: String) -> Bson {
    Bson::RegularExpression(Regex {
        pattern,
        options: "i".to_string(),
    })
}
