// src/store/memory.rs
//
// Catalog held in RAM.
// - Loads a seed file once: {"cakes": [...], "categories": [...]}.
// - Documents without an _id get a fresh ObjectId; other ids are
//   normalized to lowercase hex, and a non-ObjectId id fails the load.
// - Filters run directly against the documents, no pattern engine involved.

use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use std::path::Path;

use super::{parse_id, CatalogStore, StoreResult};
use crate::model::{Cake, Category};
use crate::query::Filter;

#[derive(Debug, Default, Deserialize)]
struct Seed {
    #[serde(default)]
    cakes: Vec<Cake>,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    cakes: Vec<Cake>,
    categories: Vec<Category>,
}

impl MemoryStore {
    /// Stores `cakes` and `categories`, normalizing every id to lowercase
    /// hex. Empty ids get a fresh ObjectId; ids that are not ObjectIds fail.
    pub fn new(cakes: Vec<Cake>, categories: Vec<Category>) -> Result<Self> {
        let cakes = cakes
            .into_iter()
            .map(|mut cake| {
                cake.id = seed_id(&cake.id).with_context(|| format!("cake {:?}", cake.name))?;
                Ok(cake)
            })
            .collect::<Result<_>>()?;
        let categories = categories
            .into_iter()
            .map(|mut category| {
                category.id = seed_id(&category.id)
                    .with_context(|| format!("category {:?}", category.name))?;
                Ok(category)
            })
            .collect::<Result<_>>()?;

        Ok(Self { cakes, categories })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(json).context("parse seed")?;
        Self::new(seed.cakes, seed.categories)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read seed {}", path.display()))?;
        let store = Self::from_json(&json)?;

        tracing::info!(
            "Loaded {} cakes and {} categories from {}",
            store.cakes.len(),
            store.categories.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn cakes(&self) -> &[Cake] {
        &self.cakes
    }
}

fn seed_id(id: &str) -> Result<String> {
    if id.is_empty() {
        return Ok(ObjectId::new().to_hex());
    }
    Ok(parse_id(id)?.to_hex())
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_cakes(&self, filter: &Filter, limit: Option<usize>) -> StoreResult<Vec<Cake>> {
        let matches = self.cakes.iter().filter(|cake| filter.is_match(cake));

        Ok(match limit {
            Some(n) => matches.take(n).cloned().collect(),
            None => matches.cloned().collect(),
        })
    }

    async fn find_cake(&self, id: &str) -> StoreResult<Option<Cake>> {
        let oid = parse_id(id)?.to_hex();
        Ok(self.cakes.iter().find(|cake| cake.id == oid).cloned())
    }

    async fn find_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
