// src/catalog/mod.rs

//! Catalog operations.
//!
//! Each operation builds a filter, makes one store call (two for related
//! cakes) and shapes the result. Routes and CLI subcommands both go through
//! [`Catalog`].

pub mod shaper;

use std::sync::Arc;

use crate::model::{Cake, Category, FilterOptions};
use crate::query::{self, Filter, FilterParams, SortOrder};
use crate::store::{CatalogStore, StoreResult};

pub const SEARCH_LIMIT: usize = 50;
pub const SUGGESTION_LIMIT: usize = 10;
pub const RELATED_LIMIT: usize = 10;

/// Outcome of a related-cakes lookup.
#[derive(Debug)]
pub enum Related {
    SourceMissing,
    Found(Vec<Cake>),
}

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn categories(&self) -> StoreResult<Vec<Category>> {
        self.store.find_categories().await
    }

    pub async fn filter_options(&self) -> StoreResult<FilterOptions> {
        let cakes = self.all_cakes().await?;
        Ok(shaper::filter_options(&cakes))
    }

    pub async fn search_suggestions(&self, q: &str) -> StoreResult<Vec<String>> {
        let Some(needle) = query::suggestion_needle(q) else {
            return Ok(Vec::new());
        };

        let cakes = self
            .store
            .find_cakes(&query::suggestion_filter(needle), Some(SUGGESTION_LIMIT))
            .await?;

        Ok(shaper::suggestions(&cakes, needle))
    }

    pub async fn search(&self, q: &str) -> StoreResult<Vec<Cake>> {
        match query::search_filter(q) {
            Some(filter) => self.store.find_cakes(&filter, Some(SEARCH_LIMIT)).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn filtered_cakes(&self, params: &FilterParams) -> StoreResult<Vec<Cake>> {
        let mut cakes = self
            .store
            .find_cakes(&query::exact_filter(params), None)
            .await?;

        shaper::sort_by_price(&mut cakes, SortOrder::parse(params.sort.as_deref()));
        Ok(cakes)
    }

    pub async fn all_cakes(&self) -> StoreResult<Vec<Cake>> {
        self.store.find_cakes(&Filter::everything(), None).await
    }

    pub async fn cakes_by_category(&self, category: &str) -> StoreResult<Vec<Cake>> {
        self.store
            .find_cakes(&query::category_filter(category), None)
            .await
    }

    pub async fn cake(&self, id: &str) -> StoreResult<Option<Cake>> {
        self.store.find_cake(id).await
    }

    pub async fn related_cakes(&self, id: &str) -> StoreResult<Related> {
        let Some(cake) = self.store.find_cake(id).await? else {
            return Ok(Related::SourceMissing);
        };

        if cake.categories.is_empty() {
            return Ok(Related::Found(Vec::new()));
        }

        let related = self
            .store
            .find_cakes(&query::related_filter(&cake), Some(RELATED_LIMIT))
            .await?;

        Ok(Related::Found(related))
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}
