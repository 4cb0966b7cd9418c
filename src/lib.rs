// src/lib.rs

//! Read-only cake catalog service.
//!
//! Browses cakes and categories held in a document store, with exact-field
//! filtering, free-text search, search suggestions, filter facets and
//! related-cake lookup, all served as JSON over HTTP.
//!
//! ## Modules
//! - **`query`**: turns request parameters into store-agnostic filters.
//! - **`catalog`**: the catalog operations and the in-memory result shaping.
//! - **`store`**: MongoDB and in-memory implementations of the catalog store.
//! - **`routes`** / **`server`**: the axum surface.
//! - **`config`**: environment configuration.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod routes;
pub mod server;
pub mod store;

#[cfg(test)]
mod testing;
