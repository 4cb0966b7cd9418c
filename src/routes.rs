// src/routes.rs
//
// One handler per catalog route.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::catalog::{Catalog, Related};
use crate::error::AppError;
use crate::model::{Cake, Category, FilterOptions};
use crate::query::{FilterParams, SearchParams};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

type Handled<T> = Result<Json<T>, AppError>;

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Cake catalog API is running")
}

pub async fn categories(State(state): State<AppState>) -> Handled<Vec<Category>> {
    let categories = state
        .catalog
        .categories()
        .await
        .map_err(AppError::failed("Failed to fetch categories"))?;
    Ok(Json(categories))
}

pub async fn filter_options(State(state): State<AppState>) -> Handled<FilterOptions> {
    let options = state
        .catalog
        .filter_options()
        .await
        .map_err(AppError::failed("Failed to fetch filter options"))?;
    Ok(Json(options))
}

/// Never fails: a store error answers with no suggestions.
pub async fn search_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<String>> {
    let suggestions = state
        .catalog
        .search_suggestions(&params.q)
        .await
        .unwrap_or_else(|e| {
            error!("Suggestion error: {e}");
            Vec::new()
        });
    Json(suggestions)
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Handled<Vec<Cake>> {
    let cakes = state
        .catalog
        .search(&params.q)
        .await
        .map_err(AppError::failed("Search failed"))?;
    Ok(Json(cakes))
}

pub async fn filtered_cakes(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Handled<Vec<Cake>> {
    let cakes = state
        .catalog
        .filtered_cakes(&params)
        .await
        .map_err(AppError::failed("Failed to fetch cakes"))?;
    Ok(Json(cakes))
}

pub async fn all_cakes(State(state): State<AppState>) -> Handled<Vec<Cake>> {
    let cakes = state
        .catalog
        .all_cakes()
        .await
        .map_err(AppError::failed("Failed to fetch cakes"))?;
    Ok(Json(cakes))
}

pub async fn cakes_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Handled<Vec<Cake>> {
    let cakes = state
        .catalog
        .cakes_by_category(&category)
        .await
        .map_err(AppError::failed("Failed to fetch category cakes"))?;
    Ok(Json(cakes))
}

pub async fn cake(State(state): State<AppState>, Path(id): Path<String>) -> Handled<Cake> {
    state
        .catalog
        .cake(&id)
        .await
        .map_err(AppError::failed("Failed to fetch cake details"))?
        .map(Json)
        .ok_or(AppError::CakeNotFound)
}

/// A missing source cake is a 404; any other failure answers with no cakes.
pub async fn related_cakes(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.related_cakes(&id).await {
        Ok(Related::Found(cakes)) => Json(cakes).into_response(),
        Ok(Related::SourceMissing) => AppError::CakeNotFound.into_response(),
        Err(e) => {
            warn!("Related cakes for {id} failed: {e}");
            Json(Vec::<Cake>::new()).into_response()
        }
    }
}

pub async fn test_db(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.ping().await {
        Ok(()) => (StatusCode::OK, "DB Connected Successfully"),
        Err(e) => {
            error!("DB check failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "DB FAILED")
        }
    }
}
