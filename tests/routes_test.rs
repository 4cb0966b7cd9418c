// tests/routes_test.rs

//! End-to-end route tests.
//!
//! Drives the full router over the in-memory store loaded from
//! `tests/fixtures/catalog.json`, and over a Mongo store with no URL to
//! check how each route reports store failures.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use cake_catalog::{
    server::router,
    store::{MemoryStore, MongoStore},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

const TRUFFLE: &str = "65a000000000000000000001";
const BERRY: &str = "65a000000000000000000003";
const MISSING: &str = "65a0000000000000000000ff";

fn app() -> Router {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json");
    router(Arc::new(MemoryStore::open(&path).unwrap()))
}

fn offline_app() -> Router {
    router(Arc::new(MongoStore::new(None, None)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn names(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|cake| cake["name"].as_str().unwrap())
        .collect()
}

// ============================================================
// LISTINGS
// ============================================================

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = get(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "Cake catalog API is running");
}

#[tokio::test]
async fn test_all_cakes_both_paths() {
    for uri in ["/api/cakes", "/cakes"] {
        let (status, body) = get_json(app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_categories_both_paths() {
    for uri in ["/api/categories", "/categories"] {
        let (status, body) = get_json(app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Birthday");
        assert_eq!(body[1]["categories"], json!(["wedding", "offer"]));
    }
}

#[tokio::test]
async fn test_cake_json_shape() {
    let (_, body) = get_json(app(), &format!("/api/cake/{BERRY}")).await;

    assert_eq!(body["_id"], BERRY);
    assert_eq!(body["weightOptions"], json!(["500g"]));
    assert_eq!(body["cutPrices"], json!([]));
    assert_eq!(body["shortDescription"], "");
    assert_eq!(body["veg"], true);
    assert!(body.get("category").is_none());
}

#[tokio::test]
async fn test_cakes_by_category_and_legacy_field() {
    let (_, body) = get_json(app(), "/api/cakes/Birthday").await;
    assert_eq!(names(&body), vec!["Truffle Delight", "Berry Bliss"]);

    let (_, body) = get_json(app(), "/api/cakes/Classics").await;
    assert_eq!(names(&body), vec!["Plain Sponge"]);
    assert_eq!(body[0]["category"], "Classics");
}

// ============================================================
// FILTERED CAKES
// ============================================================

#[tokio::test]
async fn test_filter_all_returns_everything() {
    let (status, body) = get_json(
        app(),
        "/api/cakes/filter?category=all&flavour=all&weight=all&veg=all&sort=all",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_filter_category_case_insensitive_anchored() {
    let (_, body) = get_json(app(), "/api/cakes/filter?category=BIRTHDAY&sort=low").await;
    assert_eq!(names(&body), vec!["Berry Bliss", "Truffle Delight"]);

    let (_, body) = get_json(app(), "/api/cakes/filter?category=cake").await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn test_filter_sort_high_with_missing_prices() {
    let (_, body) = get_json(app(), "/api/cakes/filter?sort=high").await;

    assert_eq!(
        names(&body),
        vec![
            "Classic Vanilla Tier",
            "Truffle Delight",
            "Berry Bliss",
            "Plain Sponge"
        ]
    );
}

#[tokio::test]
async fn test_filter_veg_and_weight() {
    let (_, body) = get_json(app(), "/api/cakes/filter?veg=nonveg").await;
    assert_eq!(names(&body), vec!["Classic Vanilla Tier"]);

    let (_, body) = get_json(app(), "/api/cakes/filter?weight=500G&veg=veg").await;
    assert_eq!(names(&body), vec!["Truffle Delight", "Berry Bliss"]);
}

// ============================================================
// SEARCH
// ============================================================

#[tokio::test]
async fn test_search_any_token() {
    let (status, body) = get_json(app(), "/api/search?q=Ganache%20SUMMER").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Truffle Delight", "Berry Bliss"]);
}

#[tokio::test]
async fn test_search_blank_is_empty() {
    for uri in ["/api/search?q=%20%20", "/api/search", "/api/search-suggestions?q="] {
        let (status, body) = get_json(app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn test_search_suggestions() {
    let (_, body) = get_json(app(), "/api/search-suggestions?q=choc").await;
    assert_eq!(body, json!(["Chocolate"]));

    let (_, body) = get_json(app(), "/api/search-suggestions?q=berry").await;
    assert_eq!(body, json!(["Berry Bliss", "Strawberry"]));
}

#[tokio::test]
async fn test_filter_options() {
    let (status, body) = get_json(app(), "/api/filter-options").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "categories": ["Chocolate", "Birthday", "Wedding", "Cakes"],
            "flavours": ["Chocolate", "Vanilla", "Strawberry"],
            "weights": ["500g", "1kg", "2kg"],
            "vegOptions": ["veg", "nonveg"],
            "priceRange": { "min": 299, "max": 1299 }
        })
    );
}

// ============================================================
// SINGLE AND RELATED CAKES
// ============================================================

#[tokio::test]
async fn test_cake_lookup() {
    let (status, body) = get_json(app(), &format!("/api/cake/{TRUFFLE}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Truffle Delight");
    assert_eq!(body["prices"], json!([499, 799, 1299]));

    let (status, body) = get_json(app(), &format!("/api/cake/{MISSING}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Cake not found" }));

    let (status, body) = get_json(app(), "/api/cake/not-an-id").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch cake details" }));
}

#[tokio::test]
async fn test_related_cakes() {
    let (status, body) = get_json(app(), &format!("/api/related-cakes/{BERRY}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Truffle Delight"]);

    let (status, _) = get_json(app(), &format!("/api/related-cakes/{MISSING}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(app(), "/api/related-cakes/not-an-id").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ============================================================
// STORE FAILURES
// ============================================================

#[tokio::test]
async fn test_failures_use_route_messages() {
    let cases = [
        ("/api/categories", "Failed to fetch categories"),
        ("/api/filter-options", "Failed to fetch filter options"),
        ("/api/search?q=choc", "Search failed"),
        ("/api/cakes/filter?category=all", "Failed to fetch cakes"),
        ("/api/cakes", "Failed to fetch cakes"),
        ("/api/cakes/Birthday", "Failed to fetch category cakes"),
    ];

    for (uri, message) in cases {
        let (status, body) = get_json(offline_app(), uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "error": message }), "{uri}");
    }
}

#[tokio::test]
async fn test_failures_that_degrade() {
    let (status, body) = get_json(offline_app(), "/api/search-suggestions?q=choc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(offline_app(), &format!("/api/related-cakes/{BERRY}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_db_check() {
    let (status, body) = get(app(), "/api/test-db").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "DB Connected Successfully");

    let (status, body) = get(offline_app(), "/api/test-db").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(String::from_utf8(body).unwrap(), "DB FAILED");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/cakes")
                .header(header::ORIGIN, "https://shop.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
