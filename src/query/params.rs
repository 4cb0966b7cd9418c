// src/query/params.rs
//
// Query-string parameters accepted by the catalog routes.

use serde::Deserialize;

pub const ALL: &str = "all";

/// Raw parameters of the filtered cakes listing. A missing parameter means
/// the same as `all`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    pub flavour: Option<String>,
    pub weight: Option<String>,
    pub veg: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Unsorted,
    PriceLow,
    PriceHigh,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("low") => SortOrder::PriceLow,
            Some("high") => SortOrder::PriceHigh,
            _ => SortOrder::Unsorted,
        }
    }
}

/// Returns the constraint value, or `None` for the `all` sentinel.
pub fn selection(raw: Option<&str>) -> Option<&str> {
    match raw {
        None | Some(ALL) => None,
        Some(value) => Some(value),
    }
}
