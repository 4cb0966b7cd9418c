// src/query/mod.rs

//! Query building.
//!
//! Turns raw request parameters into a [`Filter`] the catalog store can run.
//! Client input only ever ends up as a literal inside a [`Match`]; stores are
//! responsible for matching it literally.
//!
//! - **Exact filter**: anchored, case-insensitive tests on category, flavour
//!   and weight, plus veg equality, all ANDed.
//! - **Search**: every whitespace token against six text fields, all ORed.
//! - **Suggestions**: the whole query against name, flavour and categories.

pub mod filter;
pub mod params;

use smallvec::SmallVec;

use crate::model::Cake;

pub use filter::{CakeField, Filter, Match};
pub use params::{selection, FilterParams, SearchParams, SortOrder};

/// Fields a search token is tested against.
pub const SEARCH_FIELDS: [CakeField; 6] = [
    CakeField::Name,
    CakeField::Flavour,
    CakeField::Categories,
    CakeField::Tags,
    CakeField::LongDescription,
    CakeField::WeightOptions,
];

/// Fields a suggestion needle is tested against.
pub const SUGGESTION_FIELDS: [CakeField; 3] =
    [CakeField::Name, CakeField::Flavour, CakeField::Categories];

pub type Tokens = SmallVec<[String; 4]>;

pub fn exact_filter(params: &FilterParams) -> Filter {
    let mut clauses = Vec::new();

    if let Some(veg) = selection(params.veg.as_deref()) {
        clauses.push(Filter::Veg(veg == "veg"));
    }
    if let Some(category) = selection(params.category.as_deref()) {
        clauses.push(Filter::Field(
            CakeField::Categories,
            Match::Exact(category.to_string()),
        ));
    }
    if let Some(flavour) = selection(params.flavour.as_deref()) {
        clauses.push(Filter::Field(
            CakeField::Flavour,
            Match::Exact(flavour.to_string()),
        ));
    }
    if let Some(weight) = selection(params.weight.as_deref()) {
        clauses.push(Filter::Field(
            CakeField::WeightOptions,
            Match::Exact(weight.to_string()),
        ));
    }

    Filter::Every(clauses)
}

pub fn search_tokens(q: &str) -> Tokens {
    q.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// `None` when the query has no tokens; callers answer with an empty result
/// instead of querying the store.
pub fn search_filter(q: &str) -> Option<Filter> {
    let tokens = search_tokens(q);
    if tokens.is_empty() {
        return None;
    }

    let clauses = tokens
        .iter()
        .flat_map(|token| {
            SEARCH_FIELDS
                .iter()
                .map(move |&field| Filter::Field(field, Match::Contains(token.clone())))
        })
        .collect();

    Some(Filter::Any(clauses))
}

/// The trimmed query is used as one needle. `None` when it is blank.
pub fn suggestion_needle(q: &str) -> Option<&str> {
    let needle = q.trim();
    (!needle.is_empty()).then_some(needle)
}

pub fn suggestion_filter(needle: &str) -> Filter {
    Filter::Any(
        SUGGESTION_FIELDS
            .iter()
            .map(|&field| Filter::Field(field, Match::Contains(needle.to_string())))
            .collect(),
    )
}

/// Cakes tagged with `category`, or carrying it as their legacy category.
pub fn category_filter(category: &str) -> Filter {
    Filter::Any(vec![
        Filter::Field(CakeField::Categories, Match::Equals(category.to_string())),
        Filter::Field(
            CakeField::LegacyCategory,
            Match::Equals(category.to_string()),
        ),
    ])
}

/// Other cakes sharing at least one category with `cake`.
pub fn related_filter(cake: &Cake) -> Filter {
    let shared = cake
        .categories
        .iter()
        .map(|c| Filter::Field(CakeField::Categories, Match::Equals(c.clone())))
        .collect();

    Filter::Every(vec![Filter::ExcludeId(cake.id.clone()), Filter::Any(shared)])
}
