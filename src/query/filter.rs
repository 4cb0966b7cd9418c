// src/query/filter.rs
//
// Store-agnostic filter predicates over cake fields.

use crate::model::Cake;

/// Cake fields a filter can test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CakeField {
    Name,
    Flavour,
    Categories,
    Tags,
    LongDescription,
    WeightOptions,
    LegacyCategory,
}

impl CakeField {
    /// Document key of the field in the cakes collection.
    pub fn key(self) -> &'static str {
        match self {
            CakeField::Name => "name",
            CakeField::Flavour => "flavour",
            CakeField::Categories => "categories",
            CakeField::Tags => "tags",
            CakeField::LongDescription => "longDescription",
            CakeField::WeightOptions => "weightOptions",
            CakeField::LegacyCategory => "category",
        }
    }

    /// Every value the field holds. Scalar fields yield one value, array
    /// fields yield their elements.
    pub fn values(self, cake: &Cake) -> Vec<&str> {
        match self {
            CakeField::Name => vec![cake.name.as_str()],
            CakeField::Flavour => vec![cake.flavour.as_str()],
            CakeField::Categories => cake.categories.iter().map(String::as_str).collect(),
            CakeField::Tags => cake.tags.iter().map(String::as_str).collect(),
            CakeField::LongDescription => vec![cake.long_description.as_str()],
            CakeField::WeightOptions => cake.weight_options.iter().map(String::as_str).collect(),
            CakeField::LegacyCategory => cake.legacy_category.iter().map(String::as_str).collect(),
        }
    }
}

/// How a field value is compared against a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Match {
    /// Whole value, ignoring case.
    Exact(String),
    /// Substring, ignoring case.
    Contains(String),
    /// Whole value, case-sensitive.
    Equals(String),
}

impl Match {
    pub fn literal(&self) -> &str {
        match self {
            Match::Exact(s) | Match::Contains(s) | Match::Equals(s) => s,
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Match::Exact(s) => value.to_lowercase() == s.to_lowercase(),
            Match::Contains(s) => value.to_lowercase().contains(&s.to_lowercase()),
            Match::Equals(s) => value == s,
        }
    }
}

/// Store-agnostic predicate over cakes.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Field(CakeField, Match),
    Veg(bool),
    ExcludeId(String),
    /// Logical OR. Empty matches nothing.
    Any(Vec<Filter>),
    /// Logical AND. Empty matches everything.
    Every(Vec<Filter>),
}

impl Filter {
    pub fn everything() -> Self {
        Filter::Every(Vec::new())
    }

    pub fn is_match(&self, cake: &Cake) -> bool {
        match self {
            Filter::Field(field, m) => field.values(cake).into_iter().any(|v| m.is_match(v)),
            Filter::Veg(veg) => cake.veg == *veg,
            Filter::ExcludeId(id) => cake.id != *id,
            Filter::Any(filters) => filters.iter().any(|f| f.is_match(cake)),
            Filter::Every(filters) => filters.iter().all(|f| f.is_match(cake)),
        }
    }
}
