// src/model.rs
//
// Catalog documents as stored and as served. Field names follow the stored
// documents (camelCase), absent fields fall back to the schema defaults.

use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default, serialize_with = "amounts")]
    pub prices: Vec<f64>,
    #[serde(default, serialize_with = "amounts")]
    pub cut_prices: Vec<f64>,
    #[serde(default)]
    pub discounts: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub flavour: String,
    #[serde(default)]
    pub weight_options: Vec<String>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_veg")]
    pub veg: bool,
    /// Single-valued category carried by older documents.
    #[serde(rename = "category", default, skip_serializing_if = "Option::is_none")]
    pub legacy_category: Option<String>,
}

fn default_veg() -> bool {
    true
}

impl Cake {
    /// Price of the first tier, 0 when the cake has no prices.
    pub fn base_price(&self) -> f64 {
        self.prices.first().copied().unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    #[serde(serialize_with = "amount")]
    pub min: f64,
    #[serde(serialize_with = "amount")]
    pub max: f64,
}

/// Facets offered to the filter UI.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub flavours: Vec<String>,
    pub weights: Vec<String>,
    pub veg_options: Vec<String>,
    pub price_range: PriceRange,
}

/// Whole amounts go out as JSON integers (`499`, not `499.0`); anything
/// else stays a float.
struct Amount(f64);

// f64 holds every integer up to 2^53 exactly
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.fract() == 0.0 && v.abs() <= MAX_EXACT {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

fn amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Amount(*value).serialize(serializer)
}

fn amounts<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|&v| Amount(v)))
}
