// src/catalog/shaper.rs
//
// In-memory post-processing of store results.

use std::hash::Hash;

use ahash::RandomState;
use hashbrown::HashSet;

use crate::model::{Cake, FilterOptions, PriceRange};
use crate::query::{Match, SortOrder};

/// Drops repeated values, keeping the first occurrence.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T, RandomState> = HashSet::with_hasher(RandomState::new());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Stable sort on the first price tier. Cakes without prices count as 0.
pub fn sort_by_price(cakes: &mut [Cake], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::PriceLow => cakes.sort_by(|a, b| a.base_price().total_cmp(&b.base_price())),
        SortOrder::PriceHigh => cakes.sort_by(|a, b| b.base_price().total_cmp(&a.base_price())),
    }
}

/// Names, flavours and categories of `cakes` that contain `needle`.
pub fn suggestions(cakes: &[Cake], needle: &str) -> Vec<String> {
    let m = &Match::Contains(needle.to_string());

    let hits = cakes.iter().flat_map(move |cake| {
        let name = Some(cake.name.as_str()).filter(|n| m.is_match(n));
        let flavour = Some(cake.flavour.as_str()).filter(|f| !f.is_empty() && m.is_match(f));
        let categories = cake
            .categories
            .iter()
            .map(String::as_str)
            .filter(move |c| m.is_match(c));

        name.into_iter().chain(flavour).chain(categories)
    });

    unique(hits.map(str::to_string))
}

pub fn filter_options(cakes: &[Cake]) -> FilterOptions {
    let categories = unique(cakes.iter().flat_map(|c| c.categories.iter().cloned()));
    let flavours = unique(
        cakes
            .iter()
            .filter(|c| !c.flavour.is_empty())
            .map(|c| c.flavour.clone()),
    );
    let weights = unique(cakes.iter().flat_map(|c| c.weight_options.iter().cloned()));
    let veg_options = unique(
        cakes
            .iter()
            .map(|c| if c.veg { "veg" } else { "nonveg" }.to_string()),
    );

    FilterOptions {
        categories,
        flavours,
        weights,
        veg_options,
        price_range: price_range(cakes),
    }
}

fn price_range(cakes: &[Cake]) -> PriceRange {
    let mut prices = cakes.iter().flat_map(|c| c.prices.iter().copied());

    match prices.next() {
        None => PriceRange { min: 0.0, max: 0.0 },
        Some(first) => {
            let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
            PriceRange { min, max }
        }
    }
}
