// src/testing.rs

//! Fixtures shared by the unit tests.

use crate::model::{Cake, Category};

pub fn cake(id: &str, name: &str) -> Cake {
    Cake {
        id: id.to_string(),
        name: name.to_string(),
        veg: true,
        ..Cake::default()
    }
}

pub fn oid(n: u8) -> String {
    format!("{:024x}", n)
}

/// A small catalog covering every filterable field.
pub fn sample_cakes() -> Vec<Cake> {
    vec![
        Cake {
            prices: vec![499.0, 799.0],
            categories: vec!["Chocolate".into(), "Birthday".into()],
            flavour: "Chocolate".into(),
            weight_options: vec!["500g".into(), "1kg".into()],
            tags: vec!["rich".into()],
            long_description: "Dark chocolate sponge with ganache".into(),
            ..cake(&oid(1), "Truffle Delight")
        },
        Cake {
            prices: vec![899.0],
            categories: vec!["Wedding".into()],
            flavour: "Vanilla".into(),
            weight_options: vec!["2kg".into()],
            veg: false,
            ..cake(&oid(2), "Classic Vanilla Tier")
        },
        Cake {
            prices: vec![299.0, 599.0],
            categories: vec!["Cakes".into(), "Birthday".into()],
            flavour: "Strawberry".into(),
            weight_options: vec!["500g".into()],
            tags: vec!["fruit".into(), "summer".into()],
            ..cake(&oid(3), "Berry Bliss")
        },
        Cake {
            categories: vec!["a.b".into()],
            ..cake(&oid(4), "Mystery Box")
        },
    ]
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: oid(50),
            name: "Birthday".into(),
            image: "https://img.example/birthday.png".into(),
            categories: vec!["new".into()],
        },
        Category {
            id: oid(51),
            name: "Wedding".into(),
            image: "https://img.example/wedding.png".into(),
            categories: vec!["wedding".into(), "offer".into()],
        },
    ]
}
