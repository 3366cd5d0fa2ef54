//! Standard vehicle fixtures.
//!
//! Part types here compare equal to the ones a catalog builds from
//! [`TEST_CATALOG_JSON`], since identity is name, category and price.

use cartaylor_config::{CatalogDocument, PartTypeRecord, RuleRecord};
use cartaylor_core::{Category, PartType, ENGINE, EXTERIOR, INTERIOR, TRANSMISSION};

/// Catalog document covering the four standard categories.
pub const TEST_CATALOG_JSON: &str = r#"{
    "partTypes": [
        { "name": "V8", "category": "Engine", "price": 10000,
          "properties": { "fuel": ["Gasoline", "Diesel", "Hybrid"] } },
        { "name": "V6", "category": "Engine", "price": 8000 },
        { "name": "Manual", "category": "Transmission", "price": 0 },
        { "name": "Automatic", "category": "Transmission", "price": 1500 },
        { "name": "Red", "category": "Exterior", "price": 300,
          "properties": { "paint": ["Classic", "Metallic", "Sport"] } },
        { "name": "Leather", "category": "Interior", "price": 900 }
    ]
}"#;

/// Categories of the two-category scenario catalog.
pub const SCENARIO_CATEGORIES: [&str; 2] = [ENGINE, TRANSMISSION];

/// Engine/Transmission catalog: V8 (10000), V6 (8000), Manual (0).
pub const SCENARIO_CATALOG_JSON: &str = r#"{
    "partTypes": [
        { "name": "V8", "category": "Engine", "price": 10000 },
        { "name": "V6", "category": "Engine", "price": 8000 },
        { "name": "Manual", "category": "Transmission", "price": 0 }
    ]
}"#;

fn category(name: &str) -> Category {
    Category::new(name).expect("fixture category names are non-blank")
}

fn part(name: &str, category_name: &str, price: i64) -> PartType {
    PartType::new(name, category(category_name), price).expect("fixture part types are valid")
}

pub fn engine() -> Category {
    category(ENGINE)
}

pub fn transmission() -> Category {
    category(TRANSMISSION)
}

pub fn exterior() -> Category {
    category(EXTERIOR)
}

pub fn interior() -> Category {
    category(INTERIOR)
}

pub fn v8() -> PartType {
    part("V8", ENGINE, 10_000)
}

pub fn v6() -> PartType {
    part("V6", ENGINE, 8_000)
}

pub fn manual() -> PartType {
    part("Manual", TRANSMISSION, 0)
}

pub fn automatic() -> PartType {
    part("Automatic", TRANSMISSION, 1_500)
}

pub fn red() -> PartType {
    part("Red", EXTERIOR, 300)
}

pub fn leather() -> PartType {
    part("Leather", INTERIOR, 900)
}

/// [`TEST_CATALOG_JSON`] plus a V8↔Manual incompatibility and an
/// Automatic→V6 requirement.
pub fn ruled_document() -> CatalogDocument {
    CatalogDocument {
        part_types: vec![
            PartTypeRecord::new("V8", ENGINE, 10_000),
            PartTypeRecord::new("V6", ENGINE, 8_000),
            PartTypeRecord::new("Manual", TRANSMISSION, 0),
            PartTypeRecord::new("Automatic", TRANSMISSION, 1_500),
            PartTypeRecord::new("Red", EXTERIOR, 300),
            PartTypeRecord::new("Leather", INTERIOR, 900),
        ],
        incompatibilities: vec![RuleRecord::new("V8", ["Transmission/Manual"])],
        requirements: vec![RuleRecord::new("Automatic", ["V6"])],
    }
}
