//! Tests for catalog value types.

use std::collections::HashSet;

use super::*;
use crate::error::CarTaylorError;

fn engine() -> Category {
    Category::new(ENGINE).unwrap()
}

#[test]
fn test_category_equality_is_by_name() {
    assert_eq!(Category::new("Engine").unwrap(), engine());
    assert_ne!(Category::new("Interior").unwrap(), engine());
}

#[test]
fn test_category_rejects_blank_name() {
    assert!(Category::new("").unwrap_err().is_invariant());
    assert!(Category::new("  \t").unwrap_err().is_invariant());
}

#[test]
fn test_standard_categories() {
    let names: Vec<_> = standard_categories()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, vec!["Engine", "Transmission", "Exterior", "Interior"]);
}

#[test]
fn test_part_type_accessors() {
    let v8 = PartType::new("V8", engine(), 10_000).unwrap();
    assert_eq!(v8.name(), "V8");
    assert_eq!(v8.category(), &engine());
    assert_eq!(v8.price(), 10_000);
    assert_eq!(v8.qualified_name(), "Engine/V8");
    assert!(!v8.has_factory());
}

#[test]
fn test_part_type_rejects_blank_name_and_negative_price() {
    assert!(PartType::new(" ", engine(), 1).unwrap_err().is_invariant());
    assert!(PartType::new("V8", engine(), -5).unwrap_err().is_invariant());
    assert!(PartType::new("Free", engine(), 0).is_ok());
}

#[test]
fn test_part_type_identity_includes_price() {
    let v8 = PartType::new("V8", engine(), 10_000).unwrap();
    let same = PartType::new("V8", engine(), 10_000).unwrap();
    let repriced = PartType::new("V8", engine(), 9_000).unwrap();
    let elsewhere = PartType::new("V8", Category::new("Interior").unwrap(), 10_000).unwrap();

    assert_eq!(v8, same);
    assert_ne!(v8, repriced);
    assert_ne!(v8, elsewhere);

    let set: HashSet<_> = [v8, same, repriced, elsewhere].into_iter().collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_part_type_identity_ignores_factory() {
    let plain = PartType::new("V8", engine(), 10_000).unwrap();
    let with_factory = plain.clone().with_default_factory();
    assert_eq!(plain, with_factory);
}

#[test]
fn test_part_type_ordering_groups_by_category() {
    let interior = Category::new(INTERIOR).unwrap();
    let mut parts = vec![
        PartType::new("Leather", interior.clone(), 900).unwrap(),
        PartType::new("V8", engine(), 10_000).unwrap(),
        PartType::new("Cloth", interior, 0).unwrap(),
        PartType::new("V6", engine(), 8_000).unwrap(),
    ];
    parts.sort();
    let order: Vec<_> = parts.iter().map(|p| p.qualified_name()).collect();
    assert_eq!(
        order,
        vec!["Engine/V6", "Engine/V8", "Interior/Cloth", "Interior/Leather"]
    );
}

#[test]
fn test_instantiate_without_factory_fails() {
    let v8 = PartType::new("V8", engine(), 10_000).unwrap();
    assert!(matches!(
        v8.instantiate(),
        Err(CarTaylorError::Instantiation(_))
    ));
}

#[test]
fn test_instantiate_with_default_factory() {
    let v8 = PartType::new("V8", engine(), 10_000)
        .unwrap()
        .with_default_factory();
    let part = v8.instantiate().unwrap();
    assert_eq!(part.part_type(), &v8);
    assert_eq!(part.category(), &engine());
    assert_eq!(part.name(), "V8");
    assert!(part.property_names().is_empty());
}

#[test]
fn test_instantiate_propagates_factory_error() {
    let broken = PartType::new("V8", engine(), 10_000)
        .unwrap()
        .with_factory(|pt| {
            Err(CarTaylorError::Instantiation(format!(
                "no stock for {}",
                pt.name()
            )))
        });
    let err = broken.instantiate().unwrap_err();
    assert!(err.to_string().contains("no stock for V8"));
}

#[test]
fn test_part_properties() {
    let v8 = PartType::new("V8", engine(), 10_000)
        .unwrap()
        .with_factory(|pt| {
            let mut props = PropertyManager::new();
            props.add_property("fuel", ["Gasoline", "Diesel", "Hybrid"]);
            Ok(Part::with_properties(pt.clone(), props))
        });
    let mut part = v8.instantiate().unwrap();

    assert!(part.property_names().contains("fuel"));
    assert_eq!(part.property("fuel"), None);
    assert_eq!(part.available_property_values("fuel").len(), 3);

    part.set_property("fuel", "Diesel").unwrap();
    assert_eq!(part.property("fuel").as_deref(), Some("Diesel"));
}

#[test]
fn test_property_errors() {
    let mut props = PropertyManager::new();
    props.add_property("color", ["red", "blue", "green"]);

    assert!(props
        .set_property("color", "yellow")
        .unwrap_err()
        .is_invalid_argument());
    assert!(props
        .set_property("invalidName", "blue")
        .unwrap_err()
        .is_invalid_argument());
    assert_eq!(props.property("nonExistent"), None);
    assert!(props.available_property_values("nonExistent").is_empty());
}

#[test]
fn test_property_names() {
    let mut props = PropertyManager::new();
    props.add_property("Property1", ["Value1"]);
    props.add_property("Property2", ["Value2"]);
    assert_eq!(props.len(), 2);
    assert!(props.property_names().contains("Property1"));
    assert!(props.property_names().contains("Property2"));
}
