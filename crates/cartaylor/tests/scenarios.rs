//! End-to-end configurator scenarios.

use std::path::PathBuf;

use cartaylor::prelude::*;
use cartaylor::{Catalog, CompatibilityStore, ConfigurationStatus};
use cartaylor_test::vehicle::{manual, v6, v8, SCENARIO_CATALOG_JSON, SCENARIO_CATEGORIES};

fn scenario() -> Configurator {
    let document = CatalogDocument::from_json_str(SCENARIO_CATALOG_JSON).unwrap();
    Configurator::from_document(SCENARIO_CATEGORIES, &document).unwrap()
}

fn vehicle_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/vehicle-catalog.json")
}

#[test]
fn test_incompatibility_toggles_validity() {
    let mut configurator = scenario();
    configurator.select("V8").unwrap();
    configurator.select("Manual").unwrap();
    assert!(configurator.is_complete());
    assert!(configurator.is_valid());
    assert_eq!(configurator.total_price(), 10_000);

    configurator
        .compatibility_manager_mut()
        .add_incompatibilities(&v8(), &[manual()]);
    assert!(!configurator.is_valid());
    assert!(configurator.is_complete());

    configurator
        .compatibility_manager_mut()
        .remove_incompatibility(&v8(), &manual());
    assert!(configurator.is_valid());
}

#[test]
fn test_requirement_satisfied_by_selection() {
    let mut configurator = scenario();
    configurator
        .compatibility_manager_mut()
        .add_requirements(&v8(), &[manual()]);

    configurator.select("V8").unwrap();
    assert!(!configurator.is_valid());
    assert!(!configurator.is_complete());

    configurator.select("Manual").unwrap();
    assert!(configurator.is_valid());
    assert!(configurator.is_complete());
}

#[test]
fn test_replacement_changes_price_by_delta() {
    let mut configurator = scenario();
    configurator.select("V8").unwrap();
    configurator.select("Manual").unwrap();
    let before = configurator.total_price();

    let replaced = configurator.select("V6").unwrap();
    assert_eq!(replaced, Some(v8()));
    assert_eq!(
        configurator.total_price() - before,
        v6().price() - v8().price()
    );
}

#[test]
fn test_rule_round_trip_restores_store() {
    let mut store = CompatibilityStore::new();
    store.add_requirements(&v6(), &[manual()]);
    let before = store.clone();

    store.add_incompatibilities(&v8(), &[manual(), v6()]);
    store.add_requirements(&v8(), &[manual()]);
    store.remove_incompatibility(&manual(), &v8());
    store.remove_incompatibility(&v8(), &v6());
    store.remove_requirement(&v8(), &manual());

    assert_eq!(store.incompatibility_count(), before.incompatibility_count());
    assert_eq!(store.requirement_count(), before.requirement_count());
    assert!(store.incompatibilities(&v8()).is_empty());
    assert!(store.requirements(&v8()).is_empty());
    assert!(store.is_required_by(&manual(), &v6()));
}

#[test]
fn test_shipped_vehicle_catalog() {
    let config = ConfiguratorConfig::new().with_catalog_path(vehicle_catalog_path());
    let mut configurator = Configurator::from_config(&config).unwrap();
    assert_eq!(configurator.categories().len(), 4);
    assert_eq!(configurator.part_types().len(), 18);

    configurator.select("EG100").unwrap();
    configurator.select("TM5").unwrap();
    configurator.select("XC").unwrap();
    configurator.select("IN").unwrap();
    let status: ConfigurationStatus = configurator.status();
    assert!(status.is_final());
    assert_eq!(status.total_price, 7_000);

    configurator.select("IS").unwrap();
    let status = configurator.status();
    assert!(!status.valid);
    assert_eq!(status.violations.len(), 3);
    assert_eq!(
        configurator.html_description(),
        "<p style='color: red'>The configuration is invalid or incomplete.</p>"
    );
}

#[test]
fn test_hybrid_needs_cvt() {
    let mut catalog = Catalog::new();
    catalog.load_path(vehicle_catalog_path()).unwrap();
    let document = CatalogDocument::from_path(vehicle_catalog_path()).unwrap();
    let mut configurator = Configurator::new(catalog);
    configurator.load_rules(&document).unwrap();

    configurator.select("EH120").unwrap();
    configurator.select("TM6").unwrap();
    let violations = configurator.violations();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].to_string(),
        "Engine/EH120 requires Transmission/TC120"
    );

    configurator.select("TC120").unwrap();
    assert!(configurator.is_valid());
}
