//! Tests for the configurator facade.

use std::io::Write;

use cartaylor_config::{
    CatalogDocument, ConfiguratorConfig, PartTypeRecord, ReportFormat, RuleRecord,
};
use cartaylor_engine::{CompatibilityManager, Violation};
use cartaylor_test::vehicle::{
    self, automatic, manual, ruled_document, v6, v8, SCENARIO_CATALOG_JSON, SCENARIO_CATEGORIES,
    TEST_CATALOG_JSON,
};

use super::*;

fn scenario() -> Configurator {
    let document = CatalogDocument::from_json_str(SCENARIO_CATALOG_JSON).unwrap();
    Configurator::from_document(SCENARIO_CATEGORIES, &document).unwrap()
}

fn ruled() -> Configurator {
    Configurator::from_document(
        ["Engine", "Transmission", "Exterior", "Interior"],
        &ruled_document(),
    )
    .unwrap()
}

#[test]
fn test_new_is_empty() {
    let configurator = Configurator::new(Catalog::new());
    assert_eq!(configurator.categories().len(), 4);
    assert!(configurator.part_types().is_empty());
    assert!(configurator.configuration().is_empty());
    assert!(configurator.is_valid());
    assert!(!configurator.is_complete());
    assert_eq!(configurator.total_price(), 0);
}

#[test]
fn test_from_document_loads_parts_and_rules() {
    let configurator = ruled();
    assert_eq!(configurator.part_types().len(), 6);
    assert!(configurator
        .compatibility_checker()
        .is_incompatible(&manual(), &v8()));
    assert!(configurator
        .compatibility_checker()
        .is_required_by(&automatic(), &v6()));
}

#[test]
fn test_from_document_unknown_category() {
    let document = CatalogDocument::from_json_str(TEST_CATALOG_JSON).unwrap();
    let err = Configurator::from_document(SCENARIO_CATEGORIES, &document).unwrap_err();
    assert!(matches!(err, CarTaylorError::Load(_)));
}

#[test]
fn test_from_document_unknown_rule_part() {
    let mut document = CatalogDocument::from_json_str(SCENARIO_CATALOG_JSON).unwrap();
    document
        .requirements
        .push(RuleRecord::new("V8", ["Automatic"]));
    assert!(Configurator::from_document(SCENARIO_CATEGORIES, &document).is_err());
}

#[test]
fn test_variants() {
    let configurator = scenario();
    let engines = configurator.variants(&vehicle::engine());
    assert_eq!(engines.len(), 2);
    assert!(engines.contains(&v8()) && engines.contains(&v6()));

    let transmissions = configurator.variants_by_name("Transmission").unwrap();
    assert_eq!(transmissions.len(), 1);
    assert!(configurator
        .variants_by_name("Wheels")
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_variants_are_copies() {
    let configurator = scenario();
    let mut engines = configurator.variants(&vehicle::engine());
    engines.clear();
    assert_eq!(configurator.variants(&vehicle::engine()).len(), 2);

    let mut categories = configurator.categories();
    categories.clear();
    assert_eq!(configurator.categories().len(), 2);
}

#[test]
fn test_part_reference() {
    let configurator = scenario();
    assert_eq!(configurator.part("V8").unwrap(), v8());
    assert_eq!(configurator.part("Transmission/Manual").unwrap(), manual());
    assert!(configurator.part("V12").unwrap_err().is_invalid_argument());
}

#[test]
fn test_select_by_reference() {
    let mut configurator = scenario();
    assert_eq!(configurator.select("V8").unwrap(), None);
    assert_eq!(configurator.select("Engine/V6").unwrap(), Some(v8()));
    assert!(configurator.configuration().is_selected(&v6()));
    assert!(configurator.select("Automatic").is_err());
}

#[test]
fn test_select_by_name() {
    let mut configurator = scenario();
    configurator.select_by_name("Engine", "V8").unwrap();
    configurator.select_by_name("Transmission", "Manual").unwrap();
    assert!(configurator.is_complete());

    assert!(configurator
        .select_by_name("Engine", "Manual")
        .unwrap_err()
        .is_invalid_argument());
    assert!(configurator
        .select_by_name("Wheels", "V8")
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_unselect_by_name() {
    let mut configurator = scenario();
    configurator.select("V8").unwrap();
    assert_eq!(configurator.unselect_by_name("Engine").unwrap(), Some(v8()));
    assert_eq!(configurator.unselect_by_name("Engine").unwrap(), None);
    assert!(configurator.unselect_by_name("Wheels").is_err());
}

#[test]
fn test_rules_through_manager() {
    let mut configurator = scenario();
    configurator.select("V8").unwrap();
    configurator.select("Manual").unwrap();
    assert!(configurator.is_valid());

    configurator
        .compatibility_manager_mut()
        .add_incompatibilities(&v8(), &[manual()]);
    assert!(!configurator.is_valid());
    assert_eq!(
        configurator.violations(),
        vec![Violation::conflict(v8(), manual())]
    );

    configurator
        .compatibility_manager_mut()
        .remove_incompatibility(&manual(), &v8());
    assert!(configurator.is_valid());
}

#[test]
fn test_status() {
    let mut configurator = ruled();
    configurator.select("Automatic").unwrap();
    configurator.select("V8").unwrap();

    let status = configurator.status();
    assert!(!status.valid);
    assert!(!status.complete);
    assert_eq!(status.total_price, 11_500);
    assert_eq!(
        status.violations,
        vec![Violation::MissingRequirement {
            part: automatic(),
            required: v6(),
        }]
    );
    assert_eq!(
        status.missing_categories,
        vec![vehicle::exterior(), vehicle::interior()]
    );
}

#[test]
fn test_describe() {
    let mut configurator = scenario();
    configurator.select("Manual").unwrap();
    assert_eq!(
        configurator.describe(),
        "Configuration: \nCategory: Transmission\nPartType: Manual, Price: 0\n"
    );
}

#[test]
fn test_report_format() {
    let mut configurator = scenario();
    configurator.select("V8").unwrap();
    configurator.select("Manual").unwrap();
    assert!(configurator.report().starts_with("Configuration: \n"));

    let mut configurator = configurator.with_report_config(ReportConfig {
        format: ReportFormat::Html,
        currency: "EUR".to_string(),
    });
    assert_eq!(configurator.report(), configurator.html_description());
    assert!(configurator.report().contains("<li>Total price: 10000 EUR</li>"));

    configurator.configuration_mut().clear();
    assert!(configurator.html_description().starts_with("<p style='color: red'>"));
}

#[test]
fn test_from_config_without_catalog() {
    let config = ConfiguratorConfig::new().with_categories(["Engine"]);
    let configurator = Configurator::from_config(&config).unwrap();
    assert_eq!(configurator.categories().len(), 1);
    assert!(configurator.part_types().is_empty());
}

#[test]
fn test_from_config_with_catalog_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(SCENARIO_CATALOG_JSON.as_bytes()).unwrap();

    let config = ConfiguratorConfig::new()
        .with_categories(SCENARIO_CATEGORIES)
        .with_catalog_path(file.path())
        .with_report_format(ReportFormat::Html);
    let mut configurator = Configurator::from_config(&config).unwrap();
    assert_eq!(configurator.part_types().len(), 3);

    configurator.select("V6").unwrap();
    configurator.select("Manual").unwrap();
    assert!(configurator.report().contains("<li>Total price: 8000 €</li>"));
}

#[test]
fn test_from_config_missing_catalog_file() {
    let config = ConfiguratorConfig::new().with_catalog_path("/nonexistent/catalog.json");
    let err = Configurator::from_config(&config).unwrap_err();
    assert!(matches!(err, CarTaylorError::Load(_)));
}

#[test]
fn test_from_config_invalid_categories() {
    let config = ConfiguratorConfig::new().with_categories(Vec::<String>::new());
    assert!(Configurator::from_config(&config)
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_load_rules_after_construction() {
    let mut configurator = scenario();
    let mut document = CatalogDocument::default();
    document.part_types.push(PartTypeRecord::new("Ignored", "Engine", 1));
    document
        .incompatibilities
        .push(RuleRecord::new("Engine/V6", ["Manual"]));

    configurator.load_rules(&document).unwrap();
    assert!(configurator
        .compatibility_checker()
        .is_incompatible(&v6(), &manual()));
    assert_eq!(configurator.part_types().len(), 3);
}
