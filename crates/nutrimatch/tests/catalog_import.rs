use std::path::PathBuf;

use nutrimatch::recommendations::{Catalog, CatalogError, Diet, Goal, ItemDefect, ItemKey, Symptom};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn csv_and_json_exports_load_the_same_catalog() {
    let from_csv = Catalog::from_path(fixture("catalog.csv")).expect("csv catalog loads");
    let from_json = Catalog::from_path(fixture("catalog.json")).expect("json catalog loads");

    assert_eq!(from_csv.len(), 3);
    assert_eq!(from_csv.items(), from_json.items());
}

#[test]
fn imported_tags_resolve_from_labels_and_keys() {
    let catalog = Catalog::from_path(fixture("catalog.json")).expect("json catalog loads");

    let magnesium = catalog
        .get(&ItemKey::from("magnesium_marin"))
        .expect("magnesium present");
    assert!(magnesium.targets_symptom(Symptom::SleepIssues));
    assert!(magnesium.targets_goal(Goal::MoreEnergy));
    assert_eq!(
        magnesium.natural_sources,
        vec!["Amandes".to_string(), "Épinards".to_string()]
    );

    let omega = catalog
        .get(&ItemKey::from("omega_3_epa_dha"))
        .expect("omega-3 present");
    assert!(omega.targets_symptom(Symptom::JointPain));
    assert!(omega.is_compatible_with(Diet::Pescatarian));
    assert!(!omega.is_compatible_with(Diet::Vegan));
    assert_eq!(catalog.position(&ItemKey::from("vitamine_c")), Some(2));
}

#[test]
fn empty_contraindication_cells_mean_none() {
    let catalog = Catalog::from_path(fixture("catalog.csv")).expect("csv catalog loads");

    let vitamin = catalog
        .get(&ItemKey::from("vitamine_c"))
        .expect("vitamin c present");
    assert!(vitamin.contraindications.is_none());
    assert_eq!(
        catalog
            .get(&ItemKey::from("magnesium_marin"))
            .and_then(|item| item.contraindications.as_deref()),
        Some("Insuffisance rénale sévère")
    );
}

#[test]
fn items_without_compatible_diets_are_rejected() {
    let err = Catalog::from_path(fixture("invalid_catalog.json")).expect_err("no diets");

    match err {
        CatalogError::InvalidItem { key, defect } => {
            assert_eq!(key, "spiruline");
            assert_eq!(defect, ItemDefect::NoCompatibleDiets);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_extensions_and_missing_files_are_reported() {
    let err = Catalog::from_path(fixture("catalog.xlsx")).expect_err("unsupported");
    assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));

    let err = Catalog::from_path(fixture("missing.json")).expect_err("missing file");
    assert!(matches!(err, CatalogError::Io { .. }));
}
