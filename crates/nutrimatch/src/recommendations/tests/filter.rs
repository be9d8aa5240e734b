use super::common::*;
use crate::recommendations::catalog::Catalog;
use crate::recommendations::domain::{Diet, Symptom, UserProfile};
use crate::recommendations::filter::filter_by_diet;
use crate::recommendations::scoring::score;
use crate::recommendations::weights::WeightTables;

#[test]
fn incompatible_items_are_zeroed_and_flagged() {
    let catalog = standard_catalog();
    let profile = UserProfile {
        selected_symptoms: [Symptom::PoorFocus].into(),
        diet: Some(Diet::Vegan),
        ..UserProfile::default()
    };
    let scored = score(&profile, &catalog, &WeightTables::standard());
    assert!(score_of(&scored, "omega_3_epa_dha") > 0.0);

    let filtered = filter_by_diet(scored, profile.diet);

    for entry in &filtered {
        let compatible = entry.item.is_compatible_with(Diet::Vegan);
        assert_eq!(entry.excluded_by_diet, !compatible, "{}", entry.item.key);
        if !compatible {
            assert_eq!(entry.score, 0.0);
        }
    }
    assert_eq!(score_of(&filtered, "omega_3_epa_dha"), 0.0);
    assert!(score_of(&filtered, "omega_3_algae") > 0.0);
}

#[test]
fn excluded_items_keep_their_components() {
    let catalog = standard_catalog();
    let profile = UserProfile {
        selected_symptoms: [Symptom::PoorFocus].into(),
        diet: Some(Diet::Vegan),
        ..UserProfile::default()
    };

    let filtered = filter_by_diet(
        score(&profile, &catalog, &WeightTables::standard()),
        profile.diet,
    );

    let omega = filtered
        .iter()
        .find(|entry| entry.item.key.as_str() == "omega_3_epa_dha")
        .expect("omega-3 present");
    assert!(omega.excluded_by_diet);
    assert_eq!(omega.components.len(), 1);
}

#[test]
fn no_declared_diet_leaves_scores_untouched() {
    let catalog = standard_catalog();
    let scored = scored_with(&catalog, &[0.4; 15]);
    let expected = scored.clone();

    let filtered = filter_by_diet(scored, None);

    assert_eq!(filtered, expected);
}

#[test]
fn exclusion_overrides_any_amount_of_matching() {
    let catalog = Catalog::from_items(vec![
        synthetic_item("fish_only", 100.0, &[Diet::Pescatarian]),
        synthetic_item("plant", 10.0, &[Diet::Vegan, Diet::Pescatarian]),
    ])
    .expect("valid");
    let scored = scored_with(&catalog, &[1_000.0, 0.01]);

    let filtered = filter_by_diet(scored, Some(Diet::Vegan));

    assert_eq!(filtered[0].score, 0.0);
    assert!(filtered[0].excluded_by_diet);
    assert_eq!(filtered[1].score, 0.01);
}
