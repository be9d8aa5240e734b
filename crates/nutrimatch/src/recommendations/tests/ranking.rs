use super::common::*;
use crate::recommendations::catalog::Catalog;
use crate::recommendations::domain::Diet;
use crate::recommendations::ranking::{rank, DEFAULT_RESULT_LIMIT};

fn keys(recommendations: &[crate::recommendations::Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.key.as_str())
        .collect()
}

#[test]
fn drops_non_positive_scores_and_sorts_descending() {
    let catalog = synthetic_catalog(&["a", "b", "c", "d", "e"]);
    let scored = scored_with(&catalog, &[0.2, 0.0, 0.7, -0.3, 0.5]);

    let ranked = rank(scored, DEFAULT_RESULT_LIMIT);

    assert_eq!(keys(&ranked), vec!["c", "e", "a"]);
    assert_eq!(
        ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = synthetic_catalog(&["first", "second", "third", "fourth"]);
    let scored = scored_with(&catalog, &[0.3, 0.5, 0.3, 0.5]);

    let ranked = rank(scored, 4);

    assert_eq!(keys(&ranked), vec!["second", "fourth", "first", "third"]);
}

#[test]
fn percentages_are_relative_to_the_leader() {
    let catalog = synthetic_catalog(&["a", "b", "c"]);
    let scored = scored_with(&catalog, &[0.25, 0.5, 0.0625]);

    let ranked = rank(scored, 3);

    let percentages: Vec<u8> = ranked.iter().map(|r| r.efficacy_percentage).collect();
    assert_eq!(percentages, vec![100, 50, 13]);
}

#[test]
fn top_result_is_always_one_hundred_percent() {
    let catalog = synthetic_catalog(&["tiny"]);
    let scored = scored_with(&catalog, &[1e-12]);

    let ranked = rank(scored, 1);

    assert_eq!(ranked[0].efficacy_percentage, 100);
}

#[test]
fn truncates_to_limit_and_flags_exactly_three_primary() {
    let catalog = synthetic_catalog(&["a", "b", "c", "d", "e", "f", "g"]);
    let scored = scored_with(&catalog, &[0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1]);

    let ranked = rank(scored, DEFAULT_RESULT_LIMIT);

    assert_eq!(ranked.len(), 5);
    let primary: Vec<bool> = ranked.iter().map(|r| r.is_primary).collect();
    assert_eq!(primary, vec![true, true, true, false, false]);
}

#[test]
fn primary_tier_ignores_a_larger_limit() {
    let catalog = synthetic_catalog(&["a", "b", "c", "d", "e", "f", "g"]);
    let scored = scored_with(&catalog, &[0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1]);

    let ranked = rank(scored, 10);

    assert_eq!(ranked.len(), 7);
    assert_eq!(ranked.iter().filter(|r| r.is_primary).count(), 3);
}

#[test]
fn short_lists_are_entirely_primary() {
    let catalog = synthetic_catalog(&["a", "b"]);
    let scored = scored_with(&catalog, &[0.1, 0.2]);

    let ranked = rank(scored, DEFAULT_RESULT_LIMIT);

    assert!(ranked.iter().all(|r| r.is_primary));
}

#[test]
fn non_finite_scores_are_dropped_and_leader_stays_at_one_hundred() {
    let catalog = synthetic_catalog(&["overflowed", "nan", "a", "b"]);
    let scored = scored_with(&catalog, &[f64::INFINITY, f64::NAN, 0.4, 0.2]);

    let ranked = rank(scored, DEFAULT_RESULT_LIMIT);

    assert_eq!(keys(&ranked), vec!["a", "b"]);
    assert_eq!(ranked[0].efficacy_percentage, 100);
    assert_eq!(ranked[1].efficacy_percentage, 50);
}

#[test]
fn zero_limit_returns_nothing() {
    let catalog = synthetic_catalog(&["a", "b"]);
    let scored = scored_with(&catalog, &[0.9, 0.8]);

    assert!(rank(scored, 0).is_empty());
}

#[test]
fn all_zero_scores_yield_an_empty_list() {
    let catalog = synthetic_catalog(&["a", "b"]);
    let scored = scored_with(&catalog, &[0.0, 0.0]);

    assert!(rank(scored, DEFAULT_RESULT_LIMIT).is_empty());
}

#[test]
fn descriptive_fields_pass_through() {
    let mut item = synthetic_item("zinc", 75.0, &[Diet::Omnivore]);
    item.contraindications = Some("Traitement antibiotique".to_string());
    let catalog = Catalog::from_items(vec![item]).expect("valid");
    let scored = scored_with(&catalog, &[0.3]);

    let ranked = rank(scored, 1);

    let recommendation = &ranked[0];
    assert_eq!(recommendation.name, "Item zinc");
    assert_eq!(recommendation.category, "Test");
    assert_eq!(recommendation.dosage, "1 dose");
    assert_eq!(recommendation.benefits, vec!["Benefit of zinc".to_string()]);
    assert_eq!(recommendation.natural_sources, vec!["Source".to_string()]);
    assert_eq!(recommendation.time_to_effect, "1 semaine");
    assert_eq!(
        recommendation.cautions.as_deref(),
        Some("Traitement antibiotique")
    );
}

#[test]
fn wire_format_uses_camel_case_and_omits_missing_cautions() {
    let catalog = synthetic_catalog(&["a"]);
    let ranked = rank(scored_with(&catalog, &[0.5]), 1);

    let value = serde_json::to_value(&ranked[0]).expect("serializes");
    assert_eq!(value["efficacyPercentage"], 100);
    assert_eq!(value["isPrimary"], true);
    assert_eq!(value["timeToEffect"], "1 semaine");
    assert!(value.get("cautions").is_none());
}
