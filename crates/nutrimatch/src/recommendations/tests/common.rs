use std::collections::BTreeSet;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recommendations::catalog::{Catalog, CatalogItem};
use crate::recommendations::domain::{Diet, Goal, ItemKey, Symptom, UserProfile};
use crate::recommendations::scoring::ScoredItem;
use crate::recommendations::weights::WeightTables;
use crate::recommendations::RecommendationEngine;

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn standard_catalog() -> Catalog {
    Catalog::standard().expect("embedded catalog is valid")
}

pub(super) fn standard_engine() -> RecommendationEngine {
    RecommendationEngine::standard().expect("embedded engine builds")
}

pub(super) fn shared_engine() -> Arc<RecommendationEngine> {
    Arc::new(standard_engine())
}

pub(super) fn key(value: &str) -> ItemKey {
    ItemKey::from(value)
}

/// Fatigue and poor sleep on a vegan diet.
pub(super) fn tired_vegan_profile() -> UserProfile {
    UserProfile {
        selected_symptoms: BTreeSet::from([Symptom::Fatigue, Symptom::SleepIssues]),
        diet: Some(Diet::Vegan),
        ..UserProfile::default()
    }
}

pub(super) fn synthetic_item(key: &str, efficacy_base: f64, diets: &[Diet]) -> CatalogItem {
    CatalogItem {
        key: ItemKey::from(key),
        name: format!("Item {key}"),
        category: "Test".to_string(),
        target_symptoms: BTreeSet::from([Symptom::Fatigue]),
        target_goals: BTreeSet::from([Goal::MoreEnergy]),
        efficacy_base,
        dosage: "1 dose".to_string(),
        benefits: vec![format!("Benefit of {key}")],
        natural_sources: vec!["Source".to_string()],
        time_to_effect: "1 semaine".to_string(),
        contraindications: None,
        compatible_diets: diets.iter().copied().collect(),
    }
}

pub(super) fn synthetic_catalog(keys: &[&str]) -> Catalog {
    let items = keys
        .iter()
        .map(|key| synthetic_item(key, 100.0, &[Diet::Omnivore, Diet::Vegan]))
        .collect();
    Catalog::from_items(items).expect("synthetic catalog is valid")
}

/// Pair each catalog item with a fixed raw score.
pub(super) fn scored_with<'a>(catalog: &'a Catalog, scores: &[f64]) -> Vec<ScoredItem<'a>> {
    catalog
        .iter()
        .zip(scores)
        .map(|(item, score)| ScoredItem {
            item,
            score: *score,
            components: Vec::new(),
            excluded_by_diet: false,
        })
        .collect()
}

pub(super) fn score_of(scored: &[ScoredItem<'_>], item: &str) -> f64 {
    scored
        .iter()
        .find(|entry| entry.item.key.as_str() == item)
        .map(|entry| entry.score)
        .unwrap_or_else(|| panic!("{item} missing from scored output"))
}

pub(super) fn empty_tables() -> WeightTables {
    WeightTables::default()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
