mod rules;

use serde::Serialize;

use super::catalog::{Catalog, CatalogItem};
use super::domain::{
    ActivityLevel, Diet, FruitVegIntake, Goal, ItemKey, SleepQuality, StressLevel, Symptom,
    UserProfile,
};
use super::weights::WeightTables;

/// Score every catalog item for `profile`, in catalog order.
///
/// The accumulator lives for this call only, so concurrent callers sharing the same
/// catalog and tables never observe each other's state.
pub fn score<'a>(
    profile: &UserProfile,
    catalog: &'a Catalog,
    weights: &WeightTables,
) -> Vec<ScoredItem<'a>> {
    rules::score_catalog(profile, catalog, weights)
}

/// Answer that produced a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "tag", rename_all = "snake_case")]
pub enum ScoreFactor {
    Symptom(Symptom),
    Goal(Goal),
    Diet(Diet),
    Activity(ActivityLevel),
    Sleep(SleepQuality),
    Stress(StressLevel),
    FruitVeg(FruitVegIntake),
}

/// Discrete contribution to an item's raw score, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub amount: f64,
}

/// Raw score for one catalog item before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
    pub components: Vec<ScoreComponent>,
    pub excluded_by_diet: bool,
}

impl ScoredItem<'_> {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            key: self.item.key.clone(),
            name: self.item.name.clone(),
            score: self.score,
            excluded_by_diet: self.excluded_by_diet,
            components: self.components.clone(),
        }
    }
}

/// Owned, serializable view of a [`ScoredItem`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub key: ItemKey,
    pub name: String,
    pub score: f64,
    pub excluded_by_diet: bool,
    pub components: Vec<ScoreComponent>,
}
