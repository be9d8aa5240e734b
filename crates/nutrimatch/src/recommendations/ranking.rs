use serde::{Deserialize, Serialize};

use super::domain::ItemKey;
use super::scoring::ScoredItem;

/// Results returned when the caller does not ask for a specific count.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Number of leading results flagged as primary, independent of the limit.
pub const PRIMARY_TIER_SIZE: usize = 3;

/// Final, display-ready recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub rank: usize,
    pub key: ItemKey,
    pub name: String,
    pub category: String,
    pub efficacy_percentage: u8,
    pub dosage: String,
    pub benefits: Vec<String>,
    pub natural_sources: Vec<String>,
    pub time_to_effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cautions: Option<String>,
    pub is_primary: bool,
}

/// Order positive scores, keep the top `limit` and express each relative to the leader.
///
/// The sort is stable, so equal scores keep catalog order and repeated calls with the
/// same input return the same sequence. An empty vector means nothing matched.
/// Non-finite scores cannot be normalised and are dropped with the non-positive ones.
pub fn rank(scored: Vec<ScoredItem<'_>>, limit: usize) -> Vec<Recommendation> {
    let mut survivors: Vec<ScoredItem<'_>> = scored
        .into_iter()
        .filter(|entry| entry.score.is_finite() && entry.score > 0.0)
        .collect();
    survivors.sort_by(|a, b| b.score.total_cmp(&a.score));
    survivors.truncate(limit);

    let max_score = survivors.first().map(|entry| entry.score).unwrap_or(1.0);

    survivors
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let item = entry.item;
            Recommendation {
                rank: index + 1,
                key: item.key.clone(),
                name: item.name.clone(),
                category: item.category.clone(),
                efficacy_percentage: efficacy_percentage(entry.score, max_score),
                dosage: item.dosage.clone(),
                benefits: item.benefits.clone(),
                natural_sources: item.natural_sources.clone(),
                time_to_effect: item.time_to_effect.clone(),
                cautions: item.contraindications.clone(),
                is_primary: index < PRIMARY_TIER_SIZE,
            }
        })
        .collect()
}

fn efficacy_percentage(score: f64, max_score: f64) -> u8 {
    ((score / max_score) * 100.0).round().clamp(0.0, 100.0) as u8
}
