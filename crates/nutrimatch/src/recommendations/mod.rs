//! Supplement recommendation pipeline.
//!
//! Scoring, diet filtering and ranking run as a straight line over reference data that
//! is validated once and then shared read-only:
//!
//! catalog + weight tables -> [`scoring::score`] -> [`filter::filter_by_diet`] -> [`ranking::rank`]

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod intake;
pub mod ranking;
pub mod router;
pub mod scoring;
pub mod weights;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, warn};

pub use catalog::{Catalog, CatalogError, CatalogItem, CatalogRecord, ItemDefect};
pub use domain::{
    ActivityLevel, Diet, FruitVegIntake, Goal, ItemKey, SleepQuality, StressLevel, Symptom,
    UserProfile,
};
pub use intake::{ProfileError, ProfileIntake, ProfileSubmission};
pub use ranking::{Recommendation, DEFAULT_RESULT_LIMIT, PRIMARY_TIER_SIZE};
pub use router::recommendation_router;
pub use scoring::{ScoreBreakdown, ScoreComponent, ScoreFactor, ScoredItem};
pub use weights::{SectionWeights, WeightError, WeightTables, MAX_WEIGHT_MAGNITUDE};

/// Stateless facade running the full pipeline against injected reference data.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    weights: Arc<WeightTables>,
    intake: ProfileIntake,
    default_limit: usize,
}

/// Reference data refused while building an engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Weights(#[from] WeightError),
}

impl RecommendationEngine {
    /// Tables are validated here, whatever their origin; the catalog is valid by construction.
    pub fn new(catalog: Arc<Catalog>, weights: Arc<WeightTables>) -> Result<Self, WeightError> {
        weights.validate()?;
        for (table, key) in weights.unknown_item_keys(&catalog) {
            warn!(table, item = %key, "adjustment references an item missing from the catalog");
        }

        Ok(Self {
            catalog,
            weights,
            intake: ProfileIntake,
            default_limit: DEFAULT_RESULT_LIMIT,
        })
    }

    /// Engine over the embedded catalog and weight tables.
    pub fn standard() -> Result<Self, EngineError> {
        let engine = Self::new(
            Arc::new(Catalog::standard()?),
            Arc::new(WeightTables::standard()),
        )?;
        Ok(engine)
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weights(&self) -> &WeightTables {
        &self.weights
    }

    /// Scores after the diet filter, in catalog order.
    pub fn explain(&self, profile: &UserProfile) -> Vec<ScoredItem<'_>> {
        let scored = scoring::score(profile, &self.catalog, &self.weights);
        filter::filter_by_diet(scored, profile.diet)
    }

    pub fn recommend(&self, profile: &UserProfile, limit: usize) -> Vec<Recommendation> {
        let recommendations = ranking::rank(self.explain(profile), limit);

        debug!(
            symptoms = profile.selected_symptoms.len(),
            goals = profile.selected_goals.len(),
            diet = profile.diet.map(Diet::key),
            limit,
            returned = recommendations.len(),
            "recommendations ranked"
        );

        recommendations
    }

    /// Validate raw quiz answers, then recommend. `None` uses the default limit.
    pub fn submit(
        &self,
        submission: ProfileSubmission,
        limit: Option<usize>,
    ) -> Result<Vec<Recommendation>, ProfileError> {
        let profile = self.intake.validate(submission)?;
        Ok(self.recommend(&profile, limit.unwrap_or(self.default_limit)))
    }

    pub fn intake(&self) -> &ProfileIntake {
        &self.intake
    }
}
