use super::{ScoreComponent, ScoreFactor, ScoredItem};
use crate::recommendations::catalog::Catalog;
use crate::recommendations::domain::UserProfile;
use crate::recommendations::weights::{Adjustments, WeightTables};

/// Call-local running totals, indexed by catalog position.
struct Accumulator {
    scores: Vec<f64>,
    components: Vec<Vec<ScoreComponent>>,
}

impl Accumulator {
    fn new(len: usize) -> Self {
        Self {
            scores: vec![0.0; len],
            components: vec![Vec::new(); len],
        }
    }

    fn add(&mut self, position: usize, factor: ScoreFactor, amount: f64) {
        self.scores[position] += amount;
        self.components[position].push(ScoreComponent { factor, amount });
    }

    fn apply(
        &mut self,
        catalog: &Catalog,
        factor: ScoreFactor,
        adjustments: Option<&Adjustments>,
        section_weight: f64,
    ) {
        let Some(adjustments) = adjustments else {
            return;
        };

        for (key, delta) in adjustments {
            if let Some(position) = catalog.position(key) {
                self.add(position, factor, delta * section_weight);
            }
        }
    }
}

pub(super) fn score_catalog<'a>(
    profile: &UserProfile,
    catalog: &'a Catalog,
    weights: &WeightTables,
) -> Vec<ScoredItem<'a>> {
    let sections = weights.sections;
    let mut acc = Accumulator::new(catalog.len());

    for &symptom in &profile.selected_symptoms {
        let weight = weights.symptom_weight(symptom);
        for (position, item) in catalog.iter().enumerate() {
            if item.targets_symptom(symptom) {
                let amount = weight * (item.efficacy_base / 100.0) * sections.symptoms;
                acc.add(position, ScoreFactor::Symptom(symptom), amount);
            }
        }
    }

    for &goal in &profile.selected_goals {
        let weight = weights.goal_weight(goal);
        for (position, item) in catalog.iter().enumerate() {
            if item.targets_goal(goal) {
                let amount = weight * (item.efficacy_base / 100.0) * sections.goals;
                acc.add(position, ScoreFactor::Goal(goal), amount);
            }
        }
    }

    if let Some(diet) = profile.diet {
        acc.apply(
            catalog,
            ScoreFactor::Diet(diet),
            weights.diets.get(&diet),
            sections.diet,
        );
    }
    if let Some(level) = profile.activity_level {
        acc.apply(
            catalog,
            ScoreFactor::Activity(level),
            weights.activity.get(&level),
            sections.lifestyle,
        );
    }
    if let Some(quality) = profile.sleep_quality {
        acc.apply(
            catalog,
            ScoreFactor::Sleep(quality),
            weights.sleep.get(&quality),
            sections.lifestyle,
        );
    }
    if let Some(level) = profile.stress_level {
        acc.apply(
            catalog,
            ScoreFactor::Stress(level),
            weights.stress.get(&level),
            sections.lifestyle,
        );
    }
    if let Some(intake) = profile.fruit_veg_intake {
        acc.apply(
            catalog,
            ScoreFactor::FruitVeg(intake),
            weights.fruit_veg.get(&intake),
            sections.supplementary,
        );
    }

    let Accumulator { scores, components } = acc;
    catalog
        .iter()
        .zip(scores)
        .zip(components)
        .map(|((item, score), components)| ScoredItem {
            item,
            score,
            components,
            excluded_by_diet: false,
        })
        .collect()
}
