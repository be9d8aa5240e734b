mod standard;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::Catalog;
use super::domain::{
    ActivityLevel, Diet, FruitVegIntake, Goal, ItemKey, SleepQuality, StressLevel, Symptom,
};

pub const SECTION_WEIGHT_SYMPTOMS: f64 = 0.35;
pub const SECTION_WEIGHT_GOALS: f64 = 0.30;
pub const SECTION_WEIGHT_DIET: f64 = 0.15;
pub const SECTION_WEIGHT_LIFESTYLE: f64 = 0.12;
pub const SECTION_WEIGHT_SUPPLEMENTARY: f64 = 0.08;

/// Importance applied to a selected symptom or goal missing from its table.
pub const DEFAULT_TAG_WEIGHT: f64 = 0.5;

/// Largest magnitude accepted for any importance or delta. Keeps accumulated scores finite.
pub const MAX_WEIGHT_MAGNITUDE: f64 = 1_000.0;

const SECTION_SUM_TOLERANCE: f64 = 1e-6;

/// Per-item score deltas keyed by catalog item.
pub type Adjustments = BTreeMap<ItemKey, f64>;

/// Share of influence given to each factor family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionWeights {
    pub symptoms: f64,
    pub goals: f64,
    pub diet: f64,
    pub lifestyle: f64,
    pub supplementary: f64,
}

impl Default for SectionWeights {
    fn default() -> Self {
        Self {
            symptoms: SECTION_WEIGHT_SYMPTOMS,
            goals: SECTION_WEIGHT_GOALS,
            diet: SECTION_WEIGHT_DIET,
            lifestyle: SECTION_WEIGHT_LIFESTYLE,
            supplementary: SECTION_WEIGHT_SUPPLEMENTARY,
        }
    }
}

impl SectionWeights {
    pub fn sum(&self) -> f64 {
        self.symptoms + self.goals + self.diet + self.lifestyle + self.supplementary
    }

    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("symptoms", self.symptoms),
            ("goals", self.goals),
            ("diet", self.diet),
            ("lifestyle", self.lifestyle),
            ("supplementary", self.supplementary),
        ]
    }
}

/// Static importance and adjustment tables consumed by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTables {
    pub sections: SectionWeights,
    pub symptoms: BTreeMap<Symptom, f64>,
    pub goals: BTreeMap<Goal, f64>,
    pub diets: BTreeMap<Diet, Adjustments>,
    pub activity: BTreeMap<ActivityLevel, Adjustments>,
    pub sleep: BTreeMap<SleepQuality, Adjustments>,
    pub stress: BTreeMap<StressLevel, Adjustments>,
    pub fruit_veg: BTreeMap<FruitVegIntake, Adjustments>,
}

#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("failed to read weight tables {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid weight tables JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{table} weight for '{entry}' is not a finite number")]
    NonFinite { table: &'static str, entry: String },
    #[error("{table} weight for '{entry}' must not be negative (found {value})")]
    Negative {
        table: &'static str,
        entry: String,
        value: f64,
    },
    #[error("{table} weight for '{entry}' exceeds 1000 in magnitude (found {value})")]
    OutOfRange {
        table: &'static str,
        entry: String,
        value: f64,
    },
}

impl WeightTables {
    /// The embedded reference tables.
    pub fn standard() -> Self {
        standard::tables()
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, WeightError> {
        let tables: Self = serde_json::from_reader(reader)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WeightError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| WeightError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(file)
    }

    pub fn symptom_weight(&self, symptom: Symptom) -> f64 {
        self.symptoms
            .get(&symptom)
            .copied()
            .unwrap_or(DEFAULT_TAG_WEIGHT)
    }

    pub fn goal_weight(&self, goal: Goal) -> f64 {
        self.goals.get(&goal).copied().unwrap_or(DEFAULT_TAG_WEIGHT)
    }

    /// Reject non-finite values, negative importances and anything beyond
    /// [`MAX_WEIGHT_MAGNITUDE`]. Adjustment deltas may be negative.
    ///
    /// Section weights are tunable independently; a sum away from 1.0 is only logged.
    pub fn validate(&self) -> Result<(), WeightError> {
        for (entry, value) in self.sections.entries() {
            check_importance("section", entry, value)?;
        }
        for (symptom, value) in &self.symptoms {
            check_importance("symptom", symptom.key(), *value)?;
        }
        for (goal, value) in &self.goals {
            check_importance("goal", goal.key(), *value)?;
        }

        check_deltas("diet", self.diets.iter().map(|(tag, adj)| (tag.key(), adj)))?;
        check_deltas(
            "activity",
            self.activity.iter().map(|(tag, adj)| (tag.key(), adj)),
        )?;
        check_deltas("sleep", self.sleep.iter().map(|(tag, adj)| (tag.key(), adj)))?;
        check_deltas("stress", self.stress.iter().map(|(tag, adj)| (tag.key(), adj)))?;
        check_deltas(
            "fruit_veg",
            self.fruit_veg.iter().map(|(tag, adj)| (tag.key(), adj)),
        )?;

        let sum = self.sections.sum();
        if (sum - 1.0).abs() > SECTION_SUM_TOLERANCE {
            warn!(section_sum = sum, "section weights do not sum to 1.0");
        }

        Ok(())
    }

    /// Adjustment entries naming items the catalog does not contain, as `(table, key)`.
    pub fn unknown_item_keys(&self, catalog: &Catalog) -> Vec<(&'static str, ItemKey)> {
        let tables: [(&'static str, Vec<&Adjustments>); 5] = [
            ("diet", self.diets.values().collect()),
            ("activity", self.activity.values().collect()),
            ("sleep", self.sleep.values().collect()),
            ("stress", self.stress.values().collect()),
            ("fruit_veg", self.fruit_veg.values().collect()),
        ];

        let mut unknown = Vec::new();
        for (table, adjustments) in tables {
            for key in adjustments.into_iter().flat_map(|adj| adj.keys()) {
                if catalog.position(key).is_none() {
                    unknown.push((table, key.clone()));
                }
            }
        }
        unknown
    }
}

fn check_importance(table: &'static str, entry: &str, value: f64) -> Result<(), WeightError> {
    if !value.is_finite() {
        return Err(WeightError::NonFinite {
            table,
            entry: entry.to_string(),
        });
    }
    if value < 0.0 {
        return Err(WeightError::Negative {
            table,
            entry: entry.to_string(),
            value,
        });
    }
    check_magnitude(table, entry, value)
}

fn check_magnitude(table: &'static str, entry: &str, value: f64) -> Result<(), WeightError> {
    if value.abs() > MAX_WEIGHT_MAGNITUDE {
        return Err(WeightError::OutOfRange {
            table,
            entry: entry.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_deltas<'a>(
    table: &'static str,
    entries: impl Iterator<Item = (&'static str, &'a Adjustments)>,
) -> Result<(), WeightError> {
    for (tag, adjustments) in entries {
        for (item, delta) in adjustments {
            if !delta.is_finite() {
                return Err(WeightError::NonFinite {
                    table,
                    entry: format!("{tag}/{item}"),
                });
            }
            check_magnitude(table, &format!("{tag}/{item}"), *delta)?;
        }
    }
    Ok(())
}
