//! Immutable catalog of recommendable items.
//!
//! Every constructor funnels through [`Catalog::from_items`], so a `Catalog` value is
//! always validated: each item has a key, a name, an efficacy baseline within `[0, 100]`
//! and at least one compatible diet, and keys are unique.

mod records;
mod standard;

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::domain::{Diet, Goal, ItemKey, Symptom};

pub use records::CatalogRecord;

/// A single recommendable item and its descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub key: ItemKey,
    pub name: String,
    pub category: String,
    pub target_symptoms: BTreeSet<Symptom>,
    pub target_goals: BTreeSet<Goal>,
    pub efficacy_base: f64,
    pub dosage: String,
    pub benefits: Vec<String>,
    pub natural_sources: Vec<String>,
    pub time_to_effect: String,
    pub contraindications: Option<String>,
    pub compatible_diets: BTreeSet<Diet>,
}

impl CatalogItem {
    pub fn targets_symptom(&self, symptom: Symptom) -> bool {
        self.target_symptoms.contains(&symptom)
    }

    pub fn targets_goal(&self, goal: Goal) -> bool {
        self.target_goals.contains(&goal)
    }

    pub fn is_compatible_with(&self, diet: Diet) -> bool {
        self.compatible_diets.contains(&diet)
    }

    fn defect(&self) -> Option<ItemDefect> {
        if self.key.as_str().trim().is_empty() {
            return Some(ItemDefect::MissingKey);
        }
        if self.name.trim().is_empty() {
            return Some(ItemDefect::MissingName);
        }
        if !self.efficacy_base.is_finite() || !(0.0..=100.0).contains(&self.efficacy_base) {
            return Some(ItemDefect::EfficacyOutOfRange(self.efficacy_base));
        }
        if self.compatible_diets.is_empty() {
            return Some(ItemDefect::NoCompatibleDiets);
        }
        None
    }
}

/// Reasons an individual catalog entry is refused at load time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItemDefect {
    #[error("item key is empty")]
    MissingKey,
    #[error("item name is empty")]
    MissingName,
    #[error("efficacy base {0} is outside [0, 100]")]
    EfficacyOutOfRange(f64),
    #[error("no compatible diet declared")]
    NoCompatibleDiets,
    #[error("unknown {field} '{value}'")]
    UnknownTag { field: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalog format for {path:?} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },
    #[error("catalog item '{key}' rejected: {defect}")]
    InvalidItem { key: String, defect: ItemDefect },
    #[error("catalog item key '{0}' declared more than once")]
    DuplicateKey(ItemKey),
}

/// Validated, read-only item collection preserving declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<ItemKey, usize>,
}

impl Catalog {
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if let Some(defect) = item.defect() {
                return Err(CatalogError::InvalidItem {
                    key: item.key.to_string(),
                    defect,
                });
            }
            if index.insert(item.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateKey(item.key.clone()));
            }
        }

        debug!(items = items.len(), "catalog validated");
        Ok(Self { items, index })
    }

    /// The embedded reference catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_items(standard::items())
    }

    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self, CatalogError> {
        let items = records
            .into_iter()
            .map(CatalogRecord::into_item)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_items(items)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_records(records::parse_json(reader)?)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_records(records::parse_csv(reader)?)
    }

    /// Load a catalog file, choosing the parser from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let open = || {
            std::fs::File::open(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("json") => Self::from_json_reader(open()?),
            Some("csv") => Self::from_csv_reader(open()?),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, key: &ItemKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &ItemKey) -> Option<&CatalogItem> {
        self.position(key).map(|position| &self.items[position])
    }
}
