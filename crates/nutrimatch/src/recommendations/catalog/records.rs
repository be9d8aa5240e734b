use std::collections::BTreeSet;
use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

use super::{CatalogError, CatalogItem, ItemDefect};
use crate::recommendations::domain::{Diet, Goal, ItemKey, Symptom};

const LIST_SEPARATOR: char = '|';

/// Untyped catalog entry as it appears in an import file.
///
/// Tag fields hold either wire keys or display labels; nothing here is trusted until
/// [`CatalogRecord::into_item`] resolves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub key: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub target_symptoms: Vec<String>,
    #[serde(default)]
    pub target_goals: Vec<String>,
    pub efficacy_base: f64,
    pub dosage: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub natural_sources: Vec<String>,
    pub time_to_effect: String,
    #[serde(default)]
    pub contraindications: Option<String>,
    #[serde(default)]
    pub compatible_diets: Vec<String>,
}

impl CatalogRecord {
    pub fn into_item(self) -> Result<CatalogItem, CatalogError> {
        let key = self.key.trim().to_string();
        let reject = |defect: ItemDefect| CatalogError::InvalidItem {
            key: key.clone(),
            defect,
        };

        let target_symptoms = resolve_tags(&self.target_symptoms, "symptom", Symptom::from_label)
            .map_err(&reject)?;
        let target_goals =
            resolve_tags(&self.target_goals, "goal", Goal::from_label).map_err(&reject)?;
        let compatible_diets =
            resolve_tags(&self.compatible_diets, "diet", Diet::from_label).map_err(&reject)?;

        Ok(CatalogItem {
            key: ItemKey::new(key.clone()),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            target_symptoms,
            target_goals,
            efficacy_base: self.efficacy_base,
            dosage: self.dosage,
            benefits: self.benefits,
            natural_sources: self.natural_sources,
            time_to_effect: self.time_to_effect,
            contraindications: self
                .contraindications
                .filter(|value| !value.trim().is_empty()),
            compatible_diets,
        })
    }
}

fn resolve_tags<T: Ord>(
    raw: &[String],
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<BTreeSet<T>, ItemDefect> {
    raw.iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            parse(value).ok_or_else(|| ItemDefect::UnknownTag {
                field,
                value: value.clone(),
            })
        })
        .collect()
}

pub(super) fn parse_json<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

pub(super) fn parse_csv<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<CatalogRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

/// One line of the spreadsheet export; list cells are `|`-separated.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    key: String,
    name: String,
    category: String,
    #[serde(default)]
    target_symptoms: String,
    #[serde(default)]
    target_goals: String,
    efficacy_base: f64,
    dosage: String,
    #[serde(default)]
    benefits: String,
    #[serde(default)]
    natural_sources: String,
    time_to_effect: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contraindications: Option<String>,
    #[serde(default)]
    compatible_diets: String,
}

impl CatalogRow {
    fn into_record(self) -> CatalogRecord {
        CatalogRecord {
            key: self.key,
            name: self.name,
            category: self.category,
            target_symptoms: split_list(&self.target_symptoms),
            target_goals: split_list(&self.target_goals),
            efficacy_base: self.efficacy_base,
            dosage: self.dosage,
            benefits: split_list(&self.benefits),
            natural_sources: split_list(&self.natural_sources),
            time_to_effect: self.time_to_effect,
            contraindications: self.contraindications,
            compatible_diets: split_list(&self.compatible_diets),
        }
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "key,name,category,target_symptoms,target_goals,efficacy_base,dosage,benefits,natural_sources,time_to_effect,contraindications,compatible_diets\n";

    #[test]
    fn csv_rows_split_list_cells_and_blank_cautions() {
        let csv = format!(
            "{HEADER}zinc,Zinc,Minéraux,Baisse d'immunité | skin_problems,immune_support,75,15 mg/jour,Défenses | Peau,Huîtres|Graines de courge,4 semaines,,Végan|omnivore\n"
        );

        let records = parse_csv(Cursor::new(csv)).expect("csv parses");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.target_symptoms, vec!["Baisse d'immunité", "skin_problems"]);
        assert_eq!(record.natural_sources, vec!["Huîtres", "Graines de courge"]);
        assert_eq!(record.contraindications, None);

        let item = record.clone().into_item().expect("tags resolve");
        assert!(item.targets_symptom(Symptom::LowImmunity));
        assert!(item.targets_symptom(Symptom::SkinProblems));
        assert_eq!(
            item.compatible_diets,
            BTreeSet::from([Diet::Vegan, Diet::Omnivore])
        );
    }

    #[test]
    fn unknown_tags_are_reported_with_their_field() {
        let record = CatalogRecord {
            key: "iode".to_string(),
            name: "Iode".to_string(),
            category: "Minéraux".to_string(),
            target_symptoms: vec!["Fatigue".to_string()],
            target_goals: Vec::new(),
            efficacy_base: 60.0,
            dosage: "150 µg".to_string(),
            benefits: Vec::new(),
            natural_sources: Vec::new(),
            time_to_effect: "1 mois".to_string(),
            contraindications: None,
            compatible_diets: vec!["Paléo".to_string()],
        };

        match record.into_item() {
            Err(CatalogError::InvalidItem { key, defect }) => {
                assert_eq!(key, "iode");
                assert_eq!(
                    defect,
                    ItemDefect::UnknownTag {
                        field: "diet",
                        value: "Paléo".to_string()
                    }
                );
            }
            other => panic!("expected unknown diet, got {other:?}"),
        }
    }
}
