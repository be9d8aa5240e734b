use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{
    ActivityLevel, Diet, FruitVegIntake, Goal, SleepQuality, StressLevel, Symptom, UserProfile,
};

/// Quiz answers exactly as the client sends them: display labels or wire keys.
///
/// Every field is optional so partially completed quizzes are accepted. Values of the
/// wrong JSON type are refused by deserialization before reaching intake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    #[serde(default)]
    pub selected_symptoms: Vec<String>,
    #[serde(default)]
    pub selected_goals: Vec<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub sleep_quality: Option<String>,
    #[serde(default)]
    pub stress_level: Option<String>,
    #[serde(default)]
    pub fruit_veg_intake: Option<String>,
}

/// Answers that do not belong to the quiz vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown symptom '{0}'")]
    UnknownSymptom(String),
    #[error("unknown goal '{0}'")]
    UnknownGoal(String),
    #[error("unknown diet '{0}'")]
    UnknownDiet(String),
    #[error("unknown activity level '{0}'")]
    UnknownActivityLevel(String),
    #[error("unknown sleep quality '{0}'")]
    UnknownSleepQuality(String),
    #[error("unknown stress level '{0}'")]
    UnknownStressLevel(String),
    #[error("unknown fruit and vegetable intake '{0}'")]
    UnknownFruitVegIntake(String),
}

/// Boundary that turns raw quiz answers into a typed [`UserProfile`].
///
/// Blank strings count as unanswered; duplicate selections collapse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileIntake;

impl ProfileIntake {
    pub fn validate(&self, submission: ProfileSubmission) -> Result<UserProfile, ProfileError> {
        let selected_symptoms = resolve_all(
            &submission.selected_symptoms,
            Symptom::from_label,
            ProfileError::UnknownSymptom,
        )?;
        let selected_goals = resolve_all(
            &submission.selected_goals,
            Goal::from_label,
            ProfileError::UnknownGoal,
        )?;

        Ok(UserProfile {
            selected_symptoms,
            selected_goals,
            diet: resolve(submission.diet, Diet::from_label, ProfileError::UnknownDiet)?,
            activity_level: resolve(
                submission.activity_level,
                ActivityLevel::from_label,
                ProfileError::UnknownActivityLevel,
            )?,
            sleep_quality: resolve(
                submission.sleep_quality,
                SleepQuality::from_label,
                ProfileError::UnknownSleepQuality,
            )?,
            stress_level: resolve(
                submission.stress_level,
                StressLevel::from_label,
                ProfileError::UnknownStressLevel,
            )?,
            fruit_veg_intake: resolve(
                submission.fruit_veg_intake,
                FruitVegIntake::from_label,
                ProfileError::UnknownFruitVegIntake,
            )?,
        })
    }
}

fn resolve<T>(
    raw: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
    unknown: impl Fn(String) -> ProfileError,
) -> Result<Option<T>, ProfileError> {
    match raw {
        Some(value) if !value.trim().is_empty() => {
            parse(&value).map(Some).ok_or_else(|| unknown(value))
        }
        _ => Ok(None),
    }
}

fn resolve_all<T: Ord>(
    raw: &[String],
    parse: impl Fn(&str) -> Option<T>,
    unknown: impl Fn(String) -> ProfileError,
) -> Result<BTreeSet<T>, ProfileError> {
    raw.iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse(value).ok_or_else(|| unknown(value.clone())))
        .collect()
}
