use std::collections::BTreeMap;

use super::{Adjustments, SectionWeights, WeightTables};
use crate::recommendations::domain::{
    ActivityLevel, Diet, FruitVegIntake, Goal, ItemKey, SleepQuality, StressLevel, Symptom,
};

fn adjustments(entries: &[(&str, f64)]) -> Adjustments {
    entries
        .iter()
        .map(|(key, delta)| (ItemKey::from(*key), *delta))
        .collect()
}

pub(super) fn tables() -> WeightTables {
    let symptoms = BTreeMap::from([
        (Symptom::Fatigue, 0.9),
        (Symptom::SleepIssues, 0.85),
        (Symptom::StressAnxiety, 0.8),
        (Symptom::DigestiveIssues, 0.75),
        (Symptom::JointPain, 0.7),
        (Symptom::SkinProblems, 0.6),
        (Symptom::LowImmunity, 0.8),
        (Symptom::PoorFocus, 0.7),
        (Symptom::MuscleCramps, 0.65),
    ]);

    let goals = BTreeMap::from([
        (Goal::MoreEnergy, 0.9),
        (Goal::BetterSleep, 0.85),
        (Goal::StressManagement, 0.8),
        (Goal::ImmuneSupport, 0.85),
        (Goal::DigestiveHealth, 0.75),
        (Goal::AthleticPerformance, 0.7),
        (Goal::SkinHealth, 0.6),
        (Goal::HeartHealth, 0.8),
        (Goal::MentalFocus, 0.75),
    ]);

    let diets = BTreeMap::from([
        (
            Diet::Vegan,
            adjustments(&[
                ("vitamine_b12", 0.9),
                ("fer_bisglycinate", 0.6),
                ("omega_3_algae", 0.7),
                ("zinc", 0.4),
            ]),
        ),
        (
            Diet::Vegetarian,
            adjustments(&[
                ("vitamine_b12", 0.6),
                ("fer_bisglycinate", 0.5),
                ("omega_3_algae", 0.5),
                ("zinc", 0.3),
            ]),
        ),
        (
            Diet::Flexitarian,
            adjustments(&[("vitamine_b12", 0.3), ("fer_bisglycinate", 0.2)]),
        ),
        (Diet::Pescatarian, adjustments(&[("vitamine_d3", 0.2)])),
        (Diet::Omnivore, adjustments(&[("probiotiques", 0.2)])),
    ]);

    let activity = BTreeMap::from([
        (
            ActivityLevel::Sedentary,
            adjustments(&[("vitamine_d3", 0.5), ("rhodiola", 0.2)]),
        ),
        (ActivityLevel::Moderate, adjustments(&[("magnesium_marin", 0.1)])),
        (
            ActivityLevel::Active,
            adjustments(&[("magnesium_marin", 0.4), ("collagene_marin", 0.3)]),
        ),
        (
            ActivityLevel::VeryActive,
            adjustments(&[
                ("magnesium_marin", 0.6),
                ("fer_bisglycinate", 0.4),
                ("collagene_marin", 0.5),
                ("omega_3_epa_dha", 0.4),
                ("spiruline", 0.3),
            ]),
        ),
    ]);

    let sleep = BTreeMap::from([
        (
            SleepQuality::Poor,
            adjustments(&[
                ("melatonine", 0.8),
                ("magnesium_marin", 0.6),
                ("ashwagandha", 0.5),
            ]),
        ),
        (
            SleepQuality::Fair,
            adjustments(&[("magnesium_marin", 0.3), ("melatonine", 0.3)]),
        ),
    ]);

    let stress = BTreeMap::from([
        (
            StressLevel::VeryHigh,
            adjustments(&[
                ("ashwagandha", 0.9),
                ("rhodiola", 0.7),
                ("magnesium_marin", 0.6),
            ]),
        ),
        (
            StressLevel::High,
            adjustments(&[
                ("ashwagandha", 0.6),
                ("rhodiola", 0.5),
                ("magnesium_marin", 0.4),
            ]),
        ),
        (StressLevel::Moderate, adjustments(&[("magnesium_marin", 0.2)])),
    ]);

    let fruit_veg = BTreeMap::from([
        (
            FruitVegIntake::UnderTwo,
            adjustments(&[
                ("vitamine_c", 0.8),
                ("probiotiques", 0.4),
                ("zinc", 0.3),
            ]),
        ),
        (FruitVegIntake::TwoToFour, adjustments(&[("vitamine_c", 0.3)])),
    ]);

    WeightTables {
        sections: SectionWeights::default(),
        symptoms,
        goals,
        diets,
        activity,
        sleep,
        stress,
        fruit_veg,
    }
}
