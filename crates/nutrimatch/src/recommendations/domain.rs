use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a closed answer vocabulary with a stable wire key and a display label.
///
/// Keys are what configuration files and APIs exchange; labels are what the quiz shows.
/// `from_label` accepts either form, ignoring case and surrounding whitespace.
macro_rules! tag_vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_label(raw: &str) -> Option<Self> {
                let needle = raw.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.key() == needle || tag.label().to_lowercase() == needle)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

tag_vocabulary! {
    /// Self-reported complaint selected in the quiz.
    pub enum Symptom {
        Fatigue => ("fatigue", "Fatigue"),
        SleepIssues => ("sleep_issues", "Troubles du sommeil"),
        StressAnxiety => ("stress_anxiety", "Stress / anxiété"),
        DigestiveIssues => ("digestive_issues", "Troubles digestifs"),
        JointPain => ("joint_pain", "Douleurs articulaires"),
        SkinProblems => ("skin_problems", "Problèmes de peau"),
        LowImmunity => ("low_immunity", "Baisse d'immunité"),
        PoorFocus => ("poor_focus", "Difficultés de concentration"),
        MuscleCramps => ("muscle_cramps", "Crampes musculaires"),
        Headaches => ("headaches", "Maux de tête"),
    }
}

tag_vocabulary! {
    /// Outcome the user wants to work towards.
    pub enum Goal {
        MoreEnergy => ("more_energy", "Plus d'énergie"),
        BetterSleep => ("better_sleep", "Meilleur sommeil"),
        StressManagement => ("stress_management", "Gestion du stress"),
        ImmuneSupport => ("immune_support", "Renforcer l'immunité"),
        DigestiveHealth => ("digestive_health", "Santé digestive"),
        AthleticPerformance => ("athletic_performance", "Performance sportive"),
        SkinHealth => ("skin_health", "Beauté de la peau"),
        HeartHealth => ("heart_health", "Santé cardiovasculaire"),
        MentalFocus => ("mental_focus", "Concentration"),
    }
}

tag_vocabulary! {
    /// Dietary pattern; drives both score adjustments and the compatibility filter.
    pub enum Diet {
        Omnivore => ("omnivore", "Omnivore"),
        Flexitarian => ("flexitarian", "Flexitarien"),
        Vegetarian => ("vegetarian", "Végétarien"),
        Vegan => ("vegan", "Végan"),
        Pescatarian => ("pescatarian", "Pescetarien"),
    }
}

tag_vocabulary! {
    pub enum ActivityLevel {
        Sedentary => ("sedentary", "Sédentaire"),
        Moderate => ("moderate", "Modéré"),
        Active => ("active", "Actif"),
        VeryActive => ("very_active", "Très actif"),
    }
}

tag_vocabulary! {
    pub enum SleepQuality {
        Excellent => ("excellent", "Excellent"),
        Good => ("good", "Bon"),
        Fair => ("fair", "Moyen"),
        Poor => ("poor", "Mauvais"),
    }
}

tag_vocabulary! {
    pub enum StressLevel {
        Low => ("low", "Faible"),
        Moderate => ("moderate", "Modéré"),
        High => ("high", "Élevé"),
        VeryHigh => ("very_high", "Très élevé"),
    }
}

tag_vocabulary! {
    /// Daily fruit and vegetable portions.
    pub enum FruitVegIntake {
        UnderTwo => ("under_two", "Moins de 2 portions"),
        TwoToFour => ("two_to_four", "2 à 4 portions"),
        FiveOrMore => ("five_or_more", "5 portions ou plus"),
    }
}

/// Stable identifier for a catalog item, independent of its display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(pub String);

impl ItemKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated answers for a single scoring request. Unset fields contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub selected_symptoms: BTreeSet<Symptom>,
    #[serde(default)]
    pub selected_goals: BTreeSet<Goal>,
    #[serde(default)]
    pub diet: Option<Diet>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub sleep_quality: Option<SleepQuality>,
    #[serde(default)]
    pub stress_level: Option<StressLevel>,
    #[serde(default)]
    pub fruit_veg_intake: Option<FruitVegIntake>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
