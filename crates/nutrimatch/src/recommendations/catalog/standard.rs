use std::collections::BTreeSet;

use super::CatalogItem;
use crate::recommendations::domain::{Diet, Goal, ItemKey, Symptom};

const ALL_DIETS: [Diet; 5] = [
    Diet::Omnivore,
    Diet::Flexitarian,
    Diet::Vegetarian,
    Diet::Vegan,
    Diet::Pescatarian,
];

const NON_VEGAN_DIETS: [Diet; 4] = [
    Diet::Omnivore,
    Diet::Flexitarian,
    Diet::Vegetarian,
    Diet::Pescatarian,
];

const FISH_DIETS: [Diet; 3] = [Diet::Omnivore, Diet::Flexitarian, Diet::Pescatarian];

struct Entry {
    key: &'static str,
    name: &'static str,
    category: &'static str,
    symptoms: &'static [Symptom],
    goals: &'static [Goal],
    efficacy_base: f64,
    dosage: &'static str,
    benefits: &'static [&'static str],
    natural_sources: &'static [&'static str],
    time_to_effect: &'static str,
    contraindications: Option<&'static str>,
    diets: &'static [Diet],
}

impl Entry {
    fn into_item(self) -> CatalogItem {
        CatalogItem {
            key: ItemKey::from(self.key),
            name: self.name.to_string(),
            category: self.category.to_string(),
            target_symptoms: self.symptoms.iter().copied().collect(),
            target_goals: self.goals.iter().copied().collect(),
            efficacy_base: self.efficacy_base,
            dosage: self.dosage.to_string(),
            benefits: self.benefits.iter().map(|b| b.to_string()).collect(),
            natural_sources: self.natural_sources.iter().map(|s| s.to_string()).collect(),
            time_to_effect: self.time_to_effect.to_string(),
            contraindications: self.contraindications.map(str::to_string),
            compatible_diets: self.diets.iter().copied().collect::<BTreeSet<_>>(),
        }
    }
}

pub(super) fn items() -> Vec<CatalogItem> {
    ENTRIES.into_iter().map(Entry::into_item).collect()
}

const ENTRIES: [Entry; 15] = [
    Entry {
        key: "magnesium_marin",
        name: "Magnésium marin",
        category: "Minéraux",
        symptoms: &[
            Symptom::Fatigue,
            Symptom::SleepIssues,
            Symptom::StressAnxiety,
            Symptom::MuscleCramps,
        ],
        goals: &[Goal::MoreEnergy, Goal::BetterSleep, Goal::StressManagement],
        efficacy_base: 90.0,
        dosage: "300 mg par jour, de préférence le soir",
        benefits: &[
            "Réduit la fatigue",
            "Favorise un sommeil réparateur",
            "Soutient l'équilibre nerveux",
        ],
        natural_sources: &["Amandes", "Chocolat noir", "Épinards", "Légumineuses"],
        time_to_effect: "2 à 3 semaines",
        contraindications: Some("Insuffisance rénale sévère"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "omega_3_epa_dha",
        name: "Oméga-3 (EPA/DHA)",
        category: "Acides gras essentiels",
        symptoms: &[
            Symptom::PoorFocus,
            Symptom::JointPain,
            Symptom::SkinProblems,
            Symptom::StressAnxiety,
        ],
        goals: &[Goal::HeartHealth, Goal::MentalFocus, Goal::SkinHealth],
        efficacy_base: 88.0,
        dosage: "1 g d'EPA/DHA par jour au cours d'un repas",
        benefits: &[
            "Contribue au fonctionnement normal du cœur",
            "Soutient les fonctions cognitives",
        ],
        natural_sources: &["Sardines", "Maquereau", "Saumon sauvage"],
        time_to_effect: "6 à 8 semaines",
        contraindications: Some("Traitement anticoagulant"),
        diets: &FISH_DIETS,
    },
    Entry {
        key: "omega_3_algae",
        name: "Oméga-3 d'algues",
        category: "Acides gras essentiels",
        symptoms: &[Symptom::PoorFocus, Symptom::SkinProblems],
        goals: &[Goal::HeartHealth, Goal::MentalFocus],
        efficacy_base: 80.0,
        dosage: "250 à 500 mg de DHA par jour",
        benefits: &["Alternative végétale aux huiles de poisson", "Soutient le cerveau"],
        natural_sources: &["Microalgues (Schizochytrium)"],
        time_to_effect: "6 à 8 semaines",
        contraindications: Some("Traitement anticoagulant"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "vitamine_d3",
        name: "Vitamine D3",
        category: "Vitamines",
        symptoms: &[Symptom::Fatigue, Symptom::LowImmunity, Symptom::JointPain],
        goals: &[Goal::ImmuneSupport, Goal::MoreEnergy],
        efficacy_base: 87.0,
        dosage: "1 000 à 2 000 UI par jour",
        benefits: &["Renforce l'immunité", "Maintient une ossature normale"],
        natural_sources: &["Poissons gras", "Jaune d'œuf", "Exposition au soleil"],
        time_to_effect: "4 à 6 semaines",
        contraindications: Some("Hypercalcémie"),
        diets: &NON_VEGAN_DIETS,
    },
    Entry {
        key: "vitamine_b12",
        name: "Vitamine B12",
        category: "Vitamines",
        symptoms: &[Symptom::Fatigue, Symptom::PoorFocus],
        goals: &[Goal::MoreEnergy, Goal::MentalFocus],
        efficacy_base: 85.0,
        dosage: "25 µg par jour ou 2 000 µg par semaine",
        benefits: &[
            "Réduit la fatigue",
            "Indispensable en alimentation végétale",
        ],
        natural_sources: &["Abats", "Fruits de mer", "Œufs", "Produits enrichis"],
        time_to_effect: "2 à 4 semaines",
        contraindications: None,
        diets: &ALL_DIETS,
    },
    Entry {
        key: "fer_bisglycinate",
        name: "Fer bisglycinate",
        category: "Minéraux",
        symptoms: &[Symptom::Fatigue, Symptom::PoorFocus, Symptom::Headaches],
        goals: &[Goal::MoreEnergy, Goal::AthleticPerformance],
        efficacy_base: 78.0,
        dosage: "14 mg par jour, à distance du thé et du café",
        benefits: &["Contribue au transport de l'oxygène", "Réduit la fatigue"],
        natural_sources: &["Lentilles", "Boudin noir", "Tofu", "Graines de courge"],
        time_to_effect: "1 à 3 mois",
        contraindications: Some("Hémochromatose"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "probiotiques",
        name: "Probiotiques",
        category: "Flore intestinale",
        symptoms: &[
            Symptom::DigestiveIssues,
            Symptom::LowImmunity,
            Symptom::SkinProblems,
        ],
        goals: &[Goal::DigestiveHealth, Goal::ImmuneSupport],
        efficacy_base: 82.0,
        dosage: "10 milliards d'UFC par jour, à jeun",
        benefits: &["Équilibre la flore intestinale", "Soutient les défenses naturelles"],
        natural_sources: &["Kéfir", "Choucroute crue", "Miso", "Kombucha"],
        time_to_effect: "2 à 4 semaines",
        contraindications: Some("Immunodépression sévère"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "ashwagandha",
        name: "Ashwagandha",
        category: "Plantes adaptogènes",
        symptoms: &[Symptom::StressAnxiety, Symptom::SleepIssues, Symptom::Fatigue],
        goals: &[
            Goal::StressManagement,
            Goal::BetterSleep,
            Goal::AthleticPerformance,
        ],
        efficacy_base: 80.0,
        dosage: "300 à 600 mg d'extrait par jour",
        benefits: &["Aide à gérer le stress", "Favorise l'endormissement"],
        natural_sources: &["Racine de Withania somnifera"],
        time_to_effect: "4 à 8 semaines",
        contraindications: Some("Grossesse, troubles thyroïdiens"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "zinc",
        name: "Zinc",
        category: "Minéraux",
        symptoms: &[Symptom::LowImmunity, Symptom::SkinProblems],
        goals: &[Goal::ImmuneSupport, Goal::SkinHealth],
        efficacy_base: 75.0,
        dosage: "15 mg par jour",
        benefits: &["Soutient l'immunité", "Contribue à une peau normale"],
        natural_sources: &["Huîtres", "Graines de courge", "Pois chiches"],
        time_to_effect: "4 semaines",
        contraindications: None,
        diets: &ALL_DIETS,
    },
    Entry {
        key: "vitamine_c",
        name: "Vitamine C",
        category: "Vitamines",
        symptoms: &[Symptom::LowImmunity, Symptom::Fatigue],
        goals: &[Goal::ImmuneSupport, Goal::SkinHealth, Goal::MoreEnergy],
        efficacy_base: 83.0,
        dosage: "500 mg par jour en deux prises",
        benefits: &["Renforce les défenses", "Favorise la synthèse du collagène"],
        natural_sources: &["Kiwi", "Poivron rouge", "Agrumes", "Cassis"],
        time_to_effect: "1 à 2 semaines",
        contraindications: Some("Calculs rénaux à répétition"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "melatonine",
        name: "Mélatonine",
        category: "Régulation du sommeil",
        symptoms: &[Symptom::SleepIssues],
        goals: &[Goal::BetterSleep],
        efficacy_base: 76.0,
        dosage: "1 mg 30 minutes avant le coucher",
        benefits: &["Réduit le temps d'endormissement", "Atténue le décalage horaire"],
        natural_sources: &["Cerises acidulées", "Noix"],
        time_to_effect: "Quelques jours",
        contraindications: Some("Grossesse, allaitement, somnolence diurne"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "curcuma",
        name: "Curcuma",
        category: "Plantes",
        symptoms: &[Symptom::JointPain, Symptom::DigestiveIssues],
        goals: &[Goal::DigestiveHealth, Goal::AthleticPerformance],
        efficacy_base: 72.0,
        dosage: "500 mg de curcuminoïdes avec de la pipérine",
        benefits: &["Confort articulaire", "Soutient la digestion"],
        natural_sources: &["Racine de curcuma", "Currys"],
        time_to_effect: "4 à 8 semaines",
        contraindications: Some("Calculs biliaires, anticoagulants"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "collagene_marin",
        name: "Collagène marin",
        category: "Protéines",
        symptoms: &[Symptom::JointPain, Symptom::SkinProblems],
        goals: &[Goal::SkinHealth, Goal::AthleticPerformance],
        efficacy_base: 70.0,
        dosage: "10 g par jour",
        benefits: &["Élasticité de la peau", "Soutient les articulations"],
        natural_sources: &["Peau de poisson", "Bouillon d'arêtes"],
        time_to_effect: "8 à 12 semaines",
        contraindications: Some("Allergie au poisson"),
        diets: &FISH_DIETS,
    },
    Entry {
        key: "rhodiola",
        name: "Rhodiola",
        category: "Plantes adaptogènes",
        symptoms: &[Symptom::Fatigue, Symptom::StressAnxiety, Symptom::PoorFocus],
        goals: &[Goal::MoreEnergy, Goal::StressManagement, Goal::MentalFocus],
        efficacy_base: 74.0,
        dosage: "200 à 400 mg d'extrait le matin",
        benefits: &["Réduit la fatigue mentale", "Améliore la résistance au stress"],
        natural_sources: &["Racine de Rhodiola rosea"],
        time_to_effect: "1 à 3 semaines",
        contraindications: Some("Trouble bipolaire"),
        diets: &ALL_DIETS,
    },
    Entry {
        key: "spiruline",
        name: "Spiruline",
        category: "Superaliments",
        symptoms: &[Symptom::Fatigue, Symptom::LowImmunity],
        goals: &[Goal::MoreEnergy, Goal::AthleticPerformance],
        efficacy_base: 68.0,
        dosage: "3 à 5 g par jour",
        benefits: &["Riche en protéines et en fer", "Soutient la vitalité"],
        natural_sources: &["Algue Arthrospira platensis"],
        time_to_effect: "3 à 4 semaines",
        contraindications: Some("Phénylcétonurie"),
        diets: &ALL_DIETS,
    },
];
