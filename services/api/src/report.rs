use crate::infra::load_engine_from;
use clap::Args;
use nutrimatch::config::AppConfig;
use nutrimatch::error::AppError;
use nutrimatch::recommendations::{
    Catalog, ProfileSubmission, Recommendation, ScoreBreakdown, ScoreFactor,
};
use std::fmt::Write as _;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Quiz answers as JSON (camelCase fields, labels or keys)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Number of recommendations to return (defaults to NUTRIMATCH_RESULT_LIMIT or 5)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print every item's score components after the ranking
    #[arg(long)]
    pub(crate) explain: bool,
    /// Catalog file (.json or .csv) overriding the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Weight tables JSON overriding the configured one
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog file (.json or .csv) to validate instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        limit,
        explain,
        catalog,
        weights,
    } = args;

    let config = AppConfig::load()?.recommendations;
    let catalog = catalog.or(config.catalog_path);
    let weights = weights.or(config.weights_path);
    let engine = load_engine_from(catalog.as_deref(), weights.as_deref())?
        .with_default_limit(config.default_limit);

    let submission: ProfileSubmission = serde_json::from_reader(File::open(&profile)?)?;
    let profile = engine.intake().validate(submission)?;
    let limit = limit.unwrap_or_else(|| engine.default_limit());
    let recommendations = engine.recommend(&profile, limit);

    print!("{}", render_recommendations(&recommendations));

    if explain {
        let breakdown: Vec<ScoreBreakdown> = engine
            .explain(&profile)
            .iter()
            .map(|scored| scored.breakdown())
            .collect();
        print!("{}", render_breakdown(&breakdown));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let path = match args.catalog {
        Some(path) => Some(path),
        None => AppConfig::load()?.recommendations.catalog_path,
    };
    let catalog = match path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::standard()?,
    };

    print!("{}", render_catalog(&catalog));
    Ok(())
}

pub(crate) fn render_recommendations(recommendations: &[Recommendation]) -> String {
    let mut out = String::new();

    if recommendations.is_empty() {
        let _ = writeln!(out, "No recommendation matches this profile.");
        return out;
    }

    let (primary, secondary): (Vec<_>, Vec<_>) = recommendations
        .iter()
        .partition(|recommendation| recommendation.is_primary);
    for (title, tier) in [("Primary", primary), ("Secondary", secondary)] {
        if tier.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{title} recommendations");
        for recommendation in tier {
            let _ = writeln!(
                out,
                "{}. {} [{}] {}%",
                recommendation.rank,
                recommendation.name,
                recommendation.category,
                recommendation.efficacy_percentage
            );
            let _ = writeln!(out, "   dosage: {}", recommendation.dosage);
            let _ = writeln!(out, "   expected within: {}", recommendation.time_to_effect);
            if !recommendation.natural_sources.is_empty() {
                let _ = writeln!(
                    out,
                    "   natural sources: {}",
                    recommendation.natural_sources.join(", ")
                );
            }
            if let Some(cautions) = &recommendation.cautions {
                let _ = writeln!(out, "   caution: {cautions}");
            }
        }
    }

    out
}

pub(crate) fn render_breakdown(breakdown: &[ScoreBreakdown]) -> String {
    let mut out = String::from("\nScore breakdown\n");

    for entry in breakdown {
        let status = if entry.excluded_by_diet {
            " (excluded by diet)"
        } else {
            ""
        };
        let _ = writeln!(out, "- {}: {:.4}{status}", entry.key, entry.score);
        for component in &entry.components {
            let _ = writeln!(
                out,
                "    {:+.4} {}",
                component.amount,
                factor_label(component.factor)
            );
        }
    }

    out
}

fn factor_label(factor: ScoreFactor) -> String {
    match factor {
        ScoreFactor::Symptom(tag) => format!("symptom {}", tag.label()),
        ScoreFactor::Goal(tag) => format!("goal {}", tag.label()),
        ScoreFactor::Diet(tag) => format!("diet {}", tag.label()),
        ScoreFactor::Activity(tag) => format!("activity {}", tag.label()),
        ScoreFactor::Sleep(tag) => format!("sleep {}", tag.label()),
        ScoreFactor::Stress(tag) => format!("stress {}", tag.label()),
        ScoreFactor::FruitVeg(tag) => format!("fruit & vegetables {}", tag.label()),
    }
}

pub(crate) fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Catalog: {} items", catalog.len());

    for item in catalog.iter() {
        let diets: Vec<&str> = item.compatible_diets.iter().map(|diet| diet.label()).collect();
        let _ = writeln!(
            out,
            "- {} ({}) {} | base efficacy {} | diets: {}",
            item.key,
            item.name,
            item.category,
            item.efficacy_base,
            diets.join(", ")
        );
    }

    out
}
