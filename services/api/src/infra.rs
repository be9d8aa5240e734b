use metrics_exporter_prometheus::PrometheusHandle;
use nutrimatch::config::RecommendationConfig;
use nutrimatch::error::AppError;
use nutrimatch::recommendations::{Catalog, RecommendationEngine, WeightTables};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine from configured reference files, falling back to the embedded data.
pub(crate) fn load_engine(
    config: &RecommendationConfig,
) -> Result<RecommendationEngine, AppError> {
    let engine = load_engine_from(
        config.catalog_path.as_deref(),
        config.weights_path.as_deref(),
    )?;
    Ok(engine.with_default_limit(config.default_limit))
}

pub(crate) fn load_engine_from(
    catalog_path: Option<&Path>,
    weights_path: Option<&Path>,
) -> Result<RecommendationEngine, AppError> {
    let catalog = match catalog_path {
        Some(path) => {
            let catalog = Catalog::from_path(path)?;
            info!(path = %path.display(), items = catalog.len(), "catalog loaded");
            catalog
        }
        None => Catalog::standard()?,
    };

    let weights = match weights_path {
        Some(path) => {
            let weights = WeightTables::from_path(path)?;
            info!(path = %path.display(), "weight tables loaded");
            weights
        }
        None => WeightTables::standard(),
    };

    Ok(RecommendationEngine::new(Arc::new(catalog), Arc::new(weights))?)
}
