use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::domain::{Diet, ItemKey};
use super::intake::ProfileSubmission;
use super::ranking::Recommendation;
use super::scoring::ScoreBreakdown;
use super::RecommendationEngine;

/// Router builder exposing the recommendation pipeline over HTTP.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub profile: ProfileSubmission,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Include per-item score components in the response.
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<Recommendation>,
    pub primary: Vec<Recommendation>,
    pub secondary: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<ScoreBreakdown>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryView {
    pub key: ItemKey,
    pub name: String,
    pub category: String,
    pub efficacy_base: f64,
    pub compatible_diets: BTreeSet<Diet>,
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let RecommendationRequest {
        profile,
        limit,
        explain,
    } = request;

    let profile = match engine.intake().validate(profile) {
        Ok(profile) => profile,
        Err(error) => {
            info!(%error, "profile rejected");
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let limit = limit.unwrap_or_else(|| engine.default_limit());
    let recommendations = engine.recommend(&profile, limit);
    let (primary, secondary): (Vec<_>, Vec<_>) = recommendations
        .iter()
        .cloned()
        .partition(|recommendation| recommendation.is_primary);
    let breakdown = explain.then(|| {
        engine
            .explain(&profile)
            .iter()
            .map(|scored| scored.breakdown())
            .collect()
    });

    let response = RecommendationResponse {
        generated_at: Utc::now(),
        recommendations,
        primary,
        secondary,
        breakdown,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<Vec<CatalogEntryView>> {
    let entries = engine
        .catalog()
        .iter()
        .map(|item| CatalogEntryView {
            key: item.key.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            efficacy_base: item.efficacy_base,
            compatible_diets: item.compatible_diets.clone(),
        })
        .collect();
    Json(entries)
}
