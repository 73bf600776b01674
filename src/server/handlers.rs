//! Request handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Serialize;

use super::AppState;
use super::error::ApiError;
use crate::search::{SearchQuery, SearchResult};

/// `GET /search/`
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParams(e.body_text()))?;

    tracing::debug!(query = %query.query, filter = %query.filter_type, limit = query.limit, "search requested");

    let results = state.service.search_songs(&query).await?;
    Ok(Json(results))
}

/// Static description returned by `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub search: &'static str,
}

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    name: "YouTube Music Search API",
    version: "1.0",
    description: "API for searching songs on YouTube Music with enriched metadata",
    endpoints: Endpoints {
        search: "/search/?query=<search_term>&filter_type=songs&limit=5",
    },
};

/// `GET /`
pub async fn root() -> Json<ServiceInfo> {
    Json(SERVICE_INFO)
}
