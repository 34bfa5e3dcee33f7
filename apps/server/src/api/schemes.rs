use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{AmcQuery, SchemeQuery},
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use mfdash_core::views::Panel;

/// Every scheme label, for the scheme pickers.
#[utoipa::path(get, path = "/api/v1/schemes", responses((status = 200, body = [String])))]
pub async fn list_scheme_labels(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.dashboard.scheme_labels())
}

#[utoipa::path(
    get,
    path = "/api/v1/schemes/available",
    params(AmcQuery),
    responses((status = 200, description = "Scheme table or no-data panel"))
)]
pub async fn available_schemes(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AmcQuery>,
) -> ApiResult<Json<Panel>> {
    let amc = q
        .amc
        .unwrap_or_else(|| state.dashboard.settings().default_amc.clone());
    let panel = state.dashboard.available_schemes(&amc).await?;
    Ok(Json(panel))
}

#[utoipa::path(
    get,
    path = "/api/v1/schemes/details",
    params(SchemeQuery),
    responses(
        (status = 200, description = "Scheme details panel"),
        (status = 404, description = "Unknown scheme"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn scheme_details(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SchemeQuery>,
) -> ApiResult<Json<Panel>> {
    let panel = state.dashboard.scheme_details(&q.scheme).await?;
    Ok(Json(panel))
}

#[utoipa::path(
    get,
    path = "/api/v1/schemes/nav",
    params(SchemeQuery),
    responses(
        (status = 200, description = "Historical NAV table"),
        (status = 404, description = "Unknown scheme"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn historical_nav(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SchemeQuery>,
) -> ApiResult<Json<Panel>> {
    let panel = state.dashboard.historical_nav(&q.scheme).await?;
    Ok(Json(panel))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/schemes", get(list_scheme_labels))
        .route("/schemes/available", get(available_schemes))
        .route("/schemes/details", get(scheme_details))
        .route("/schemes/nav", get(historical_nav))
}
