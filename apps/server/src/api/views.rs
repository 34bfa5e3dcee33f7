use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{DashboardDefaults, PeriodQuery, SchemeQuery, ViewInfo},
};
use axum::{
    extract::{Query, RawQuery, State},
    routing::{get, post},
    Json, Router,
};
use mfdash_core::views::{Panel, ViewRequest};

#[utoipa::path(get, path = "/api/v1/views", responses((status = 200, body = [ViewInfo])))]
pub async fn list_views(State(state): State<Arc<AppState>>) -> Json<Vec<ViewInfo>> {
    Json(
        state
            .dashboard
            .views()
            .into_iter()
            .map(ViewInfo::from)
            .collect(),
    )
}

/// Inputs the UI pre-fills.
#[utoipa::path(get, path = "/api/v1/defaults", responses((status = 200, body = DashboardDefaults)))]
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<DashboardDefaults> {
    let settings = state.dashboard.settings();
    Json(DashboardDefaults {
        default_amc: settings.default_amc.clone(),
        default_aum_period: settings.default_aum_period.clone(),
        risk_free_rate: settings.risk_free_rate,
    })
}

/// Render any view from a `{"view": "...", ...}` body.
#[utoipa::path(
    post,
    path = "/api/v1/render",
    responses(
        (status = 200, description = "Rendered panel"),
        (status = 404, description = "Unknown scheme"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn render_view(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ViewRequest>,
) -> ApiResult<Json<Panel>> {
    let panel = state.dashboard.render(request).await?;
    Ok(Json(panel))
}

/// `schemes` may repeat: `?schemes=a&schemes=b`.
fn parse_schemes(raw: Option<&str>) -> ApiResult<Vec<String>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)
        .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))?;
    Ok(pairs
        .into_iter()
        .filter(|(key, _)| key == "schemes")
        .map(|(_, value)| value)
        .collect())
}

#[utoipa::path(
    get,
    path = "/api/v1/compare",
    params(("schemes" = Vec<String>, Query, description = "Scheme labels or codes; repeat the key per scheme")),
    responses(
        (status = 200, description = "Comparison chart or no-data panel"),
        (status = 404, description = "Unknown scheme"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn compare_nav(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<Panel>> {
    let schemes = parse_schemes(raw.as_deref())?;
    let panel = state.dashboard.compare_nav(&schemes).await?;
    Ok(Json(panel))
}

#[utoipa::path(
    get,
    path = "/api/v1/aum",
    params(PeriodQuery),
    responses(
        (status = 200, description = "AUM table or no-data panel"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn average_aum(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PeriodQuery>,
) -> ApiResult<Json<Panel>> {
    let period = q
        .period
        .unwrap_or_else(|| state.dashboard.settings().default_aum_period.clone());
    let panel = state.dashboard.average_aum(&period).await?;
    Ok(Json(panel))
}

#[utoipa::path(
    get,
    path = "/api/v1/heatmap",
    params(SchemeQuery),
    responses(
        (status = 200, description = "Monthly heatmap or no-data panel"),
        (status = 404, description = "Unknown scheme"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn performance_heatmap(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SchemeQuery>,
) -> ApiResult<Json<Panel>> {
    let panel = state.dashboard.performance_heatmap(&q.scheme).await?;
    Ok(Json(panel))
}

#[utoipa::path(
    get,
    path = "/api/v1/risk",
    params(SchemeQuery),
    responses(
        (status = 200, description = "Risk metrics or no-data panel"),
        (status = 404, description = "Unknown scheme"),
        (status = 422, description = "Series contains a non-positive NAV"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn risk_analysis(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SchemeQuery>,
) -> ApiResult<Json<Panel>> {
    let panel = state.dashboard.risk_analysis(&q.scheme).await?;
    Ok(Json(panel))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/views", get(list_views))
        .route("/defaults", get(get_defaults))
        .route("/render", post(render_view))
        .route("/compare", get(compare_nav))
        .route("/aum", get(average_aum))
        .route("/heatmap", get(performance_heatmap))
        .route("/risk", get(risk_analysis))
}
