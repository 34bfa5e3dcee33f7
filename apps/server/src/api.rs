use std::sync::Arc;

use crate::{config::Config, main_lib::AppState};
use axum::{routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod health;
mod schemes;
mod views;

use crate::models::{DashboardDefaults, ViewInfo};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        views::list_views,
        views::get_defaults,
        views::render_view,
        views::compare_nav,
        views::average_aum,
        views::performance_heatmap,
        views::risk_analysis,
        schemes::list_scheme_labels,
        schemes::available_schemes,
        schemes::scheme_details,
        schemes::historical_nav,
    ),
    components(schemas(ViewInfo, DashboardDefaults)),
    tags((name = "mfdash"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(schemes::router())
        .merge(views::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
