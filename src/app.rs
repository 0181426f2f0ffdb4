//! Application assembly: one router for the binary and the tests.

use crate::config::Settings;
use crate::routes::{api_routes, common_routes};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

pub fn build_app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(settings.body_limit_bytes)))
}
