use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::jurimetry::JurimetryService;
use shared::repos::CaseRecordStore;

mod analyses;
mod errors;
mod health;
mod observability;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CaseRecordStore>,
    pub jurimetry: Arc<JurimetryService>,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route(
            "/v1/jurimetry/analyses",
            post(analyses::create_case_analysis),
        )
        .route(
            "/v1/jurimetry/analyses/{analysis_id}",
            get(analyses::get_case_analysis),
        )
        .route(
            "/v1/cases/{case_id}/analyses",
            get(analyses::list_case_analyses),
        )
        .layer(middleware::from_fn(
            observability::request_observability_middleware,
        ))
        .with_state(app_state)
}
