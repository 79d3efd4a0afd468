use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/options/{category}", get(handlers::booking_options))
        .route("/clinic-doctors", get(handlers::clinic_doctors))
        .route("/lab-packages", get(handlers::lab_packages))
        .route("/periods", post(handlers::offered_periods))
        .route("/compose", post(handlers::compose_booking))
        .with_state(state)
}

pub fn checkout_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/checkout", post(handlers::checkout))
        .with_state(state)
}
