use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/featured", get(handlers::featured_doctors))
        .route("/categories", get(handlers::doctor_categories))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/quick-booking", post(handlers::quick_booking))
        .with_state(state)
}
