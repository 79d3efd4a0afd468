use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn clinic_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_clinics))
        .route("/{clinic_id}", get(handlers::get_clinic))
        .route("/{clinic_id}/book", post(handlers::book_clinic))
        .with_state(state)
}
