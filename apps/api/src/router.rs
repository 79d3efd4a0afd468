use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use booking_cell::router::{booking_routes, checkout_routes};
use catalog_cell::router::catalog_routes;
use clinic_cell::router::clinic_routes;
use doctor_cell::router::doctor_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Madina Clinic API is running!" }))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/clinics", clinic_routes(state.clone()))
        .nest("/booking", booking_routes(state.clone()))
        .merge(checkout_routes(state.clone()))
        .merge(catalog_routes(state))
}
