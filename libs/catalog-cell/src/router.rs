use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

/// Read-only catalog pages. Mounted at the root since they span several
/// top-level paths.
pub fn catalog_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/scans", get(handlers::list_scans))
        .route("/scans/{scan_id}", get(handlers::get_scan))
        .route("/equipments/{equipment_id}", get(handlers::get_equipment))
        .route("/examinations", get(handlers::list_examinations))
        .route("/examinations/all-tests", get(handlers::all_tests))
        .route("/examinations/safety-rules", get(handlers::safety_rules))
        .route("/examinations/packages", get(handlers::list_packages))
        .route("/examinations/packages/{package_id}", get(handlers::get_package))
        .route("/examinations/{examination_id}", get(handlers::get_examination))
        .route("/about", get(handlers::about))
        .with_state(state)
}
