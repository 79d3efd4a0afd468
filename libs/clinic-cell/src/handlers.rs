use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{ClinicBookingRequest, ClinicError};
use crate::services::clinic::ClinicService;

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        match err {
            ClinicError::NotFound => AppError::NotFound(err.to_string()),
            ClinicError::ValidationError(msg) => AppError::ValidationError(msg),
            ClinicError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_clinics(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let clinic_service = ClinicService::new(&state);

    let clinics = clinic_service.list_clinics().await.unwrap_or_else(|e| {
        error!("Error fetching clinics: {}", e);
        Vec::new()
    });

    Ok(Json(json!({
        "clinics": clinics,
        "total": clinics.len()
    })))
}

#[axum::debug_handler]
pub async fn get_clinic(
    State(state): State<Arc<AppConfig>>,
    Path(clinic_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let clinic_service = ClinicService::new(&state);

    let detail = clinic_service.get_clinic_detail(clinic_id).await?;

    Ok(Json(json!(detail)))
}

#[axum::debug_handler]
pub async fn book_clinic(
    State(state): State<Arc<AppConfig>>,
    Path(clinic_id): Path<i64>,
    Json(request): Json<ClinicBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let clinic_service = ClinicService::new(&state);

    let booking = clinic_service.book(clinic_id, request).await?;

    Ok(Json(json!({
        "booking": booking
    })))
}
