use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorError, DoctorSearchFilters, QuickBookingRequest, DOCTOR_CATEGORIES};
use crate::services::{
    doctor::DoctorService,
    matching::filter_doctors,
};

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::ValidationError(msg) => AppError::ValidationError(msg),
            DoctorError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(filters): Query<DoctorSearchFilters>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctors = doctor_service.list_doctors().await.unwrap_or_else(|e| {
        error!("Error fetching doctors: {}", e);
        Vec::new()
    });
    let filtered = filter_doctors(&doctors, &filters);

    Ok(Json(json!({
        "doctors": filtered,
        "total": filtered.len()
    })))
}

#[axum::debug_handler]
pub async fn featured_doctors(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctors = doctor_service.featured_doctors().await.unwrap_or_else(|e| {
        error!("Error fetching featured doctors: {}", e);
        Vec::new()
    });

    Ok(Json(json!({
        "doctors": doctors
    })))
}

pub async fn doctor_categories() -> Json<Value> {
    Json(json!({
        "categories": DOCTOR_CATEGORIES
    }))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let profile = doctor_service.get_doctor_profile(doctor_id).await?;

    Ok(Json(json!(profile)))
}

#[axum::debug_handler]
pub async fn quick_booking(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<QuickBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let (doctor, appointment) = doctor_service
        .create_quick_booking(doctor_id, request)
        .await
        .map_err(|e| match e {
            DoctorError::Store(_) => AppError::ExternalService(
                "حدث خطأ أثناء الحجز. يرجى المحاولة مرة أخرى.".to_string(),
            ),
            other => other.into(),
        })?;

    Ok(Json(json!({
        "message": format!("تم استلام طلبك لحجز موعد مع د. {} بنجاح! سنتصل بك قريباً.", doctor.name),
        "appointment": appointment
    })))
}
