use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use shared_config::AppConfig;
use shared_models::error::AppError;
use doctor_cell::services::matching::DoctorMatchingService;
use doctor_cell::services::shift::resolve_periods;

use crate::models::{
    BookingCategory, BookingError, CheckoutError, CheckoutRequest, ComposeRequest, LAB_PACKAGES,
};
use crate::services::{
    checkout::CheckoutService,
    composer::BookingComposeService,
    options::BookingOptionsService,
};

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct ClinicDoctorsQuery {
    pub clinic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodsRequest {
    #[serde(default)]
    pub shift: Option<String>,
}

#[axum::debug_handler]
pub async fn booking_options(
    State(state): State<Arc<AppConfig>>,
    Path(category): Path<BookingCategory>,
) -> Result<Json<Value>, AppError> {
    let options_service = BookingOptionsService::new(&state);

    let options = options_service.primary_options(category).await;

    Ok(Json(json!({
        "category": category,
        "options": options,
        "total": options.len()
    })))
}

#[axum::debug_handler]
pub async fn clinic_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<ClinicDoctorsQuery>,
) -> Result<Json<Value>, AppError> {
    let clinic = query
        .clinic
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("يرجى اختيار العيادة".to_string()))?;

    let matching_service = DoctorMatchingService::new(&state);
    let options_service = BookingOptionsService::new(&state);

    let doctors = matching_service.find_for_clinic(&clinic).await.unwrap_or_else(|e| {
        error!("Error matching doctors to clinic {}: {}", clinic, e);
        Vec::new()
    });
    let options: Vec<_> = doctors.into_iter().map(|d| options_service.doctor_option(d)).collect();

    Ok(Json(json!({
        "clinic": clinic,
        "doctors": options,
        "total": options.len()
    })))
}

pub async fn lab_packages() -> Json<Value> {
    Json(json!({
        "packages": LAB_PACKAGES
    }))
}

#[axum::debug_handler]
pub async fn offered_periods(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<PeriodsRequest>,
) -> Result<Json<Value>, AppError> {
    let periods = resolve_periods(request.shift.as_deref(), state.matching_mode);

    Ok(Json(json!({
        "periods": periods.options()
    })))
}

#[axum::debug_handler]
pub async fn compose_booking(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<Value>, AppError> {
    let payload = BookingComposeService::new(&state).compose_request(request).await?;

    Ok(Json(json!({
        "booking": payload
    })))
}

#[axum::debug_handler]
pub async fn checkout(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<Value>, AppError> {
    let checkout_service = CheckoutService::new(&state);

    let (message, appointment) = checkout_service.submit(request).await.map_err(|e| {
        let message = e.to_string();
        match e {
            CheckoutError::MissingBooking => AppError::Redirect {
                message,
                to: "/".to_string(),
                after_ms: state.checkout_redirect_delay_ms,
            },
            CheckoutError::ValidationError(_) | CheckoutError::Booking(_) => {
                AppError::ValidationError(message)
            }
            CheckoutError::Submission(err) => {
                error!("Checkout insert failed: {:#}", err);
                AppError::ExternalService(message)
            }
        }
    })?;

    Ok(Json(json!({
        "message": message,
        "appointment": appointment
    })))
}
