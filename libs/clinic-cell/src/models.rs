use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use booking_cell::models::BookingError;
use doctor_cell::models::Doctor;
use doctor_cell::services::shift::{Period, PeriodOption};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub clinic_number: Option<i32>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A clinic card on the list page.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicSummary {
    #[serde(flatten)]
    pub clinic: Clinic,
    pub icon: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicDoctor {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub periods: Vec<PeriodOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicDetail {
    #[serde(flatten)]
    pub clinic: Clinic,
    pub gradient: &'static str,
    pub services: Vec<String>,
    pub doctors: Vec<ClinicDoctor>,
}

/// The booking form on a clinic page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicBookingRequest {
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub shift: Option<Period>,
}

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("العيادة غير موجودة")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl From<BookingError> for ClinicError {
    fn from(err: BookingError) -> Self {
        ClinicError::ValidationError(err.to_string())
    }
}
