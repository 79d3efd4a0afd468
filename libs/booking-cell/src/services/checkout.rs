use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::{AppConfig, MatchingMode};
use shared_database::supabase::SupabaseClient;

use crate::models::{BookingPayload, CheckoutError, CheckoutRequest, PatientDetails};
use crate::services::composer::check_payload;

const APPOINTMENTS_TABLE: &str = "appointments";

/// Patient form checks, first missing field wins.
pub fn validate_patient(patient: &PatientDetails, today: NaiveDate) -> Result<(), CheckoutError> {
    fn invalid(msg: &str) -> Result<(), CheckoutError> {
        Err(CheckoutError::ValidationError(msg.to_string()))
    }

    if patient.name.trim().is_empty() {
        return invalid("يرجى كتابة الاسم الكامل");
    }
    match patient.birth_date {
        None => return invalid("يرجى إدخال تاريخ الميلاد"),
        Some(born) if born > today => return invalid("تاريخ الميلاد لا يمكن أن يكون في المستقبل"),
        Some(_) => {}
    }
    if patient.gender.is_none() {
        return invalid("يرجى اختيار الجنس");
    }
    if patient.phone.trim().is_empty() {
        return invalid("يرجى كتابة رقم الهاتف");
    }
    if patient.address.trim().is_empty() {
        return invalid("يرجى كتابة العنوان");
    }
    Ok(())
}

/// Row written to `appointments` for a widget booking.
pub fn appointment_row(booking: &BookingPayload, patient: &PatientDetails) -> Value {
    json!({
        "patient_name": patient.name.trim(),
        "patient_phone": patient.phone.trim(),
        "type": booking.category.store_type(),
        "service_name": booking.service_name(),
        "appointment_date": booking.date,
        "appointment_time": booking.time,
        "status": "pending"
    })
}

pub struct CheckoutService {
    supabase: SupabaseClient,
    mode: MatchingMode,
}

impl CheckoutService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            mode: config.matching_mode,
        }
    }

    /// Re-checks the booking, validates the patient and files the appointment.
    ///
    /// Returns the confirmation message and the stored row.
    pub async fn submit(&self, request: CheckoutRequest) -> Result<(String, Value), CheckoutError> {
        let booking = request.booking.ok_or(CheckoutError::MissingBooking)?;
        let patient = request.patient;

        check_payload(&booking, self.mode)?;
        validate_patient(&patient, Local::now().date_naive())?;

        debug!("Submitting {} booking for {}", booking.category.store_type(), booking.service_name());

        let rows = self
            .supabase
            .insert(APPOINTMENTS_TABLE, json!([appointment_row(&booking, &patient)]))
            .await
            .map_err(CheckoutError::Submission)?;

        info!("Appointment filed for {} on {}", booking.service_name(), booking.date);

        let message = format!("شكراً لك {}، سيتم التواصل معك قريباً لتأكيد الموعد.", patient.name.trim());
        Ok((message, rows.into_iter().next().unwrap_or(Value::Null)))
    }
}
