use anyhow::{Result, anyhow};
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::{AppConfig, MatchingMode};
use shared_database::query::{Direction, Nulls, Query};
use shared_database::supabase::SupabaseClient;

use crate::models::{
    Doctor, DoctorError, DoctorProfile, QuickBookingRequest, FEATURED_DOCTORS_LIMIT,
};
use crate::services::availability::{qualifications_list, works_today};
use crate::services::shift::resolve_periods;

const DOCTORS_TABLE: &str = "doctors";
const APPOINTMENTS_TABLE: &str = "appointments";

pub struct DoctorService {
    supabase: SupabaseClient,
    mode: MatchingMode,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            mode: config.matching_mode,
        }
    }

    fn priority_query() -> Query {
        Query::table(DOCTORS_TABLE)
            .order_nulls("priority", Direction::Asc, Nulls::Last)
            .order("id", Direction::Asc)
    }

    /// Every doctor, in store order.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        debug!("Fetching all doctors");
        self.supabase.select(&Query::table(DOCTORS_TABLE)).await
    }

    /// Every doctor by booking priority, unranked doctors last.
    pub async fn ordered_doctors(&self) -> Result<Vec<Doctor>> {
        debug!("Fetching doctors by priority");
        self.supabase.select_sorted(&Self::priority_query()).await
    }

    /// Doctors placed on the home page.
    pub async fn featured_doctors(&self) -> Result<Vec<Doctor>> {
        let query = Query::table(DOCTORS_TABLE)
            .not_null("home_page_order")
            .order("home_page_order", Direction::Asc)
            .limit(FEATURED_DOCTORS_LIMIT);

        self.supabase.select(&query).await
    }

    /// Doctors linked to a clinic by `clinic_id`, by booking priority.
    pub async fn doctors_in_clinic(&self, clinic_id: i64) -> Result<Vec<Doctor>> {
        debug!("Fetching doctors for clinic: {}", clinic_id);
        let query = Self::priority_query().eq("clinic_id", clinic_id);
        self.supabase.select_sorted(&query).await
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor profile: {}", doctor_id);

        let query = Query::table(DOCTORS_TABLE).eq("id", doctor_id);
        self.supabase
            .select_one(&query)
            .await?
            .ok_or(DoctorError::NotFound)
    }

    /// Doctor with the derived fields the detail page renders.
    pub async fn get_doctor_profile(&self, doctor_id: i64) -> Result<DoctorProfile, DoctorError> {
        let doctor = self.get_doctor(doctor_id).await?;
        Ok(self.profile(doctor))
    }

    pub fn profile(&self, doctor: Doctor) -> DoctorProfile {
        DoctorProfile {
            qualifications_list: qualifications_list(doctor.qualifications.as_deref()),
            available_today: works_today(doctor.work_days.as_deref()),
            periods: resolve_periods(doctor.shift.as_deref(), self.mode).options(),
            doctor,
        }
    }

    /// The doctor list's quick booking: name and phone only, date and time
    /// optional, linked to the doctor by id.
    pub async fn create_quick_booking(
        &self,
        doctor_id: i64,
        request: QuickBookingRequest,
    ) -> Result<(Doctor, Value), DoctorError> {
        if request.name.trim().is_empty() || request.phone.trim().is_empty() {
            return Err(DoctorError::ValidationError(
                "يرجى كتابة الاسم ورقم الهاتف لإتمام الحجز".to_string(),
            ));
        }

        let doctor = self.get_doctor(doctor_id).await?;

        let appointment = json!({
            "patient_name": request.name.trim(),
            "phone_number": request.phone.trim(),
            "appointment_date": request.date,
            "appointment_time": request.time.as_deref().map(str::trim).filter(|t| !t.is_empty()),
            "doctor_id": doctor.id,
            "status": "pending"
        });

        let result = self.supabase.insert(APPOINTMENTS_TABLE, json!([appointment])).await
            .map_err(|e| {
                error!("Quick booking for doctor {} failed: {}", doctor.id, e);
                e
            })?;

        let stored = result
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Failed to create appointment"))?;

        debug!("Quick booking stored for doctor {}", doctor.id);
        Ok((doctor, stored))
    }
}
