use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, error};

use shared_config::{AppConfig, MatchingMode};
use shared_database::query::{Direction, Nulls, Query};
use shared_database::supabase::SupabaseClient;
use doctor_cell::models::Doctor;
use doctor_cell::services::doctor::DoctorService;
use doctor_cell::services::shift::resolve_periods;
use booking_cell::models::{BookingCategory, BookingDraft, BookingPayload, TimeSelection};
use booking_cell::services::composer::compose;

use crate::models::{
    Clinic, ClinicBookingRequest, ClinicDetail, ClinicDoctor, ClinicError, ClinicSummary,
};
use crate::services::theme::{CLINIC_ICONS, DETAIL_GRADIENTS, LIST_GRADIENTS};

const CLINICS_TABLE: &str = "clinics";
const CLINIC_SERVICES_TABLE: &str = "clinic_services";

#[derive(Debug, Deserialize)]
struct ServiceRow {
    service_name: String,
}

pub fn summarize(clinic: Clinic) -> ClinicSummary {
    ClinicSummary {
        icon: CLINIC_ICONS.resolve(clinic.icon_name.as_deref()),
        gradient: LIST_GRADIENTS.resolve(clinic.color.as_deref()),
        clinic,
    }
}

pub struct ClinicService {
    supabase: SupabaseClient,
    doctor_service: DoctorService,
    mode: MatchingMode,
}

impl ClinicService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            doctor_service: DoctorService::new(config),
            mode: config.matching_mode,
        }
    }

    /// Clinics in display order: `sort_order` first, unranked last, then
    /// by clinic number.
    pub async fn list_clinics(&self) -> Result<Vec<ClinicSummary>> {
        debug!("Fetching clinics");

        let query = Query::table(CLINICS_TABLE)
            .order_nulls("sort_order", Direction::Asc, Nulls::Last)
            .order("clinic_number", Direction::Asc);

        let clinics: Vec<Clinic> = self.supabase.select_sorted(&query).await?;
        Ok(clinics.into_iter().map(summarize).collect())
    }

    pub async fn get_clinic(&self, clinic_id: i64) -> Result<Clinic, ClinicError> {
        let query = Query::table(CLINICS_TABLE).eq("id", clinic_id);
        self.supabase
            .select_one(&query)
            .await?
            .ok_or(ClinicError::NotFound)
    }

    pub async fn clinic_services(&self, clinic_id: i64) -> Result<Vec<String>> {
        let query = Query::table(CLINIC_SERVICES_TABLE)
            .select("service_name")
            .eq("clinic_id", clinic_id);

        let rows: Vec<ServiceRow> = self.supabase.select(&query).await?;
        Ok(rows.into_iter().map(|row| row.service_name).collect())
    }

    fn with_periods(&self, doctor: Doctor) -> ClinicDoctor {
        ClinicDoctor {
            periods: resolve_periods(doctor.shift.as_deref(), self.mode).options(),
            doctor,
        }
    }

    /// Clinic page: the clinic, its services and its doctors. Services and
    /// doctors are loaded together and each degrades to empty on failure.
    pub async fn get_clinic_detail(&self, clinic_id: i64) -> Result<ClinicDetail, ClinicError> {
        let clinic = self.get_clinic(clinic_id).await?;

        let (services, doctors) = futures::join!(
            self.clinic_services(clinic_id),
            self.doctor_service.doctors_in_clinic(clinic_id),
        );

        let services = services.unwrap_or_else(|e| {
            error!("Error fetching services for clinic {}: {}", clinic_id, e);
            Vec::new()
        });
        let doctors = doctors.unwrap_or_else(|e| {
            error!("Error fetching doctors for clinic {}: {}", clinic_id, e);
            Vec::new()
        });

        Ok(ClinicDetail {
            gradient: DETAIL_GRADIENTS.resolve(clinic.color.as_deref()),
            services,
            doctors: doctors.into_iter().map(|d| self.with_periods(d)).collect(),
            clinic,
        })
    }

    /// Composes a booking from the clinic page form.
    pub async fn book(
        &self,
        clinic_id: i64,
        request: ClinicBookingRequest,
    ) -> Result<BookingPayload, ClinicError> {
        let clinic = self.get_clinic(clinic_id).await?;
        let doctors = self.doctor_service.doctors_in_clinic(clinic_id).await?;

        compose_clinic_booking(&clinic, &doctors, request, self.mode)
    }
}

/// Validates the clinic form (doctor, then date, then period) and runs the
/// result through the composer.
pub fn compose_clinic_booking(
    clinic: &Clinic,
    doctors: &[Doctor],
    request: ClinicBookingRequest,
    mode: MatchingMode,
) -> Result<BookingPayload, ClinicError> {
    let invalid = |msg: &str| ClinicError::ValidationError(msg.to_string());

    let doctor = request
        .doctor_id
        .and_then(|id| doctors.iter().find(|d| d.id == id))
        .ok_or_else(|| invalid("يرجى اختيار الطبيب"))?;
    let date = request.date.ok_or_else(|| invalid("يرجى اختيار التاريخ"))?;
    let choice = request
        .shift
        .and_then(|period| resolve_periods(doctor.shift.as_deref(), mode).choose(period))
        .ok_or_else(|| invalid("يرجى اختيار فترة الدوام"))?;

    let draft = BookingDraft::new(BookingCategory::Clinic)
        .with_primary(Some(clinic.name.clone()))
        .with_doctor(Some(doctor.clone()))
        .with_doctor_options(doctors.len())
        .with_date(Some(date))
        .with_time(Some(TimeSelection::Period(choice)));

    Ok(compose(&draft)?)
}
