use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, error};

use shared_config::{AppConfig, MatchingMode};
use shared_database::query::{Direction, Nulls, Query};
use shared_database::supabase::SupabaseClient;
use doctor_cell::models::Doctor;
use doctor_cell::services::doctor::DoctorService;
use doctor_cell::services::shift::resolve_periods;

use crate::models::{BookingCategory, PrimaryOption};
use crate::services::widget::FetchedOptions;

#[derive(Debug, Deserialize)]
struct NamedRow {
    #[serde(default)]
    name: Option<String>,
}

/// Rows without a name cannot be offered and are skipped.
fn named_options(rows: Vec<NamedRow>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| row.name)
        .filter(|name| !name.trim().is_empty())
        .collect()
}

fn named_doctors(doctors: Vec<Doctor>) -> Vec<Doctor> {
    doctors.into_iter().filter(|d| !d.name.trim().is_empty()).collect()
}

/// Loads the dropdown contents for each booking widget tab.
pub struct BookingOptionsService {
    supabase: SupabaseClient,
    doctor_service: DoctorService,
    mode: MatchingMode,
}

impl BookingOptionsService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            doctor_service: DoctorService::new(config),
            mode: config.matching_mode,
        }
    }

    fn source_query(category: BookingCategory) -> Query {
        match category {
            BookingCategory::Clinic => Query::table("clinics")
                .select("name")
                .order_nulls("sort_order", Direction::Asc, Nulls::Last)
                .order("clinic_number", Direction::Asc),
            BookingCategory::Doctor => Query::table("doctors"),
            BookingCategory::Scan => Query::table("scans").select("name"),
            BookingCategory::Lab => Query::table("lab_tests_list").select("name"),
        }
    }

    async fn names(&self, category: BookingCategory) -> Result<Vec<String>> {
        let rows: Vec<NamedRow> = self.supabase.select_sorted(&Self::source_query(category)).await?;
        Ok(named_options(rows))
    }

    /// Raw option lists for a tab.
    ///
    /// The clinics tab also loads every doctor so the chosen clinic's
    /// doctors can be matched without another round trip.
    pub async fn fetch(&self, category: BookingCategory) -> Result<FetchedOptions> {
        debug!("Fetching booking options for {:?}", category);

        match category {
            BookingCategory::Doctor => {
                let doctors = named_doctors(self.doctor_service.ordered_doctors().await?);
                let names = doctors.iter().map(|d| d.name.clone()).collect();
                Ok(FetchedOptions { names, doctors })
            }
            BookingCategory::Clinic => {
                let names = self.names(category).await?;
                let doctors = self
                    .doctor_service
                    .ordered_doctors()
                    .await
                    .map(named_doctors)
                    .unwrap_or_else(|e| {
                        error!("Error fetching doctors for clinic matching: {}", e);
                        Vec::new()
                    });
                Ok(FetchedOptions { names, doctors })
            }
            BookingCategory::Scan | BookingCategory::Lab => Ok(FetchedOptions {
                names: self.names(category).await?,
                doctors: Vec::new(),
            }),
        }
    }

    /// Dropdown entries for a tab. Doctor entries carry the doctor and the
    /// periods they work. A failed fetch yields an empty list.
    pub async fn primary_options(&self, category: BookingCategory) -> Vec<PrimaryOption> {
        let fetched = match self.fetch(category).await {
            Ok(fetched) => fetched,
            Err(e) => {
                error!("Error fetching {:?} options: {}", category, e);
                return Vec::new();
            }
        };

        if category == BookingCategory::Doctor {
            fetched.doctors.into_iter().map(|doctor| self.doctor_option(doctor)).collect()
        } else {
            fetched
                .names
                .into_iter()
                .map(|name| PrimaryOption { name, doctor: None, periods: None })
                .collect()
        }
    }

    pub fn doctor_option(&self, doctor: Doctor) -> PrimaryOption {
        let periods = resolve_periods(doctor.shift.as_deref(), self.mode).options();
        PrimaryOption {
            name: doctor.name.clone(),
            doctor: Some(doctor),
            periods: Some(periods),
        }
    }
}
