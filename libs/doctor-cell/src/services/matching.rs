// libs/doctor-cell/src/services/matching.rs
use anyhow::Result;
use tracing::debug;

use shared_config::{AppConfig, MatchingMode};
use shared_utils::normalize::{keys_match, normalize_name};

use crate::models::{Doctor, DoctorSearchFilters, ALL_CATEGORIES};
use crate::services::doctor::DoctorService;

/// Doctors whose specialty text matches a clinic's display name.
///
/// Doctors without a category never match.
pub fn doctors_for_clinic(doctors: &[Doctor], clinic_name: &str, mode: MatchingMode) -> Vec<Doctor> {
    let clinic_key = normalize_name(Some(clinic_name));

    doctors
        .iter()
        .filter(|doctor| match doctor.category.as_deref() {
            Some(category) if !category.is_empty() => {
                keys_match(&normalize_name(Some(category)), &clinic_key, mode)
            }
            _ => false,
        })
        .cloned()
        .collect()
}

/// Doctor list filtering: exact specialty tab, then name/title search.
pub fn filter_doctors(doctors: &[Doctor], filters: &DoctorSearchFilters) -> Vec<Doctor> {
    let category = filters
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
    let search = filters.search.as_deref().map(str::trim).filter(|s| !s.is_empty());

    doctors
        .iter()
        .filter(|doctor| match category {
            Some(category) => doctor.category.as_deref() == Some(category),
            None => true,
        })
        .filter(|doctor| match search {
            Some(term) => {
                doctor.name.contains(term)
                    || doctor.title.as_deref().is_some_and(|title| title.contains(term))
            }
            None => true,
        })
        .cloned()
        .collect()
}

pub struct DoctorMatchingService {
    doctor_service: DoctorService,
    mode: MatchingMode,
}

impl DoctorMatchingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            doctor_service: DoctorService::new(config),
            mode: config.matching_mode,
        }
    }

    /// Loads every doctor in priority order and keeps the clinic's matches.
    pub async fn find_for_clinic(&self, clinic_name: &str) -> Result<Vec<Doctor>> {
        let doctors = self.doctor_service.ordered_doctors().await?;
        let matched = doctors_for_clinic(&doctors, clinic_name, self.mode);
        debug!("Matched {} of {} doctors to clinic {}", matched.len(), doctors.len(), clinic_name);
        Ok(matched)
    }
}
