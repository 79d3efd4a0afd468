use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use thiserror::Error;

use crate::services::shift::PeriodOption;

/// Specialty tabs on the doctor list. "الكل" disables the filter.
pub const ALL_CATEGORIES: &str = "الكل";

pub const DOCTOR_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES, "باطنية", "القلب", "أطفال", "نساء وولادة", "عظام", "أنف وأذن", "عيون",
    "أسنان", "تغذية", "جراحة عامة", "الأشعة التشخيصية", "مخ وأعصاب", "أورام", "أمراض دم",
    "مسالك بولية", "مختبر",
];

pub const FEATURED_DOCTORS_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub shift: Option<String>,
    #[serde(default)]
    pub clinic_id: Option<i64>,
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub home_page_order: Option<i32>,
    #[serde(default)]
    pub work_days: Option<String>,
    #[serde(default)]
    pub work_hours: Option<String>,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: serde::Deserializer<'de> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A doctor as the detail page shows it.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorProfile {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub qualifications_list: Vec<String>,
    pub available_today: bool,
    pub periods: Vec<PeriodOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorSearchFilters {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickBookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("لم يتم العثور على الطبيب")]
    NotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
