use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use doctor_cell::models::Doctor;
use doctor_cell::services::shift::{PeriodChoice, PeriodOption};

use crate::services::lab::LabSelection;

/// Lab packages offered in the booking widget.
pub const LAB_PACKAGES: &[&str] = &[
    "الفحص العام", "الفحص العام (رجال) بلس", "الفحص العام (نساء) بلس", "مقاومة الأنسولين",
    "تحاليل ما قبل الزواج للنساء", "تحاليل ما قبل الزواج للنساء بلس", "النظام الغذائي",
    "تحاليل هشاشة العظام", "تحاليل الروماتيزم", "تحاليل الغده الدرقيه", "تحاليل الغده الدرقيه بلس",
    "تحاليل فقر الدم", "تحاليل فقر الدم بلس", "تحاليل الجلد والشعر", "تحاليل غياب الدورة الشهرية",
    "وظائف الغده النخاميه", "تحاليل تعدد الاكياس", "تحاليل متابعة الحمل",
    "تحاليل مخاطر الاصابه بالجلطات", "تحاليل التسمم بالحديد", "تحاليل التخطيط للحمل",
    "تحاليل العقم للرجال+", "تحاليل للنساء عمر اكبر من 45", "تحاليل للرجال عمر اكبر من 45",
    "تحاليل مرضى السكر", "تحاليل مخاطر الامراض القلبية", "تحاليل دلالات الأورام", "تحاليل الأطفال",
    "تحاليل الأيض الشامل",
];

/// What the visitor is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingCategory {
    #[default]
    #[serde(alias = "clinics")]
    Clinic,
    #[serde(alias = "doctors")]
    Doctor,
    #[serde(alias = "scans")]
    Scan,
    Lab,
}

impl BookingCategory {
    /// Value written to the appointments `type` column by existing bookings.
    pub fn store_type(self) -> &'static str {
        match self {
            BookingCategory::Clinic => "clinics",
            BookingCategory::Doctor => "doctors",
            BookingCategory::Scan => "scans",
            BookingCategory::Lab => "lab",
        }
    }

    /// Whether the time is a named period rather than a clock time.
    pub fn uses_periods(self) -> bool {
        matches!(self, BookingCategory::Clinic | BookingCategory::Doctor)
    }

    fn selection_noun(self) -> &'static str {
        match self {
            BookingCategory::Doctor => "الطبيب",
            BookingCategory::Scan => "نوع الأشعة",
            BookingCategory::Clinic | BookingCategory::Lab => "العيادة",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSelection {
    Period(PeriodChoice),
    Clock(NaiveTime),
}

impl TimeSelection {
    pub fn label(&self) -> String {
        match self {
            TimeSelection::Period(choice) => choice.label().to_string(),
            TimeSelection::Clock(time) => time.format("%H:%M").to_string(),
        }
    }
}

/// The visitor's selection before checkout. Every change produces a new
/// draft; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub category: BookingCategory,
    pub primary: Option<String>,
    pub lab: LabSelection,
    pub doctor: Option<Doctor>,
    /// Doctors known for the chosen clinic.
    pub doctor_options: usize,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSelection>,
}

impl BookingDraft {
    pub fn new(category: BookingCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn with_category(self, category: BookingCategory) -> Self {
        Self { category, ..self }
    }

    pub fn with_primary(self, primary: Option<String>) -> Self {
        Self {
            primary: primary.filter(|p| !p.trim().is_empty()),
            ..self
        }
    }

    pub fn with_lab(self, lab: LabSelection) -> Self {
        Self { lab, ..self }
    }

    pub fn with_doctor(self, doctor: Option<Doctor>) -> Self {
        Self { doctor, ..self }
    }

    pub fn with_doctor_options(self, doctor_options: usize) -> Self {
        Self { doctor_options, ..self }
    }

    pub fn with_date(self, date: Option<NaiveDate>) -> Self {
        Self { date, ..self }
    }

    pub fn with_time(self, time: Option<TimeSelection>) -> Self {
        Self { time, ..self }
    }
}

/// Canonical booking handed to checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub category: BookingCategory,
    pub selection: String,
    #[serde(default)]
    pub doctor: Option<Doctor>,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub is_package: bool,
}

impl BookingPayload {
    /// Name the appointment is filed under: the doctor when one is linked.
    pub fn service_name(&self) -> &str {
        self.doctor
            .as_ref()
            .map(|doctor| doctor.name.as_str())
            .unwrap_or(&self.selection)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("يرجى اختيار فحص واحد على الأقل أو باقة")]
    NoLabItems,

    #[error("يرجى اختيار {}", .0.selection_noun())]
    MissingSelection(BookingCategory),

    #[error("يرجى اختيار الطبيب من القائمة")]
    DoctorRequired,

    #[error("يرجى اختيار التاريخ")]
    MissingDate,

    #[error("يرجى اختيار الوقت")]
    MissingTime,
}

/// One entry in a booking widget dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Doctor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<PeriodOption>>,
}

/// Booking widget submission as it arrives over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeRequest {
    pub category: BookingCategory,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub lab: LabSelection,
    /// Resolved against the store; the client never supplies doctor details.
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash at the center on arrival.
    #[default]
    Center,
    /// Bank transfer to Al-Qutaibi bank.
    Alqutaibi,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub booking: Option<BookingPayload>,
    #[serde(default)]
    pub patient: PatientDetails,
}

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("لا توجد تفاصيل للحجز")]
    MissingBooking,

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("حدث خطأ أثناء الحجز: {0}")]
    Submission(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_accepts_plural_aliases() {
        let category: BookingCategory = serde_json::from_value(json!("clinics")).unwrap();
        assert_eq!(category, BookingCategory::Clinic);
        assert_eq!(serde_json::to_value(category).unwrap(), json!("clinic"));
        assert_eq!(category.store_type(), "clinics");
    }

    #[test]
    fn missing_selection_message_names_the_field() {
        assert_eq!(
            BookingError::MissingSelection(BookingCategory::Scan).to_string(),
            "يرجى اختيار نوع الأشعة"
        );
        assert_eq!(
            BookingError::MissingSelection(BookingCategory::Doctor).to_string(),
            "يرجى اختيار الطبيب"
        );
    }

    #[test]
    fn draft_updates_leave_previous_draft_untouched() {
        let before = BookingDraft::new(BookingCategory::Scan);
        let updated = before.clone().with_primary(Some("أشعة الصدر".to_string()));

        assert!(before.primary.is_none());
        assert_eq!(updated.primary.as_deref(), Some("أشعة الصدر"));
        assert_eq!(updated.category, BookingCategory::Scan);
    }

    #[test]
    fn clock_time_label() {
        let time = TimeSelection::Clock(NaiveTime::from_hms_opt(16, 30, 0).unwrap());
        assert_eq!(time.label(), "16:30");
    }
}
