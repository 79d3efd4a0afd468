//! Turns a booking draft into the payload checkout consumes.
//!
//! Rules run in a fixed order and the first failure is the only one reported.

use chrono::NaiveTime;
use tracing::{debug, warn};

use shared_config::{AppConfig, MatchingMode};
use doctor_cell::models::{Doctor, DoctorError};
use doctor_cell::services::doctor::DoctorService;
use doctor_cell::services::matching::DoctorMatchingService;
use doctor_cell::services::shift::resolve_periods;

use crate::models::{
    BookingCategory, BookingDraft, BookingError, BookingPayload, ComposeRequest, TimeSelection,
};

pub fn compose(draft: &BookingDraft) -> Result<BookingPayload, BookingError> {
    let selection = if draft.category == BookingCategory::Lab {
        draft.lab.label().ok_or(BookingError::NoLabItems)?
    } else {
        draft
            .primary
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or(BookingError::MissingSelection(draft.category))?
    };

    let doctor_missing = match draft.category {
        BookingCategory::Clinic => draft.doctor.is_none() && draft.doctor_options > 0,
        BookingCategory::Doctor => draft.doctor.is_none(),
        BookingCategory::Scan | BookingCategory::Lab => false,
    };
    if doctor_missing {
        return Err(BookingError::DoctorRequired);
    }

    let date = draft.date.ok_or(BookingError::MissingDate)?;
    let time = draft.time.as_ref().ok_or(BookingError::MissingTime)?;

    Ok(BookingPayload {
        category: draft.category,
        selection,
        doctor: draft.doctor.clone(),
        date,
        time: time.label(),
        is_package: draft.category == BookingCategory::Lab && draft.lab.is_package(),
    })
}

/// Parses a submitted time for the draft's category.
///
/// Period bookings must name a period the linked doctor works; scan and lab
/// bookings take a clock time. Anything else counts as no time.
pub fn parse_time(
    category: BookingCategory,
    shift: Option<&str>,
    raw: Option<&str>,
    mode: MatchingMode,
) -> Option<TimeSelection> {
    let raw = raw.map(str::trim).filter(|t| !t.is_empty())?;

    if category.uses_periods() {
        resolve_periods(shift, mode)
            .choose_label(raw)
            .map(TimeSelection::Period)
    } else {
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
            .map(TimeSelection::Clock)
    }
}

/// Picks the submitted doctor out of the store records that may be linked
/// to this booking. On the doctors tab the record must also carry the
/// selected name.
pub fn linked_doctor(
    category: BookingCategory,
    primary: Option<&str>,
    doctor_id: Option<i64>,
    candidates: &[Doctor],
) -> Option<Doctor> {
    if !category.uses_periods() {
        return None;
    }
    let doctor = candidates.iter().find(|d| Some(d.id) == doctor_id)?;

    match category {
        BookingCategory::Doctor if primary.map(str::trim) != Some(doctor.name.trim()) => None,
        _ => Some(doctor.clone()),
    }
}

/// Builds a draft from an HTTP submission. `doctor` is the store record the
/// submission resolved to and `doctor_options` the number of doctors known
/// for the chosen clinic.
pub fn draft_from_request(
    request: ComposeRequest,
    doctor: Option<Doctor>,
    doctor_options: usize,
    mode: MatchingMode,
) -> BookingDraft {
    // A period the doctor does not work parses to no time at all.
    let time = parse_time(
        request.category,
        doctor.as_ref().and_then(|d| d.shift.as_deref()),
        request.time.as_deref(),
        mode,
    );

    BookingDraft::new(request.category)
        .with_primary(request.primary)
        .with_lab(request.lab)
        .with_doctor(doctor)
        .with_doctor_options(doctor_options)
        .with_date(request.date)
        .with_time(time)
}

/// Re-checks a payload that came back from the client before it is filed.
pub fn check_payload(booking: &BookingPayload, mode: MatchingMode) -> Result<(), BookingError> {
    if booking.selection.trim().is_empty() {
        return Err(match booking.category {
            BookingCategory::Lab => BookingError::NoLabItems,
            category => BookingError::MissingSelection(category),
        });
    }
    if booking.category == BookingCategory::Doctor && booking.doctor.is_none() {
        return Err(BookingError::DoctorRequired);
    }

    let shift = booking.doctor.as_ref().and_then(|d| d.shift.as_deref());
    parse_time(booking.category, shift, Some(&booking.time), mode)
        .map(|_| ())
        .ok_or(BookingError::MissingTime)
}

/// Composes widget submissions against the store's doctor records.
pub struct BookingComposeService {
    doctor_service: DoctorService,
    matching_service: DoctorMatchingService,
    mode: MatchingMode,
}

impl BookingComposeService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            doctor_service: DoctorService::new(config),
            matching_service: DoctorMatchingService::new(config),
            mode: config.matching_mode,
        }
    }

    /// Doctors the submission may link: the clinic's matched doctors, or
    /// the single doctor named by id on the doctors tab.
    async fn candidates(&self, category: BookingCategory, primary: &str, doctor_id: Option<i64>) -> Vec<Doctor> {
        match (category, doctor_id) {
            (BookingCategory::Clinic, _) => self.matching_service.find_for_clinic(primary).await.unwrap_or_else(|e| {
                warn!("Could not load doctors for clinic {}: {}", primary, e);
                Vec::new()
            }),
            (BookingCategory::Doctor, Some(id)) => match self.doctor_service.get_doctor(id).await {
                Ok(doctor) => vec![doctor],
                Err(DoctorError::NotFound) => Vec::new(),
                Err(e) => {
                    warn!("Could not load doctor {}: {}", id, e);
                    Vec::new()
                }
            },
            _ => Vec::new(),
        }
    }

    pub async fn compose_request(&self, request: ComposeRequest) -> Result<BookingPayload, BookingError> {
        let primary = request
            .primary
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let candidates = match primary.as_deref() {
            Some(primary) => self.candidates(request.category, primary, request.doctor_id).await,
            None => Vec::new(),
        };
        let doctor = linked_doctor(request.category, primary.as_deref(), request.doctor_id, &candidates);

        if primary.is_some() && request.category.uses_periods() && request.doctor_id.is_some() && doctor.is_none() {
            debug!("Doctor {:?} is not bookable under {:?}", request.doctor_id, primary);
            return Err(BookingError::DoctorRequired);
        }

        let doctor_options = match request.category {
            BookingCategory::Clinic => candidates.len(),
            _ => 0,
        };
        compose(&draft_from_request(request, doctor, doctor_options, self.mode))
    }
}
