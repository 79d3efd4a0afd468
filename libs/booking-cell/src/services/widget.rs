//! State behind the home page booking widget.
//!
//! The widget owns one draft and replaces it on every change. Option lists
//! are fetched per category; a list only lands if its ticket is still the
//! newest one, so switching tabs quickly never shows another tab's options.

use chrono::{NaiveDate, NaiveTime};

use shared_config::MatchingMode;
use shared_utils::generation::{FetchGeneration, FetchTicket};
use doctor_cell::models::Doctor;
use doctor_cell::services::matching::doctors_for_clinic;
use doctor_cell::services::shift::{resolve_periods, AvailablePeriods, Period};

use crate::models::{BookingCategory, BookingDraft, BookingError, BookingPayload, TimeSelection};
use crate::services::composer::compose;
use crate::services::lab::LabSelection;

/// Options fetched for one category tab.
#[derive(Debug, Clone, Default)]
pub struct FetchedOptions {
    /// Names shown in the primary dropdown.
    pub names: Vec<String>,
    /// Doctors behind those names (doctor tab), or every doctor for
    /// matching against a clinic (clinic tab).
    pub doctors: Vec<Doctor>,
}

#[derive(Debug)]
pub struct BookingWidget {
    generation: FetchGeneration,
    mode: MatchingMode,
    preselected: Option<Doctor>,
    primary_options: Vec<String>,
    doctors: Vec<Doctor>,
    secondary_options: Vec<Doctor>,
    draft: BookingDraft,
    loading: bool,
    error: Option<String>,
}

impl BookingWidget {
    pub fn new(mode: MatchingMode) -> Self {
        Self {
            generation: FetchGeneration::new(),
            mode,
            preselected: None,
            primary_options: Vec::new(),
            doctors: Vec::new(),
            secondary_options: Vec::new(),
            draft: BookingDraft::new(BookingCategory::Clinic),
            loading: false,
            error: None,
        }
    }

    /// Widget on a doctor's page: the doctors tab with that doctor chosen.
    pub fn for_doctor(doctor: Doctor, mode: MatchingMode) -> Self {
        let draft = BookingDraft::new(BookingCategory::Doctor)
            .with_primary(Some(doctor.name.clone()))
            .with_doctor(Some(doctor.clone()));

        Self {
            preselected: Some(doctor),
            draft,
            ..Self::new(mode)
        }
    }

    pub fn category(&self) -> BookingCategory {
        self.draft.category
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn primary_options(&self) -> &[String] {
        &self.primary_options
    }

    pub fn secondary_options(&self) -> &[Doctor] {
        &self.secondary_options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn update(&mut self, change: impl FnOnce(BookingDraft) -> BookingDraft) {
        self.draft = change(std::mem::take(&mut self.draft));
    }

    /// Moves to another tab and returns the ticket its options must carry.
    ///
    /// Selections are reset unless a doctor was preselected. A chosen time
    /// survives only while it is still the same kind of time.
    pub fn switch_category(&mut self, category: BookingCategory) -> FetchTicket {
        let ticket = self.generation.begin();
        let keep_time = self.draft.category.uses_periods() == category.uses_periods();
        let preselected = self.preselected.clone();

        self.update(|draft| {
            let draft = draft
                .with_category(category)
                .with_lab(LabSelection::Empty)
                .with_doctor_options(0);
            let draft = match preselected {
                Some(doctor) => draft.with_primary(Some(doctor.name.clone())).with_doctor(Some(doctor)),
                None => draft.with_primary(None).with_doctor(None),
            };
            if keep_time { draft } else { draft.with_time(None) }
        });

        self.primary_options.clear();
        self.secondary_options.clear();
        self.loading = true;
        self.error = None;
        ticket
    }

    /// Installs fetched options. Returns false, changing nothing, when a
    /// newer fetch has started since `ticket` was issued.
    pub fn apply_options(&mut self, ticket: FetchTicket, options: FetchedOptions) -> bool {
        if !self.generation.is_current(&ticket) {
            return false;
        }

        self.primary_options = options.names;
        self.doctors = options.doctors;
        self.loading = false;
        self.refresh_secondary();
        true
    }

    /// Records a failed fetch; the tab shows an empty list.
    pub fn apply_failure(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if !self.generation.is_current(&ticket) {
            return false;
        }

        self.primary_options.clear();
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    fn refresh_secondary(&mut self) {
        self.secondary_options = match (self.draft.category, self.draft.primary.as_deref()) {
            (BookingCategory::Clinic, Some(clinic)) => doctors_for_clinic(&self.doctors, clinic, self.mode),
            _ => Vec::new(),
        };
        let count = self.secondary_options.len();
        self.update(|draft| draft.with_doctor_options(count));
    }

    /// Picks an entry from the primary dropdown. On the doctors tab this
    /// also picks the doctor.
    pub fn select_primary(&mut self, name: &str) {
        let name = name.trim().to_string();
        self.update(|draft| draft.with_primary(Some(name)).with_doctor(None).with_time(None));

        if self.draft.category == BookingCategory::Doctor {
            if let Some(primary) = self.draft.primary.clone() {
                self.select_doctor(&primary);
            }
        }
        self.refresh_secondary();
    }

    /// Picks a doctor by name from the list the current tab offers.
    /// Any chosen time is cleared since the new doctor may not work it.
    pub fn select_doctor(&mut self, name: &str) {
        let candidates = match self.draft.category {
            BookingCategory::Doctor => &self.doctors,
            BookingCategory::Clinic => &self.secondary_options,
            BookingCategory::Scan | BookingCategory::Lab => return,
        };
        let doctor = candidates.iter().find(|d| d.name == name).cloned();

        self.update(|draft| draft.with_doctor(doctor).with_time(None));
    }

    /// Periods the selected doctor works, or both when none is selected.
    pub fn offered_periods(&self) -> AvailablePeriods {
        let shift = self.draft.doctor.as_ref().and_then(|d| d.shift.as_deref());
        resolve_periods(shift, self.mode)
    }

    /// Chooses a period if the selected doctor works it.
    pub fn choose_period(&mut self, period: Period) -> bool {
        if !self.draft.category.uses_periods() {
            return false;
        }
        match self.offered_periods().choose(period) {
            Some(choice) => {
                self.update(|draft| draft.with_time(Some(TimeSelection::Period(choice))));
                true
            }
            None => false,
        }
    }

    /// Sets a clock time on scan and lab tabs.
    pub fn set_clock_time(&mut self, time: NaiveTime) -> bool {
        if self.draft.category.uses_periods() {
            return false;
        }
        self.update(|draft| draft.with_time(Some(TimeSelection::Clock(time))));
        true
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.update(|draft| draft.with_date(date));
    }

    pub fn add_lab_test(&mut self, name: &str) {
        let lab = self.draft.lab.add_test(name);
        self.update(|draft| draft.with_lab(lab));
    }

    pub fn add_lab_package(&mut self, name: &str) {
        let lab = self.draft.lab.add_package(name);
        self.update(|draft| draft.with_lab(lab));
    }

    pub fn remove_lab_item(&mut self, name: &str) {
        let lab = self.draft.lab.remove(name);
        self.update(|draft| draft.with_lab(lab));
    }

    pub fn clear_lab(&mut self) {
        self.update(|draft| draft.with_lab(LabSelection::Empty));
    }

    /// Composes the payload for checkout, or the first thing still missing.
    pub fn book_now(&self) -> Result<BookingPayload, BookingError> {
        compose(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: i64, name: &str, category: &str, shift: Option<&str>) -> Doctor {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "category": category,
            "shift": shift
        }))
        .unwrap()
    }

    fn clinic_options() -> FetchedOptions {
        FetchedOptions {
            names: vec!["عيادة القلب".to_string(), "قسم الأطفال".to_string()],
            doctors: vec![
                doctor(1, "د. أحمد", "القلب", Some("صباحي")),
                doctor(2, "د. منى", "أطفال", Some("مسائي")),
                doctor(3, "د. سالم", "", None),
            ],
        }
    }

    #[test]
    fn stale_options_are_dropped() {
        let mut widget = BookingWidget::new(MatchingMode::Strict);
        let clinics = widget.switch_category(BookingCategory::Clinic);
        let scans = widget.switch_category(BookingCategory::Scan);

        assert!(!widget.apply_options(clinics, clinic_options()));
        assert!(widget.primary_options().is_empty());
        assert!(widget.is_loading());

        let scan_options = FetchedOptions {
            names: vec!["أشعة الصدر".to_string()],
            doctors: Vec::new(),
        };
        assert!(widget.apply_options(scans, scan_options));
        assert_eq!(widget.primary_options(), ["أشعة الصدر".to_string()]);
        assert!(!widget.is_loading());
    }

    #[test]
    fn clinic_selection_offers_matching_doctors() {
        let mut widget = BookingWidget::new(MatchingMode::Strict);
        let ticket = widget.switch_category(BookingCategory::Clinic);
        widget.apply_options(ticket, clinic_options());

        widget.select_primary("قسم الأطفال");
        let names: Vec<&str> = widget.secondary_options().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["د. منى"]);
        assert_eq!(widget.draft().doctor_options, 1);

        widget.set_date(NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(widget.book_now(), Err(BookingError::DoctorRequired));
    }

    #[test]
    fn changing_doctor_clears_time_and_limits_periods() {
        let mut widget = BookingWidget::new(MatchingMode::Strict);
        let ticket = widget.switch_category(BookingCategory::Clinic);
        widget.apply_options(ticket, clinic_options());
        widget.select_primary("عيادة القلب");
        widget.select_doctor("د. أحمد");

        assert!(widget.choose_period(Period::Morning));
        assert!(widget.draft().time.is_some());

        widget.select_primary("قسم الأطفال");
        widget.select_doctor("د. منى");
        assert!(widget.draft().time.is_none());
        assert_eq!(widget.offered_periods().periods(), vec![Period::Evening]);
        assert!(!widget.choose_period(Period::Morning));
    }

    #[test]
    fn full_clinic_booking() {
        let mut widget = BookingWidget::new(MatchingMode::Strict);
        let ticket = widget.switch_category(BookingCategory::Clinic);
        widget.apply_options(ticket, clinic_options());
        widget.select_primary("عيادة القلب");
        widget.select_doctor("د. أحمد");
        widget.set_date(NaiveDate::from_ymd_opt(2025, 5, 1));
        widget.choose_period(Period::Morning);

        let payload = widget.book_now().unwrap();
        assert_eq!(payload.selection, "عيادة القلب");
        assert_eq!(payload.service_name(), "د. أحمد");
        assert_eq!(payload.time, Period::Morning.label());
        assert!(!payload.is_package);
    }

    #[test]
    fn preselected_doctor_survives_tab_switch() {
        let doctor = doctor(2, "د. منى", "أطفال", Some("مسائي"));
        let mut widget = BookingWidget::for_doctor(doctor, MatchingMode::Strict);
        assert_eq!(widget.category(), BookingCategory::Doctor);

        widget.switch_category(BookingCategory::Doctor);
        assert_eq!(widget.draft().primary.as_deref(), Some("د. منى"));
        assert_eq!(widget.offered_periods().periods(), vec![Period::Evening]);
    }

    #[test]
    fn lab_tab_uses_clock_time_and_lab_items() {
        let mut widget = BookingWidget::new(MatchingMode::Strict);
        widget.switch_category(BookingCategory::Lab);

        assert!(!widget.choose_period(Period::Morning));
        assert!(widget.set_clock_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()));
        widget.set_date(NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(widget.book_now(), Err(BookingError::NoLabItems));

        widget.add_lab_test("سكر صائم");
        widget.add_lab_package("الفحص العام");
        let payload = widget.book_now().unwrap();
        assert_eq!(payload.selection, "الفحص العام");
        assert!(payload.is_package);

        widget.clear_lab();
        assert!(widget.draft().lab.is_empty());
    }

    #[test]
    fn switching_between_period_and_clock_tabs_clears_time() {
        let mut widget = BookingWidget::new(MatchingMode::Strict);
        widget.switch_category(BookingCategory::Scan);
        widget.set_clock_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());

        widget.switch_category(BookingCategory::Lab);
        assert!(widget.draft().time.is_some());

        widget.switch_category(BookingCategory::Doctor);
        assert!(widget.draft().time.is_none());
    }
}
