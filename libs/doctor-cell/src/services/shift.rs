//! Which booking periods a doctor's shift text allows.
//!
//! Shift text is written by staff ("صباحي", "مسائي من 4 م", "صباحي ومسائي")
//! and is only searched for markers, never parsed. Every booking surface
//! (home widget, doctor page, clinic page) goes through `resolve_periods`.

use serde::{Deserialize, Serialize};

use shared_config::MatchingMode;

const MORNING_MARKER: &str = "صباح";
const EVENING_MARKERS: &[&str] = &["عصر", "مساء", "مسائ"];
const LEGACY_EVENING_LETTER: &str = "م";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Evening,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Morning, Period::Evening];

    pub fn label(self) -> &'static str {
        match self {
            Period::Morning => "الفترة الصباحية (9:00 ص - 1:00 م)",
            Period::Evening => "الفترة المسائية (4:00 م - 8:00 م)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodOption {
    pub id: Period,
    pub label: &'static str,
}

/// A period picked from an offered set.
///
/// Only `AvailablePeriods` hands these out, so a booking can never carry a
/// period its doctor does not work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodChoice(Period);

impl PeriodChoice {
    pub fn period(&self) -> Period {
        self.0
    }

    pub fn label(&self) -> &'static str {
        self.0.label()
    }
}

impl Serialize for PeriodChoice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailablePeriods {
    morning: bool,
    evening: bool,
}

impl Default for AvailablePeriods {
    fn default() -> Self {
        Self::all()
    }
}

impl AvailablePeriods {
    pub fn all() -> Self {
        Self { morning: true, evening: true }
    }

    fn only(period: Period) -> Self {
        Self {
            morning: period == Period::Morning,
            evening: period == Period::Evening,
        }
    }

    pub fn contains(&self, period: Period) -> bool {
        match period {
            Period::Morning => self.morning,
            Period::Evening => self.evening,
        }
    }

    /// Offered periods, morning first.
    pub fn periods(&self) -> Vec<Period> {
        Period::ALL.into_iter().filter(|p| self.contains(*p)).collect()
    }

    pub fn options(&self) -> Vec<PeriodOption> {
        self.periods()
            .into_iter()
            .map(|id| PeriodOption { id, label: id.label() })
            .collect()
    }

    pub fn choices(&self) -> impl Iterator<Item = PeriodChoice> + '_ {
        self.periods().into_iter().map(PeriodChoice)
    }

    pub fn choose(&self, period: Period) -> Option<PeriodChoice> {
        self.choices().find(|choice| choice.period() == period)
    }

    /// Picks the offered period whose label the form submitted.
    pub fn choose_label(&self, label: &str) -> Option<PeriodChoice> {
        let label = label.trim();
        self.choices().find(|choice| choice.label() == label)
    }
}

fn has_evening_marker(shift: &str, mode: MatchingMode) -> bool {
    EVENING_MARKERS.iter().any(|marker| shift.contains(marker))
        || (mode == MatchingMode::Legacy && shift.contains(LEGACY_EVENING_LETTER))
}

/// Resolves the periods to offer for a shift description.
///
/// Morning only or evening only narrows the offer; no text, no marker or both
/// markers offer both periods.
pub fn resolve_periods(shift: Option<&str>, mode: MatchingMode) -> AvailablePeriods {
    let shift = match shift.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return AvailablePeriods::all(),
    };

    let morning = shift.contains(MORNING_MARKER);
    let evening = has_evening_marker(shift, mode);

    match (morning, evening) {
        (true, false) => AvailablePeriods::only(Period::Morning),
        (false, true) => AvailablePeriods::only(Period::Evening),
        _ => AvailablePeriods::all(),
    }
}
