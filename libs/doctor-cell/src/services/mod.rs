pub mod doctor;
pub mod availability;
pub mod matching;
pub mod shift;

pub use doctor::DoctorService;
pub use matching::DoctorMatchingService;
pub use shift::{resolve_periods, AvailablePeriods, Period, PeriodChoice, PeriodOption};
