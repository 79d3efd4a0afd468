pub mod clinic;
pub mod theme;

pub use clinic::{compose_clinic_booking, summarize, ClinicService};
