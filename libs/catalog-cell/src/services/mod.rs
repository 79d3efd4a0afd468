pub mod center;
pub mod examinations;
pub mod scans;

pub use examinations::ExaminationService;
pub use scans::ScanService;
