pub mod checkout;
pub mod composer;
pub mod lab;
pub mod options;
pub mod widget;

pub use checkout::CheckoutService;
pub use composer::{compose, draft_from_request, BookingComposeService};
pub use lab::{LabMode, LabSelection};
pub use options::BookingOptionsService;
pub use widget::{BookingWidget, FetchedOptions};
