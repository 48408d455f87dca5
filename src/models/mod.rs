pub mod booking;
pub mod contact;
pub mod response;
pub mod service;

pub use booking::{BookingDraft, BookingRequest, UnknownService, MAX_GUESTS, MIN_GUESTS, TIME_SLOTS};
pub use contact::ContactMessage;
pub use response::ApiResponse;
pub use service::{format_brl, Service, Total, UnitPrice};
