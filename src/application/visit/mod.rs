mod booking_options;
mod errors;
mod flash;
mod visit_service;

#[allow(unused_imports)]
pub use booking_options::{BookingOptions, get_booking_options};
#[allow(unused_imports)]
pub use errors::{Result, VisitApplicationError};
#[allow(unused_imports)]
pub use flash::{
    DONE_VISIT_BOOKED, ERROR_TIME_UNAVAILABLE, FlashMessage, Outcome, Severity,
    VISIT_BOOKING_REVOKED, VISIT_NOT_FOUND,
};
#[allow(unused_imports)]
pub use visit_service::{
    ServiceDependencies, book_visit, cancel_visit, get_visit, list_upcoming_visits,
};
