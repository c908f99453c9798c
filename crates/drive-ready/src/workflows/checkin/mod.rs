//! Shift check-in intake.
//!
//! Check-in forms may only target the shift window that is open when they are
//! submitted, and each soldier checks in at most once per window.

pub mod domain;
mod guard;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ShiftCheckIn, ShiftCheckInSubmission, ShiftCheckInView, ShiftWindowView, SoldierId,
};
pub use guard::{CheckInGuard, CheckInViolation};
pub use repository::{CheckInRepository, RepositoryError};
pub use router::check_in_router;
pub use service::{CheckInServiceError, ShiftCheckInService};
