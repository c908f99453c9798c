//! Shift-window and driver fitness rules.
//!
//! Every function here is pure: callers pass the current time in explicitly and
//! nothing reads a clock, so results are deterministic for a given input.

mod dates;
pub mod domain;
mod rules;
mod shift;

pub use dates::{add_one_year, days_until};
pub use domain::{
    CorrectDrivingAssessment, FitnessAssessment, FitnessAssessmentView, FitnessStatus, ShiftKind,
    SoldierFitnessRecord,
};
pub use rules::{
    correct_driving_status, date_status, date_status_within, overall_fitness,
    CORRECT_DRIVING_WARNING_DAYS, LICENSE_WARNING_DAYS,
};
pub use shift::{
    allowed_shift, shift_day, AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR,
};
