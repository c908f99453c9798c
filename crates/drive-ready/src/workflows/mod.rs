pub mod checkin;
pub mod eligibility;
pub mod roster;
