use super::domain::{ShiftCheckIn, ShiftCheckInSubmission};
use crate::workflows::eligibility::{allowed_shift, shift_day, ShiftKind};
use chrono::NaiveDateTime;

/// Reasons a check-in form is refused before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckInViolation {
    #[error("soldier id is required")]
    MissingSoldier,
    #[error("vehicle number is required")]
    MissingVehicle,
    #[error("check-in for {requested:?} shift rejected: only the {allowed:?} shift is open")]
    ShiftOutsideWindow {
        requested: ShiftKind,
        allowed: ShiftKind,
    },
}

/// Enforces the one-check-in-per-open-window policy on inbound forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckInGuard;

impl CheckInGuard {
    pub fn accept(
        &self,
        submission: ShiftCheckInSubmission,
        now: NaiveDateTime,
    ) -> Result<ShiftCheckIn, CheckInViolation> {
        if submission.soldier_id.as_str().trim().is_empty() {
            return Err(CheckInViolation::MissingSoldier);
        }

        let vehicle_number = submission.vehicle_number.trim().to_string();
        if vehicle_number.is_empty() {
            return Err(CheckInViolation::MissingVehicle);
        }

        let allowed = allowed_shift(&now);
        if submission.shift != allowed {
            return Err(CheckInViolation::ShiftOutsideWindow {
                requested: submission.shift,
                allowed,
            });
        }

        let notes = submission
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        Ok(ShiftCheckIn {
            soldier_id: submission.soldier_id,
            soldier_name: submission.soldier_name.trim().to_string(),
            shift: allowed,
            shift_day: shift_day(now),
            submitted_at: now,
            vehicle_number,
            odometer_km: submission.odometer_km,
            notes,
        })
    }
}
