use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::domain::{ShiftCheckIn, ShiftCheckInSubmission, ShiftWindowView, SoldierId};
use super::guard::{CheckInGuard, CheckInViolation};
use super::repository::{CheckInRepository, RepositoryError};
use crate::clock::Clock;
use crate::workflows::eligibility::{allowed_shift, shift_day, ShiftKind};

/// Service composing the shift guard, repository, and clock.
pub struct ShiftCheckInService<R, C> {
    guard: CheckInGuard,
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ShiftCheckInService<R, C>
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            guard: CheckInGuard,
            repository,
            clock,
        }
    }

    /// Accept a check-in for the currently open shift window.
    pub fn submit(
        &self,
        submission: ShiftCheckInSubmission,
    ) -> Result<ShiftCheckIn, CheckInServiceError> {
        let now = self.clock.now();
        let check_in = self.guard.accept(submission, now).map_err(|violation| {
            warn!(%violation, "shift check-in rejected");
            violation
        })?;

        let slot = check_in.slot();
        let already_checked_in = self
            .repository
            .for_soldier(&check_in.soldier_id)?
            .iter()
            .any(|existing| existing.slot() == slot);
        if already_checked_in {
            return Err(CheckInServiceError::Duplicate {
                soldier_id: check_in.soldier_id,
                shift: slot.1,
                shift_day: slot.0,
            });
        }

        let stored = self.repository.insert(check_in)?;
        info!(
            soldier_id = %stored.soldier_id,
            shift = stored.shift.label(),
            shift_day = %stored.shift_day,
            "shift check-in recorded"
        );
        Ok(stored)
    }

    /// Check-ins for a soldier, newest first.
    pub fn history(&self, soldier_id: &SoldierId) -> Result<Vec<ShiftCheckIn>, CheckInServiceError> {
        let mut check_ins = self.repository.for_soldier(soldier_id)?;
        check_ins.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        debug!(%soldier_id, count = check_ins.len(), "loaded check-in history");
        Ok(check_ins)
    }

    /// Check-ins recorded against one shift day, in submission order.
    pub fn roster_for(&self, day: NaiveDate) -> Result<Vec<ShiftCheckIn>, CheckInServiceError> {
        let mut check_ins = self.repository.for_shift_day(day)?;
        check_ins.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(check_ins)
    }

    pub fn current_window(&self) -> ShiftWindowView {
        let now = self.clock.now();
        let shift = allowed_shift(&now);
        ShiftWindowView {
            shift,
            shift_label: shift.label(),
            shift_day: shift_day(now),
            evaluated_at: now,
        }
    }
}

/// Error raised by the check-in service.
#[derive(Debug, thiserror::Error)]
pub enum CheckInServiceError {
    #[error(transparent)]
    Violation(#[from] CheckInViolation),
    #[error("soldier {soldier_id} already checked in for the {shift:?} shift on {shift_day}")]
    Duplicate {
        soldier_id: SoldierId,
        shift: ShiftKind,
        shift_day: NaiveDate,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
