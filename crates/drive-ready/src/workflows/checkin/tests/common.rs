use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::FixedClock;
use crate::workflows::checkin::domain::{ShiftCheckIn, ShiftCheckInSubmission, SoldierId};
use crate::workflows::checkin::repository::{CheckInRepository, RepositoryError};
use crate::workflows::checkin::service::ShiftCheckInService;
use crate::workflows::eligibility::ShiftKind;

pub(super) fn instant(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid instant")
}

pub(super) fn submission(shift: ShiftKind) -> ShiftCheckInSubmission {
    ShiftCheckInSubmission {
        soldier_id: SoldierId("8412207".to_string()),
        soldier_name: " Noa Levi ".to_string(),
        shift,
        vehicle_number: " 61-223-45 ".to_string(),
        odometer_km: Some(48_210),
        notes: Some("  ".to_string()),
    }
}

#[derive(Default)]
pub(super) struct Repository {
    pub(super) records: Mutex<Vec<ShiftCheckIn>>,
}

impl CheckInRepository for Repository {
    fn insert(&self, check_in: ShiftCheckIn) -> Result<ShiftCheckIn, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.push(check_in.clone());
        Ok(check_in)
    }

    fn for_soldier(&self, soldier_id: &SoldierId) -> Result<Vec<ShiftCheckIn>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.soldier_id == soldier_id)
            .cloned()
            .collect())
    }

    fn for_shift_day(&self, day: NaiveDate) -> Result<Vec<ShiftCheckIn>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.shift_day == day)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl CheckInRepository for UnavailableRepository {
    fn insert(&self, _check_in: ShiftCheckIn) -> Result<ShiftCheckIn, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn for_soldier(&self, _soldier_id: &SoldierId) -> Result<Vec<ShiftCheckIn>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn for_shift_day(&self, _day: NaiveDate) -> Result<Vec<ShiftCheckIn>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn service_at(
    now: NaiveDateTime,
) -> (
    ShiftCheckInService<Repository, FixedClock>,
    Arc<Repository>,
) {
    let repository = Arc::new(Repository::default());
    let service = ShiftCheckInService::new(repository.clone(), Arc::new(FixedClock(now)));
    (service, repository)
}
