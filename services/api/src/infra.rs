use chrono::{NaiveDate, NaiveDateTime};
use drive_ready::clock::SystemClock;
use drive_ready::workflows::checkin::{
    CheckInRepository, RepositoryError, ShiftCheckIn, SoldierId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) clock: Arc<SystemClock>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCheckInRepository {
    records: Arc<Mutex<HashMap<SoldierId, Vec<ShiftCheckIn>>>>,
}

impl InMemoryCheckInRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SoldierId, Vec<ShiftCheckIn>>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("check-in store poisoned".to_string()))
    }
}

impl CheckInRepository for InMemoryCheckInRepository {
    fn insert(&self, check_in: ShiftCheckIn) -> Result<ShiftCheckIn, RepositoryError> {
        let mut guard = self.lock()?;
        let history = guard.entry(check_in.soldier_id.clone()).or_default();
        if history
            .iter()
            .any(|existing| existing.slot() == check_in.slot())
        {
            return Err(RepositoryError::Conflict);
        }
        history.push(check_in.clone());
        Ok(check_in)
    }

    fn for_soldier(&self, soldier_id: &SoldierId) -> Result<Vec<ShiftCheckIn>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(soldier_id).cloned().unwrap_or_default())
    }

    fn for_shift_day(&self, day: NaiveDate) -> Result<Vec<ShiftCheckIn>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .values()
            .flatten()
            .filter(|record| record.shift_day == day)
            .cloned()
            .collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DDTHH:MM ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
