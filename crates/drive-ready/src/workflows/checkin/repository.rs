use super::domain::{ShiftCheckIn, SoldierId};
use chrono::NaiveDate;

/// Storage abstraction for accepted check-ins.
pub trait CheckInRepository: Send + Sync {
    fn insert(&self, check_in: ShiftCheckIn) -> Result<ShiftCheckIn, RepositoryError>;
    fn for_soldier(&self, soldier_id: &SoldierId) -> Result<Vec<ShiftCheckIn>, RepositoryError>;
    fn for_shift_day(&self, day: NaiveDate) -> Result<Vec<ShiftCheckIn>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
