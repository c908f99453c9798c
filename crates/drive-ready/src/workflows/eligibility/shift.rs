use super::domain::ShiftKind;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub const MORNING_START_HOUR: u32 = 5;
pub const AFTERNOON_START_HOUR: u32 = 13;
pub const EVENING_START_HOUR: u32 = 21;

impl ShiftKind {
    /// Maps an hour of day onto its shift band. Any value outside
    /// `[5, 21)` is the evening band, so the mapping is total.
    pub const fn for_hour(hour: u32) -> Self {
        if hour >= MORNING_START_HOUR && hour < AFTERNOON_START_HOUR {
            Self::Morning
        } else if hour >= AFTERNOON_START_HOUR && hour < EVENING_START_HOUR {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    /// `[start, end)` hours of the band. The evening band wraps past midnight.
    pub const fn hours(self) -> (u32, u32) {
        match self {
            Self::Morning => (MORNING_START_HOUR, AFTERNOON_START_HOUR),
            Self::Afternoon => (AFTERNOON_START_HOUR, EVENING_START_HOUR),
            Self::Evening => (EVENING_START_HOUR, MORNING_START_HOUR),
        }
    }
}

/// The only shift a check-in form may be submitted for at `now`.
pub fn allowed_shift<T: Timelike>(now: &T) -> ShiftKind {
    ShiftKind::for_hour(now.hour())
}

/// Calendar day the shift window containing `now` started on.
///
/// The evening band wraps midnight: 00:00–04:59 belongs to the evening that
/// began the day before.
pub fn shift_day(now: NaiveDateTime) -> NaiveDate {
    let date = now.date();
    if now.hour() < MORNING_START_HOUR {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}
