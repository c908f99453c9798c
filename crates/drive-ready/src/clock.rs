use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for anything that needs the wall clock.
///
/// The eligibility rules never call this themselves; services read the clock
/// once and pass the value down.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in either host local time or a configured fixed offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { offset: None }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
