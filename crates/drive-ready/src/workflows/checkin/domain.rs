use crate::workflows::eligibility::ShiftKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identity key for a soldier as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoldierId(pub String);

impl SoldierId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoldierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check-in form as filled in by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCheckInSubmission {
    pub soldier_id: SoldierId,
    pub soldier_name: String,
    pub shift: ShiftKind,
    pub vehicle_number: String,
    #[serde(default)]
    pub odometer_km: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Accepted check-in, stamped with the instant and shift day it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCheckIn {
    pub soldier_id: SoldierId,
    pub soldier_name: String,
    pub shift: ShiftKind,
    pub shift_day: NaiveDate,
    pub submitted_at: NaiveDateTime,
    pub vehicle_number: String,
    pub odometer_km: Option<u32>,
    pub notes: Option<String>,
}

impl ShiftCheckIn {
    pub fn slot(&self) -> (NaiveDate, ShiftKind) {
        (self.shift_day, self.shift)
    }

    pub fn to_view(&self) -> ShiftCheckInView {
        ShiftCheckInView {
            soldier_id: self.soldier_id.clone(),
            soldier_name: self.soldier_name.clone(),
            shift: self.shift,
            shift_label: self.shift.label(),
            shift_day: self.shift_day,
            submitted_at: self.submitted_at,
            vehicle_number: self.vehicle_number.clone(),
            odometer_km: self.odometer_km,
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftCheckInView {
    pub soldier_id: SoldierId,
    pub soldier_name: String,
    pub shift: ShiftKind,
    pub shift_label: &'static str,
    pub shift_day: NaiveDate,
    pub submitted_at: NaiveDateTime,
    pub vehicle_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odometer_km: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The shift window currently open for check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftWindowView {
    pub shift: ShiftKind,
    pub shift_label: &'static str,
    pub shift_day: NaiveDate,
    pub evaluated_at: NaiveDateTime,
}
