use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Three-level readiness of a time-bounded credential.
///
/// Variants are declared best-to-worst so `Ord` ranks a worse status higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessStatus {
    Fit,
    Warning,
    Unfit,
}

impl FitnessStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Fit, Self::Warning, Self::Unfit]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fit => "Fit",
            Self::Warning => "Warning",
            Self::Unfit => "Unfit",
        }
    }

    /// Returns whichever of the two statuses is worse.
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Daily time band a shift check-in may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Morning, Self::Afternoon, Self::Evening]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

/// Licensing and training dates on file for one soldier.
///
/// Every date is optional: a missing value means "not on file" and is a valid
/// input to the rules, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldierFitnessRecord {
    #[serde(default)]
    pub military_license_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub civilian_license_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub defensive_driving_passed: bool,
    /// Date the soldier was certified as a qualified driver.
    #[serde(default)]
    pub qualified_date: Option<NaiveDate>,
    /// Most recent in-service "correct driving" refresher.
    #[serde(default)]
    pub correct_driving_in_service_date: Option<NaiveDate>,
}

/// Outcome of the annual correct-driving requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorrectDrivingAssessment {
    pub status: FitnessStatus,
    pub needs_driving: bool,
    pub deadline: Option<NaiveDate>,
}

/// Per-soldier fitness computed for a given day. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitnessAssessment {
    pub military_license_status: FitnessStatus,
    pub civilian_license_status: FitnessStatus,
    pub correct_driving_status: FitnessStatus,
    pub overall_status: FitnessStatus,
    pub needs_correct_driving: bool,
    pub correct_driving_deadline: Option<NaiveDate>,
}

impl FitnessAssessment {
    pub fn to_view(&self) -> FitnessAssessmentView {
        FitnessAssessmentView {
            military_license_status: self.military_license_status,
            military_license_label: self.military_license_status.label(),
            civilian_license_status: self.civilian_license_status,
            civilian_license_label: self.civilian_license_status.label(),
            correct_driving_status: self.correct_driving_status,
            correct_driving_label: self.correct_driving_status.label(),
            overall_status: self.overall_status,
            overall_label: self.overall_status.label(),
            needs_correct_driving: self.needs_correct_driving,
            correct_driving_deadline: self.correct_driving_deadline,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FitnessAssessmentView {
    pub military_license_status: FitnessStatus,
    pub military_license_label: &'static str,
    pub civilian_license_status: FitnessStatus,
    pub civilian_license_label: &'static str,
    pub correct_driving_status: FitnessStatus,
    pub correct_driving_label: &'static str,
    pub overall_status: FitnessStatus,
    pub overall_label: &'static str,
    pub needs_correct_driving: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_driving_deadline: Option<NaiveDate>,
}
