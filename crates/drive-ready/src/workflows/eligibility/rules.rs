use super::dates::{add_one_year, days_until};
use super::domain::{
    CorrectDrivingAssessment, FitnessAssessment, FitnessStatus, SoldierFitnessRecord,
};
use chrono::NaiveDate;

/// Warning window ahead of a license expiry.
pub const LICENSE_WARNING_DAYS: i64 = 30;

/// Warning window ahead of the annual correct-driving deadline. Deliberately
/// separate from [`LICENSE_WARNING_DAYS`].
pub const CORRECT_DRIVING_WARNING_DAYS: i64 = 60;

/// Status of an expiry date using the standard 30-day warning window.
pub fn date_status(expiry: Option<NaiveDate>, today: NaiveDate) -> FitnessStatus {
    date_status_within(expiry, LICENSE_WARNING_DAYS, today)
}

/// Status of an expiry date against an explicit warning window.
///
/// A missing expiry is treated as already expired.
pub fn date_status_within(
    expiry: Option<NaiveDate>,
    warning_days: i64,
    today: NaiveDate,
) -> FitnessStatus {
    match expiry {
        None => FitnessStatus::Unfit,
        Some(expiry) => status_for_days(days_until(expiry, today), warning_days),
    }
}

fn status_for_days(remaining: i64, warning_days: i64) -> FitnessStatus {
    if remaining < 0 {
        FitnessStatus::Unfit
    } else if remaining <= warning_days {
        FitnessStatus::Warning
    } else {
        FitnessStatus::Fit
    }
}

/// Evaluates the annual correct-driving requirement.
///
/// The deadline runs one year from the latest in-service session, falling back
/// to the qualification date when no session is on file.
pub fn correct_driving_status(
    record: &SoldierFitnessRecord,
    today: NaiveDate,
) -> CorrectDrivingAssessment {
    let reference = record
        .correct_driving_in_service_date
        .or(record.qualified_date);

    let Some(reference) = reference else {
        return CorrectDrivingAssessment {
            status: FitnessStatus::Unfit,
            needs_driving: true,
            deadline: None,
        };
    };

    let deadline = add_one_year(reference);
    let status = status_for_days(days_until(deadline, today), CORRECT_DRIVING_WARNING_DAYS);

    CorrectDrivingAssessment {
        status,
        needs_driving: status != FitnessStatus::Fit,
        deadline: Some(deadline),
    }
}

/// Combines license and correct-driving checks into one assessment.
///
/// `defensive_driving_passed` is reported elsewhere and has no effect here.
pub fn overall_fitness(record: &SoldierFitnessRecord, today: NaiveDate) -> FitnessAssessment {
    let military_license_status = date_status(record.military_license_expiry, today);
    let civilian_license_status = date_status(record.civilian_license_expiry, today);
    let correct_driving = correct_driving_status(record, today);

    let overall_status = military_license_status
        .worst(civilian_license_status)
        .worst(correct_driving.status);

    FitnessAssessment {
        military_license_status,
        civilian_license_status,
        correct_driving_status: correct_driving.status,
        overall_status,
        needs_correct_driving: correct_driving.needs_driving,
        correct_driving_deadline: correct_driving.deadline,
    }
}
