use std::io::Cursor;

use chrono::NaiveDate;
use drive_ready::workflows::eligibility::FitnessStatus;
use drive_ready::workflows::roster::{FitnessRosterReport, LicenseKind, RosterImporter};

const ROSTER: &str = "\
Soldier ID,Name,Military License Expiry,Civilian License Expiry,Defensive Driving,Qualified Date,Correct Driving Date
8412207,Noa Levi,2026-08-01,2027-01-15,yes,2021-03-01,2025-06-10
5520931,Amit Cohen,2025-10-05,2027-01-15,no,2022-11-20,
6631042,Yael Mizrahi,2026-08-01,,yes,,2024-08-01
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date")
}

#[test]
fn roster_csv_builds_unit_report() {
    let entries =
        RosterImporter::from_reader(Cursor::new(ROSTER.as_bytes())).expect("roster imports");
    assert_eq!(entries.len(), 3);

    let report = FitnessRosterReport::build(&entries, today());
    let summary = report.summary();

    assert_eq!(summary.total, 3);
    assert_eq!(report.count(FitnessStatus::Fit), 1);
    assert_eq!(report.count(FitnessStatus::Warning), 0);
    assert_eq!(report.count(FitnessStatus::Unfit), 2);

    // Amit: military license inside the 30-day window, qualification
    // anniversary long past.
    let amit = summary
        .soldiers
        .iter()
        .find(|soldier| soldier.soldier_id.as_str() == "5520931")
        .expect("Amit assessed");
    assert_eq!(amit.assessment.military_license_status, FitnessStatus::Warning);
    assert_eq!(amit.assessment.correct_driving_status, FitnessStatus::Unfit);
    assert_eq!(
        amit.assessment.correct_driving_deadline,
        NaiveDate::from_ymd_opt(2023, 11, 20)
    );

    let due: Vec<_> = summary
        .correct_driving_due
        .iter()
        .map(|due| due.soldier_id.as_str())
        .collect();
    assert_eq!(due, vec!["5520931", "6631042"]);

    let yael_civilian = summary
        .license_alerts
        .iter()
        .find(|alert| alert.soldier_id.as_str() == "6631042")
        .expect("missing civilian license flagged");
    assert_eq!(yael_civilian.license, LicenseKind::Civilian);
    assert_eq!(yael_civilian.status, FitnessStatus::Unfit);
    assert!(yael_civilian.expiry.is_none());

    assert_eq!(summary.defensive_driving_pending.len(), 1);
    assert_eq!(summary.defensive_driving_pending[0].as_str(), "5520931");
}

#[test]
fn summary_serializes_with_labels() {
    let entries =
        RosterImporter::from_reader(Cursor::new(ROSTER.as_bytes())).expect("roster imports");
    let summary = FitnessRosterReport::build(&entries, today()).summary();
    let payload = serde_json::to_value(&summary).expect("summary serializes");

    assert_eq!(payload["status_counts"][0]["status"], "fit");
    assert_eq!(payload["status_counts"][0]["status_label"], "Fit");
    assert_eq!(payload["soldiers"][0]["assessment"]["overall_label"], "Fit");
}
