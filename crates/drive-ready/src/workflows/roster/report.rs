use super::parser::RosterEntry;
use crate::workflows::checkin::SoldierId;
use crate::workflows::eligibility::{
    days_until, overall_fitness, FitnessAssessment, FitnessAssessmentView, FitnessStatus,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseKind {
    Military,
    Civilian,
}

impl LicenseKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Military => "Military license",
            Self::Civilian => "Civilian license",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssessedSoldier {
    pub soldier_id: SoldierId,
    pub name: String,
    pub assessment: FitnessAssessment,
    pub defensive_driving_passed: bool,
}

#[derive(Debug, Clone)]
pub struct CorrectDrivingDue {
    pub soldier_id: SoldierId,
    pub name: String,
    pub status: FitnessStatus,
    pub deadline: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct LicenseAlert {
    pub soldier_id: SoldierId,
    pub name: String,
    pub license: LicenseKind,
    pub status: FitnessStatus,
    pub expiry: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

/// Fitness picture of the whole unit for one day.
#[derive(Debug, Default)]
pub struct FitnessRosterReport {
    pub today: NaiveDate,
    pub soldiers: Vec<AssessedSoldier>,
    pub status_counts: HashMap<FitnessStatus, usize>,
    pub correct_driving_due: Vec<CorrectDrivingDue>,
    pub license_alerts: Vec<LicenseAlert>,
    pub defensive_driving_pending: Vec<SoldierId>,
}

impl FitnessRosterReport {
    pub fn build(entries: &[RosterEntry], today: NaiveDate) -> Self {
        let mut report = Self {
            today,
            ..Self::default()
        };

        for entry in entries {
            let assessment = overall_fitness(&entry.record, today);
            *report
                .status_counts
                .entry(assessment.overall_status)
                .or_default() += 1;

            if assessment.needs_correct_driving {
                report.correct_driving_due.push(CorrectDrivingDue {
                    soldier_id: entry.soldier_id.clone(),
                    name: entry.name.clone(),
                    status: assessment.correct_driving_status,
                    deadline: assessment.correct_driving_deadline,
                    days_remaining: assessment
                        .correct_driving_deadline
                        .map(|deadline| days_until(deadline, today)),
                });
            }

            let licenses = [
                (
                    LicenseKind::Military,
                    assessment.military_license_status,
                    entry.record.military_license_expiry,
                ),
                (
                    LicenseKind::Civilian,
                    assessment.civilian_license_status,
                    entry.record.civilian_license_expiry,
                ),
            ];
            for (license, status, expiry) in licenses {
                if status == FitnessStatus::Fit {
                    continue;
                }
                report.license_alerts.push(LicenseAlert {
                    soldier_id: entry.soldier_id.clone(),
                    name: entry.name.clone(),
                    license,
                    status,
                    expiry,
                    days_remaining: expiry.map(|expiry| days_until(expiry, today)),
                });
            }

            if !entry.record.defensive_driving_passed {
                report
                    .defensive_driving_pending
                    .push(entry.soldier_id.clone());
            }

            report.soldiers.push(AssessedSoldier {
                soldier_id: entry.soldier_id.clone(),
                name: entry.name.clone(),
                assessment,
                defensive_driving_passed: entry.record.defensive_driving_passed,
            });
        }

        // `None < Some(_)`: soldiers with no baseline at all lead the list.
        report.correct_driving_due.sort_by(|a, b| {
            a.deadline
                .cmp(&b.deadline)
                .then_with(|| a.soldier_id.cmp(&b.soldier_id))
        });
        report.license_alerts.sort_by(|a, b| {
            b.status
                .cmp(&a.status)
                .then_with(|| a.expiry.cmp(&b.expiry))
                .then_with(|| a.soldier_id.cmp(&b.soldier_id))
        });
        report.defensive_driving_pending.sort();

        report
    }

    pub fn count(&self, status: FitnessStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> RosterSummary {
        let status_counts = FitnessStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                soldiers: self.count(status),
            })
            .collect();

        let soldiers = self
            .soldiers
            .iter()
            .map(|soldier| SoldierFitnessView {
                soldier_id: soldier.soldier_id.clone(),
                name: soldier.name.clone(),
                defensive_driving_passed: soldier.defensive_driving_passed,
                assessment: soldier.assessment.to_view(),
            })
            .collect();

        let correct_driving_due = self
            .correct_driving_due
            .iter()
            .map(|due| CorrectDrivingDueView {
                soldier_id: due.soldier_id.clone(),
                name: due.name.clone(),
                status: due.status,
                status_label: due.status.label(),
                deadline: due.deadline,
                days_remaining: due.days_remaining,
            })
            .collect();

        let license_alerts = self
            .license_alerts
            .iter()
            .map(|alert| LicenseAlertView {
                soldier_id: alert.soldier_id.clone(),
                name: alert.name.clone(),
                license: alert.license,
                license_label: alert.license.label(),
                status: alert.status,
                status_label: alert.status.label(),
                expiry: alert.expiry,
                days_remaining: alert.days_remaining,
            })
            .collect();

        RosterSummary {
            today: self.today,
            total: self.soldiers.len(),
            status_counts,
            soldiers,
            correct_driving_due,
            license_alerts,
            defensive_driving_pending: self.defensive_driving_pending.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: FitnessStatus,
    pub status_label: &'static str,
    pub soldiers: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SoldierFitnessView {
    pub soldier_id: SoldierId,
    pub name: String,
    pub defensive_driving_passed: bool,
    pub assessment: FitnessAssessmentView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrectDrivingDueView {
    pub soldier_id: SoldierId,
    pub name: String,
    pub status: FitnessStatus,
    pub status_label: &'static str,
    pub deadline: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LicenseAlertView {
    pub soldier_id: SoldierId,
    pub name: String,
    pub license: LicenseKind,
    pub license_label: &'static str,
    pub status: FitnessStatus,
    pub status_label: &'static str,
    pub expiry: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterSummary {
    pub today: NaiveDate,
    pub total: usize,
    pub status_counts: Vec<StatusCountEntry>,
    pub soldiers: Vec<SoldierFitnessView>,
    pub correct_driving_due: Vec<CorrectDrivingDueView>,
    pub license_alerts: Vec<LicenseAlertView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defensive_driving_pending: Vec<SoldierId>,
}
