use crate::infra::{parse_date, parse_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use drive_ready::clock::Clock;
use drive_ready::config::AppConfig;
use drive_ready::error::AppError;
use drive_ready::workflows::eligibility::{
    allowed_shift, overall_fitness, shift_day, FitnessAssessment, ShiftKind, SoldierFitnessRecord,
};
use drive_ready::workflows::roster::{FitnessRosterReport, RosterImporter, RosterSummary};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ShiftArgs {
    /// Evaluate at this local time instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long, value_parser = parse_datetime)]
    pub(crate) at: Option<NaiveDateTime>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FitnessAssessArgs {
    /// Military license expiry (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) military_license_expiry: Option<NaiveDate>,
    /// Civilian license expiry (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) civilian_license_expiry: Option<NaiveDate>,
    /// Defensive driving course completed
    #[arg(long)]
    pub(crate) defensive_driving_passed: bool,
    /// Date certified as a qualified driver (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) qualified_date: Option<NaiveDate>,
    /// Most recent in-service correct driving session (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) correct_driving_date: Option<NaiveDate>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct RosterReportArgs {
    /// Roster CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn configured_now() -> Result<NaiveDateTime, AppError> {
    let config = AppConfig::load()?;
    Ok(config.clock.system_clock().now())
}

pub(crate) fn run_shift_window(args: ShiftArgs) -> Result<(), AppError> {
    let now = match args.at {
        Some(at) => at,
        None => configured_now()?,
    };

    let shift = allowed_shift(&now);
    println!("Evaluated at {}", now.format("%Y-%m-%d %H:%M"));
    println!(
        "Open shift: {} (shift day {})",
        shift.label(),
        shift_day(now)
    );
    println!();
    for kind in ShiftKind::ordered() {
        println!("{}", shift_band_line(kind, kind == shift));
    }
    Ok(())
}

fn shift_band_line(kind: ShiftKind, open: bool) -> String {
    let (start, end) = kind.hours();
    format!(
        "{} {:<9} {:02}:00-{:02}:00",
        if open { "*" } else { "-" },
        kind.label(),
        start,
        end
    )
}

pub(crate) fn run_fitness_assess(args: FitnessAssessArgs) -> Result<(), AppError> {
    let today = match args.today {
        Some(today) => today,
        None => configured_now()?.date(),
    };

    let record = SoldierFitnessRecord {
        military_license_expiry: args.military_license_expiry,
        civilian_license_expiry: args.civilian_license_expiry,
        defensive_driving_passed: args.defensive_driving_passed,
        qualified_date: args.qualified_date,
        correct_driving_in_service_date: args.correct_driving_date,
    };

    let assessment = overall_fitness(&record, today);
    render_assessment(&record, &assessment, today);
    Ok(())
}

pub(crate) fn run_roster_report(args: RosterReportArgs) -> Result<(), AppError> {
    let RosterReportArgs { csv, today, json } = args;

    let today = match today {
        Some(today) => today,
        None => configured_now()?.date(),
    };

    let entries = RosterImporter::from_path(csv)?;
    let summary = FitnessRosterReport::build(&entries, today).summary();

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Roster summary unavailable: {err}"),
        }
    } else {
        render_roster_summary(&summary);
    }

    Ok(())
}

fn describe_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.to_string())
        .unwrap_or_else(|| "not on file".to_string())
}

pub(crate) fn render_assessment(
    record: &SoldierFitnessRecord,
    assessment: &FitnessAssessment,
    today: NaiveDate,
) {
    println!("Driver fitness (evaluated {})", today);
    println!(
        "- Military license: {} (expires {})",
        assessment.military_license_status.label(),
        describe_date(record.military_license_expiry)
    );
    println!(
        "- Civilian license: {} (expires {})",
        assessment.civilian_license_status.label(),
        describe_date(record.civilian_license_expiry)
    );
    println!(
        "- Correct driving: {} (deadline {})",
        assessment.correct_driving_status.label(),
        describe_date(assessment.correct_driving_deadline)
    );
    println!(
        "- Defensive driving: {}",
        if record.defensive_driving_passed {
            "passed"
        } else {
            "not passed"
        }
    );
    println!("\nOverall: {}", assessment.overall_status.label());
    if assessment.needs_correct_driving {
        println!("Action: schedule a correct driving session");
    }
}

pub(crate) fn render_roster_summary(summary: &RosterSummary) {
    println!("Fitness roster (evaluated {})", summary.today);
    println!("{} soldiers on file", summary.total);

    println!("\nOverall status");
    for entry in &summary.status_counts {
        println!("- {}: {}", entry.status_label, entry.soldiers);
    }

    if summary.correct_driving_due.is_empty() {
        println!("\nCorrect driving due: none");
    } else {
        println!("\nCorrect driving due");
        for due in &summary.correct_driving_due {
            let when = match (due.deadline, due.days_remaining) {
                (Some(deadline), Some(days)) if days < 0 => {
                    format!("overdue since {deadline} ({} days)", -days)
                }
                (Some(deadline), Some(days)) => format!("due {deadline} ({days} days left)"),
                _ => "no qualification on file".to_string(),
            };
            println!(
                "- [{}] {} ({}): {}",
                due.status_label, due.name, due.soldier_id, when
            );
        }
    }

    if summary.license_alerts.is_empty() {
        println!("\nLicense alerts: none");
    } else {
        println!("\nLicense alerts");
        for alert in &summary.license_alerts {
            let when = match (alert.expiry, alert.days_remaining) {
                (Some(expiry), Some(days)) if days < 0 => format!("expired {expiry}"),
                (Some(expiry), Some(days)) => format!("expires {expiry} ({days} days left)"),
                _ => "no expiry on file".to_string(),
            };
            println!(
                "- [{}] {} ({}): {} {}",
                alert.status_label, alert.name, alert.soldier_id, alert.license_label, when
            );
        }
    }

    if !summary.defensive_driving_pending.is_empty() {
        println!("\nDefensive driving not yet passed (informational)");
        for soldier_id in &summary.defensive_driving_pending {
            println!("- {}", soldier_id);
        }
    }
}
