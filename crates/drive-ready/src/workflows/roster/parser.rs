use super::RosterImportError;
use crate::workflows::checkin::SoldierId;
use crate::workflows::eligibility::SoldierFitnessRecord;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::io::Read;

const SOLDIER_ID_COLUMN: &str = "Soldier ID";

/// One soldier as read from a roster export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub soldier_id: SoldierId,
    pub name: String,
    pub record: SoldierFitnessRecord,
}

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    if !csv_reader
        .headers()?
        .iter()
        .any(|header| header == SOLDIER_ID_COLUMN)
    {
        return Err(RosterImportError::MissingColumn(SOLDIER_ID_COLUMN));
    }

    let mut entries = Vec::new();
    let mut seen: HashMap<SoldierId, usize> = HashMap::new();

    for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        // Header occupies line 1.
        let line = index + 2;
        let Some(entry) = row.into_entry(line)? else {
            continue;
        };

        if let Some(&first_line) = seen.get(&entry.soldier_id) {
            return Err(RosterImportError::DuplicateSoldierId {
                line,
                first_line,
                soldier_id: entry.soldier_id.0,
            });
        }
        seen.insert(entry.soldier_id.clone(), line);
        entries.push(entry);
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Soldier ID", default, deserialize_with = "empty_string_as_none")]
    soldier_id: Option<String>,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(
        rename = "Military License Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    military_license_expiry: Option<String>,
    #[serde(
        rename = "Civilian License Expiry",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    civilian_license_expiry: Option<String>,
    #[serde(
        rename = "Defensive Driving",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    defensive_driving: Option<String>,
    #[serde(
        rename = "Qualified Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    qualified_date: Option<String>,
    #[serde(
        rename = "Correct Driving Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    correct_driving_date: Option<String>,
}

impl RosterRow {
    fn is_blank(&self) -> bool {
        self.soldier_id.is_none()
            && self.name.trim().is_empty()
            && self.military_license_expiry.is_none()
            && self.civilian_license_expiry.is_none()
            && self.defensive_driving.is_none()
            && self.qualified_date.is_none()
            && self.correct_driving_date.is_none()
    }

    /// Fully blank rows are spacer lines and are skipped. Any other row must
    /// name its soldier.
    fn into_entry(self, line: usize) -> Result<Option<RosterEntry>, RosterImportError> {
        if self.is_blank() {
            return Ok(None);
        }
        let Some(soldier_id) = self.soldier_id else {
            return Err(RosterImportError::MissingSoldierId { line });
        };

        let date = |column: &'static str, value: Option<String>| {
            value
                .map(|raw| {
                    parse_date(&raw).ok_or(RosterImportError::InvalidDate {
                        line,
                        column,
                        value: raw,
                    })
                })
                .transpose()
        };

        let record = SoldierFitnessRecord {
            military_license_expiry: date("Military License Expiry", self.military_license_expiry)?,
            civilian_license_expiry: date("Civilian License Expiry", self.civilian_license_expiry)?,
            defensive_driving_passed: parse_flag(self.defensive_driving, line)?,
            qualified_date: date("Qualified Date", self.qualified_date)?,
            correct_driving_in_service_date: date(
                "Correct Driving Date",
                self.correct_driving_date,
            )?,
        };

        Ok(Some(RosterEntry {
            soldier_id: SoldierId(soldier_id),
            name: self.name,
            record,
        }))
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

fn parse_flag(value: Option<String>, line: usize) -> Result<bool, RosterImportError> {
    let Some(raw) = value else {
        return Ok(false);
    };

    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "passed" | "✓" => Ok(true),
        "no" | "n" | "false" | "0" | "pending" => Ok(false),
        _ => Err(RosterImportError::InvalidFlag { line, value: raw }),
    }
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
