//! Unit-wide fitness and licensing roster.

mod parser;
pub mod report;

use std::io::Read;
use std::path::Path;

use tracing::debug;

pub use parser::RosterEntry;
pub use report::{FitnessRosterReport, LicenseKind, RosterSummary};

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    MissingSoldierId {
        line: usize,
    },
    DuplicateSoldierId {
        line: usize,
        first_line: usize,
        soldier_id: String,
    },
    InvalidDate {
        line: usize,
        column: &'static str,
        value: String,
    },
    InvalidFlag {
        line: usize,
        value: String,
    },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::MissingColumn(column) => {
                write!(f, "roster export has no '{}' column", column)
            }
            RosterImportError::MissingSoldierId { line } => {
                write!(f, "line {}: row has data but no soldier id", line)
            }
            RosterImportError::DuplicateSoldierId {
                line,
                first_line,
                soldier_id,
            } => write!(
                f,
                "line {}: soldier '{}' already listed on line {}",
                line, soldier_id, first_line
            ),
            RosterImportError::InvalidDate {
                line,
                column,
                value,
            } => write!(
                f,
                "line {}: '{}' in column '{}' is not a recognised date",
                line, value, column
            ),
            RosterImportError::InvalidFlag { line, value } => write!(
                f,
                "line {}: '{}' is not a yes/no value for 'Defensive Driving'",
                line, value
            ),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::MissingColumn(_)
            | RosterImportError::MissingSoldierId { .. }
            | RosterImportError::DuplicateSoldierId { .. }
            | RosterImportError::InvalidDate { .. }
            | RosterImportError::InvalidFlag { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
        let entries = parser::parse_entries(reader)?;
        debug!(count = entries.len(), "roster imported");
        Ok(entries)
    }
}
