//! Batch import of profile drafts from CSV exports.
//!
//! Headers use the persisted snake_case field names. Columns may be omitted and cells may be
//! empty; both leave the field absent so [`ProfileDraft::into_profile`] applies defaults.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::scoring::ProfileDraft;

#[derive(Debug)]
pub enum ProfileImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidBoolean {
        line: usize,
        column: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ProfileImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImportError::Io(err) => write!(f, "failed to read profile export: {}", err),
            ProfileImportError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
            ProfileImportError::InvalidBoolean {
                line,
                column,
                value,
            } => write!(
                f,
                "line {line}: column '{column}' expects true/false, found '{value}'"
            ),
        }
    }
}

impl std::error::Error for ProfileImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileImportError::Io(err) => Some(err),
            ProfileImportError::Csv(err) => Some(err),
            ProfileImportError::InvalidBoolean { .. } => None,
        }
    }
}

impl From<std::io::Error> for ProfileImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProfileImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileDraft>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ProfileDraft>, ProfileImportError> {
        parser::parse_drafts(reader)
    }
}
