//! Data loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Why a data file could not be turned into a [`Dataset`](super::Dataset)
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file could not be read (usually a packaging or path mistake)
    #[error("data file not found: {}: {source}", .path.display())]
    DataFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but its contents are unusable
    #[error("invalid data file {}: {issue}", .path.display())]
    DataFormatError {
        path: PathBuf,
        #[source]
        issue: FormatIssue,
    },
}

impl DataLoadError {
    /// The format problem, if this is a format error
    pub fn format_issue(&self) -> Option<&FormatIssue> {
        match self {
            DataLoadError::DataFormatError { issue, .. } => Some(issue),
            DataLoadError::DataFileNotFound { .. } => None,
        }
    }

    /// Check if this error means the file was missing or unreadable
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataLoadError::DataFileNotFound { .. })
    }
}

/// Structural or referential problem in a data file
#[derive(Debug, Error)]
pub enum FormatIssue {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate region id '{0}'")]
    DuplicateRegion(String),
    #[error("duplicate location id '{0}'")]
    DuplicateLocation(String),
    #[error("duplicate location name '{0}'")]
    DuplicateLocationName(String),
    #[error("location '{location}' reuses code {code}")]
    DuplicateCode { location: String, code: u64 },
    #[error("duplicate boss id '{0}'")]
    DuplicateBoss(String),
    #[error("location '{location}' references unknown region '{region}'")]
    UnknownRegion { location: String, region: String },
    #[error("region '{region}' does not list its location '{location}'")]
    RegionMissingLocation { region: String, location: String },
    #[error("region '{region}' lists unknown location '{location}'")]
    UnknownLocation { region: String, location: String },
    #[error("region '{region}' lists location '{location}' which belongs to '{owner}'")]
    RegionMismatch { region: String, location: String, owner: String },
    #[error("region '{region}' lists location '{location}' more than once")]
    DuplicateRegionLocation { region: String, location: String },
    #[error("region '{region}' connects to non-existent region '{target}'")]
    DanglingConnection { region: String, target: String },
    #[error("region '{region}' lists connection '{target}' more than once")]
    DuplicateConnection { region: String, target: String },
    #[error("location '{location}' references unknown boss '{boss}'")]
    UnknownBoss { location: String, boss: String },
    #[error("boss '{boss}' references unknown region '{region}'")]
    BossUnknownRegion { boss: String, region: String },
    #[error("location '{location}' code {code} overflows base id {base_id}")]
    IdOverflow { location: String, code: u64, base_id: u64 },
}
