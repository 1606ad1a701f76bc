//! Core error types for eusunt-core.
//!
//! This module defines the error hierarchy using thiserror. Every
//! recoverable failure in the library maps to one of these types; the
//! composer in particular defines no fatal errors -- each variant leaves
//! the session in an editable state.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::journal::StageKind;

/// Core error type for eusunt-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Entry composer errors
    #[error("{0}")]
    Composer(#[from] ComposerError),

    /// Daily check-in errors
    #[error("{0}")]
    Checkin(#[from] CheckinError),

    /// Profile (avatar/theme) errors
    #[error("{0}")]
    Profile(#[from] ProfileError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// Data directory could not be created or resolved
    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),

    /// A record could not be serialized for storage
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation and transition errors raised by the entry composer.
///
/// Every variant is recoverable: the session state is untouched and the
/// same transition can be retried after the input is corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// The submitted input was empty or whitespace-only
    #[error("Te rog completează ideea pentru a continua.")]
    EmptyInput,

    /// Advancing out of the collecting stage below the minimum
    #[error("Te rog adaugă cel puțin {min} gânduri pentru a continua (mai lipsesc {}).", .min - .have)]
    TooFewAffirmations { have: usize, min: usize },

    /// Adding an affirmation past the maximum
    #[error("Ai atins numărul maxim de {max} gânduri.")]
    AffirmationLimit { max: usize },

    /// The plan defines no connector words
    #[error("Planul curent nu folosește cuvinte de legătură.")]
    NoConnectors,

    /// A connector outside the plan's list was selected
    #[error("Cuvânt de legătură necunoscut: '{value}'")]
    UnknownConnector { value: String },

    /// The requested operation is not valid in the current stage
    #[error("Operation not valid in the {actual:?} stage (expected {expected:?})")]
    WrongStage {
        expected: StageKind,
        actual: StageKind,
    },

    /// A finalized thought was missing a stage answer
    #[error("Thought {index} is incomplete")]
    IncompleteThought { index: usize },

    /// The badge resolver failed; the session is kept for retry
    #[error("A apărut o eroare la salvarea jurnalului. Te rog încearcă din nou. ({0})")]
    BadgeResolution(String),
}

/// Daily check-in errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckinError {
    /// Check-in is allowed at most once per calendar date
    #[error("Already checked in on {date}")]
    AlreadyCheckedIn { date: NaiveDate },

    /// The daily-thought answer was empty or whitespace-only
    #[error("Te rog scrie gândul tău pentru a continua.")]
    EmptyAnswer,

    /// Mood value outside the known set
    #[error("Unknown mood: '{0}'")]
    UnknownMood(String),
}

/// Avatar and theme selection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No avatar item with this id exists in the catalog
    #[error("Unknown avatar item: '{0}'")]
    UnknownItem(String),

    /// No journal theme with this id exists in the catalog
    #[error("Unknown journal theme: '{0}'")]
    UnknownTheme(String),

    /// The item or theme is still locked behind a badge
    #[error("'{name}' se deblochează cu insigna: {badge}")]
    Locked { name: String, badge: crate::badge::Badge },

    /// Color outside the palette for this slot
    #[error("Unknown color '{color}' for {slot}")]
    UnknownColor { slot: String, color: String },
}

/// Export errors. Export is read-only over saved entries, so these never
/// affect persisted journal data.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export
    #[error("Jurnalul tău este gol")]
    NoEntries,

    /// No entry with the requested id
    #[error("No journal entry with id '{0}'")]
    UnknownEntry(String),

    /// PDF generation failed
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// IO errors while writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
