// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure of the flattening pipeline falls into one of
// three kinds:
//
//   Parse      — the catalog could not be read or parsed
//   KeyMissing — a required key is absent from a record/section
//   Write      — the question list could not be written
//
// No layer recovers from any of them; they travel up to main.

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Coarse classification of a [`FlattenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    KeyMissing,
    Write,
}

/// Identifies a question record in error messages:
/// its position in extraction order and, when known, its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub position:   usize,
    pub identifier: Option<String>,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Some(id) => write!(f, "question #{} ({})", self.position + 1, id),
            None => write!(f, "question #{}", self.position + 1),
        }
    }
}

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("cannot read catalog '{}'", .path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog '{}' is not a valid question catalog", .path.display())]
    Parse {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{record}: missing key '{key}'")]
    KeyMissing { record: RecordRef, key: &'static str },

    #[error("{record}: key '{key}' {reason}")]
    InvalidField {
        record: RecordRef,
        key:    &'static str,
        reason: &'static str,
    },

    #[error("section {path} has neither 'questions' nor 'sections'")]
    SectionKeyMissing { path: String },

    #[error("cannot serialise question list")]
    Serialize(#[source] serde_json::Error),

    #[error("cannot write question list to '{}'", .path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FlattenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlattenError::Read { .. } | FlattenError::Parse { .. } => ErrorKind::Parse,
            FlattenError::KeyMissing { .. }
            | FlattenError::InvalidField { .. }
            | FlattenError::SectionKeyMissing { .. } => ErrorKind::KeyMissing,
            FlattenError::Serialize(_) | FlattenError::Write { .. } => ErrorKind::Write,
        }
    }
}

pub type FlattenResult<T> = Result<T, FlattenError>;
