//! Errors raised while loading the scoring resources.
//!
//! Scoring itself has no failure path: an empty sentence is a zero score and
//! malformed resource lines are skipped where they are read.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which on-disk table a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Lexicon,
    Idioms,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Lexicon => write!(f, "lexicon"),
            ResourceKind::Idioms => write!(f, "idioms"),
        }
    }
}

#[derive(Debug, Error)]
pub enum VaderError {
    /// A required table could not be located. Scoring cannot start without it.
    #[error("{kind} resource not found: {}", path.display())]
    ResourceMissing { kind: ResourceKind, path: PathBuf },

    #[error("failed to read {kind} resource {}: {source}", path.display())]
    Io {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, VaderError>;
