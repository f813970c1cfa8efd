use std::path::PathBuf;

use allium_core::BuildError;
use thiserror::Error;

/// Failure to read a definition table or to build one of its sets.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read definition table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed definition table")]
    Parse(#[from] serde_json::Error),

    #[error("cannot build set `{set}`")]
    Build {
        set: String,
        #[source]
        source: BuildError,
    },

    #[error("set `{set}`: flag member `{member}` needs a non-negative integer value, found {value}")]
    InvalidFlagValue {
        set: String,
        member: String,
        value: String,
    },

    #[error("no set named `{name}` in the definition table")]
    UnknownSet { name: String },

    #[error("the definition table holds {count} sets; choose one by name")]
    AmbiguousSet { count: usize },

    #[error("the definition table declares no sets")]
    Empty,
}
