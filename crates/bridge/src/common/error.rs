//! Error definitions.
//!
//! Nothing here crosses the DPI boundary: the entry points return no status.
//! These errors cover the Rust-side operations that can fail:
//! 1. **Configuration:** Reading and parsing the JSON config file.
//! 2. **Snapshot decoding:** Rebuilding a `CpuState` from its byte image.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a bridge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for `Config`.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to decode a snapshot byte image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The byte slice does not have the exact snapshot size.
    #[error("snapshot image must be {expected} bytes, got {actual}")]
    Length {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}
