//! Common types and constants used throughout the bridge.
//!
//! It includes:
//! 1. **Constants:** Boot address, flag count, and snapshot layout values.
//! 2. **Error Handling:** Configuration and snapshot decoding errors.

/// Common constants used throughout the bridge.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{BOOT_ADDRESS, FLAG_COUNT};
pub use error::{ConfigError, SnapshotError};
