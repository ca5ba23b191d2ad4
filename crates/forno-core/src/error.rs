//! # Error Types — Snapshot Failures
//!
//! The order model itself never rejects input: labels and toppings are
//! stored verbatim, and a missing size is an ordinary state. The only
//! fallible operation is producing a canonical snapshot, so this module
//! defines a single error enum for that path. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Error while producing a canonical order snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// JSON serialization failed.
    #[error("snapshot serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
