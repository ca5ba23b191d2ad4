//! # Canonical Order Snapshots
//!
//! The printable form of an order instance: canonical JSON per RFC 8785
//! (JSON Canonicalization Scheme), so the same record always produces the
//! same bytes. Sorted keys, compact separators, UTF-8.
//!
//! Key presence is the contract. A sizeless stuffed-crust order
//! serializes with no `size` key at all, which keeps the dropped
//! attribute visible to introspection; consumers check the key set, not
//! the key order.
//!
//! Serialization flows through [`serde_json::Value`] first, so the
//! snapshot of a variant record is the flat object its serde
//! representation defines (the embedded base contributes its keys
//! directly to the top level).

use serde::Serialize;
use serde_json::Value;

use crate::error::SnapshotError;

/// The introspectable JSON form of an order record.
///
/// # Errors
///
/// Returns [`SnapshotError::SerializationFailed`] if the record cannot be
/// represented as JSON.
pub fn snapshot_value<T: Serialize>(record: &T) -> Result<Value, SnapshotError> {
    Ok(serde_json::to_value(record)?)
}

/// The canonical JSON text of an order record (RFC 8785).
///
/// # Errors
///
/// Returns [`SnapshotError::SerializationFailed`] if the record cannot be
/// represented as JSON.
pub fn snapshot_json<T: Serialize>(record: &T) -> Result<String, SnapshotError> {
    let value = snapshot_value(record)?;
    Ok(serde_jcs::to_string(&value)?)
}
