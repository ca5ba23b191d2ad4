//! # forno-core — Order Model for the Forno Pizzeria Toolkit
//!
//! This crate defines the order records the `forno` CLI serves: the base
//! [`Pizza`] record, the [`StuffedCrustPizza`] variant that embeds it, the
//! [`Serve`] rendering capability, and canonical JSON snapshots of order
//! instances.
//!
//! ## Key Design Points
//!
//! 1. **Composition instead of subclassing.** `StuffedCrustPizza` embeds a
//!    `Pizza` rather than inheriting from one. The shared behavior lives in
//!    the `Serve` trait, and the variant's `describe()` delegates explicitly
//!    to the embedded base record.
//!
//! 2. **Absence as `Option`, visible to serialization.** A stuffed-crust
//!    order can be built without a size. The base record then carries
//!    `size: None` and its serialized form has no `size` key at all, so the
//!    dropped attribute stays visible to introspection.
//!
//! 3. **Rendering never fails.** Construction stores values verbatim with
//!    no validation, and a missing size renders as the empty token instead
//!    of rejecting the call. Malformed input surfaces only in the output.
//!
//! 4. **Canonical snapshots.** Order instances print as RFC 8785 JSON
//!    (sorted keys, compact separators) so the same record always produces
//!    the same bytes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `forno-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod label;
pub mod order;
pub mod serve;
pub mod snapshot;

// Re-export primary types for ergonomic imports.
pub use error::SnapshotError;
pub use label::{CrustLabel, PreferenceLabel, SizeLabel, StuffingLabel};
pub use order::{Pizza, StuffedCrustPizza};
pub use serve::Serve;
pub use snapshot::{snapshot_json, snapshot_value};
