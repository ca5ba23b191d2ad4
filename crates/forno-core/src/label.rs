//! # Order Label Newtypes
//!
//! Newtype wrappers for the descriptive labels carried by an order. These
//! prevent accidental label confusion: you cannot pass a `CrustLabel`
//! where a `SizeLabel` is expected.
//!
//! None of the labels validate their contents. The conventional size values
//! are "Small", "Medium", and "Large", but the demo data itself mixes
//! `"Medium"` and `"small"`, so casing and vocabulary stay free-form and
//! malformed input is stored verbatim.
//!
//! Each newtype serializes transparently as its inner string.

use serde::{Deserialize, Serialize};

/// Size label for an order (conventionally "Small"/"Medium"/"Large").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeLabel(pub String);

/// Dietary preference label (e.g. "Veg").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceLabel(pub String);

/// Crust label (e.g. "Thin", "Thick").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrustLabel(pub String);

/// Stuffing label for stuffed-crust orders (e.g. "Mozarella").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StuffingLabel(pub String);

impl SizeLabel {
    /// Wrap a size label verbatim.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Access the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PreferenceLabel {
    /// Wrap a preference label verbatim.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Access the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CrustLabel {
    /// Wrap a crust label verbatim.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Access the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StuffingLabel {
    /// Wrap a stuffing label verbatim.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Access the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PreferenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CrustLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for StuffingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
