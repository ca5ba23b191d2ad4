//! # Order Records
//!
//! Defines the two order records: [`Pizza`], the base record, and
//! [`StuffedCrustPizza`], the stuffed-crust variant that embeds it.
//!
//! ```text
//! Pizza                         StuffedCrustPizza
//! ├─ size (present or absent)   ├─ base: Pizza   (serialized flat)
//! ├─ toppings                   └─ stuffing
//! ├─ preference
//! └─ crust
//! ```
//!
//! ## Design Decision
//!
//! A stuffed-crust order either carries a size or permanently lacks one,
//! and the two shapes must stay distinguishable in serialized output. Two
//! separate record types would double every impl for the sake of one
//! field, so the base record carries `size` as an `Option` and the variant
//! offers two construction paths: [`StuffedCrustPizza::new`] keeps the
//! size, [`StuffedCrustPizza::without_size`] never stores one. Absence is
//! serialization-visible: the `size` key is omitted, not set to null.
//!
//! No field is validated and every field is public. Malformed input is
//! stored verbatim and surfaces only in rendered output.

use serde::{Deserialize, Serialize};

use crate::label::{CrustLabel, PreferenceLabel, SizeLabel, StuffingLabel};
use crate::serve::Serve;

// ─── Base Record ─────────────────────────────────────────────────────

/// The base order record.
///
/// All four values are stored verbatim at construction and remain freely
/// assignable afterwards. Construction never rejects input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    /// Size label. Absent when the record is the base portion of a
    /// sizeless stuffed-crust order; the serialized form then has no
    /// `size` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeLabel>,
    /// Ordered topping names.
    pub toppings: Vec<String>,
    /// Dietary preference label.
    pub preference: PreferenceLabel,
    /// Crust label.
    pub crust: CrustLabel,
}

impl Pizza {
    /// Create an order with all four values supplied.
    pub fn new(
        size: SizeLabel,
        toppings: Vec<String>,
        preference: PreferenceLabel,
        crust: CrustLabel,
    ) -> Self {
        Self {
            size: Some(size),
            toppings,
            preference,
            crust,
        }
    }

    /// Create the base portion of an order that carries no size.
    ///
    /// The record serializes without a `size` key and renders its serving
    /// line with the empty size token.
    pub fn without_size(
        toppings: Vec<String>,
        preference: PreferenceLabel,
        crust: CrustLabel,
    ) -> Self {
        Self {
            size: None,
            toppings,
            preference,
            crust,
        }
    }

    /// The size text used in rendered lines: the label when present, the
    /// empty token when absent.
    pub fn size_text(&self) -> &str {
        self.size.as_ref().map(SizeLabel::as_str).unwrap_or("")
    }
}

// ─── Stuffed-Crust Variant ───────────────────────────────────────────

/// The stuffed-crust variant record.
///
/// Embeds the base record rather than subclassing it. The embedded fields
/// are flattened in the serialized form, so an instance reads as one flat
/// object with five keys, or four when the base portion carries no size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StuffedCrustPizza {
    /// The embedded base record.
    #[serde(flatten)]
    pub base: Pizza,
    /// Stuffing label.
    pub stuffing: StuffingLabel,
}

impl StuffedCrustPizza {
    /// Create a stuffed-crust order with all five values supplied.
    ///
    /// Builds the base portion first, then attaches the stuffing.
    pub fn new(
        size: SizeLabel,
        toppings: Vec<String>,
        preference: PreferenceLabel,
        crust: CrustLabel,
        stuffing: StuffingLabel,
    ) -> Self {
        Self {
            base: Pizza::new(size, toppings, preference, crust),
            stuffing,
        }
    }

    /// Create a stuffed-crust order whose base portion carries no size.
    ///
    /// The size is omitted from the parameter list entirely; the record
    /// never stores one and its serialized form has no `size` key.
    pub fn without_size(
        toppings: Vec<String>,
        preference: PreferenceLabel,
        crust: CrustLabel,
        stuffing: StuffingLabel,
    ) -> Self {
        Self {
            base: Pizza::without_size(toppings, preference, crust),
            stuffing,
        }
    }

    /// The delegated serving line: exactly the embedded base record's
    /// rendering, with nothing appended.
    pub fn describe_line(&self) -> String {
        self.base.serving_line()
    }

    /// Print the delegated serving line to stdout.
    ///
    /// Invokes the embedded base record's serving behavior explicitly and
    /// adds nothing after it. A sizeless order renders with the empty
    /// size token rather than failing.
    pub fn describe(&self) {
        self.base.serve();
    }

    /// The stuffing note.
    pub fn test_line(&self) -> String {
        format!("Stuffed with {} ", self.stuffing)
    }

    /// Print the stuffing note to stdout.
    pub fn test(&self) {
        println!("{}", self.test_line());
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn base_order() -> Pizza {
        Pizza::new(
            SizeLabel::new("Medium"),
            vec!["Tomato , Cheese".to_string()],
            PreferenceLabel::new("Veg"),
            CrustLabel::new("Thin"),
        )
    }

    fn stuffed_order() -> StuffedCrustPizza {
        StuffedCrustPizza::new(
            SizeLabel::new("small"),
            vec!["mushrooms".to_string(), "cheese".to_string()],
            PreferenceLabel::new("Veg"),
            CrustLabel::new("Thick"),
            StuffingLabel::new("Mozarella"),
        )
    }

    fn sizeless_order() -> StuffedCrustPizza {
        StuffedCrustPizza::without_size(
            vec!["mushrooms".to_string(), "cheese".to_string()],
            PreferenceLabel::new("Veg"),
            CrustLabel::new("Thick"),
            StuffingLabel::new("Mozarella"),
        )
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_new_stores_all_four_values_verbatim() {
        let p = base_order();
        assert_eq!(p.size, Some(SizeLabel::new("Medium")));
        assert_eq!(p.toppings, vec!["Tomato , Cheese".to_string()]);
        assert_eq!(p.preference, PreferenceLabel::new("Veg"));
        assert_eq!(p.crust, CrustLabel::new("Thin"));
    }

    #[test]
    fn test_without_size_stores_no_size() {
        let p = Pizza::without_size(
            vec![],
            PreferenceLabel::new("Veg"),
            CrustLabel::new("Thick"),
        );
        assert_eq!(p.size, None);
    }

    #[test]
    fn test_stuffed_new_builds_base_portion_then_stuffing() {
        let s = stuffed_order();
        assert_eq!(s.base.size, Some(SizeLabel::new("small")));
        assert_eq!(s.base.crust, CrustLabel::new("Thick"));
        assert_eq!(s.stuffing, StuffingLabel::new("Mozarella"));
    }

    #[test]
    fn test_stuffed_without_size_never_carries_one() {
        let s = sizeless_order();
        assert_eq!(s.base.size, None);
        assert_eq!(s.stuffing, StuffingLabel::new("Mozarella"));
    }

    #[test]
    fn test_fields_stay_assignable_after_construction() {
        let mut p = base_order();
        p.size = None;
        p.crust = CrustLabel::new("Stone");
        p.toppings.push("olives".to_string());
        assert_eq!(p.size, None);
        assert_eq!(p.crust.as_str(), "Stone");
        assert_eq!(p.toppings.len(), 2);
    }

    // ── Variant behaviors ────────────────────────────────────────────

    #[test]
    fn test_describe_line_is_exactly_the_base_rendering() {
        let s = stuffed_order();
        assert_eq!(s.describe_line(), s.base.serving_line());
        assert_eq!(s.describe_line(), "This is a small Pizza from parent ");
    }

    #[test]
    fn test_describe_line_on_sizeless_order_uses_empty_token() {
        let s = sizeless_order();
        assert_eq!(s.describe_line(), "This is a  Pizza from parent ");
    }

    #[test]
    fn test_line_carries_the_stuffing() {
        let s = stuffed_order();
        assert_eq!(s.test_line(), "Stuffed with Mozarella ");
    }

    #[test]
    fn test_print_behaviors_do_not_panic() {
        let s = stuffed_order();
        s.describe();
        s.test();
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_base_serializes_with_four_keys() {
        let v = serde_json::to_value(base_order()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["size"], "Medium");
    }

    #[test]
    fn test_stuffed_serializes_flat_with_five_keys() {
        let v = serde_json::to_value(stuffed_order()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert!(obj.contains_key("size"));
        assert!(obj.contains_key("stuffing"));
        assert!(!obj.contains_key("base"));
    }

    #[test]
    fn test_sizeless_order_serializes_without_size_key() {
        let v = serde_json::to_value(sizeless_order()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("size"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = stuffed_order();
        let json = serde_json::to_string(&s).unwrap();
        let parsed: StuffedCrustPizza = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn test_missing_size_key_deserializes_to_absent() {
        let json = r#"{"toppings":["cheese"],"preference":"Veg","crust":"Thick","stuffing":"Mozarella"}"#;
        let parsed: StuffedCrustPizza = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.base.size, None);
    }
}
