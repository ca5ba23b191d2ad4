//! # Serving Capability
//!
//! The shared rendering interface for order records. The base record
//! renders the templated serving line; the stuffed-crust variant renders
//! through its embedded base, which is how the shared behavior reaches it.
//!
//! Rendering never fails. A record whose size is absent renders the line
//! with the empty size token instead of rejecting the call, so malformed
//! or incomplete orders still produce output.

use crate::order::{Pizza, StuffedCrustPizza};

/// Rendering capability shared by all order records.
pub trait Serve {
    /// Render the serving announcement for this order.
    fn serving_line(&self) -> String;

    /// Print the serving announcement to stdout.
    fn serve(&self) {
        println!("{}", self.serving_line());
    }
}

impl Serve for Pizza {
    /// `This is a {size} Pizza from parent ` with the template's trailing
    /// space kept. An absent size renders as the empty token, leaving a
    /// doubled space in the line.
    fn serving_line(&self) -> String {
        format!("This is a {} Pizza from parent ", self.size_text())
    }
}

impl Serve for StuffedCrustPizza {
    /// The variant renders through its embedded base record.
    fn serving_line(&self) -> String {
        self.base.serving_line()
    }
}
