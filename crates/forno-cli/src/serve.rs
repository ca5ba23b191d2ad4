//! # Serve Subcommand
//!
//! Runs the demo order flow: one base order and one stuffed-crust order
//! are constructed with literal data, their canonical snapshots are
//! printed, then their serving lines.
//!
//! ## Output
//!
//! Default run, in order:
//!
//! 1. Canonical snapshot of the base order.
//! 2. Canonical snapshot of the stuffed-crust order.
//! 3. The base order's serving line.
//! 4. The stuffed-crust order's serving line (delegated to its base).
//!
//! With `--skip-size` the stuffed-crust order is built without a size
//! label, its snapshot carries no `size` key, and line 4 is not printed.

use anyhow::{Context, Result};
use clap::Args;

use forno_core::{
    snapshot_json, CrustLabel, Pizza, PreferenceLabel, Serve, SizeLabel, StuffedCrustPizza,
    StuffingLabel,
};

/// Arguments for the `forno serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Build the stuffed-crust order without a size label.
    #[arg(long)]
    pub skip_size: bool,
}

/// Execute the serve subcommand.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let (order1, order2) = demo_orders(args.skip_size);
    tracing::debug!(skip_size = args.skip_size, "constructed demo orders");

    let snapshot1 =
        snapshot_json(&order1).context("failed to snapshot the base order")?;
    let snapshot2 =
        snapshot_json(&order2).context("failed to snapshot the stuffed-crust order")?;

    println!("{snapshot1}");
    println!("{snapshot2}");

    order1.serve();
    if !args.skip_size {
        order2.describe();
    }

    Ok(0)
}

/// Construct the two demo orders.
///
/// The stuffed-crust order is built sizeless when `skip_size` is set,
/// with the same remaining data.
fn demo_orders(skip_size: bool) -> (Pizza, StuffedCrustPizza) {
    let order1 = Pizza::new(
        SizeLabel::new("Medium"),
        vec!["Tomato , Cheese".to_string()],
        PreferenceLabel::new("Veg"),
        CrustLabel::new("Thin"),
    );

    let toppings = vec!["mushrooms".to_string(), "cheese".to_string()];
    let preference = PreferenceLabel::new("Veg");
    let crust = CrustLabel::new("Thick");
    let stuffing = StuffingLabel::new("Mozarella");

    let order2 = if skip_size {
        StuffedCrustPizza::without_size(toppings, preference, crust, stuffing)
    } else {
        StuffedCrustPizza::new(SizeLabel::new("small"), toppings, preference, crust, stuffing)
    };

    (order1, order2)
}
