//! # forno-cli — CLI Tool for the Forno Pizzeria Toolkit
//!
//! Provides the `forno` command-line interface over the `forno-core` order
//! model.
//!
//! ## Subcommands
//!
//! - `forno serve` — Run the demo order flow: construct the two demo
//!   orders, print their canonical snapshots, then their serving lines.
//!
//! ## Usage
//!
//! ```bash
//! forno serve
//! forno serve --skip-size
//! forno -vv serve
//! ```

pub mod serve;
