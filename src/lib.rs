//! # Saldo - work-hours balance calculator
//!
//! A command-line utility for computing worked time, overtime/undertime
//! balances and suggested departure times, with a live countdown view.
//!
//! ## Features
//!
//! - **Balance Calculation**: Worked hours, today's balance and the running
//!   total from one snapshot of inputs
//! - **Suggested Departure**: The end time that makes today balance exactly
//! - **Break Rules**: Automatic break deduction above the six-hour
//!   threshold, optional below it
//! - **Overnight Shifts**: An end time at or before the start rolls over to
//!   the next day
//! - **Live Countdown**: A 1-second timer toward the departure time that
//!   flips into counting overtime once it passes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use saldo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
