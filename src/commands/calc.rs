//! One-shot balance calculation.
//!
//! Collects the raw field values, folds in the stored settings, invokes
//! the calculator once and renders the result table. All figures come out
//! of the core; this file only wires collaborators together.

use crate::libs::calculator::{self, CalculationInputs};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::formatter::{parse_signed_duration, parse_time};
use crate::libs::messages::Message;
use crate::libs::settings::Settings;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    #[arg(short, long, help = "Start time as HH:MM")]
    start: Option<String>,
    #[arg(short, long, help = "End time as HH:MM, or 'now'")]
    end: Option<String>,
    #[arg(short, long, help = "Override the configured target hours")]
    target: Option<f64>,
    #[arg(short = 'b', long = "break", help = "Override the configured break minutes")]
    break_minutes: Option<i64>,
    #[arg(long, help = "Override the prior balance, signed HH:MM")]
    balance: Option<String>,
    #[arg(long, help = "Apply the break even below the six-hour threshold")]
    force_break: bool,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let settings = Settings::read()?.sanitized();
    let now = SystemClock.now();

    let start = parse_time_arg(args.start.as_deref());
    let end = match args.end.as_deref() {
        Some("now") => Some(now.time()),
        other => parse_time_arg(other),
    };
    let prior_balance = match args.balance.as_deref() {
        None => settings.prior_balance(),
        Some(raw) => match parse_signed_duration(raw) {
            Some(balance) => balance,
            None => {
                msg_warning!(Message::UnparseableTime(raw.to_string()));
                settings.prior_balance()
            }
        },
    };

    let inputs = CalculationInputs {
        start,
        end,
        prior_balance,
        target_hours: args.target.unwrap_or(settings.target_hours),
        break_minutes: args.break_minutes.unwrap_or(settings.break_minutes),
        force_break: args.force_break,
        now,
    };
    let result = calculator::compute(&inputs);

    msg_print!(Message::CalcHeader(now.format("%Y-%m-%d").to_string()), true);
    if inputs.start.is_none() {
        msg_info!(Message::MissingStartTime);
    }
    View::result(&result)
}

/// Parses an optional time argument, warning once on malformed input.
///
/// Malformed times degrade to "absent" so the calculation still produces
/// a renderable result.
fn parse_time_arg(arg: Option<&str>) -> Option<NaiveTime> {
    let raw = arg?;
    let parsed = parse_time(raw);
    if parsed.is_none() {
        msg_warning!(Message::UnparseableTime(raw.to_string()));
    }
    parsed
}
