//! The coarse periodic driver: re-runs the calculator on a fixed interval
//! so the "if I left now" projection stays current.

use crate::libs::calculator::{self, CalculationInputs};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::formatter::parse_time;
use crate::libs::messages::Message;
use crate::libs::settings::Settings;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::time::Duration;
use tokio::signal;
use tokio::time;

#[derive(Debug, Args)]
pub struct WatchArgs {
    #[arg(short, long, help = "Start time as HH:MM")]
    start: String,
    #[arg(short, long, default_value_t = 30, help = "Refresh interval in seconds")]
    interval: u64,
    #[arg(long, help = "Apply the break even below the six-hour threshold")]
    force_break: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let settings = Settings::read()?.sanitized();
    let Some(start) = parse_time(&args.start) else {
        msg_bail_anyhow!(Message::UnparseableTime(args.start.clone()));
    };

    msg_info!(Message::WatchStarted(args.interval.max(1)));

    let mut timer = time::interval(Duration::from_secs(args.interval.max(1)));
    loop {
        tokio::select! {
            _ = timer.tick() => {
                let now = SystemClock.now();
                // Before the start time the day has not begun; passing the
                // start as the end makes the calculator report the
                // projection instead of a measurement.
                let end = if now.date().and_time(start) > now { start } else { now.time() };
                let inputs = CalculationInputs {
                    start: Some(start),
                    end: Some(end),
                    prior_balance: settings.prior_balance(),
                    target_hours: settings.target_hours,
                    break_minutes: settings.break_minutes,
                    force_break: args.force_break,
                    now,
                };
                let result = calculator::compute(&inputs);
                View::print_status_line(&View::watch_line(&result))?;
            }
            _ = signal::ctrl_c() => {
                println!();
                msg_print!(Message::WatchStopped);
                return Ok(());
            }
        }
    }
}
