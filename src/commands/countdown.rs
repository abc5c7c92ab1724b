//! The 1-second driver for the departure countdown.
//!
//! Resolves a target instant (a literal time, an offset from now, or the
//! suggested end time derived from a start time and the settings), arms
//! the state machine and ticks it every second until Ctrl-C. The one-time
//! overtime crossing fires the notification collaborator.

use crate::libs::calculator::{self, CalculationInputs};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::countdown::{Countdown, Mode};
use crate::libs::formatter::parse_time;
use crate::libs::messages::Message;
use crate::libs::notify::{Notifier, TerminalNotifier};
use crate::libs::settings::Settings;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use std::time::Duration;
use tokio::signal;
use tokio::time;

#[derive(Debug, Args)]
pub struct CountdownArgs {
    #[arg(long, help = "Target time as HH:MM")]
    at: Option<String>,
    #[arg(long = "in", value_name = "MINUTES", help = "Target offset from now in minutes")]
    minutes: Option<i64>,
    #[arg(short, long, help = "Derive the target from this start time and the settings")]
    start: Option<String>,
    #[arg(long, help = "Apply the break even below the six-hour threshold")]
    force_break: bool,
}

pub async fn cmd(args: CountdownArgs) -> Result<()> {
    let now = SystemClock.now();
    let target = resolve_target(&args, now)?;

    let mut countdown = Countdown::arm_at(target, now);
    let target_label = target.format("%H:%M").to_string();
    match countdown.mode() {
        Mode::CountingDown => msg_info!(Message::CountdownArmed(target_label)),
        Mode::CountingUp => msg_info!(Message::CountdownAlreadyPast(target_label)),
    }

    let notifier = TerminalNotifier;
    let mut timer = time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = timer.tick() => {
                let payload = countdown.tick(SystemClock.now());
                View::print_status_line(&View::countdown_line(&payload))?;
                if payload.crossed {
                    println!();
                    notifier.overtime_started();
                }
            }
            _ = signal::ctrl_c() => {
                println!();
                msg_print!(Message::CountdownStopped);
                return Ok(());
            }
        }
    }
}

/// Picks the target instant from the arguments, in order of precedence:
/// `--at`, `--in`, then the suggested end time for `--start`.
fn resolve_target(args: &CountdownArgs, now: NaiveDateTime) -> Result<NaiveDateTime> {
    if let Some(at) = &args.at {
        let Some(time) = parse_time(at) else {
            msg_bail_anyhow!(Message::UnparseableTime(at.clone()));
        };
        return Ok(now.date().and_time(time));
    }

    if let Some(minutes) = args.minutes {
        return Ok(now + chrono::Duration::minutes(minutes));
    }

    if let Some(raw_start) = &args.start {
        let Some(start) = parse_time(raw_start) else {
            msg_bail_anyhow!(Message::UnparseableTime(raw_start.clone()));
        };
        let settings = Settings::read()?.sanitized();
        let inputs = CalculationInputs {
            start: Some(start),
            end: None,
            prior_balance: settings.prior_balance(),
            target_hours: settings.target_hours,
            break_minutes: settings.break_minutes,
            force_break: args.force_break,
            now,
        };
        if let Some(end) = calculator::compute(&inputs).suggested_end {
            // The suggestion is a clock-face time; one that reads earlier
            // than the start wrapped past midnight.
            let mut target = now.date().and_time(end);
            if end < start {
                target += chrono::Duration::days(1);
            }
            return Ok(target);
        }
    }

    msg_bail_anyhow!(Message::NoCountdownTarget)
}
