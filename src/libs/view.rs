//! Terminal rendering of calculation results and countdown payloads.
//!
//! Pure presentation: everything shown here arrives fully computed, this
//! module only chooses words and layout.

use crate::libs::calculator::CalculationResult;
use crate::libs::countdown::{DisplayPayload, Mode, Severity};
use crate::libs::formatter::{format_duration, format_signed_duration, format_time, Polarity};
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};
use std::io::{self, Write};

pub struct View {}

impl View {
    /// Prints the full result set as a table, with "--:--" placeholders
    /// for unavailable figures.
    pub fn result(result: &CalculationResult) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WORKING TIME", Self::optional_duration(result.working_time)]);
        table.add_row(row!["TARGET", format_duration(&result.target_time)]);
        table.add_row(row!["TODAY BALANCE", Self::optional_balance(result.today_balance)]);
        table.add_row(row!["TOTAL BALANCE", Self::optional_balance(result.total_balance)]);
        table.add_row(row!["SUGGESTED END", format_time(result.suggested_end)]);
        table.add_row(row!["BREAK APPLIED", if result.break_applied { "yes" } else { "no" }]);
        table.printstd();

        Ok(())
    }

    /// One-line "if I left now" summary for the watch loop.
    pub fn watch_line(result: &CalculationResult) -> String {
        format!(
            "worked {} | balance {} | leave at {}",
            Self::optional_duration(result.working_time),
            Self::optional_balance(result.today_balance),
            format_time(result.suggested_end),
        )
    }

    /// One-line countdown status for the 1-second driver.
    pub fn countdown_line(payload: &DisplayPayload) -> String {
        match payload.mode {
            Mode::CountingDown => {
                let marker = match payload.severity {
                    Some(Severity::Critical) => " !!",
                    Some(Severity::Warning) => " !",
                    _ => "",
                };
                format!("time remaining: {}{}", payload.text, marker)
            }
            Mode::CountingUp => format!("overtime: {}", payload.text),
        }
    }

    /// Rewrites the current terminal line with a countdown status.
    pub fn print_status_line(line: &str) -> Result<()> {
        // Pad to clear leftovers from a longer previous line.
        print!("\r{:<60}", line);
        io::stdout().flush()?;
        Ok(())
    }

    fn optional_duration(duration: Option<Duration>) -> String {
        duration.map_or_else(|| "--:--".to_string(), |d| format_duration(&d))
    }

    fn optional_balance(balance: Option<Duration>) -> String {
        match balance {
            None => "--:--".to_string(),
            Some(d) => {
                let label = match Polarity::of(&d) {
                    Polarity::Positive => " (overtime)",
                    Polarity::Negative => " (undertime)",
                    Polarity::Zero => "",
                };
                format!("{}{}", format_signed_duration(&d), label)
            }
        }
    }
}
