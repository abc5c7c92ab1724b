//! Display implementation for saldo application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and a future localization only has to touch this file.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SETTINGS MESSAGES ===
            Message::SettingsWizardHeader => "Configure your working day".to_string(),
            Message::SettingsSaved => "Settings saved successfully".to_string(),
            Message::SettingsInvalid(reason) => format!("Invalid settings: {}", reason),
            Message::PromptTargetHours => "Target working hours per day".to_string(),
            Message::PromptBreakMinutes => "Break duration in minutes".to_string(),
            Message::PromptPriorBalance => "Current overtime balance (e.g. -01:30)".to_string(),
            Message::InvalidTargetHours => "Target hours must be a positive number".to_string(),
            Message::InvalidBreakMinutes => "Break minutes must not be negative".to_string(),
            Message::InvalidBalanceFormat => "Enter the balance as HH:MM with an optional sign".to_string(),

            // === CALCULATION MESSAGES ===
            Message::CalcHeader(date) => format!("Work-hours balance for {}", date),
            Message::UnparseableTime(input) => format!("Could not parse '{}' as HH:MM, treating it as not set", input),
            Message::MissingStartTime => "No start time given, balance figures are unavailable".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => format!("Refreshing projections every {} seconds, press Ctrl-C to stop", interval),
            Message::WatchStopped => "Watch stopped".to_string(),

            // === COUNTDOWN MESSAGES ===
            Message::CountdownArmed(target) => format!("Counting down to {}, press Ctrl-C to stop", target),
            Message::CountdownAlreadyPast(target) => format!("{} already passed, counting overtime", target),
            Message::CountdownStopped => "Countdown stopped".to_string(),
            Message::NoCountdownTarget => "No countdown target: give --at, --in or a start time".to_string(),
            Message::OvertimeStarted => "Target time reached, overtime starts now".to_string(),
        };
        write!(f, "{}", text)
    }
}
