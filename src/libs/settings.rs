//! Persistent settings for the balance calculator.
//!
//! A flat record stored as pretty-printed JSON in the platform application
//! data directory: the daily target hours, the configured break length and
//! the externally maintained prior overtime balance. The calculator core
//! never touches this module; commands read the settings, fold them into a
//! [`CalculationInputs`] snapshot and hand that to the core.
//!
//! A missing settings file is not an error: `read()` falls back to the
//! defaults so the tool works before `saldo init` has ever been run.
//!
//! [`CalculationInputs`]: crate::libs::calculator::CalculationInputs

use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::{format_signed_duration, parse_signed_duration};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use thiserror::Error;

/// Settings file name inside the application data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Validation failures for hand-edited settings files.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("target hours must be positive, got {0}")]
    NonPositiveTarget(f64),
    #[error("break minutes must not be negative, got {0}")]
    NegativeBreak(i64),
}

/// The flat settings record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Required working hours per day.
    pub target_hours: f64,
    /// Break length in minutes, subtracted when eligibility holds.
    pub break_minutes: i64,
    /// Running overtime balance in minutes carried in from previous days.
    #[serde(default)]
    pub prior_balance_minutes: i64,
}

impl Default for Settings {
    /// Eight-hour day with a half-hour break and an even balance.
    fn default() -> Self {
        Settings {
            target_hours: 8.0,
            break_minutes: 30,
            prior_balance_minutes: 0,
        }
    }
}

impl Settings {
    /// Loads settings from disk, or the defaults when no file exists.
    pub fn read() -> Result<Settings> {
        let settings_path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let settings_str = fs::read_to_string(settings_path)?;
        let settings: Settings = serde_json::from_str(&settings_str)?;
        Ok(settings)
    }

    /// Writes the settings as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let settings_path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;

        let settings_file = File::create(settings_path)?;
        serde_json::to_writer_pretty(&settings_file, &self)?;
        Ok(())
    }

    /// Checks the record for impossible values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_hours <= 0.0 {
            return Err(SettingsError::NonPositiveTarget(self.target_hours));
        }
        if self.break_minutes < 0 {
            return Err(SettingsError::NegativeBreak(self.break_minutes));
        }
        Ok(())
    }

    /// Returns a copy with impossible values clamped to safe minimums.
    ///
    /// Used where a hand-edited file must not crash an interactive
    /// recalculation; `validate` is for surfacing the problem instead.
    pub fn sanitized(&self) -> Settings {
        Settings {
            target_hours: self.target_hours.max(0.0),
            break_minutes: self.break_minutes.max(0),
            prior_balance_minutes: self.prior_balance_minutes,
        }
    }

    /// The prior balance as a signed duration.
    pub fn prior_balance(&self) -> Duration {
        Duration::minutes(self.prior_balance_minutes)
    }

    /// Runs the interactive setup wizard, pre-filling current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::SettingsWizardHeader);

        let target_hours: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTargetHours.to_string())
            .default(current.target_hours)
            .validate_with(|value: &f64| if *value > 0.0 { Ok(()) } else { Err(Message::InvalidTargetHours.to_string()) })
            .interact_text()?;

        let break_minutes: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBreakMinutes.to_string())
            .default(current.break_minutes)
            .validate_with(|value: &i64| if *value >= 0 { Ok(()) } else { Err(Message::InvalidBreakMinutes.to_string()) })
            .interact_text()?;

        // The balance is entered the way it is displayed: signed HH:MM.
        let balance_input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPriorBalance.to_string())
            .default(format_signed_duration(&current.prior_balance()))
            .validate_with(|value: &String| {
                parse_signed_duration(value).map(|_| ()).ok_or_else(|| Message::InvalidBalanceFormat.to_string())
            })
            .interact_text()?;
        let prior_balance_minutes = parse_signed_duration(&balance_input).map_or(current.prior_balance_minutes, |d| d.num_minutes());

        Ok(Settings {
            target_hours,
            break_minutes,
            prior_balance_minutes,
        })
    }
}
