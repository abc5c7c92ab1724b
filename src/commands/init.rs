use crate::libs::messages::Message;
use crate::libs::settings::Settings;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;

/// Runs the interactive settings wizard and persists the result.
pub fn cmd() -> Result<()> {
    let settings = Settings::init()?;
    settings.validate().map_err(|e| msg_error_anyhow!(Message::SettingsInvalid(e.to_string())))?;
    settings.save()?;
    msg_success!(Message::SettingsSaved);
    Ok(())
}
