#[cfg(test)]
mod tests {
    use chrono::Duration;
    use saldo::libs::settings::{Settings, SettingsError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Redirects the application data directory into a tempdir.
    struct SettingsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SettingsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SettingsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_read_falls_back_to_defaults(_ctx: &mut SettingsTestContext) {
        let settings = Settings::read().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.target_hours, 8.0);
        assert_eq!(settings.break_minutes, 30);
        assert_eq!(settings.prior_balance_minutes, 0);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut SettingsTestContext) {
        let settings = Settings {
            target_hours: 7.5,
            break_minutes: 45,
            prior_balance_minutes: -90,
        };
        settings.save().unwrap();

        let loaded = Settings::read().unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.prior_balance(), Duration::minutes(-90));
    }

    #[test]
    fn test_validate_rejects_non_positive_target() {
        let settings = Settings {
            target_hours: 0.0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::NonPositiveTarget(0.0)));
    }

    #[test]
    fn test_validate_rejects_negative_break() {
        let settings = Settings {
            break_minutes: -5,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::NegativeBreak(-5)));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn test_sanitized_clamps_impossible_values() {
        let settings = Settings {
            target_hours: -1.0,
            break_minutes: -30,
            prior_balance_minutes: -120,
        };

        let sanitized = settings.sanitized();
        assert_eq!(sanitized.target_hours, 0.0);
        assert_eq!(sanitized.break_minutes, 0);
        // The balance is legitimately signed and stays untouched.
        assert_eq!(sanitized.prior_balance_minutes, -120);
    }
}
