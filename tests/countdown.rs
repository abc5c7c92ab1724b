#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use saldo::libs::countdown::{severity, Countdown, Mode, Severity};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(17, 0, 0).unwrap()
    }

    #[test]
    fn test_counting_down_before_target() {
        let now = base();
        let mut countdown = Countdown::arm(now + Duration::seconds(5));

        let payload = countdown.tick(now + Duration::seconds(3));
        assert_eq!(payload.mode, Mode::CountingDown);
        assert_eq!(payload.duration, Duration::seconds(2));
        assert_eq!(payload.text, "00:00:02");
        assert!(!payload.crossed);
        assert_eq!(countdown.anchor(), None);
    }

    #[test]
    fn test_crossing_sets_anchor_at_detection_instant() {
        let now = base();
        let mut countdown = Countdown::arm(now + Duration::seconds(5));

        countdown.tick(now + Duration::seconds(3));
        // The tick that overruns the target transitions and anchors there,
        // not at the target itself.
        let crossing = countdown.tick(now + Duration::seconds(6));
        assert_eq!(crossing.mode, Mode::CountingUp);
        assert!(crossing.crossed);
        assert_eq!(crossing.duration, Duration::zero());
        assert_eq!(countdown.anchor(), Some(now + Duration::seconds(6)));

        // Overtime is measured from the anchor from then on.
        let after = countdown.tick(now + Duration::seconds(8));
        assert_eq!(after.mode, Mode::CountingUp);
        assert!(!after.crossed);
        assert_eq!(after.duration, Duration::seconds(2));
    }

    #[test]
    fn test_crossing_signal_fires_exactly_once() {
        let now = base();
        let mut countdown = Countdown::arm(now + Duration::seconds(1));

        let crossings = (0..10)
            .map(|s| countdown.tick(now + Duration::seconds(s)))
            .filter(|payload| payload.crossed)
            .count();
        assert_eq!(crossings, 1);
    }

    #[test]
    fn test_counting_up_is_monotonic() {
        let now = base();
        let mut countdown = Countdown::arm(now);

        let mut previous = countdown.tick(now).duration;
        for s in 1..60 {
            let payload = countdown.tick(now + Duration::seconds(s));
            assert!(payload.duration > previous);
            previous = payload.duration;
        }
    }

    #[test]
    fn test_tick_with_unchanged_instant_is_idempotent() {
        let now = base();
        let mut countdown = Countdown::arm(now + Duration::minutes(10));

        let first = countdown.tick(now + Duration::seconds(30));
        let second = countdown.tick(now + Duration::seconds(30));
        assert_eq!(first, second);

        // Once counting up, repeated ticks at one instant agree too, and
        // the crossing flag does not re-fire.
        countdown.tick(now + Duration::minutes(11));
        let up_first = countdown.tick(now + Duration::minutes(12));
        let up_second = countdown.tick(now + Duration::minutes(12));
        assert_eq!(up_first, up_second);
        assert!(!up_first.crossed);
    }

    #[test]
    fn test_priming_into_counting_up_preserves_elapsed_overtime() {
        let now = base();
        let target = now - Duration::seconds(90);

        let mut countdown = Countdown::arm_at(target, now);
        assert_eq!(countdown.mode(), Mode::CountingUp);

        // Resuming does not restart the overtime at zero and does not
        // re-fire the crossing signal.
        let payload = countdown.tick(now);
        assert_eq!(payload.duration, Duration::seconds(90));
        assert!(!payload.crossed);
    }

    #[test]
    fn test_priming_with_future_target_counts_down() {
        let now = base();
        let countdown = Countdown::arm_at(now + Duration::minutes(5), now);
        assert_eq!(countdown.mode(), Mode::CountingDown);
        assert_eq!(countdown.anchor(), None);
    }

    #[test]
    fn test_severity_bands_at_boundaries() {
        assert_eq!(severity(Duration::minutes(31)), Severity::Normal);
        assert_eq!(severity(Duration::minutes(30) + Duration::seconds(1)), Severity::Normal);
        assert_eq!(severity(Duration::minutes(30)), Severity::Warning);
        assert_eq!(severity(Duration::minutes(15)), Severity::Warning);
        assert_eq!(severity(Duration::minutes(14) + Duration::seconds(59)), Severity::Critical);
        assert_eq!(severity(Duration::zero()), Severity::Critical);
    }

    #[test]
    fn test_payload_severity_follows_remaining_time() {
        let now = base();
        let mut countdown = Countdown::arm(now + Duration::minutes(45));

        let normal = countdown.tick(now);
        assert_eq!(normal.severity, Some(Severity::Normal));

        let warning = countdown.tick(now + Duration::minutes(20));
        assert_eq!(warning.severity, Some(Severity::Warning));

        let critical = countdown.tick(now + Duration::minutes(40));
        assert_eq!(critical.severity, Some(Severity::Critical));

        let up = countdown.tick(now + Duration::minutes(50));
        assert_eq!(up.severity, None);
    }
}
