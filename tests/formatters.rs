#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use saldo::libs::formatter::{
        format_clock_duration, format_duration, format_signed_duration, format_time, parse_signed_duration, parse_time, Polarity,
    };

    #[test]
    fn test_parse_time_valid() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time("00:00"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_time("  17:15  "), NaiveTime::from_hms_opt(17, 15, 0));
    }

    #[test]
    fn test_parse_time_out_of_range_or_malformed() {
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("abc"), None);
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("12"), None);
        assert_eq!(parse_time("-1:30"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00");
    }

    #[test]
    fn test_format_signed_duration_applies_sign_once() {
        assert_eq!(format_signed_duration(&Duration::minutes(-90)), "-01:30");
        assert_eq!(format_signed_duration(&Duration::minutes(45)), "+00:45");
        assert_eq!(format_signed_duration(&Duration::zero()), "00:00");
        assert_eq!(format_signed_duration(&Duration::minutes(-1)), "-00:01");
    }

    #[test]
    fn test_format_clock_duration() {
        assert_eq!(format_clock_duration(&Duration::seconds(2)), "00:00:02");
        assert_eq!(format_clock_duration(&Duration::seconds(3661)), "01:01:01");
        assert_eq!(format_clock_duration(&Duration::zero()), "00:00:00");
        // The countdown display never goes negative.
        assert_eq!(format_clock_duration(&Duration::seconds(-5)), "00:00:00");
    }

    #[test]
    fn test_parse_signed_duration() {
        assert_eq!(parse_signed_duration("01:30"), Some(Duration::minutes(90)));
        assert_eq!(parse_signed_duration("-01:30"), Some(Duration::minutes(-90)));
        assert_eq!(parse_signed_duration("+00:45"), Some(Duration::minutes(45)));
        assert_eq!(parse_signed_duration("100:00"), Some(Duration::hours(100)));
        assert_eq!(parse_signed_duration("01:75"), None);
        assert_eq!(parse_signed_duration("abc"), None);
        assert_eq!(parse_signed_duration(""), None);
    }

    #[test]
    fn test_signed_duration_round_trip() {
        for minutes in [-135, -60, 0, 30, 480] {
            let duration = Duration::minutes(minutes);
            assert_eq!(parse_signed_duration(&format_signed_duration(&duration)), Some(duration));
        }
    }

    #[test]
    fn test_polarity() {
        assert_eq!(Polarity::of(&Duration::minutes(1)), Polarity::Positive);
        assert_eq!(Polarity::of(&Duration::minutes(-1)), Polarity::Negative);
        assert_eq!(Polarity::of(&Duration::zero()), Polarity::Zero);
        // Sub-minute remainders still count for polarity.
        assert_eq!(Polarity::of(&Duration::seconds(-30)), Polarity::Negative);
    }

    #[test]
    fn test_format_time_placeholder_for_absent() {
        assert_eq!(format_time(None), "--:--");
        assert_eq!(format_time(NaiveTime::from_hms_opt(16, 30, 0)), "16:30");
    }
}
