//! The balance calculator: pure arithmetic over one snapshot of inputs.
//!
//! Maps (start, end, break policy, target hours, prior balance, current
//! instant) to the full set of derived figures: worked time, today's
//! overtime/undertime balance, the running total balance and the suggested
//! departure time. No I/O, no clock access, no stored state; every
//! recalculation replaces the previous result wholesale.
//!
//! ## Break eligibility
//!
//! Break minutes are subtracted from *elapsed* time only when the elapsed
//! time reaches six hours, or when the caller sets the explicit override
//! flag (the break is optional below the legal threshold). The suggested
//! end time applies the same rule against the *target* duration instead of
//! the elapsed one. The two rules are intentionally kept separate: the
//! first judges the day as actually worked, the second the idealized
//! projection.
//!
//! ## Optionality
//!
//! Missing or unparseable inputs flow through `Option` rather than errors.
//! An absent start withholds every figure; an absent end withholds the
//! measured figures but still produces the suggestion. Figures are never
//! defaulted to zero, since "00:00" would claim the day balances exactly.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Elapsed minutes at which the configured break becomes mandatory.
pub const BREAK_THRESHOLD_MINUTES: i64 = 6 * 60;

/// One snapshot of everything the calculator needs, produced fresh on every
/// recalculation and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInputs {
    /// Start of the working day, if known.
    pub start: Option<NaiveTime>,
    /// End of the working day; `None` while still at work.
    pub end: Option<NaiveTime>,
    /// Externally maintained running balance carried into today.
    pub prior_balance: Duration,
    /// Required working hours for the day.
    pub target_hours: f64,
    /// Configured break length in minutes.
    pub break_minutes: i64,
    /// Apply the break even below the six-hour threshold.
    pub force_break: bool,
    /// The current instant, injected by the caller's clock.
    pub now: NaiveDateTime,
}

/// The complete result set of one calculation.
///
/// `None` fields mean "unavailable", not zero; renderers are expected to
/// show an explicit placeholder for them.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Net worked time after any applied break, never negative.
    pub working_time: Option<Duration>,
    /// The target expressed as a duration, always present.
    pub target_time: Duration,
    /// Signed worked-minus-target balance for today.
    pub today_balance: Option<Duration>,
    /// Prior balance plus today's balance.
    pub total_balance: Option<Duration>,
    /// Departure time that would zero today's balance.
    pub suggested_end: Option<NaiveTime>,
    /// Whether break minutes were actually subtracted from the figures.
    pub break_applied: bool,
}

impl CalculationResult {
    fn unavailable(target_time: Duration) -> Self {
        CalculationResult {
            working_time: None,
            target_time,
            today_balance: None,
            total_balance: None,
            suggested_end: None,
            break_applied: false,
        }
    }
}

/// Computes the full result set for one snapshot of inputs.
///
/// Pure and deterministic: identical inputs yield identical results, so
/// callers may invoke it on every keystroke or timer tick.
pub fn compute(inputs: &CalculationInputs) -> CalculationResult {
    // Impossible configuration values are clamped instead of rejected; the
    // settings layer validates before they normally reach this point.
    let break_minutes = inputs.break_minutes.max(0);
    let target_minutes = (inputs.target_hours.max(0.0) * 60.0).round() as i64;
    let target_time = Duration::minutes(target_minutes);

    let Some(start) = inputs.start else {
        return CalculationResult::unavailable(target_time);
    };

    let target_break = target_break_minutes(target_minutes, break_minutes, inputs.force_break);
    let suggested_end = Some(start + Duration::minutes(target_minutes + target_break));

    // A start in the future with no distinct end means the day has not
    // begun yet: report a pure projection instead of measured figures.
    let start_instant = inputs.now.date().and_time(start);
    let not_started = start_instant > inputs.now && inputs.end.map_or(true, |end| end == start);
    if not_started {
        let today_balance = -target_time;
        return CalculationResult {
            working_time: Some(Duration::zero()),
            target_time,
            today_balance: Some(today_balance),
            total_balance: Some(inputs.prior_balance + today_balance),
            suggested_end,
            break_applied: false,
        };
    }

    let Some(end) = inputs.end else {
        return CalculationResult {
            suggested_end,
            break_applied: target_break > 0,
            ..CalculationResult::unavailable(target_time)
        };
    };

    let elapsed = elapsed_between(start, end);
    let applied_break = elapsed_break_minutes(elapsed, break_minutes, inputs.force_break);
    let working_time = (elapsed - Duration::minutes(applied_break)).max(Duration::zero());
    let today_balance = working_time - target_time;

    CalculationResult {
        working_time: Some(working_time),
        target_time,
        today_balance: Some(today_balance),
        total_balance: Some(inputs.prior_balance + today_balance),
        suggested_end,
        break_applied: applied_break > 0,
    }
}

/// Elapsed time between two clock-face times on the same day.
///
/// An end at or before the start is treated as lying on the following
/// calendar day, so overnight shifts yield a positive duration.
fn elapsed_between(start: NaiveTime, end: NaiveTime) -> Duration {
    let elapsed = end - start;
    if elapsed <= Duration::zero() {
        elapsed + Duration::days(1)
    } else {
        elapsed
    }
}

/// Break minutes to subtract from the elapsed working time.
///
/// Capped at the elapsed minutes so a long break can never drive the
/// worked time negative.
fn elapsed_break_minutes(elapsed: Duration, break_minutes: i64, force: bool) -> i64 {
    let eligible = elapsed >= Duration::minutes(BREAK_THRESHOLD_MINUTES) || force;
    if !eligible {
        return 0;
    }
    break_minutes.min(elapsed.num_minutes().max(0))
}

/// Break minutes to add on top of the target for the suggested end time.
///
/// Evaluated against the target rather than the elapsed duration. A break
/// longer than the whole target day is never projected.
fn target_break_minutes(target_minutes: i64, break_minutes: i64, force: bool) -> i64 {
    if target_minutes < break_minutes {
        return 0;
    }
    let eligible = target_minutes >= BREAK_THRESHOLD_MINUTES || force;
    if eligible {
        break_minutes
    } else {
        0
    }
}
