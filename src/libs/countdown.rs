//! Countdown state machine for the departure timer.
//!
//! A [`Countdown`] is armed with a target instant and advanced by [`tick`],
//! once per evaluation. While the target lies ahead it counts down; the
//! first tick at or past the target transitions it into counting up and
//! fixes the overtime anchor at that instant. Elapsed overtime is measured
//! from the anchor from then on, never recomputed from the target, so the
//! displayed value stays monotonic even when ticks arrive late or the
//! target was derived from a rounded input.
//!
//! [`tick`]: Countdown::tick

use crate::libs::formatter::format_clock_duration;
use chrono::{Duration, NaiveDateTime};

/// Direction of the displayed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Time remaining until the target.
    CountingDown,
    /// Overtime accrued since the anchor.
    CountingUp,
}

/// Urgency band of the remaining time while counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// More than 30 minutes left.
    Normal,
    /// Between 15 and 30 minutes left, inclusive.
    Warning,
    /// Less than 15 minutes left.
    Critical,
}

/// What one tick tells the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPayload {
    /// The displayed duration, always non-negative.
    pub duration: Duration,
    /// Pre-formatted "HH:MM:SS" text of `duration`.
    pub text: String,
    /// Current direction.
    pub mode: Mode,
    /// Urgency band; `None` once counting up.
    pub severity: Option<Severity>,
    /// True exactly once, on the tick that crossed into overtime.
    pub crossed: bool,
}

/// State threaded through successive ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    target: NaiveDateTime,
    mode: Mode,
    /// Set exactly once, at the transition into counting up.
    anchor: Option<NaiveDateTime>,
}

impl Countdown {
    /// Arms a countdown toward a future target.
    pub fn arm(target: NaiveDateTime) -> Self {
        Countdown {
            target,
            mode: Mode::CountingDown,
            anchor: None,
        }
    }

    /// Arms a countdown, priming it directly into counting up when the
    /// target already lies in the past at `now`.
    ///
    /// The anchor is back-computed so the already-elapsed overtime is
    /// preserved rather than restarted at zero. No crossing signal fires
    /// for a primed countdown; the crossing happened before it existed.
    pub fn arm_at(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        if now >= target {
            Countdown {
                target,
                mode: Mode::CountingUp,
                anchor: Some(now - (now - target)),
            }
        } else {
            Self::arm(target)
        }
    }

    /// The instant this countdown is aimed at.
    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The overtime anchor, once set.
    pub fn anchor(&self) -> Option<NaiveDateTime> {
        self.anchor
    }

    /// Advances the state by one evaluation and returns the display payload.
    ///
    /// Safe to call at any rate; calling twice with the same `now` yields
    /// the same payload apart from the one-time crossing flag, which fires
    /// only on the transition tick.
    pub fn tick(&mut self, now: NaiveDateTime) -> DisplayPayload {
        match self.mode {
            Mode::CountingDown if now < self.target => {
                let remaining = self.target - now;
                DisplayPayload {
                    text: format_clock_duration(&remaining),
                    duration: remaining,
                    mode: Mode::CountingDown,
                    severity: Some(severity(remaining)),
                    crossed: false,
                }
            }
            Mode::CountingDown => {
                // The crossing tick: anchor at the instant the overrun was
                // detected, not at the target itself.
                self.mode = Mode::CountingUp;
                self.anchor = Some(now);
                DisplayPayload {
                    text: format_clock_duration(&Duration::zero()),
                    duration: Duration::zero(),
                    mode: Mode::CountingUp,
                    severity: None,
                    crossed: true,
                }
            }
            Mode::CountingUp => {
                let anchor = self.anchor.unwrap_or(self.target);
                let elapsed = (now - anchor).max(Duration::zero());
                DisplayPayload {
                    text: format_clock_duration(&elapsed),
                    duration: elapsed,
                    mode: Mode::CountingUp,
                    severity: None,
                    crossed: false,
                }
            }
        }
    }
}

/// Derives the urgency band from the remaining time.
///
/// Stateless by requirement: re-derived on every tick, no hysteresis.
/// Band edges are inclusive on their lower bound, so exactly 30:00 is a
/// warning and exactly 15:00 is still a warning.
pub fn severity(remaining: Duration) -> Severity {
    if remaining > Duration::minutes(30) {
        Severity::Normal
    } else if remaining >= Duration::minutes(15) {
        Severity::Warning
    } else {
        Severity::Critical
    }
}
