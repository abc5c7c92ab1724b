//! Clock abstraction for the calculator and countdown drivers.
//!
//! The core never calls `Local::now()` directly; it receives the current
//! instant through this trait so tests can supply fixed or sequenced times.

use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock instant.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
