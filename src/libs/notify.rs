//! Notification collaborator for the overtime crossing.
//!
//! The countdown core only reports that the crossing happened, exactly
//! once; what to do with it is decided here.

use crate::libs::messages::Message;
use crate::msg_warning;

/// Receives the single "overtime started" event.
pub trait Notifier {
    fn overtime_started(&self);
}

/// Rings the terminal bell and prints a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn overtime_started(&self) {
        print!("\x07");
        msg_warning!(Message::OvertimeStarted);
    }
}

/// Discards the event. Used where no notification is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn overtime_started(&self) {}
}
