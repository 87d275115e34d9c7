//! Process-wide toast notification state.
//!
//! DESIGN
//! ======
//! A `show` for the same message within 2 s of the previous accepted `show`
//! is suppressed, so double-submits don't stack notifications. Each accepted
//! `show` bumps `timer_seq`; the scheduled dismissal captures that seq and
//! only applies while it is still current, which keeps exactly one dismissal
//! live no matter how often the content is replaced. Timer scheduling itself
//! happens in `components::toast`; this module is the pure state machine.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Suppression window for repeated identical messages.
pub const DEDUPE_WINDOW_MS: f64 = 2000.0;

/// Delay before an accepted toast auto-dismisses.
pub const DISMISS_AFTER_MS: u64 = 3000;

/// Visual severity of a toast message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Modifier class for the overlay element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

/// Toast store state: the visible message plus de-duplication memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: Option<String>,
    pub severity: Severity,
    last_message: Option<String>,
    last_shown_ms: f64,
    timer_seq: u64,
}

impl ToastState {
    /// Accept or suppress a `show` call observed at `now_ms`.
    ///
    /// Returns the dismissal seq to schedule when accepted, `None` when the
    /// identical message was already accepted within [`DEDUPE_WINDOW_MS`].
    pub fn show_at(&mut self, message: &str, severity: Severity, now_ms: f64) -> Option<u64> {
        if let Some(last) = &self.last_message {
            if last == message && now_ms - self.last_shown_ms < DEDUPE_WINDOW_MS {
                return None;
            }
        }
        self.last_message = Some(message.to_owned());
        self.last_shown_ms = now_ms;
        self.message = Some(message.to_owned());
        self.severity = severity;
        self.timer_seq += 1;
        Some(self.timer_seq)
    }

    /// Apply a scheduled dismissal; a stale `seq` is a no-op.
    pub fn expire(&mut self, seq: u64) {
        if seq != self.timer_seq {
            return;
        }
        self.message = None;
        self.last_message = None;
    }

    /// Clear the message immediately and reset de-duplication memory.
    pub fn hide(&mut self) {
        self.timer_seq += 1;
        self.message = None;
        self.last_message = None;
    }

    /// Seq of the most recently accepted `show`.
    pub fn timer_seq(&self) -> u64 {
        self.timer_seq
    }
}
