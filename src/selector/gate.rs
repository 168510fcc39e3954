//! One-shot drag-enable gate.
//!
//! Newly shown dials ignore drag input for a fixed delay so a needle is
//! never animated mid screen-transition. The gate is pure data driven by
//! caller-supplied timestamps: the host arms it when the screen appears,
//! checks it on each drag event, and cancels it if the screen is
//! dismissed before it opens.

use chrono::{DateTime, Duration, Utc};

/// One-shot deferred enable for drag interaction.
///
/// # Example
///
/// ```rust
/// use intake::selector::DragGate;
/// use chrono::{Duration, Utc};
///
/// let shown_at = Utc::now();
/// let gate = DragGate::arm(shown_at, Duration::milliseconds(300));
///
/// assert!(!gate.is_open(shown_at));
/// assert!(gate.is_open(shown_at + Duration::milliseconds(300)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragGate {
    opens_at: DateTime<Utc>,
    cancelled: bool,
}

impl DragGate {
    /// Arm the gate to open `delay` after `now`.
    ///
    /// A non-positive delay opens the gate immediately.
    pub fn arm(now: DateTime<Utc>, delay: Duration) -> Self {
        Self {
            opens_at: now + delay.max(Duration::zero()),
            cancelled: false,
        }
    }

    /// Whether drag input is accepted at the given instant.
    ///
    /// A cancelled gate never opens.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        !self.cancelled && now >= self.opens_at
    }

    /// Cancel the gate; the screen was dismissed before it fired.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the gate was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_is_closed_before_the_deadline() {
        let now = Utc::now();
        let gate = DragGate::arm(now, Duration::milliseconds(300));

        assert!(!gate.is_open(now));
        assert!(!gate.is_open(now + Duration::milliseconds(299)));
    }

    #[test]
    fn gate_opens_at_the_deadline() {
        let now = Utc::now();
        let gate = DragGate::arm(now, Duration::milliseconds(300));

        assert!(gate.is_open(now + Duration::milliseconds(300)));
        assert!(gate.is_open(now + Duration::seconds(10)));
    }

    #[test]
    fn cancelled_gate_never_opens() {
        let now = Utc::now();
        let mut gate = DragGate::arm(now, Duration::milliseconds(300));
        gate.cancel();

        assert!(gate.is_cancelled());
        assert!(!gate.is_open(now + Duration::seconds(10)));
    }

    #[test]
    fn non_positive_delay_opens_immediately() {
        let now = Utc::now();
        assert!(DragGate::arm(now, Duration::zero()).is_open(now));
        assert!(DragGate::arm(now, Duration::milliseconds(-5)).is_open(now));
    }
}
