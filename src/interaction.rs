// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interaction windows for suppressing conflicting refreshes.
//!
//! Naive polling would overwrite a slider mid-drag or a color picker
//! mid-selection the instant a periodic refresh lands. Each logical control
//! therefore carries a time-boxed window asserting "the operator is mid-edit
//! here"; while any window is open, the reconciliation loop skips applying
//! remote state. Windows are queried by elapsed time at tick time rather
//! than closed by fired timer callbacks, so a fast double-interaction can
//! never race a stale close.
//!
//! Operator commands themselves are never blocked; windows only gate the
//! poll-and-apply path.

use std::time::Duration;

use tokio::time::Instant;

/// A logical control group the operator can be editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Brightness slider.
    Brightness,
    /// Mode selector.
    Mode,
    /// Color picker.
    Color,
    /// White channel slider.
    White,
    /// Power button.
    Power,
}

impl Control {
    /// All control groups, in window-slot order.
    pub const ALL: [Self; 5] = [
        Self::Brightness,
        Self::Mode,
        Self::Color,
        Self::White,
        Self::Power,
    ];

    /// Returns how long a window on this control stays open.
    ///
    /// Simple controls get 3 seconds. The color picker gets 15: it is a
    /// modal-like widget and needs a longer grace period before the operator
    /// is plausibly done with it.
    #[must_use]
    pub const fn grace_period(&self) -> Duration {
        match self {
            Self::Color => Duration::from_secs(15),
            _ => Duration::from_secs(3),
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Brightness => 0,
            Self::Mode => 1,
            Self::Color => 2,
            Self::White => 3,
            Self::Power => 4,
        }
    }
}

/// One control's edit window: an explicit open timestamp instead of an
/// ad-hoc timer.
#[derive(Debug, Clone, Copy)]
struct InteractionWindow {
    active: bool,
    opened_at: Instant,
}

/// Tracks, per control, whether the operator is currently editing.
///
/// # Examples
///
/// ```
/// use ledsync_lib::interaction::{Control, InteractionTracker};
/// use tokio::time::Instant;
///
/// let mut tracker = InteractionTracker::new();
/// let now = Instant::now();
///
/// tracker.open(Control::Brightness, now);
/// assert!(tracker.is_suppressing(Control::Brightness, now));
/// assert!(!tracker.is_suppressing(Control::Power, now));
/// ```
#[derive(Debug, Clone)]
pub struct InteractionTracker {
    windows: [InteractionWindow; 5],
}

impl InteractionTracker {
    /// Creates a tracker with all windows closed.
    #[must_use]
    pub fn new() -> Self {
        let closed = InteractionWindow {
            active: false,
            opened_at: Instant::now(),
        };
        Self {
            windows: [closed; 5],
        }
    }

    /// Opens the window for a control, recording `now` as the open time.
    ///
    /// Re-entrant: opening an already-open window just refreshes the
    /// timestamp, extending the suppression.
    pub fn open(&mut self, control: Control, now: Instant) {
        let window = &mut self.windows[control.slot()];
        window.active = true;
        window.opened_at = now;
    }

    /// Forces a control's window closed regardless of elapsed time.
    pub fn close(&mut self, control: Control) {
        self.windows[control.slot()].active = false;
    }

    /// Returns true if the control's window is open and within its grace
    /// period at `now`.
    #[must_use]
    pub fn is_suppressing(&self, control: Control, now: Instant) -> bool {
        let window = &self.windows[control.slot()];
        window.active && now.duration_since(window.opened_at) < control.grace_period()
    }

    /// Returns true if any control suppresses refreshes at `now`.
    #[must_use]
    pub fn any_suppressing(&self, now: Instant) -> bool {
        Control::ALL
            .iter()
            .any(|control| self.is_suppressing(*control, now))
    }

    /// Deactivates windows whose grace period has elapsed at `now`.
    ///
    /// The reconciliation loop calls this at the start of each tick, making
    /// window expiry an explicit part of the tick rather than a timer
    /// callback that may have been cleared.
    pub fn sweep(&mut self, now: Instant) {
        for control in Control::ALL {
            let window = &mut self.windows[control.slot()];
            if window.active && now.duration_since(window.opened_at) >= control.grace_period() {
                window.active = false;
            }
        }
    }
}

impl Default for InteractionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grace_periods() {
        assert_eq!(Control::Brightness.grace_period(), Duration::from_secs(3));
        assert_eq!(Control::Mode.grace_period(), Duration::from_secs(3));
        assert_eq!(Control::White.grace_period(), Duration::from_secs(3));
        assert_eq!(Control::Power.grace_period(), Duration::from_secs(3));
        assert_eq!(Control::Color.grace_period(), Duration::from_secs(15));
    }

    #[test]
    fn closed_windows_do_not_suppress() {
        let tracker = InteractionTracker::new();
        let now = Instant::now();
        for control in Control::ALL {
            assert!(!tracker.is_suppressing(control, now));
        }
        assert!(!tracker.any_suppressing(now));
    }

    #[test]
    fn window_suppresses_within_grace_period() {
        let mut tracker = InteractionTracker::new();
        let t0 = Instant::now();
        tracker.open(Control::Brightness, t0);

        assert!(tracker.is_suppressing(Control::Brightness, t0));
        assert!(tracker.is_suppressing(Control::Brightness, t0 + Duration::from_millis(2999)));
        assert!(!tracker.is_suppressing(Control::Brightness, t0 + Duration::from_millis(3000)));
        assert!(!tracker.is_suppressing(Control::Brightness, t0 + Duration::from_secs(60)));
    }

    #[test]
    fn color_window_uses_longer_grace_period() {
        let mut tracker = InteractionTracker::new();
        let t0 = Instant::now();
        tracker.open(Control::Color, t0);

        assert!(tracker.is_suppressing(Control::Color, t0 + Duration::from_secs(14)));
        assert!(!tracker.is_suppressing(Control::Color, t0 + Duration::from_secs(15)));
    }

    #[test]
    fn reopen_refreshes_the_window() {
        let mut tracker = InteractionTracker::new();
        let t0 = Instant::now();
        tracker.open(Control::Mode, t0);

        // A second interaction 2s in restarts the clock
        let t1 = t0 + Duration::from_secs(2);
        tracker.open(Control::Mode, t1);

        assert!(tracker.is_suppressing(Control::Mode, t0 + Duration::from_millis(4500)));
        assert!(!tracker.is_suppressing(Control::Mode, t1 + Duration::from_secs(3)));
    }

    #[test]
    fn close_forces_window_shut() {
        let mut tracker = InteractionTracker::new();
        let t0 = Instant::now();
        tracker.open(Control::Power, t0);
        tracker.close(Control::Power);

        assert!(!tracker.is_suppressing(Control::Power, t0));
    }

    #[test]
    fn windows_are_independent() {
        let mut tracker = InteractionTracker::new();
        let t0 = Instant::now();
        tracker.open(Control::Color, t0);

        assert!(!tracker.is_suppressing(Control::Brightness, t0));
        assert!(tracker.any_suppressing(t0));
    }

    #[test]
    fn sweep_deactivates_expired_windows() {
        let mut tracker = InteractionTracker::new();
        let t0 = Instant::now();
        tracker.open(Control::Brightness, t0);
        tracker.open(Control::Color, t0);

        tracker.sweep(t0 + Duration::from_secs(5));

        // Brightness expired, color still within its 15s period
        assert!(!tracker.is_suppressing(Control::Brightness, t0 + Duration::from_secs(5)));
        assert!(tracker.is_suppressing(Control::Color, t0 + Duration::from_secs(5)));
        assert!(tracker.any_suppressing(t0 + Duration::from_secs(5)));
    }
}
