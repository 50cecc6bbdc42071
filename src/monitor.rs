// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Debounced sensor monitoring for the electric lock.
//!
//! The lock's two states are driven by physical inputs: a key switch and an
//! ADC door sensor compared against a fixed threshold. Each signal has a
//! 1-second quiet period after a reported transition; changes inside the
//! quiet period are suppressed. Debounce is a per-signal timestamp, never a
//! sleep, so polling stays non-blocking and the transport thread is never
//! held up.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::types::Epc;

/// ADC reading at or above which the door counts as open.
pub const DOOR_OPEN_THRESHOLD: u16 = 1200;

/// Minimum time between two reported transitions of the same signal.
pub const QUIET_PERIOD: Duration = Duration::from_secs(1);

/// One debounced state transition to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockTransition {
    /// Property to announce (0xE0 lock state, 0xE3 door state).
    pub epc: Epc,
    /// Payload byte: 0x41 unlocked/open, 0x42 locked/closed.
    pub edt: u8,
}

/// Edge detector with a quiet period.
#[derive(Debug, Clone, Copy)]
struct DebouncedSignal {
    /// Last reported level; `true` is the "active" side (unlocked / open).
    active: bool,
    last_change: Option<Instant>,
}

impl DebouncedSignal {
    const fn new() -> Self {
        Self {
            active: false,
            last_change: None,
        }
    }

    /// Reports a transition when the observed level differs from the last
    /// reported one and the quiet period has elapsed. While suppressed, the
    /// reported level does not flip, so a level that persists past the quiet
    /// period is still reported.
    fn observe(&mut self, active: bool, now: Instant) -> bool {
        if active == self.active {
            return false;
        }
        if let Some(last) = self.last_change
            && now.duration_since(last) < QUIET_PERIOD
        {
            return false;
        }
        self.active = active;
        self.last_change = Some(now);
        true
    }
}

/// Polls the lock's key and door sensors and yields debounced transitions.
///
/// Time is passed in by the caller so the polling loop owns its clock and
/// tests control it. Both signals start in the inactive (locked / closed)
/// state, matching the profile's boot values.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use echor_lib::monitor::{LockMonitor, DOOR_OPEN_THRESHOLD};
///
/// let mut monitor = LockMonitor::new();
/// let events = monitor.poll(true, DOOR_OPEN_THRESHOLD, Instant::now());
/// assert_eq!(events.len(), 2); // unlocked + door open
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LockMonitor {
    key: DebouncedSignal,
    door: DebouncedSignal,
}

impl LockMonitor {
    /// Creates a monitor with both signals in the locked/closed state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: DebouncedSignal::new(),
            door: DebouncedSignal::new(),
        }
    }

    /// Feeds one sensor sample, returning the transitions to announce.
    ///
    /// `key_unlocked` is the key switch level; `door_raw` is the raw ADC
    /// reading, compared against [`DOOR_OPEN_THRESHOLD`].
    pub fn poll(&mut self, key_unlocked: bool, door_raw: u16, now: Instant) -> Vec<LockTransition> {
        let mut transitions = Vec::new();

        if self.key.observe(key_unlocked, now) {
            let edt = if key_unlocked { 0x41 } else { 0x42 };
            debug!(unlocked = key_unlocked, "key state change");
            transitions.push(LockTransition {
                epc: Epc::LOCK_STATE,
                edt,
            });
        }

        let door_open = door_raw >= DOOR_OPEN_THRESHOLD;
        if self.door.observe(door_open, now) {
            let edt = if door_open { 0x41 } else { 0x42 };
            debug!(open = door_open, raw = door_raw, "door state change");
            transitions.push(LockTransition {
                epc: Epc::DOOR_STATE,
                edt,
            });
        }

        transitions
    }
}

impl Default for LockMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSED: u16 = 0;
    const OPEN: u16 = DOOR_OPEN_THRESHOLD;

    #[test]
    fn initial_state_reports_nothing() {
        let mut monitor = LockMonitor::new();
        assert!(monitor.poll(false, CLOSED, Instant::now()).is_empty());
    }

    #[test]
    fn unlock_reports_once() {
        let mut monitor = LockMonitor::new();
        let t0 = Instant::now();

        let events = monitor.poll(true, CLOSED, t0);
        assert_eq!(
            events,
            vec![LockTransition {
                epc: Epc::LOCK_STATE,
                edt: 0x41
            }]
        );

        // Same level again: no new report.
        assert!(monitor.poll(true, CLOSED, t0 + QUIET_PERIOD).is_empty());
    }

    #[test]
    fn door_changes_within_quiet_period_are_suppressed() {
        let mut monitor = LockMonitor::new();
        let t0 = Instant::now();

        let events = monitor.poll(false, OPEN, t0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].epc, Epc::DOOR_STATE);
        assert_eq!(events[0].edt, 0x41);

        // Closes again 300ms later: inside the quiet period, suppressed.
        let events = monitor.poll(false, CLOSED, t0 + Duration::from_millis(300));
        assert!(events.is_empty());

        // Still closed after the quiet period: now reported.
        let events = monitor.poll(false, CLOSED, t0 + Duration::from_millis(1100));
        assert_eq!(
            events,
            vec![LockTransition {
                epc: Epc::DOOR_STATE,
                edt: 0x42
            }]
        );
    }

    #[test]
    fn key_and_door_debounce_independently() {
        let mut monitor = LockMonitor::new();
        let t0 = Instant::now();

        // Key transition now...
        let events = monitor.poll(true, CLOSED, t0);
        assert_eq!(events.len(), 1);

        // ...does not block a door transition 100ms later.
        let events = monitor.poll(true, OPEN, t0 + Duration::from_millis(100));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].epc, Epc::DOOR_STATE);
    }

    #[test]
    fn simultaneous_transitions_yield_both() {
        let mut monitor = LockMonitor::new();
        let events = monitor.poll(true, OPEN, Instant::now());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].epc, Epc::LOCK_STATE);
        assert_eq!(events[1].epc, Epc::DOOR_STATE);
    }

    #[test]
    fn threshold_boundary() {
        let mut monitor = LockMonitor::new();
        let t0 = Instant::now();

        // One below the threshold: still closed.
        assert!(monitor.poll(false, DOOR_OPEN_THRESHOLD - 1, t0).is_empty());
        // At the threshold: open.
        let events = monitor.poll(false, DOOR_OPEN_THRESHOLD, t0);
        assert_eq!(events.len(), 1);
    }
}
