// SPDX-License-Identifier: MPL-2.0
//! Timer-driven advancement of the reveal position.

use crate::domain::reveal::{AutoplayStep, RevealPercent};
use std::time::Duration;

/// Autoplay configuration of one slider instance.
///
/// The timer itself is a subscription keyed by the period, so replacing the
/// period (or disabling it) is enough to tear the old timer down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Autoplay {
    period: Option<Duration>,
    step: AutoplayStep,
}

impl Autoplay {
    /// Creates the driver from a period in milliseconds. Zero disables it.
    #[must_use]
    pub fn new(period_ms: u64, step: AutoplayStep) -> Self {
        Self {
            period: (period_ms > 0).then(|| Duration::from_millis(period_ms)),
            step,
        }
    }

    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.period.is_some()
    }

    /// Replaces the period. Returns whether it actually changed.
    pub fn set_period_ms(&mut self, period_ms: u64) -> bool {
        let next = Self::new(period_ms, self.step).period;
        if next == self.period {
            return false;
        }
        self.period = next;
        true
    }

    pub fn disable(&mut self) {
        self.period = None;
    }

    /// Computes the position after one tick.
    ///
    /// Moves right by the step, stopping at 100; a tick taken at 100 wraps
    /// back to 0.
    #[must_use]
    pub fn advance(&self, current: RevealPercent) -> RevealPercent {
        if current.is_max() {
            RevealPercent::new(0.0)
        } else {
            RevealPercent::new(current.value() + self.step.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_period_disables_autoplay() {
        let autoplay = Autoplay::new(0, AutoplayStep::default());
        assert!(!autoplay.is_enabled());
        assert_eq!(autoplay.period(), None);
    }

    #[test]
    fn positive_period_enables_autoplay() {
        let autoplay = Autoplay::new(40, AutoplayStep::default());
        assert_eq!(autoplay.period(), Some(Duration::from_millis(40)));
    }

    #[test]
    fn advance_moves_by_step() {
        let autoplay = Autoplay::new(10, AutoplayStep::new(2.5));
        let next = autoplay.advance(RevealPercent::new(50.0));
        assert_eq!(next.value(), 52.5);
    }

    #[test]
    fn advance_stops_at_right_edge_before_wrapping() {
        let autoplay = Autoplay::new(10, AutoplayStep::new(3.0));
        let at_edge = autoplay.advance(RevealPercent::new(99.0));
        assert_eq!(at_edge.value(), 100.0);
        assert_eq!(autoplay.advance(at_edge).value(), 0.0);
    }

    #[test]
    fn repeated_ticks_stay_in_range_and_wrap() {
        let autoplay = Autoplay::new(10, AutoplayStep::new(7.0));
        let mut percent = RevealPercent::new(95.0);
        let mut wrapped = false;
        for _ in 0..100 {
            let next = autoplay.advance(percent);
            assert!((0.0..=100.0).contains(&next.value()));
            if next.value() < percent.value() {
                assert!(percent.is_max());
                assert!(next.is_min());
                wrapped = true;
            }
            percent = next;
        }
        assert!(wrapped);
    }

    #[test]
    fn set_period_reports_changes_only() {
        let mut autoplay = Autoplay::new(50, AutoplayStep::default());
        assert!(!autoplay.set_period_ms(50));
        assert!(autoplay.set_period_ms(20));
        assert!(autoplay.set_period_ms(0));
        assert!(!autoplay.is_enabled());
    }
}
