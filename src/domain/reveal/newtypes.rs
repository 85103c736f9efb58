// SPDX-License-Identifier: MPL-2.0
//! Reveal slider newtypes.
//!
//! These wrappers keep slider values inside their valid ranges so the
//! widget never has to clamp at usage sites.

// =============================================================================
// Reveal Bounds
// =============================================================================

/// Reveal percentage bounds (0% to 100%).
pub mod reveal_bounds {
    /// Divider at the left edge, background image fully visible.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Divider at the right edge, foreground image fully visible.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Divider centered.
    pub const DEFAULT_PERCENT: f32 = 50.0;
}

/// Autoplay step bounds, in percent per tick.
pub mod autoplay_step_bounds {
    pub const MIN: f32 = 0.1;
    pub const MAX: f32 = 25.0;
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// RevealPercent
// =============================================================================

/// Horizontal divider position as a percentage of the widget width.
///
/// Always within `[0, 100]`. NaN input collapses to the left edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealPercent(f32);

impl RevealPercent {
    /// Creates a new reveal percentage, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(reveal_bounds::MIN_PERCENT);
        }
        Self(percent.clamp(reveal_bounds::MIN_PERCENT, reveal_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the width (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns whether the divider sits on the left edge.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= reveal_bounds::MIN_PERCENT
    }

    /// Returns whether the divider sits on the right edge.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= reveal_bounds::MAX_PERCENT
    }
}

impl Default for RevealPercent {
    fn default() -> Self {
        Self(reveal_bounds::DEFAULT_PERCENT)
    }
}

// =============================================================================
// AutoplayStep
// =============================================================================

/// Percentage added to the reveal position on each autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayStep(f32);

impl AutoplayStep {
    /// Creates a new step, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(autoplay_step_bounds::MIN, autoplay_step_bounds::MAX))
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for AutoplayStep {
    fn default() -> Self {
        Self(autoplay_step_bounds::DEFAULT)
    }
}
