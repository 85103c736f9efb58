// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Reveal**: Initial divider position
//! - **Autoplay**: Timer period and step bounds
//! - **Handle**: Handlebar visibility

use crate::domain::reveal::newtypes::{autoplay_step_bounds, reveal_bounds};

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default divider position when a comparison opens (50% = centered).
pub const DEFAULT_INITIAL_PERCENT: f32 = reveal_bounds::DEFAULT_PERCENT;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default autoplay period in milliseconds (0 = disabled).
pub const DEFAULT_AUTOPLAY_DURATION_MS: u64 = 0;

/// Longest accepted autoplay period (one minute per tick).
pub const MAX_AUTOPLAY_DURATION_MS: u64 = 60_000;

/// Default percentage advanced per autoplay tick.
pub const DEFAULT_AUTOPLAY_STEP: f32 = autoplay_step_bounds::DEFAULT;

// ==========================================================================
// Handle Defaults
// ==========================================================================

/// Whether the drag handle is drawn by default.
pub const DEFAULT_SHOW_HANDLEBAR: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_INITIAL_PERCENT >= reveal_bounds::MIN_PERCENT);
    assert!(DEFAULT_INITIAL_PERCENT <= reveal_bounds::MAX_PERCENT);
    assert!(DEFAULT_AUTOPLAY_DURATION_MS <= MAX_AUTOPLAY_DURATION_MS);
    assert!(DEFAULT_AUTOPLAY_STEP >= autoplay_step_bounds::MIN);
    assert!(DEFAULT_AUTOPLAY_STEP <= autoplay_step_bounds::MAX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_defaults_are_valid() {
        assert_eq!(DEFAULT_INITIAL_PERCENT, 50.0);
    }

    #[test]
    fn autoplay_is_disabled_by_default() {
        assert_eq!(DEFAULT_AUTOPLAY_DURATION_MS, 0);
        assert!(DEFAULT_AUTOPLAY_STEP > 0.0);
    }
}
