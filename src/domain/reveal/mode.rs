// SPDX-License-Identifier: MPL-2.0
//! Input policy selecting which pointer events may move the divider.

use std::fmt;
use std::str::FromStr;

/// Interaction policy of a reveal slider, fixed for the lifetime of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlideMode {
    /// Divider follows the pointer whenever it moves over the widget.
    Hover,
    /// Currently tracks the pointer exactly like [`SlideMode::Hover`].
    Click,
    /// Divider follows the pointer only between a press and its release.
    #[default]
    Drag,
}

impl SlideMode {
    /// All modes, in display order.
    pub const ALL: [SlideMode; 3] = [SlideMode::Hover, SlideMode::Click, SlideMode::Drag];

    /// Returns the lowercase identifier used in settings files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SlideMode::Hover => "hover",
            SlideMode::Click => "click",
            SlideMode::Drag => "drag",
        }
    }

    /// Returns whether moves are honored without a preceding press.
    #[must_use]
    pub fn tracks_without_press(self) -> bool {
        matches!(self, SlideMode::Hover | SlideMode::Click)
    }
}

impl fmt::Display for SlideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown slide mode identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlideMode(pub String);

impl fmt::Display for UnknownSlideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown slide mode '{}' (expected hover, click or drag)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSlideMode {}

impl FromStr for SlideMode {
    type Err = UnknownSlideMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hover" => Ok(SlideMode::Hover),
            "click" => Ok(SlideMode::Click),
            "drag" => Ok(SlideMode::Drag),
            _ => Err(UnknownSlideMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!("hover".parse(), Ok(SlideMode::Hover));
        assert_eq!("Click".parse(), Ok(SlideMode::Click));
        assert_eq!(" DRAG ".parse(), Ok(SlideMode::Drag));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "swipe".parse::<SlideMode>().unwrap_err();
        assert!(err.to_string().contains("swipe"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in SlideMode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn only_drag_requires_press() {
        assert!(SlideMode::Hover.tracks_without_press());
        assert!(SlideMode::Click.tracks_without_press());
        assert!(!SlideMode::Drag.tracks_without_press());
    }
}
