// SPDX-License-Identifier: MPL-2.0
//! Pointer position to reveal percentage conversion.

use super::pointer::PointerSample;
use crate::domain::reveal::RevealPercent;
use iced::Rectangle;

/// Horizontal extent of the slider in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetBounds {
    pub left: f32,
    pub width: f32,
}

impl WidgetBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Returns whether layout has produced a usable width.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.left.is_finite()
    }
}

impl From<Rectangle> for WidgetBounds {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.width)
    }
}

/// Converts a pointer sample into a clamped reveal percentage.
///
/// Returns `None` while the widget is unmeasured or the sample is not a
/// finite coordinate; the caller then leaves the current percentage alone.
#[must_use]
pub fn resolve(bounds: WidgetBounds, sample: PointerSample) -> Option<RevealPercent> {
    if !bounds.is_measured() || !sample.x.is_finite() {
        return None;
    }

    let percent = (sample.x - bounds.left) / bounds.width * 100.0;
    Some(RevealPercent::new(percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn at(x: f32) -> PointerSample {
        PointerSample::new(x)
    }

    #[test]
    fn resolves_inside_bounds() {
        let bounds = WidgetBounds::new(0.0, 400.0);
        let percent = resolve(bounds, at(300.0)).expect("measured bounds");
        assert_abs_diff_eq!(percent.value(), 75.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn accounts_for_left_offset() {
        let bounds = WidgetBounds::new(100.0, 200.0);
        let percent = resolve(bounds, at(150.0)).expect("measured bounds");
        assert_abs_diff_eq!(percent.value(), 25.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn clamps_overshoot_on_both_sides() {
        let bounds = WidgetBounds::new(50.0, 400.0);
        assert_eq!(resolve(bounds, at(5000.0)).map(RevealPercent::value), Some(100.0));
        assert_eq!(resolve(bounds, at(-5000.0)).map(RevealPercent::value), Some(0.0));
    }

    #[test]
    fn clamping_holds_across_a_wide_sweep() {
        let bounds = WidgetBounds::new(-30.0, 123.0);
        let mut x = -10_000.0_f32;
        while x <= 10_000.0 {
            let value = resolve(bounds, at(x)).expect("measured bounds").value();
            assert!((0.0..=100.0).contains(&value), "x={x} gave {value}");
            x += 37.5;
        }
    }

    #[test]
    fn unmeasured_bounds_are_skipped() {
        assert!(resolve(WidgetBounds::new(0.0, 0.0), at(10.0)).is_none());
        assert!(resolve(WidgetBounds::new(0.0, -5.0), at(10.0)).is_none());
        assert!(resolve(WidgetBounds::new(0.0, f32::NAN), at(10.0)).is_none());
    }

    #[test]
    fn non_finite_sample_is_skipped() {
        let bounds = WidgetBounds::new(0.0, 400.0);
        assert!(resolve(bounds, at(f32::NAN)).is_none());
        assert!(resolve(bounds, at(f32::INFINITY)).is_none());
    }

    #[test]
    fn bounds_from_rectangle_use_x_and_width() {
        let rect = Rectangle::new(iced::Point::new(20.0, 80.0), iced::Size::new(300.0, 10.0));
        assert_eq!(WidgetBounds::from(rect), WidgetBounds::new(20.0, 300.0));
    }
}
