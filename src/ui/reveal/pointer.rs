// SPDX-License-Identifier: MPL-2.0
//! Mouse and touch unification.
//!
//! Iced reports mouse and touch input with different shapes. This module
//! reduces both to a [`PointerEvent`] carrying only the horizontal window
//! coordinate, so the controller and resolver never branch on device type.
//!
//! Conversion happens in two steps:
//! 1. [`RawPointer::from_event`] is stateless and keeps finger ids, so it can
//!    run inside a subscription filter.
//! 2. [`TouchTracker::unify`] is owned by the slider state and drops every
//!    finger except the first one down.

use iced::{mouse, touch, Point};

/// A horizontal pointer position in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f32) -> Self {
        Self { x }
    }
}

/// Device-independent pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up,
}

/// Device-tagged pointer input, before multi-touch filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointer {
    MouseDown { x: f32 },
    MouseMove { x: f32 },
    MouseUp,
    FingerDown { finger: touch::Finger, x: f32 },
    FingerMove { finger: touch::Finger, x: f32 },
    FingerUp { finger: touch::Finger },
}

impl RawPointer {
    /// Extracts pointer input from a native event.
    ///
    /// Mouse button events carry no position, so `cursor` supplies it for
    /// presses. A press without a known cursor position is dropped.
    #[must_use]
    pub fn from_event(event: &iced::Event, cursor: Option<Point>) -> Option<Self> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.map(|position| RawPointer::MouseDown { x: position.x })
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(RawPointer::MouseMove { x: position.x })
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(RawPointer::MouseUp)
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                Some(RawPointer::FingerDown {
                    finger: *id,
                    x: position.x,
                })
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                Some(RawPointer::FingerMove {
                    finger: *id,
                    x: position.x,
                })
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => Some(RawPointer::FingerUp { finger: *id }),
            _ => None,
        }
    }

    /// Returns whether this input starts a gesture.
    #[must_use]
    pub fn is_press(self) -> bool {
        matches!(
            self,
            RawPointer::MouseDown { .. } | RawPointer::FingerDown { .. }
        )
    }

    /// Returns whether this input ends a gesture.
    #[must_use]
    pub fn is_release(self) -> bool {
        matches!(self, RawPointer::MouseUp | RawPointer::FingerUp { .. })
    }
}

/// Tracks the first active finger so additional touch points are ignored.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    primary: Option<touch::Finger>,
}

impl TouchTracker {
    /// Collapses device-tagged input into a [`PointerEvent`].
    ///
    /// Returns `None` for input from secondary fingers and for releases of
    /// fingers that were never tracked.
    pub fn unify(&mut self, raw: RawPointer) -> Option<PointerEvent> {
        match raw {
            RawPointer::MouseDown { x } => Some(PointerEvent::Down(PointerSample::new(x))),
            RawPointer::MouseMove { x } => Some(PointerEvent::Move(PointerSample::new(x))),
            RawPointer::MouseUp => Some(PointerEvent::Up),
            RawPointer::FingerDown { finger, x } => {
                if self.primary.is_some() {
                    return None;
                }
                self.primary = Some(finger);
                Some(PointerEvent::Down(PointerSample::new(x)))
            }
            RawPointer::FingerMove { finger, x } => (self.primary == Some(finger))
                .then_some(PointerEvent::Move(PointerSample::new(x))),
            RawPointer::FingerUp { finger } => {
                if self.primary != Some(finger) {
                    return None;
                }
                self.primary = None;
                Some(PointerEvent::Up)
            }
        }
    }

    /// Forgets the tracked finger.
    pub fn reset(&mut self) {
        self.primary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: touch::Finger = touch::Finger(1);
    const SECOND: touch::Finger = touch::Finger(2);

    #[test]
    fn mouse_press_uses_cursor_position() {
        let event = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            RawPointer::from_event(&event, Some(Point::new(12.0, 40.0))),
            Some(RawPointer::MouseDown { x: 12.0 })
        );
        assert_eq!(RawPointer::from_event(&event, None), None);
    }

    #[test]
    fn right_button_is_ignored() {
        let event = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(
            RawPointer::from_event(&event, Some(Point::new(1.0, 1.0))),
            None
        );
    }

    #[test]
    fn finger_events_keep_their_id() {
        let event = iced::Event::Touch(touch::Event::FingerMoved {
            id: FIRST,
            position: Point::new(30.0, 5.0),
        });
        assert_eq!(
            RawPointer::from_event(&event, None),
            Some(RawPointer::FingerMove {
                finger: FIRST,
                x: 30.0
            })
        );
    }

    #[test]
    fn lost_finger_counts_as_release() {
        let event = iced::Event::Touch(touch::Event::FingerLost {
            id: FIRST,
            position: Point::ORIGIN,
        });
        let raw = RawPointer::from_event(&event, None).expect("finger lost should map");
        assert!(raw.is_release());
    }

    #[test]
    fn mouse_and_touch_unify_to_same_events() {
        let mut tracker = TouchTracker::default();
        let from_mouse = tracker.unify(RawPointer::MouseMove { x: 10.0 });
        tracker.unify(RawPointer::FingerDown {
            finger: FIRST,
            x: 0.0,
        });
        let from_touch = tracker.unify(RawPointer::FingerMove {
            finger: FIRST,
            x: 10.0,
        });
        assert_eq!(from_mouse, from_touch);
    }

    #[test]
    fn second_finger_is_ignored_until_first_lifts() {
        let mut tracker = TouchTracker::default();
        assert!(tracker
            .unify(RawPointer::FingerDown {
                finger: FIRST,
                x: 5.0
            })
            .is_some());
        assert!(tracker
            .unify(RawPointer::FingerDown {
                finger: SECOND,
                x: 50.0
            })
            .is_none());
        assert!(tracker
            .unify(RawPointer::FingerMove {
                finger: SECOND,
                x: 60.0
            })
            .is_none());
        assert!(tracker
            .unify(RawPointer::FingerUp { finger: SECOND })
            .is_none());
        assert_eq!(
            tracker.unify(RawPointer::FingerMove {
                finger: FIRST,
                x: 7.0
            }),
            Some(PointerEvent::Move(PointerSample::new(7.0)))
        );

        assert_eq!(
            tracker.unify(RawPointer::FingerUp { finger: FIRST }),
            Some(PointerEvent::Up)
        );
        assert!(tracker
            .unify(RawPointer::FingerMove {
                finger: FIRST,
                x: 8.0
            })
            .is_none());
    }

    #[test]
    fn release_of_untracked_finger_is_a_no_op() {
        let mut tracker = TouchTracker::default();
        assert!(tracker
            .unify(RawPointer::FingerUp { finger: FIRST })
            .is_none());
    }
}
