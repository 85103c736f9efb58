// SPDX-License-Identifier: MPL-2.0
//! Reveal renderer: divider, handle, and clipped foreground image.
//!
//! [`RevealGeometry::compute`] is a pure mapping from the current percentage
//! to the shapes drawn by [`RevealCanvas`]. The canvas redraws on every
//! state change; nothing here throttles or caches between frames.

use super::pointer::RawPointer;
use super::Message;
use crate::domain::reveal::{RevealPercent, SlideMode};
use crate::media::ImageData;
use crate::ui::theme;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{mouse, touch, Point, Rectangle, Size};

/// Shapes derived from a reveal percentage, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGeometry {
    /// Logical divider position.
    pub divider_x: f32,
    /// Vertical strip centered on `divider_x`.
    pub divider: Rectangle,
    /// Region of the foreground image left visible.
    pub clip: Rectangle,
    /// Handle centered on the divider, if enabled.
    pub handle: Option<Rectangle>,
}

impl RevealGeometry {
    #[must_use]
    pub fn compute(
        percent: RevealPercent,
        size: Size,
        divider_width: f32,
        handle: Option<Size>,
    ) -> Self {
        let divider_x = size.width * percent.as_fraction();

        let divider = Rectangle {
            x: divider_x - divider_width / 2.0,
            y: 0.0,
            width: divider_width,
            height: size.height,
        };

        let clip = Rectangle {
            x: 0.0,
            y: 0.0,
            width: divider_x,
            height: size.height,
        };

        let handle = handle.map(|handle_size| Rectangle {
            x: divider_x - handle_size.width / 2.0,
            y: (size.height - handle_size.height) / 2.0,
            width: handle_size.width,
            height: handle_size.height,
        });

        Self {
            divider_x,
            divider,
            clip,
            handle,
        }
    }
}

/// Fits an image of `image` size inside `bounds`, preserving aspect ratio.
///
/// Returns the centered display rectangle, or `None` if either size is empty.
#[must_use]
pub fn contain_fit(image: Size, bounds: Size) -> Option<Rectangle> {
    if image.width <= 0.0 || image.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0
    {
        return None;
    }

    let img_aspect = image.width / image.height;
    let bounds_aspect = bounds.width / bounds.height;

    let rect = if img_aspect > bounds_aspect {
        // Image is wider - fit to width
        let display_height = bounds.width / img_aspect;
        Rectangle {
            x: 0.0,
            y: (bounds.height - display_height) / 2.0,
            width: bounds.width,
            height: display_height,
        }
    } else {
        // Image is taller - fit to height
        let display_width = bounds.height * img_aspect;
        Rectangle {
            x: (bounds.width - display_width) / 2.0,
            y: 0.0,
            width: display_width,
            height: bounds.height,
        }
    };

    Some(rect)
}

/// Canvas program drawing the comparison and reporting pointer input.
pub struct RevealCanvas<'a> {
    pub before: &'a ImageData,
    pub after: &'a ImageData,
    pub percent: RevealPercent,
    pub mode: SlideMode,
    pub dragging: bool,
    pub handle: Option<Size>,
    pub divider_width: f32,
}

impl RevealCanvas<'_> {
    /// Decides whether the canvas reports this input.
    ///
    /// Presses outside the widget are reported in hover and click modes so a
    /// finger that lands outside is still tracked once it slides over. During
    /// a drag, moves arrive through the window-level listeners instead.
    /// Releases are always reported; ending a drag twice is a no-op.
    fn forwards(&self, raw: RawPointer, inside: bool) -> bool {
        if raw.is_press() {
            inside || self.mode.tracks_without_press()
        } else if raw.is_release() {
            true
        } else {
            inside && !self.dragging && self.mode.tracks_without_press()
        }
    }

    fn draw_handle(&self, frame: &mut Frame, rect: Rectangle) {
        let center = rect.center();
        let radius = rect.width.min(rect.height) / 2.0;

        let circle = Path::circle(center, radius);
        frame.fill(&circle, theme::reveal_handle_fill_color());
        frame.stroke(
            &circle,
            Stroke::default()
                .with_width(self.divider_width)
                .with_color(theme::reveal_divider_color()),
        );

        // Left and right chevrons
        let arm = radius * 0.35;
        let gap = radius * 0.2;
        let arrow_color = theme::reveal_handle_arrow_color();
        for direction in [-1.0_f32, 1.0] {
            let tip = Point::new(center.x + direction * (gap + arm), center.y);
            let base_x = center.x + direction * gap;
            let arrow = Path::new(|builder| {
                builder.move_to(tip);
                builder.line_to(Point::new(base_x, center.y - arm));
                builder.line_to(Point::new(base_x, center.y + arm));
                builder.close();
            });
            frame.fill(&arrow, arrow_color);
        }
    }
}

/// Canvas-local memory of what was last reported to the slider.
#[derive(Debug, Default)]
pub struct CanvasState {
    reported: Option<Rectangle>,
}

impl canvas::Program<Message> for RevealCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let inside = match event {
            iced::Event::Touch(
                touch::Event::FingerPressed { position, .. }
                | touch::Event::FingerMoved { position, .. },
            ) => bounds.contains(*position),
            _ => cursor.is_over(bounds),
        };

        let forwarded = RawPointer::from_event(event, cursor.position())
            .filter(|raw| self.forwards(*raw, inside));

        let action = match forwarded {
            Some(raw) => {
                let action = Action::publish(Message::Pointer { bounds, input: raw });
                if raw.is_press() && inside {
                    action.and_capture()
                } else {
                    action
                }
            }
            // Widget messages are handled before the window listeners' moves,
            // so a relayout mid-drag is known before the next move resolves
            None if state.reported != Some(bounds) => {
                Action::publish(Message::Resized { bounds })
            }
            None => return None,
        };

        state.reported = Some(bounds);
        Some(action)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let geometry =
            RevealGeometry::compute(self.percent, bounds.size(), self.divider_width, self.handle);

        // Both layers share the background's fitted rectangle so they stay aligned
        if let Some(image_rect) = contain_fit(self.after.size(), bounds.size()) {
            frame.draw_image(image_rect, canvas::Image::new(self.after.handle.clone()));

            if geometry.clip.width > 0.0 {
                let before = canvas::Image::new(self.before.handle.clone());
                frame.with_clip(geometry.clip, |clipped| {
                    clipped.draw_image(image_rect, before);
                });
            }
        }

        frame.fill_rectangle(
            geometry.divider.position(),
            geometry.divider.size(),
            theme::reveal_divider_color(),
        );

        if let Some(handle) = geometry.handle {
            self.draw_handle(&mut frame, handle);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            return mouse::Interaction::Grabbing;
        }
        if !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        match self.mode {
            SlideMode::Drag => mouse::Interaction::Grab,
            SlideMode::Hover | SlideMode::Click => mouse::Interaction::ResizingHorizontally,
        }
    }
}
