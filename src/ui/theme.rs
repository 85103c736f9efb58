// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the comparison view.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Flat surface behind the images.
pub fn reveal_surface_color(is_dark: bool) -> Color {
    if is_dark {
        palette::GRAY_900
    } else {
        palette::GRAY_100
    }
}

/// Style for the container holding the comparison canvas.
pub fn reveal_surface_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        ..Default::default()
    }
}

// ============================================================================
// Divider and Handle
// ============================================================================

/// Divider line and handle outline.
pub fn reveal_divider_color() -> Color {
    WHITE
}

/// Fill of the round handle.
pub fn reveal_handle_fill_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Chevrons drawn inside the handle.
pub fn reveal_handle_arrow_color() -> Color {
    WHITE
}

/// Background of the Before/After labels.
pub fn reveal_label_background() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}
