// SPDX-License-Identifier: MPL-2.0
//! Image loading for the comparison pair.

pub mod image;

pub use image::{load_image, load_image_async, ImageData};

/// Which layer of the comparison an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Foreground layer, clipped to the left of the divider.
    Before,
    /// Background layer, always fully drawn.
    After,
}
