// SPDX-License-Identifier: MPL-2.0
//! `iced_reveal` is a before/after image comparison viewer built with the Iced GUI framework.
//!
//! Two images are stacked and a draggable vertical divider reveals the
//! foreground image left of it. The divider either follows the pointer
//! whenever it moves over the widget (hover and click modes) or only while it
//! is dragged, and can be advanced by an autoplay timer.

#![doc(html_root_url = "https://docs.rs/iced_reveal/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
