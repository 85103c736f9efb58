// SPDX-License-Identifier: MPL-2.0
//! Reveal slider domain types.
//!
//! Value objects shared by the slider widget and the configuration layer,
//! independent of any presentation framework.

pub mod mode;
pub mod newtypes;

pub use mode::{SlideMode, UnknownSlideMode};
pub use newtypes::{AutoplayStep, RevealPercent};
