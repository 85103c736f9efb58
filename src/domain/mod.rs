// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects and rules. It depends on `std`
//! only, so it can be tested without a windowing system.
//!
//! # Modules
//!
//! - [`reveal`]: Slider value objects ([`RevealPercent`](reveal::RevealPercent),
//!   [`AutoplayStep`](reveal::AutoplayStep), [`SlideMode`](reveal::SlideMode))

pub mod reveal;
