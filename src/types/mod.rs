// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for LED strip controller state.
//!
//! This module provides type-safe representations of values exchanged with
//! the device. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`Brightness`] - Brightness level on the device's 0-10 scale
//! - [`RgbColor`] - RGB color with hex string parsing and formatting
//! - [`format_uptime`] - Uptime seconds counter display formatting

mod brightness;
mod rgb_color;
mod uptime;

pub use brightness::Brightness;
pub use rgb_color::RgbColor;
pub use uptime::format_uptime;
