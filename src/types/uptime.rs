// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Uptime display formatting.
//!
//! The device reports uptime as a raw seconds counter; the UI shows it as
//! `"HHh MMm SSs"` with zero-padded fields so the text width stays constant
//! across refreshes.

/// Formats an uptime seconds counter for display.
///
/// Days are folded into the hour field, so long uptimes read as e.g.
/// `"49h 10m 00s"`.
///
/// # Examples
///
/// ```
/// use ledsync_lib::types::format_uptime;
///
/// assert_eq!(format_uptime(0), "00h 00m 00s");
/// assert_eq!(format_uptime(3725), "01h 02m 05s");
/// assert_eq!(format_uptime(177_000), "49h 10m 00s");
/// ```
#[must_use]
pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}h {minutes:02}m {seconds:02}s")
}
