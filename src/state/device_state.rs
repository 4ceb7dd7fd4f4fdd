// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::profile::DeviceProfile;
use crate::response::StatusResponse;
use crate::types::{Brightness, RgbColor};

/// Tracked state of a strip controller.
///
/// A single mutable record owned by the reconciliation loop. Command success
/// handlers apply optimistic updates to individual fields; a poll replaces
/// the whole record, since the device is authoritative whenever no
/// interaction window suppresses it.
///
/// Invariant: when `use_custom_color` is true, `color` holds the last
/// explicitly chosen channels regardless of `current_mode`; when false,
/// displays derive the color from the mode's preset table via
/// [`display_color`](Self::display_color).
///
/// # Examples
///
/// ```
/// use ledsync_lib::state::DeviceState;
/// use ledsync_lib::types::Brightness;
///
/// let mut state = DeviceState::new();
/// state.brightness = Brightness::new(7).unwrap();
/// assert_eq!(state.brightness.as_percent(), 70);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    /// Whether the strip output is on.
    pub powered_on: bool,
    /// Brightness on the device's 0-10 scale.
    pub brightness: Brightness,
    /// Currently selected mode index.
    pub current_mode: u8,
    /// Custom color channels (last explicitly set, or preset-derived).
    pub color: RgbColor,
    /// White channel value. Meaningful only on 4-channel variants.
    pub white: u8,
    /// True if `color` overrides the mode preset.
    pub use_custom_color: bool,
    /// Configured device name.
    pub device_name: String,
    /// SSID of the network the device joined.
    pub wifi_network: String,
    /// Device MAC address.
    pub mac_address: String,
    /// Wi-Fi signal strength in dBm.
    pub signal_strength: i32,
    /// Uptime in seconds since last boot.
    pub uptime_secs: u64,
}

impl DeviceState {
    /// Creates the initial state assumed before the first poll lands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            powered_on: false,
            brightness: Brightness::MAX,
            current_mode: 0,
            color: RgbColor::white(),
            white: 255,
            use_custom_color: false,
            device_name: String::new(),
            wifi_network: String::new(),
            mac_address: String::new(),
            signal_strength: 0,
            uptime_secs: 0,
        }
    }

    /// Normalizes a `/status` payload into a full state record.
    ///
    /// This is a complete replacement, not a merge; every field comes from
    /// the payload.
    #[must_use]
    pub fn from_status(status: &StatusResponse) -> Self {
        Self {
            powered_on: status.is_powered_on,
            brightness: status.brightness(),
            current_mode: status.current_mode,
            color: status.color(),
            white: status.custom_white,
            use_custom_color: status.use_custom_color,
            device_name: status.device_name.clone(),
            wifi_network: status.wifi_ssid.clone(),
            mac_address: status.mac_address.clone(),
            signal_strength: status.signal_strength,
            uptime_secs: status.uptime,
        }
    }

    /// Returns the color a display should show for this state.
    ///
    /// The custom color when `use_custom_color` is set, otherwise the preset
    /// for `current_mode` (placeholder grey for the effects mode). No network
    /// call is involved.
    #[must_use]
    pub fn display_color(&self, profile: &DeviceProfile) -> RgbColor {
        if self.use_custom_color {
            self.color
        } else {
            profile.display_color(self.current_mode)
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse connection health, updated after every device request.
///
/// Consumed by the projector only; no error detail is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No request has completed yet.
    #[default]
    Loading,
    /// The last request succeeded.
    Connected,
    /// The last request failed.
    Error,
}

impl ConnectionStatus {
    /// Returns true if the last request succeeded.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Returns true if the last request failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Read-only view handed to the projector.
///
/// Published over a watch channel after every state or status change; the
/// projector renders it and must not mutate core state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateSnapshot {
    /// Current device state.
    pub state: DeviceState,
    /// Current connection health.
    pub connection: ConnectionStatus,
}
