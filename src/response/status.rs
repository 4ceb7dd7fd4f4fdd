// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use serde::Deserialize;

use crate::types::{Brightness, RgbColor};

/// Full status payload from the device's `/status` endpoint.
///
/// # Examples
///
/// ```
/// use ledsync_lib::response::StatusResponse;
///
/// let json = r#"{
///     "isPoweredOn": true,
///     "brightnessLevel": 7,
///     "currentMode": 1,
///     "customRed": 255,
///     "customGreen": 128,
///     "customBlue": 0,
///     "useCustomColor": false,
///     "deviceName": "Living Room Strip",
///     "wifiSSID": "HomeNet",
///     "macAddress": "AA:BB:CC:DD:EE:FF",
///     "signalStrength": -52,
///     "uptime": 3725
/// }"#;
/// let status: StatusResponse = serde_json::from_str(json).unwrap();
/// assert!(status.is_powered_on);
/// assert_eq!(status.brightness_level, 7);
/// assert_eq!(status.custom_white, 0); // absent on 3-channel variants
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Whether the strip output is on.
    pub is_powered_on: bool,

    /// Brightness on the device's 0-10 scale.
    pub brightness_level: u8,

    /// Currently selected mode index.
    pub current_mode: u8,

    /// Red channel of the custom color.
    pub custom_red: u8,

    /// Green channel of the custom color.
    pub custom_green: u8,

    /// Blue channel of the custom color.
    pub custom_blue: u8,

    /// White channel of the custom color. Absent on 3-channel variants.
    #[serde(default)]
    pub custom_white: u8,

    /// True if the custom color overrides the mode preset.
    pub use_custom_color: bool,

    /// Configured device name.
    #[serde(default)]
    pub device_name: String,

    /// SSID of the network the device joined.
    #[serde(default, rename = "wifiSSID")]
    pub wifi_ssid: String,

    /// Device MAC address.
    #[serde(default)]
    pub mac_address: String,

    /// Wi-Fi signal strength in dBm (negative).
    #[serde(default)]
    pub signal_strength: i32,

    /// Uptime in seconds since last boot.
    #[serde(default)]
    pub uptime: u64,
}

impl StatusResponse {
    /// Returns the custom color channels as an [`RgbColor`].
    #[must_use]
    pub fn color(&self) -> RgbColor {
        RgbColor::new(self.custom_red, self.custom_green, self.custom_blue)
    }

    /// Returns the reported brightness, clamped to the device scale.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        Brightness::clamped(self.brightness_level)
    }
}
