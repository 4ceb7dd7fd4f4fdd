// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing.
//!
//! This module provides the RGB color representation exchanged with the
//! device's `/color` endpoint and shown in the UI as a hex string.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// RGB color with 8-bit channels (0-255).
///
/// Colors travel to the device as individual channel values and are displayed
/// in the UI as a `#RRGGBB` hex string.
///
/// # Examples
///
/// ```
/// use ledsync_lib::types::RgbColor;
///
/// // Create from RGB values
/// let color = RgbColor::new(255, 128, 0);  // Orange
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.green(), 128);
/// assert_eq!(color.blue(), 0);
///
/// // Parse from a color-picker hex string
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red.red(), 255);
///
/// // Convert back to hex for display
/// assert_eq!(red.to_hex(), "FF0000");
/// assert_eq!(red.to_hex_with_hash(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    ///
    /// # Arguments
    ///
    /// * `red` - Red component (0-255)
    /// * `green` - Green component (0-255)
    /// * `blue` - Blue component (0-255)
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts exactly six hex digits, with or without a leading `#`
    /// (`#RRGGBB` or `RRGGBB`). Digit case does not matter. Color pickers
    /// only produce this format, so anything else is rejected outright
    /// rather than guessed at.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHexColor`] if the string has the wrong
    /// length or contains non-hex characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledsync_lib::types::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF5733").unwrap();
    /// assert_eq!(color.red(), 255);
    /// assert_eq!(color.green(), 87);
    /// assert_eq!(color.blue(), 51);
    ///
    /// // Without hash, lower case
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color.green(), 255);
    ///
    /// // Shorthand and garbage are rejected
    /// assert!(RgbColor::from_hex("#F00").is_err());
    /// assert!(RgbColor::from_hex("#GG0000").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 {
            return Err(ParseError::InvalidHexColor(hex.to_string()));
        }

        let r = parse_hex_pair(&digits[0..2])?;
        let g = parse_hex_pair(&digits[2..4])?;
        let b = parse_hex_pair(&digits[4..6])?;
        Ok(Self::new(r, g, b))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as an upper-case hex string without the hash prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledsync_lib::types::RgbColor;
    ///
    /// let color = RgbColor::new(255, 128, 0);
    /// assert_eq!(color.to_hex(), "FF8000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the color as an upper-case hex string with the hash prefix.
    ///
    /// Output case is fixed regardless of what was parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledsync_lib::types::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ff8000").unwrap();
    /// assert_eq!(color.to_hex_with_hash(), "#FF8000");
    /// ```
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Creates a black color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

impl FromStr for RgbColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

// Helper function to parse a two-character hex pair
fn parse_hex_pair(s: &str) -> Result<u8, ParseError> {
    u8::from_str_radix(s, 16).map_err(|_| ParseError::InvalidHexColor(s.to_string()))
}
