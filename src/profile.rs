// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device variant profiles.
//!
//! The two supported strip controllers differ only in their channel layout
//! and preset table: the WS2812B variant drives 3-channel RGB strips with
//! eight presets, the SK6812 variant drives 4-channel RGB+W strips with nine
//! (the extra slot is a dedicated pure-white preset). The reconciliation and
//! suppression logic is identical for both, so the divergence is captured
//! here as data rather than as separate code paths.

use crate::types::RgbColor;

/// Channel layout of a strip variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// 3-channel RGB strip (WS2812B).
    Rgb,
    /// 4-channel RGB + dedicated white strip (SK6812).
    Rgbw,
}

/// Placeholder shown for the effects mode in RGB summary displays.
///
/// The effects mode cycles colors on the device, so no single color is
/// truthful; displays use a neutral grey instead.
pub const EFFECTS_PLACEHOLDER: RgbColor = RgbColor::new(128, 128, 128);

const RGB_PRESETS: [RgbColor; 8] = [
    RgbColor::new(255, 255, 255), // White
    RgbColor::new(255, 0, 0),     // Red
    RgbColor::new(0, 255, 0),     // Green
    RgbColor::new(0, 0, 255),     // Blue
    RgbColor::new(255, 255, 0),   // Yellow
    RgbColor::new(255, 0, 255),   // Purple
    RgbColor::new(0, 255, 255),   // Cyan
    RgbColor::new(255, 165, 0),   // Orange
];

const RGBW_PRESETS: [RgbColor; 9] = [
    RgbColor::new(255, 255, 255), // Bright White
    RgbColor::new(255, 0, 0),     // Red
    RgbColor::new(0, 255, 0),     // Green
    RgbColor::new(0, 0, 255),     // Blue
    RgbColor::new(255, 255, 0),   // Yellow
    RgbColor::new(255, 0, 255),   // Purple
    RgbColor::new(0, 255, 255),   // Cyan
    RgbColor::new(255, 165, 0),   // Orange
    RgbColor::new(255, 255, 255), // Pure White (white channel only on device)
];

/// Profile describing one strip controller variant.
///
/// A profile bundles the channel layout, the preset color table, and the
/// effects mode index, which is always the highest mode and carries no fixed
/// preset color.
///
/// # Examples
///
/// ```
/// use ledsync_lib::profile::DeviceProfile;
/// use ledsync_lib::types::RgbColor;
///
/// let profile = DeviceProfile::rgbw_strip();
/// assert!(profile.has_white_channel());
/// assert_eq!(profile.preset_color(1), Some(RgbColor::new(255, 0, 0)));
///
/// // The effects mode has no deterministic color
/// assert_eq!(profile.preset_color(profile.effects_mode()), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    channels: ChannelLayout,
    presets: &'static [RgbColor],
    effects_mode: u8,
}

impl DeviceProfile {
    /// Creates the profile for a 3-channel WS2812B strip.
    ///
    /// Presets 0-7, effects mode at index 8.
    #[must_use]
    pub const fn rgb_strip() -> Self {
        Self {
            channels: ChannelLayout::Rgb,
            presets: &RGB_PRESETS,
            effects_mode: 8,
        }
    }

    /// Creates the profile for a 4-channel SK6812 RGB+W strip.
    ///
    /// Presets 0-8 (including a dedicated pure-white slot), effects mode at
    /// index 9.
    #[must_use]
    pub const fn rgbw_strip() -> Self {
        Self {
            channels: ChannelLayout::Rgbw,
            presets: &RGBW_PRESETS,
            effects_mode: 9,
        }
    }

    /// Returns the channel layout.
    #[must_use]
    pub const fn channels(&self) -> ChannelLayout {
        self.channels
    }

    /// Returns true if the variant has a dedicated white channel.
    #[must_use]
    pub const fn has_white_channel(&self) -> bool {
        matches!(self.channels, ChannelLayout::Rgbw)
    }

    /// Returns the effects mode index (always the highest mode).
    #[must_use]
    pub const fn effects_mode(&self) -> u8 {
        self.effects_mode
    }

    /// Returns true if `mode` is the effects mode.
    #[must_use]
    pub const fn is_effects_mode(&self, mode: u8) -> bool {
        mode == self.effects_mode
    }

    /// Returns the number of selectable modes (presets plus effects).
    #[must_use]
    pub fn mode_count(&self) -> u8 {
        // Safe: preset tables hold at most 9 entries
        #[allow(clippy::cast_possible_truncation)]
        let presets = self.presets.len() as u8;
        presets + 1
    }

    /// Returns the fixed preset color for a mode, if it has one.
    ///
    /// Returns `None` for the effects mode and for indices outside the
    /// profile's mode range.
    #[must_use]
    pub fn preset_color(&self, mode: u8) -> Option<RgbColor> {
        self.presets.get(usize::from(mode)).copied()
    }

    /// Returns the color a summary display should show for a mode.
    ///
    /// Total over the mode range: the effects mode maps to
    /// [`EFFECTS_PLACEHOLDER`] since it has no deterministic color.
    #[must_use]
    pub fn display_color(&self, mode: u8) -> RgbColor {
        self.preset_color(mode).unwrap_or(EFFECTS_PLACEHOLDER)
    }

    /// Validates that `mode` is selectable on this variant.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ModeOutOfRange` if `mode` exceeds the effects
    /// mode index.
    pub fn validate_mode(&self, mode: u8) -> Result<(), crate::error::ValueError> {
        if mode > self.effects_mode {
            return Err(crate::error::ValueError::ModeOutOfRange {
                mode,
                max: self.effects_mode,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_strip_layout() {
        let profile = DeviceProfile::rgb_strip();
        assert_eq!(profile.channels(), ChannelLayout::Rgb);
        assert!(!profile.has_white_channel());
        assert_eq!(profile.effects_mode(), 8);
        assert_eq!(profile.mode_count(), 9);
    }

    #[test]
    fn rgbw_strip_layout() {
        let profile = DeviceProfile::rgbw_strip();
        assert_eq!(profile.channels(), ChannelLayout::Rgbw);
        assert!(profile.has_white_channel());
        assert_eq!(profile.effects_mode(), 9);
        assert_eq!(profile.mode_count(), 10);
    }

    #[test]
    fn preset_tables_are_total_below_effects() {
        for profile in [DeviceProfile::rgb_strip(), DeviceProfile::rgbw_strip()] {
            for mode in 0..profile.effects_mode() {
                assert!(
                    profile.preset_color(mode).is_some(),
                    "mode {mode} should have a preset"
                );
            }
            assert_eq!(profile.preset_color(profile.effects_mode()), None);
        }
    }

    #[test]
    fn preset_colors_match_table() {
        let profile = DeviceProfile::rgb_strip();
        assert_eq!(profile.preset_color(0), Some(RgbColor::new(255, 255, 255)));
        assert_eq!(profile.preset_color(1), Some(RgbColor::new(255, 0, 0)));
        assert_eq!(profile.preset_color(7), Some(RgbColor::new(255, 165, 0)));
    }

    #[test]
    fn rgbw_has_extra_pure_white_slot() {
        let profile = DeviceProfile::rgbw_strip();
        assert_eq!(profile.preset_color(8), Some(RgbColor::new(255, 255, 255)));

        // Same index is the effects mode on the RGB variant
        let rgb = DeviceProfile::rgb_strip();
        assert_eq!(rgb.preset_color(8), None);
    }

    #[test]
    fn display_color_uses_grey_for_effects() {
        let profile = DeviceProfile::rgbw_strip();
        assert_eq!(profile.display_color(9), EFFECTS_PLACEHOLDER);
        assert_eq!(profile.display_color(1), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn validate_mode_bounds() {
        let profile = DeviceProfile::rgb_strip();
        assert!(profile.validate_mode(0).is_ok());
        assert!(profile.validate_mode(8).is_ok()); // effects mode is selectable
        assert!(profile.validate_mode(9).is_err());
    }

    #[test]
    fn is_effects_mode() {
        assert!(DeviceProfile::rgb_strip().is_effects_mode(8));
        assert!(!DeviceProfile::rgb_strip().is_effects_mode(7));
        assert!(DeviceProfile::rgbw_strip().is_effects_mode(9));
    }
}
