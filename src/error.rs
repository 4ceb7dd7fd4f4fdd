// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `LedSync` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: value validation, transport communication, and payload parsing.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with an LED strip controller.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during transport communication.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred while parsing a response or a color string.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A mode index is outside the profile's mode range.
    #[error("mode {mode} is out of range for this device (max {max})")]
    ModeOutOfRange {
        /// The mode index that was requested.
        mode: u8,
        /// Highest valid mode index for the profile.
        max: u8,
    },

    /// The white channel was addressed on a device without one.
    #[error("device has no white channel")]
    WhiteNotSupported,
}

/// Errors related to transport communication with the device.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection error, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing device responses and color strings.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing of the `/status` payload failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A hex color string was malformed (wrong length or non-hex digits).
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
