// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for communicating with the device.
//!
//! The device exposes a plain HTTP GET surface: `/status` answers with a JSON
//! snapshot, the write endpoints answer with text acknowledgements. Each
//! operation is a single round-trip with no retry; transient failures are
//! surfaced to the caller, never masked.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::error::Error;
use crate::response::StatusResponse;
use crate::types::{Brightness, RgbColor};

/// Trait for transports that can reach an LED strip controller.
///
/// [`HttpClient`] is the production implementation; tests substitute doubles
/// to exercise the reconciliation logic without a network.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Fetches the full device status.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on network failure or a non-success response,
    /// `ParseError` if the status payload is malformed.
    async fn get_status(&self) -> Result<StatusResponse, Error>;

    /// Sets the brightness level.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails.
    async fn set_brightness(&self, level: Brightness) -> Result<(), Error>;

    /// Selects a color mode.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails.
    async fn set_mode(&self, mode: u8) -> Result<(), Error>;

    /// Sets the custom color channels.
    ///
    /// `white` is sent only for 4-channel variants.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails.
    async fn set_color(&self, color: RgbColor, white: Option<u8>) -> Result<(), Error>;

    /// Toggles the power state.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails.
    async fn toggle_power(&self) -> Result<(), Error>;
}
