// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `LedSync` Lib - A Rust library to keep a client-side view of ESP32 LED
//! strip controllers in sync via HTTP.
//!
//! The device is the source of truth, but an operator editing a slider must
//! not have their in-progress value clobbered by the next periodic refresh.
//! This library provides the interaction-aware reconciliation engine that
//! threads that needle:
//!
//! - **Periodic polling**: fetches `/status` on an interval and replaces the
//!   local state wholesale
//! - **Optimistic commands**: brightness, mode, color, white and power
//!   commands apply locally as soon as the device acknowledges them
//! - **Interaction windows**: per-control time boxes that suppress refreshes
//!   while the operator is plausibly mid-edit
//! - **Color handling**: hex string parsing/formatting and preset tables for
//!   both the 3-channel (WS2812B) and 4-channel (SK6812) strip variants
//!
//! Rendering is not covered: a projector subscribes to read-only state
//! snapshots over a watch channel and draws them however it likes.
//!
//! # Quick Start
//!
//! ```no_run
//! use ledsync_lib::{Brightness, DeviceProfile, HttpClient, SyncController};
//!
//! #[tokio::main]
//! async fn main() -> ledsync_lib::Result<()> {
//!     let client = HttpClient::new("192.168.1.42")?;
//!     let controller = SyncController::new(client, DeviceProfile::rgbw_strip());
//!
//!     // Observe state changes (the projector side)
//!     let mut updates = controller.watch_state();
//!     tokio::spawn(async move {
//!         while updates.changed().await.is_ok() {
//!             let snapshot = updates.borrow_and_update().clone();
//!             println!("brightness: {}", snapshot.state.brightness);
//!         }
//!     });
//!
//!     // Issue a command (the input-handling side)
//!     controller.request_brightness(Brightness::new(7)?).await?;
//!
//!     // Keep the local view in sync until the process ends
//!     controller.run().await;
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod error;
pub mod interaction;
pub mod profile;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use controller::{SyncController, TickOutcome};
pub use error::{Error, ParseError, Result, TransportError, ValueError};
pub use interaction::{Control, InteractionTracker};
pub use profile::{ChannelLayout, DeviceProfile};
pub use protocol::{Gateway, HttpClient, HttpConfig};
pub use response::StatusResponse;
pub use state::{ConnectionStatus, DeviceState, StateSnapshot};
pub use types::{Brightness, RgbColor};
