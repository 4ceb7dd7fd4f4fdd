// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The reconciliation loop and operator command surface.
//!
//! [`SyncController`] owns the single [`DeviceState`] record. Operator
//! commands apply their effect locally as soon as the device acknowledges
//! them; a periodic poll replaces the whole record with whatever the device
//! reports, unless an interaction window says the operator is mid-edit, in
//! which case the tick is skipped entirely. The projector observes the
//! result through a watch channel and never mutates anything.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::{Error, ValueError};
use crate::interaction::{Control, InteractionTracker};
use crate::profile::DeviceProfile;
use crate::protocol::Gateway;
use crate::state::{ConnectionStatus, DeviceState, StateSnapshot};
use crate::types::{Brightness, RgbColor};

/// What a single reconciliation tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Remote state was fetched and applied.
    Applied,
    /// An interaction window was open; no network call was made.
    Suppressed,
    /// The response arrived after a newer poll had already been applied and
    /// was discarded.
    Stale,
    /// The poll failed; previous state kept.
    Failed,
}

/// Keeps a local view of a strip controller in sync with the device.
///
/// Generic over the [`Gateway`] transport so the reconciliation logic can be
/// exercised against test doubles.
///
/// # Examples
///
/// ```no_run
/// use ledsync_lib::controller::SyncController;
/// use ledsync_lib::profile::DeviceProfile;
/// use ledsync_lib::protocol::HttpClient;
/// use ledsync_lib::types::Brightness;
///
/// # async fn example() -> ledsync_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.42")?;
/// let controller = SyncController::new(client, DeviceProfile::rgbw_strip());
///
/// controller.request_brightness(Brightness::new(7)?).await?;
/// assert_eq!(controller.state().brightness.as_percent(), 70);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SyncController<G: Gateway> {
    gateway: G,
    profile: DeviceProfile,
    poll_interval: Duration,
    state: RwLock<DeviceState>,
    connection: RwLock<ConnectionStatus>,
    tracker: RwLock<InteractionTracker>,
    snapshot_tx: watch::Sender<StateSnapshot>,
    /// Monotonic tag for outstanding polls; responses older than the last
    /// applied one are dropped instead of overwriting newer state.
    poll_seq: AtomicU64,
    applied_seq: Mutex<u64>,
}

impl<G: Gateway> SyncController<G> {
    /// Default reconciliation period.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

    /// Creates a controller for the given transport and device variant.
    #[must_use]
    pub fn new(gateway: G, profile: DeviceProfile) -> Self {
        let (snapshot_tx, _) = watch::channel(StateSnapshot::default());
        Self {
            gateway,
            profile,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            state: RwLock::new(DeviceState::new()),
            connection: RwLock::new(ConnectionStatus::Loading),
            tracker: RwLock::new(InteractionTracker::new()),
            snapshot_tx,
            poll_seq: AtomicU64::new(0),
            applied_seq: Mutex::new(0),
        }
    }

    /// Overrides the reconciliation period.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Returns the device variant profile.
    #[must_use]
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Returns a snapshot of the current device state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state.read().clone()
    }

    /// Returns the current connection health.
    #[must_use]
    pub fn connection_status(&self) -> ConnectionStatus {
        *self.connection.read()
    }

    /// Returns the current state plus connection health in one value.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            state: self.state.read().clone(),
            connection: *self.connection.read(),
        }
    }

    /// Creates a watch receiver for the projector.
    ///
    /// A fresh snapshot is published after every command acknowledgement,
    /// applied poll, and connection status change.
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<StateSnapshot> {
        self.snapshot_tx.subscribe()
    }

    // ========== Operator commands ==========

    /// Sets the brightness level.
    ///
    /// Opens the brightness window, sends the command, and applies the new
    /// level locally once the device acknowledges it.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; local state is left untouched.
    pub async fn request_brightness(&self, level: Brightness) -> Result<(), Error> {
        self.open_window(Control::Brightness);
        match self.gateway.set_brightness(level).await {
            Ok(()) => {
                self.state.write().brightness = level;
                self.set_connection(ConnectionStatus::Connected);
                Ok(())
            }
            Err(err) => Err(self.command_failed(err)),
        }
    }

    /// Selects a color mode.
    ///
    /// On acknowledgement the mode is applied locally, any custom color
    /// override is cleared, and the display color is derived from the preset
    /// table. The effects mode has no preset, so the color field is left
    /// as-is for it.
    ///
    /// # Errors
    ///
    /// Returns `ValueError` if the mode is outside the profile's range, or a
    /// transport error if the request fails.
    pub async fn request_mode(&self, mode: u8) -> Result<(), Error> {
        self.profile.validate_mode(mode)?;
        self.open_window(Control::Mode);
        match self.gateway.set_mode(mode).await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.current_mode = mode;
                    state.use_custom_color = false;
                    if let Some(preset) = self.profile.preset_color(mode) {
                        state.color = preset;
                    }
                }
                self.set_connection(ConnectionStatus::Connected);
                Ok(())
            }
            Err(err) => Err(self.command_failed(err)),
        }
    }

    /// Sets a custom color.
    ///
    /// On 4-channel variants the current white level rides along unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; local state is left untouched.
    pub async fn request_color(&self, color: RgbColor) -> Result<(), Error> {
        let white = self
            .profile
            .has_white_channel()
            .then(|| self.state.read().white);
        self.open_window(Control::Color);
        match self.gateway.set_color(color, white).await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.color = color;
                    state.use_custom_color = true;
                }
                self.set_connection(ConnectionStatus::Connected);
                Ok(())
            }
            Err(err) => Err(self.command_failed(err)),
        }
    }

    /// Sets the white channel level.
    ///
    /// Re-sends the current RGB channels with the new white value; the
    /// device has no white-only endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::WhiteNotSupported` on 3-channel variants, or a
    /// transport error if the request fails.
    pub async fn request_white(&self, white: u8) -> Result<(), Error> {
        if !self.profile.has_white_channel() {
            return Err(ValueError::WhiteNotSupported.into());
        }
        let color = self.state.read().color;
        self.open_window(Control::White);
        match self.gateway.set_color(color, Some(white)).await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.white = white;
                    state.use_custom_color = true;
                }
                self.set_connection(ConnectionStatus::Connected);
                Ok(())
            }
            Err(err) => Err(self.command_failed(err)),
        }
    }

    /// Toggles the power state.
    ///
    /// The device is not re-queried to confirm; the local flag is flipped on
    /// acknowledgement and the next applied poll corrects any divergence.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; local state is left untouched.
    pub async fn request_toggle(&self) -> Result<(), Error> {
        self.open_window(Control::Power);
        match self.gateway.toggle_power().await {
            Ok(()) => {
                {
                    let mut state = self.state.write();
                    state.powered_on = !state.powered_on;
                }
                self.set_connection(ConnectionStatus::Connected);
                Ok(())
            }
            Err(err) => Err(self.command_failed(err)),
        }
    }

    // ========== Reconciliation ==========

    /// Runs one reconciliation pass.
    ///
    /// Expires interaction windows by elapsed time, then either skips the
    /// tick (operator mid-edit: no network call, no mutation) or polls
    /// `/status` and fully replaces the local state. A failed poll keeps the
    /// previous state; stale-but-available beats no data.
    pub async fn tick(&self) -> TickOutcome {
        let now = Instant::now();
        {
            let mut tracker = self.tracker.write();
            tracker.sweep(now);
            if tracker.any_suppressing(now) {
                tracing::debug!("tick suppressed, operator mid-edit");
                return TickOutcome::Suppressed;
            }
        }

        let seq = self.poll_seq.fetch_add(1, Ordering::Relaxed) + 1;
        match self.gateway.get_status().await {
            Ok(status) => {
                {
                    let mut applied = self.applied_seq.lock();
                    if seq <= *applied {
                        tracing::debug!(seq, "discarding out-of-order status response");
                        return TickOutcome::Stale;
                    }
                    *applied = seq;
                    *self.state.write() = DeviceState::from_status(&status);
                }
                self.set_connection(ConnectionStatus::Connected);
                TickOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, "status poll failed");
                self.set_connection(ConnectionStatus::Error);
                TickOutcome::Failed
            }
        }
    }

    /// Runs the reconciliation loop until the hosting task is dropped.
    ///
    /// Ticks once immediately, then on every poll interval. There is no
    /// explicit cancellation; drop the future (or abort the task) to stop.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }

    // ========== Internals ==========

    fn open_window(&self, control: Control) {
        self.tracker.write().open(control, Instant::now());
    }

    fn command_failed(&self, err: Error) -> Error {
        self.set_connection(ConnectionStatus::Error);
        err
    }

    fn set_connection(&self, status: ConnectionStatus) {
        *self.connection.write() = status;
        self.publish();
    }

    fn publish(&self) {
        // Ignore send errors (no receivers)
        let _ = self.snapshot_tx.send(self.snapshot());
    }
}
