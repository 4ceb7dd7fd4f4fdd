// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Watches a strip controller and prints every state change.
//!
//! ```text
//! cargo run --example monitor -- 192.168.1.42 --rgbw
//! ```

use std::sync::Arc;

use clap::Parser;

use ledsync_lib::types::format_uptime;
use ledsync_lib::{DeviceProfile, HttpClient, SyncController};

#[derive(Parser)]
#[command(about = "Watch an ESP32 LED strip controller")]
struct Args {
    /// Hostname or IP address of the device
    host: String,

    /// The device drives a 4-channel RGB+W strip (SK6812)
    #[arg(long)]
    rgbw: bool,
}

#[tokio::main]
async fn main() -> ledsync_lib::Result<()> {
    let args = Args::parse();

    let profile = if args.rgbw {
        DeviceProfile::rgbw_strip()
    } else {
        DeviceProfile::rgb_strip()
    };

    let client = HttpClient::new(&args.host)?;
    let controller = Arc::new(SyncController::new(client, profile));

    let mut updates = controller.watch_state();
    let loop_handle = Arc::clone(&controller);
    tokio::spawn(async move { loop_handle.run().await });

    loop {
        if updates.changed().await.is_err() {
            break;
        }
        let snapshot = updates.borrow_and_update().clone();
        let state = &snapshot.state;

        println!(
            "[{:?}] power={} brightness={} mode={} color={} white={} up={} ({} {} dBm)",
            snapshot.connection,
            if state.powered_on { "on" } else { "off" },
            state.brightness,
            state.current_mode,
            state.display_color(controller.profile()),
            state.white,
            format_uptime(state.uptime_secs),
            state.wifi_network,
            state.signal_strength,
        );
    }

    Ok(())
}
