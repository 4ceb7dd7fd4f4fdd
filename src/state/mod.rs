// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! [`DeviceState`] is the single record the reconciliation loop owns;
//! [`ConnectionStatus`] is the coarse health signal; [`StateSnapshot`] pairs
//! both for the projector's read-only watch channel.

mod device_state;

pub use device_state::{ConnectionStatus, DeviceState, StateSnapshot};
