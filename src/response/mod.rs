// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for device payloads.
//!
//! Only `/status` returns a structured body; the write endpoints answer with
//! plain-text acknowledgements that callers discard.

mod status;

pub use status::StatusResponse;
