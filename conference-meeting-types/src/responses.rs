/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Response types for the meeting metadata REST API.
//!
//! The endpoint answers `GET <base>?token=<token>` with:
//!
//! ```json
//! { "status": "OK", "data": [ { "userName": "alice", "roomName": "room1" } ] }
//! ```

use serde::{Deserialize, Serialize};

/// Value of [`ExtraDataResponse::status`] on success.
pub const STATUS_OK: &str = "OK";

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Top-level response envelope of the metadata endpoint.
///
/// Only `status` and `data` are read; unknown fields are ignored so that the
/// backend can add fields without breaking older clients.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtraDataResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<ExtraData>,
}

impl ExtraDataResponse {
    /// `true` when the backend reported success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The record the client displays. Additional records are ignored.
    pub fn first(&self) -> Option<&ExtraData> {
        self.data.first()
    }
}

/// One metadata record as sent by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtraData {
    pub user_name: String,
    pub room_name: String,
}

// ---------------------------------------------------------------------------
// Validated result
// ---------------------------------------------------------------------------

/// Display metadata for the toolbar, extracted from a valid response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResult {
    pub user_name: String,
    pub room_name: String,
}

impl From<ExtraData> for MetadataResult {
    fn from(data: ExtraData) -> Self {
        Self {
            user_name: data.user_name,
            room_name: data.room_name,
        }
    }
}
