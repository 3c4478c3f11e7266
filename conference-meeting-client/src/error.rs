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

//! Error types for the metadata client.

use thiserror::Error;

/// Errors returned by [`MetadataClient::fetch_extra`](crate::MetadataClient::fetch_extra).
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The body did not match `{ status: "OK", data: [{ userName, roomName }] }`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl MetadataError {
    /// Transport failures and non-2xx answers both count as network errors.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}
