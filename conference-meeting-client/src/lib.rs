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

//! Cross-platform REST client for the meeting metadata API.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use conference_meeting_client::MetadataClient;
//!
//! # async fn example() -> Result<(), conference_meeting_client::MetadataError> {
//! let client = MetadataClient::new("https://live.ikonferencja.pl/restapi/api/api.php");
//! let extra = client.fetch_extra("0123456789abcdef01234567").await?;
//! println!("{} in {}", extra.user_name, extra.room_name);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extra;

pub use conference_meeting_types;
pub use conference_meeting_types::MetadataResult;
pub use error::MetadataError;
pub use extra::parse_extra_data;

use reqwest::Client;

/// Base URL of the production metadata endpoint.
pub const DEFAULT_METADATA_API_URL: &str = "https://live.ikonferencja.pl/restapi/api/api.php";

/// A typed REST client for the meeting metadata API.
///
/// The endpoint is a single script URL; the token travels as a query
/// parameter, so the base URL is used verbatim rather than joined with a path.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    base_url: String,
    http: Client,
}

impl MetadataClient {
    /// Create a new client pointing at the given endpoint.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client that sends its requests through `http`.
    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request against the endpoint.
    pub(crate) fn get(&self) -> reqwest::RequestBuilder {
        self.http.get(&self.base_url)
    }
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_API_URL)
    }
}
