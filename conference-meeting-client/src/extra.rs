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

//! The "extra data" endpoint: user and room display names for a token.

use conference_meeting_types::{ExtraDataResponse, MetadataResult, STATUS_OK};

use crate::error::MetadataError;
use crate::MetadataClient;

impl MetadataClient {
    /// Fetch the display metadata attached to a meeting token.
    ///
    /// Calls `GET <base_url>?token={token}`.
    pub async fn fetch_extra(&self, token: &str) -> Result<MetadataResult, MetadataError> {
        log::debug!("Fetching extra data from {}", self.base_url());
        let response = self.get().query(&[("token", token)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text().await?;
        parse_extra_data(&body)
    }
}

/// Validate a response body and extract the first metadata record.
///
/// No partial result is ever produced: any deviation from the expected shape
/// yields [`MetadataError::MalformedResponse`].
pub fn parse_extra_data(body: &str) -> Result<MetadataResult, MetadataError> {
    let response: ExtraDataResponse = serde_json::from_str(body)
        .map_err(|e| MetadataError::MalformedResponse(format!("invalid payload: {e}")))?;
    if !response.is_ok() {
        return Err(MetadataError::MalformedResponse(format!(
            "status {:?} is not {STATUS_OK:?}",
            response.status
        )));
    }
    response
        .data
        .into_iter()
        .next()
        .map(MetadataResult::from)
        .ok_or_else(|| MetadataError::MalformedResponse("data is empty".to_string()))
}
