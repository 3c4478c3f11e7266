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

//! Source of the toolbar's display metadata.

use conference_meeting_client::{MetadataClient, MetadataError, MetadataResult};

/// Looks up the user and room names attached to an access key.
///
/// The futures are `!Send`: everything runs on the browser's event loop.
#[allow(async_fn_in_trait)]
pub trait MetadataSource {
    async fn fetch_extra(&self, token: &str) -> Result<MetadataResult, MetadataError>;
}

impl MetadataSource for MetadataClient {
    async fn fetch_extra(&self, token: &str) -> Result<MetadataResult, MetadataError> {
        MetadataClient::fetch_extra(self, token).await
    }
}
