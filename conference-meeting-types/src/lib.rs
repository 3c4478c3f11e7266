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

//! Shared API types for the meeting metadata endpoint.
//!
//! This crate defines the contract between the remote metadata REST API
//! and the conference client. It is intentionally framework-agnostic: no
//! HTTP client, no browser types.

pub mod responses;

pub use responses::{ExtraData, ExtraDataResponse, MetadataResult, STATUS_OK};
