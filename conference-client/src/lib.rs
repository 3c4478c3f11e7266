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

//! This crate holds everything the conference page does that is not
//! rendering: reading the access key, enriching the session with display
//! metadata, and steering the external media SDK.
//!
//! It makes no assumptions about the UI framework. The media SDK is reached
//! through the [`MediaSdk`] trait and the metadata endpoint through
//! [`MetadataSource`], so the [`SessionController`] can be driven from tests
//! with fakes. With the `wasm` feature enabled, `EyesonSdk` binds the
//! trait to the global `eyeson` object of the page.
//!
//! # Outline of usage
//!
//! ```ignore
//! let controller = Rc::new(SessionController::new(sdk, metadata, initial_token));
//! SessionController::attach(&controller);
//! controller.subscribe(Callback::from(|state| render(state)));
//!
//! spawn_local(async move { controller.boot().await });
//! ```

mod callback;
mod constants;
mod events;
mod metadata;
mod sdk;
mod session;
mod token;

#[cfg(feature = "wasm")]
mod eyeson;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use callback::Callback;
pub use constants::ACCESS_KEY_LENGTH;
pub use events::SdkEvent;
pub use metadata::MetadataSource;
pub use sdk::{MediaSdk, SdkCommand};
pub use session::{SessionController, SessionPhase, SessionState};
pub use token::{is_access_key, on_user_edit, read_from_location_query};

#[cfg(feature = "wasm")]
pub use eyeson::{decode_event, encode_command, EyesonSdk};

pub use conference_meeting_client::{
    MetadataClient, MetadataError, MetadataResult, DEFAULT_METADATA_API_URL,
};
