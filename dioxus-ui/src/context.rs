// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handles shared between the session hook and the conference page.

use std::rc::Rc;

use conference_client::{
    read_from_location_query, EyesonSdk, MetadataClient, SessionController, SessionState,
};
use dioxus::prelude::*;
use wasm_bindgen::JsValue;

/// The controller as wired in the browser.
pub type ConferenceController = SessionController<EyesonSdk, MetadataClient>;

/// Session snapshot mirrored from the controller. Components read it; only
/// the controller writes it.
pub type SessionCtx = Signal<SessionState<JsValue>>;

/// Shared handle to the session controller.
#[derive(Clone)]
pub struct ControllerCtx(pub Rc<ConferenceController>);

/// Read the `token` parameter from `window.location.search`.
pub fn token_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    read_from_location_query(&search)
}
