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

//! Session hook and controller-to-Dioxus state bridge
//!
//! The controller reports every change through a framework-agnostic
//! callback; this module forwards those snapshots into a Dioxus signal so
//! the view re-renders.

use std::rc::Rc;

use conference_client::{Callback, EyesonSdk, MetadataClient, SessionController, SessionState};
use dioxus::prelude::*;
use wasm_bindgen::JsValue;

use crate::context::{token_from_location, ConferenceController, ControllerCtx, SessionCtx};

/// Create the session controller once per mount, attach it to the SDK's
/// event channel, mirror its state into a signal and auto-submit a token
/// found in the page URL.
pub fn use_session(metadata_api_url: &str) -> (SessionCtx, ControllerCtx) {
    let metadata_api_url = metadata_api_url.to_string();
    let controller = use_hook(move || {
        let metadata = MetadataClient::new(&metadata_api_url);
        let initial_token = token_from_location();
        log::info!(
            "Creating session (token in URL: {}, metadata endpoint: {})",
            initial_token.is_some(),
            metadata.base_url()
        );
        Rc::new(SessionController::new(EyesonSdk, metadata, initial_token))
    });

    let state: SessionCtx = use_signal({
        let controller = controller.clone();
        move || controller.state()
    });

    use_hook({
        let controller = controller.clone();
        move || {
            SessionController::attach(&controller);
            controller.subscribe(Callback::from(move |snapshot: SessionState<JsValue>| {
                let mut state = state;
                state.set(snapshot);
            }));
            spawn(boot(controller));
        }
    });

    (state, ControllerCtx(controller))
}

async fn boot(controller: Rc<ConferenceController>) {
    controller.boot().await;
}
