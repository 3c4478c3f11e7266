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

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlVideoElement, MediaStream};

use crate::context::SessionCtx;

pub const VIDEO_ELEMENT_ID: &str = "remote-video";

/// Plays the session's remote stream.
///
/// `srcObject` is only assigned when the remote stream itself changes:
/// every assignment restarts the element's load algorithm.
#[component]
pub fn VideoSurface(session: SessionCtx) -> Element {
    let remote_stream = use_memo(move || session.read().remote_stream.clone());

    use_effect(move || {
        let Some(stream) = remote_stream() else {
            return;
        };
        match window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(VIDEO_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        {
            Some(video) => video.set_src_object(Some(stream.unchecked_ref::<MediaStream>())),
            None => log::debug!("Video element not mounted yet"),
        }
    });

    rsx! {
        video {
            id: VIDEO_ELEMENT_ID,
            class: "VideoStream",
            autoplay: true,
            playsinline: true,
        }
    }
}
