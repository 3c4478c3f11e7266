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

//! The single conference page: access-key entry until the session is
//! accepted, then the remote video with its call controls.

use dioxus::prelude::*;

use crate::components::linear_progress::LinearProgress;
use crate::components::token_form::TokenForm;
use crate::components::toolbar::Toolbar;
use crate::components::video_control_buttons::{CameraButton, MicButton, ScreenShareButton};
use crate::components::video_surface::VideoSurface;
use crate::context::SessionCtx;
use crate::hooks::use_session::use_session;

pub const PRIMARY_COLOR: &str = "#9e206c";
pub const SECONDARY_COLOR: &str = "#6d6d6d";

/// Wires a live session controller into [`ConferenceView`].
#[component]
pub fn ConferencePage(title: String, metadata_api_url: String) -> Element {
    let (session, controller) = use_session(&metadata_api_url);

    let on_token = {
        let controller = controller.clone();
        move |token: String| {
            let controller = controller.0.clone();
            spawn(async move {
                controller.set_token(token).await;
            });
        }
    };
    let on_audio = {
        let controller = controller.clone();
        move |_| controller.0.toggle_audio()
    };
    let on_video = {
        let controller = controller.clone();
        move |_| controller.0.toggle_video()
    };
    let on_screen = move |_| controller.0.toggle_screen();

    rsx! {
        ConferenceView {
            title: title,
            session: session,
            on_token: on_token,
            on_audio: on_audio,
            on_video: on_video,
            on_screen: on_screen,
        }
    }
}

/// Renders a session snapshot. Holds no state of its own.
#[component]
pub fn ConferenceView(
    title: String,
    session: SessionCtx,
    on_token: EventHandler<String>,
    on_audio: EventHandler<MouseEvent>,
    on_video: EventHandler<MouseEvent>,
    on_screen: EventHandler<MouseEvent>,
) -> Element {
    let state = session.read().clone();
    let theme = format!("--primary: {PRIMARY_COLOR}; --secondary: {SECONDARY_COLOR};");

    rsx! {
        div { class: "App", style: "{theme}",
            Toolbar {
                title: title,
                user_name: state.user_name.clone(),
                room_name: state.room_name.clone(),
            }
            if state.connecting {
                LinearProgress {}
            }
            main { class: "App-main",
                if state.has_remote_stream() {
                    div { class: "App-video",
                        VideoSurface { session: session }
                    }
                    aside { class: "App-sidebar",
                        MicButton { enabled: state.audio_enabled, onclick: on_audio }
                        CameraButton { enabled: state.video, onclick: on_video }
                        ScreenShareButton { active: state.screen_sharing, onclick: on_screen }
                    }
                } else {
                    TokenForm {
                        token: state.token.clone(),
                        disabled: state.connecting,
                        onchange: on_token,
                    }
                }
            }
        }
    }
}
