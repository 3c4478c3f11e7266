// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

//! Layout of the conference page for each stage of a session.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::RefCell;

use conference_client::SessionState;
use conference_ui::components::token_form::TOKEN_INPUT_ID;
use conference_ui::components::video_surface::VIDEO_ELEMENT_ID;
use conference_ui::pages::conference::ConferenceView;
use dioxus::prelude::*;
use support::{cleanup, create_mount_point, render_into, yield_now};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement, MediaStream};

wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static CLICKS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(name: &'static str) {
    CLICKS.with(|c| c.borrow_mut().push(name));
}

fn remote_stream() -> JsValue {
    MediaStream::new().unwrap().into()
}

fn view(state: SessionState<JsValue>) -> Element {
    let session = use_signal(move || state);
    rsx! {
        ConferenceView {
            title: "Web GUI React App",
            session: session,
            on_token: move |_| {},
            on_audio: move |_| record("audio"),
            on_video: move |_| record("video"),
            on_screen: move |_| record("screen"),
        }
    }
}

fn exists(mount: &web_sys::Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

fn button(mount: &web_sys::Element, label: &str) -> HtmlElement {
    mount
        .query_selector(&format!("button[aria-label='{label}']"))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test]
async fn idle_session_shows_only_the_token_form() {
    let mount = create_mount_point();
    render_into(&mount, || view(SessionState::new("abc".to_string())));
    yield_now().await;

    assert!(!exists(&mount, ".linear-progress"));
    let input = mount
        .query_selector(&format!("#{TOKEN_INPUT_ID}"))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(input.value(), "abc");
    assert!(!input.disabled());
    assert!(!exists(&mount, &format!("#{VIDEO_ELEMENT_ID}")));
    assert!(!exists(&mount, ".App-sidebar"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn connecting_session_shows_progress_and_locks_the_form() {
    let mount = create_mount_point();
    render_into(&mount, || {
        view(SessionState {
            connecting: true,
            ..SessionState::new("0123456789abcdefghijklmn".to_string())
        })
    });
    yield_now().await;

    assert!(exists(&mount, ".linear-progress"));
    let input = mount
        .query_selector(&format!("#{TOKEN_INPUT_ID}"))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert!(input.disabled());
    assert!(!exists(&mount, ".App-sidebar"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn accepted_session_swaps_the_form_for_video_and_controls() {
    let mount = create_mount_point();
    render_into(&mount, || {
        view(SessionState {
            local_stream: Some(remote_stream()),
            remote_stream: Some(remote_stream()),
            audio_enabled: false,
            video: true,
            screen_sharing: true,
            user_name: Some("alice".to_string()),
            room_name: Some("room1".to_string()),
            ..SessionState::new("0123456789abcdefghijklmn".to_string())
        })
    });
    yield_now().await;

    assert!(!exists(&mount, ".linear-progress"));
    assert!(!exists(&mount, &format!("#{TOKEN_INPUT_ID}")));
    assert!(exists(&mount, &format!("video#{VIDEO_ELEMENT_ID}")));
    assert!(exists(&mount, ".Toolbar-labels"));

    let mic = button(&mount, "Toggle audio");
    let camera = button(&mount, "Toggle video");
    let screen = button(&mount, "Share screen");
    assert!(!mic.class_list().contains("active"));
    assert!(camera.class_list().contains("active"));
    assert!(screen.class_list().contains("active"));

    mic.click();
    camera.click();
    screen.click();
    yield_now().await;
    CLICKS.with(|c| assert_eq!(c.borrow().as_slice(), ["audio", "video", "screen"]));

    cleanup(&mount);
}
