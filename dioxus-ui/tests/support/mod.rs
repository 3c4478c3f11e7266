// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for conference-ui component tests.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element. Follow with
/// [`yield_now`] before asserting on the DOM.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Wait two animation frames so Dioxus can flush its mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Install `window.__APP_CONFIG` with the given string fields.
pub fn inject_app_config(fields: &[(&str, &str)]) {
    let config = js_sys::Object::new();
    for (key, value) in fields {
        js_sys::Reflect::set(&config, &(*key).into(), &(*value).into()).unwrap();
    }
    set_app_config(&js_sys::Object::freeze(&config));
}

/// Install an arbitrary value as `window.__APP_CONFIG`.
pub fn set_app_config(value: &JsValue) {
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), value).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
