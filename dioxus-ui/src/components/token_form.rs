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

//! Access-key entry shown until the remote stream arrives.

use conference_client::on_user_edit;
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement};

pub const TOKEN_INPUT_ID: &str = "token-input";
pub const TOKEN_HELPER_TEXT: &str =
    "Get an user access key from starting a meeting via the API or use one from an active meeting.";

/// `onchange` receives the already trimmed value.
#[component]
pub fn TokenForm(token: String, disabled: bool, onchange: EventHandler<String>) -> Element {
    rsx! {
        div { class: "token-form",
            label { r#for: TOKEN_INPUT_ID, "Meeting Access Key" }
            input {
                id: TOKEN_INPUT_ID,
                r#type: "text",
                value: "{token}",
                disabled: disabled,
                autocomplete: "off",
                oninput: move |evt: FormEvent| {
                    let raw = evt.value();
                    let token = on_user_edit(&raw);
                    if token != raw {
                        // No DOM patch is emitted when the vdom value is already `token`
                        snap_input_value(&token);
                    }
                    onchange.call(token)
                },
            }
            p { class: "token-form-helper", "{TOKEN_HELPER_TEXT}" }
        }
    }
}

fn snap_input_value(value: &str) {
    if let Some(input) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(TOKEN_INPUT_ID))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}
