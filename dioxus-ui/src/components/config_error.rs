/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "Check the "
                code { "window.__APP_CONFIG" }
                " object in the page: "
                code { "metadataApiUrl" }
                ", "
                code { "title" }
                " and "
                code { "debugLogging" }
                " must be strings when present."
            }
        }
    }
}
