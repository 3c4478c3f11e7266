// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

/// Indeterminate progress bar shown while a session is connecting.
#[component]
pub fn LinearProgress() -> Element {
    rsx! {
        div {
            class: "linear-progress",
            role: "progressbar",
            aria_label: "Connecting",
            div { class: "linear-progress-bar" }
        }
    }
}
