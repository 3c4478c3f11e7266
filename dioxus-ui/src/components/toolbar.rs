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

//! Top application bar: logo, page title and, once known, who is in which
//! room.

use dioxus::prelude::*;

pub const LOGO_SRC: &str = "/assets/logo.jpg";

#[component]
pub fn Toolbar(title: String, user_name: Option<String>, room_name: Option<String>) -> Element {
    let labels = match (user_name, room_name) {
        (Some(user), Some(room)) => Some((user, room)),
        _ => None,
    };

    rsx! {
        header { class: "Toolbar",
            img {
                class: "Toolbar-logo",
                src: LOGO_SRC,
                alt: "eyeson Logo",
                height: "50",
            }
            h1 { class: "Toolbar-title", "{title}" }
            if let Some((user, room)) = labels {
                div { class: "Toolbar-labels",
                    span { class: "Toolbar-user", "{user}" }
                    span { class: "Toolbar-room", "{room}" }
                }
            }
        }
    }
}
