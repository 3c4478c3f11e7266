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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use conference_ui::components::config_error::ConfigError;
use conference_ui::constants::{app_config, debug_logging_enabled};
use conference_ui::pages::conference::ConferencePage;
use dioxus::prelude::*;

/// App root component
#[component]
fn App() -> Element {
    let config = match app_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return rsx! {
                ConfigError { message: e }
            };
        }
    };

    rsx! {
        ConferencePage {
            title: config.title(),
            metadata_api_url: config.metadata_api_url(),
        }
    }
}

fn main() {
    let level = if debug_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
