// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const DEFAULT_METADATA_API_URL: &str = conference_client::DEFAULT_METADATA_API_URL;
pub const DEFAULT_TITLE: &str = "Web GUI React App";

/// Optional deployment settings read from `window.__APP_CONFIG`.
///
/// Every field may be omitted; a page without `__APP_CONFIG` at all runs on
/// the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "metadataApiUrl")]
    #[serde(default)]
    pub metadata_api_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "debugLogging")]
    #[serde(default)]
    pub debug_logging: Option<String>,
}

impl RuntimeConfig {
    pub fn metadata_api_url(&self) -> String {
        self.metadata_api_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_METADATA_API_URL.to_string())
    }

    pub fn title(&self) -> String {
        self.title
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn debug_logging(&self) -> bool {
        truthy(self.debug_logging.as_deref())
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Ok(RuntimeConfig::default());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}

pub fn debug_logging_enabled() -> bool {
    cfg!(feature = "debugAssertions") || app_config().map(|c| c.debug_logging()).unwrap_or(false)
}
