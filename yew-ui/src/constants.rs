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

//! Runtime configuration.
//!
//! The hosting page may inject a frozen `window.__APP_CONFIG` object before
//! the WASM bundle loads. Every field is optional; a missing object means
//! defaults.

use log::LevelFilter;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use videocode_client::truthy;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Room URL pre-filled in the header input.
    #[serde(rename = "defaultRoomUrl")]
    #[serde(default)]
    pub default_room_url: Option<String>,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
    /// `"false"` or `"0"` turns the unload guard off. On when absent.
    #[serde(rename = "unloadGuardEnabled")]
    #[serde(default)]
    pub unload_guard_enabled: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = web_sys::window().ok_or_else(|| "no global `window`".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Config with parse failures logged and replaced by defaults.
pub fn app_config_or_default() -> RuntimeConfig {
    app_config().unwrap_or_else(|e| {
        log::warn!("{e}; using default configuration");
        RuntimeConfig::default()
    })
}

impl RuntimeConfig {
    pub fn default_room_url(&self) -> String {
        self.default_room_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }

    pub fn unload_guard_enabled(&self) -> bool {
        match self.unload_guard_enabled.as_deref() {
            None => true,
            Some(flag) => truthy(Some(flag)),
        }
    }
}
