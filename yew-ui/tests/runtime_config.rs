// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for reading `window.__APP_CONFIG`.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use log::LevelFilter;
use support::{inject_app_config, remove_app_config};
use wasm_bindgen_test::*;

use videocode_ui::constants::{app_config, app_config_or_default};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn missing_config_uses_defaults() {
    remove_app_config();

    let config = app_config().unwrap();
    assert_eq!(config.default_room_url(), "");
    assert_eq!(config.log_level(), LevelFilter::Info);
    assert!(config.unload_guard_enabled());
}

#[wasm_bindgen_test]
fn injected_config_is_read() {
    inject_app_config(&[
        ("defaultRoomUrl", " https://example.daily.co/standup "),
        ("logLevel", "debug"),
        ("unloadGuardEnabled", "false"),
    ]);

    let config = app_config().unwrap();
    assert_eq!(config.default_room_url(), "https://example.daily.co/standup");
    assert_eq!(config.log_level(), LevelFilter::Debug);
    assert!(!config.unload_guard_enabled());

    remove_app_config();
}

#[wasm_bindgen_test]
fn unknown_log_level_falls_back_to_info() {
    inject_app_config(&[("logLevel", "chatty"), ("unloadGuardEnabled", "1")]);

    let config = app_config_or_default();
    assert_eq!(config.log_level(), LevelFilter::Info);
    assert!(config.unload_guard_enabled());

    remove_app_config();
}
