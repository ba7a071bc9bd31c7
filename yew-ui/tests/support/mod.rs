// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for videocode-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection and small DOM
// event helpers so that individual test files stay focused on assertions
// rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};

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

/// First element under `mount` matching `selector`, as an `HtmlElement`.
pub fn query(mount: &web_sys::Element, selector: &str) -> HtmlElement {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

pub fn exists(mount: &web_sys::Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

pub fn text_of(mount: &web_sys::Element, selector: &str) -> String {
    query(mount, selector).text_content().unwrap_or_default()
}

pub fn is_disabled(mount: &web_sys::Element, selector: &str) -> bool {
    query(mount, selector).has_attribute("disabled")
}

// ---------------------------------------------------------------------------
// Event helpers
// ---------------------------------------------------------------------------

/// Dispatch a bubbling `input` event so Yew's delegated listener sees it.
fn dispatch_input(target: &HtmlElement) {
    let init = web_sys::InputEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::InputEvent::new_with_event_init_dict("input", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Set the value of an `<input>` and fire `input`, as typing would.
pub fn type_into_input(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = query(mount, selector).dyn_into::<HtmlInputElement>().unwrap();
    input.set_value(value);
    dispatch_input(&input);
}

/// Set the value of a `<textarea>` and fire `input`.
pub fn type_into_textarea(mount: &web_sys::Element, selector: &str, value: &str) {
    let textarea = query(mount, selector)
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap();
    textarea.set_value(value);
    dispatch_input(&textarea);
}

/// Dispatch a `keydown` on `window`, where the unload guard listens.
pub fn press_key_on_window(key: &str, ctrl: bool, meta: bool) -> web_sys::KeyboardEvent {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_meta_key(meta);
    init.set_cancelable(true);
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    gloo_utils::window().dispatch_event(&event).unwrap();
    event
}

/// Dispatch a cancelable `beforeunload` on `window` and return it so the
/// caller can check `default_prevented()`.
pub fn dispatch_before_unload() -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict("beforeunload", &init).unwrap();
    gloo_utils::window().dispatch_event(&event).unwrap();
    event
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a frozen `window.__APP_CONFIG` built from `(key, value)` pairs.
pub fn inject_app_config(entries: &[(&str, &str)]) {
    let config = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&config, &(*key).into(), &(*value).into()).unwrap();
    }
    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
