// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the index page: header wiring, notepad panel and
// the unload guard's refresh-shortcut dialog.
//
// The "Leave anyway" path reloads the page, which would tear down the test
// runner, so only the "Stay" path is exercised here. Clearing the saved
// note on leave is covered by the core crate's guard tests.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    cleanup, create_mount_point, dispatch_before_unload, exists, is_disabled,
    press_key_on_window, query, text_of, type_into_input, type_into_textarea,
};
use videocode_client::{KeyValueStore, MemoryStore, NOTEPAD_CONTENT_KEY};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use videocode_ui::context::NoteStorageCtx;
use videocode_ui::pages::index::IndexPage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
    storage: NoteStorageCtx,
    #[prop_or_default]
    initial_room_address: String,
    unload_guard: bool,
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
    html! {
        <ContextProvider<NoteStorageCtx> context={props.storage.clone()}>
            <IndexPage
                initial_room_address={props.initial_room_address.clone()}
                unload_guard={props.unload_guard}
            />
        </ContextProvider<NoteStorageCtx>>
    }
}

async fn render_page(
    store: &MemoryStore,
    initial_room_address: &str,
    unload_guard: bool,
) -> (web_sys::Element, yew::AppHandle<Wrapper>) {
    let mount = create_mount_point();
    let handle = yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            storage: NoteStorageCtx::new(store.clone()),
            initial_room_address: initial_room_address.to_string(),
            unload_guard,
        },
    )
    .render();
    sleep(Duration::ZERO).await;
    (mount, handle)
}

/// Unmounts the app so its window listeners are detached before the next test.
async fn teardown(mount: web_sys::Element, handle: yew::AppHandle<Wrapper>) {
    handle.destroy();
    sleep(Duration::ZERO).await;
    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn header_shows_title_and_room_input() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", false).await;

    assert_eq!(text_of(&mount, ".app-title"), "VideoCode");
    let input = query(&mount, "#room-address");
    assert_eq!(
        input.get_attribute("placeholder").as_deref(),
        Some("Enter Daily.co room URL...")
    );
    assert!(!exists(&mount, ".leave-button"));
    assert!(!exists(&mount, ".network-status"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn join_disabled_for_blank_room_address() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", false).await;
    assert!(is_disabled(&mount, ".join-button"));

    type_into_input(&mount, "#room-address", "   ");
    sleep(Duration::ZERO).await;
    assert!(is_disabled(&mount, ".join-button"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn join_disabled_without_call_widget() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", false).await;

    // The Daily script is absent in tests, so there is no widget to join with
    // even once a valid address is entered.
    type_into_input(&mount, "#room-address", "https://example.daily.co/room");
    sleep(Duration::ZERO).await;
    assert!(!exists(&mount, ".video-empty-state"));
    assert!(is_disabled(&mount, ".join-button"));

    query(&mount, ".join-button").click();
    sleep(Duration::ZERO).await;
    assert!(exists(&mount, ".join-button"));
    assert!(!exists(&mount, ".leave-button"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn initial_room_address_prefills_input() {
    let (mount, handle) =
        render_page(&MemoryStore::new(), "https://example.daily.co/standup", false).await;

    let input = query(&mount, "#room-address")
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(input.value(), "https://example.daily.co/standup");

    teardown(mount, handle).await;
}

// ---------------------------------------------------------------------------
// Notepad panel
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn notepad_toggle_opens_and_closes_panel() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", false).await;
    assert!(!exists(&mount, ".notepad-panel"));

    query(&mount, ".notepad-toggle").click();
    sleep(Duration::ZERO).await;
    assert!(exists(&mount, ".notepad-panel .notepad-editor"));
    assert!(query(&mount, ".notepad-toggle")
        .class_list()
        .contains("btn-primary"));

    query(&mount, ".notepad-close").click();
    sleep(Duration::ZERO).await;
    assert!(!exists(&mount, ".notepad-panel"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn unsaved_note_survives_closing_the_panel() {
    let store = MemoryStore::new();
    let (mount, handle) = render_page(&store, "", false).await;

    query(&mount, ".notepad-toggle").click();
    sleep(Duration::ZERO).await;
    type_into_textarea(&mount, ".notepad-editor", "draft idea");
    sleep(Duration::ZERO).await;

    query(&mount, ".notepad-close").click();
    sleep(Duration::ZERO).await;
    assert!(!exists(&mount, ".notepad-panel"));

    query(&mount, ".notepad-toggle").click();
    sleep(Duration::ZERO).await;
    let editor = query(&mount, ".notepad-editor")
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap();
    assert_eq!(editor.value(), "draft idea");
    assert_eq!(text_of(&mount, ".notepad-stats"), "1 lines • 10 characters");
    assert!(store.is_empty(), "closing the panel does not save");

    teardown(mount, handle).await;
}

// ---------------------------------------------------------------------------
// Unload guard
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn refresh_shortcut_on_pristine_page_is_not_intercepted() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", true).await;

    let event = press_key_on_window("F5", false, false);
    sleep(Duration::ZERO).await;

    assert!(!event.default_prevented());
    assert!(!exists(&mount, ".leave-warning-overlay"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn refresh_shortcut_with_room_address_opens_dialog() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", true).await;
    type_into_input(&mount, "#room-address", "https://example.daily.co/room");
    sleep(Duration::ZERO).await;

    let event = press_key_on_window("r", true, false);
    sleep(Duration::ZERO).await;

    assert!(event.default_prevented());
    assert!(exists(&mount, ".leave-warning-overlay"));
    assert_eq!(text_of(&mount, ".leave-warning-stay"), "Stay");
    assert_eq!(text_of(&mount, ".leave-warning-leave"), "Leave anyway");

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn cmd_r_with_open_notepad_opens_dialog() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", true).await;
    query(&mount, ".notepad-toggle").click();
    sleep(Duration::ZERO).await;

    press_key_on_window("R", false, true);
    sleep(Duration::ZERO).await;

    assert!(exists(&mount, ".leave-warning-overlay"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn persisted_note_alone_arms_the_guard() {
    let store = MemoryStore::new();
    store.set(NOTEPAD_CONTENT_KEY, "draft").unwrap();
    let (mount, handle) = render_page(&store, "", true).await;

    press_key_on_window("F5", false, false);
    sleep(Duration::ZERO).await;

    assert!(exists(&mount, ".leave-warning-overlay"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn stay_hides_dialog_and_keeps_saved_note() {
    let store = MemoryStore::new();
    store.set(NOTEPAD_CONTENT_KEY, "draft").unwrap();
    let (mount, handle) = render_page(&store, "", true).await;

    press_key_on_window("F5", false, false);
    sleep(Duration::ZERO).await;
    query(&mount, ".leave-warning-stay").click();
    sleep(Duration::ZERO).await;

    assert!(!exists(&mount, ".leave-warning-overlay"));
    assert_eq!(
        store.get(NOTEPAD_CONTENT_KEY).unwrap().as_deref(),
        Some("draft")
    );

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn disabled_guard_ignores_refresh_shortcut() {
    let (mount, handle) =
        render_page(&MemoryStore::new(), "https://example.daily.co/room", false).await;

    let event = press_key_on_window("F5", false, false);
    sleep(Duration::ZERO).await;

    assert!(!event.default_prevented());
    assert!(!exists(&mount, ".leave-warning-overlay"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn before_unload_on_pristine_page_is_allowed() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", true).await;

    let event = dispatch_before_unload();
    assert!(!event.default_prevented());

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn before_unload_with_room_address_asks_for_confirmation() {
    let (mount, handle) = render_page(&MemoryStore::new(), "", true).await;
    type_into_input(&mount, "#room-address", "https://example.daily.co/room");
    sleep(Duration::ZERO).await;

    let event = dispatch_before_unload();
    assert!(event.default_prevented());
    // The native prompt replaces the in-page dialog here.
    assert!(!exists(&mount, ".leave-warning-overlay"));

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn before_unload_with_saved_note_asks_for_confirmation() {
    let store = MemoryStore::new();
    store.set(NOTEPAD_CONTENT_KEY, "draft").unwrap();
    let (mount, handle) = render_page(&store, "", true).await;

    assert!(dispatch_before_unload().default_prevented());

    teardown(mount, handle).await;
}

#[wasm_bindgen_test]
async fn before_unload_ignored_after_guard_is_unmounted() {
    let (mount, handle) =
        render_page(&MemoryStore::new(), "https://example.daily.co/room", true).await;
    teardown(mount, handle).await;

    assert!(!dispatch_before_unload().default_prevented());
}
