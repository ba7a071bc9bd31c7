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

use videocode_ui::constants::{app_config_or_default, RuntimeConfig};
use videocode_ui::context::NoteStorageCtx;
use videocode_ui::pages::index::IndexPage;
use videocode_ui::storage::BrowserStorage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AppProps {
    initial_room_address: String,
    unload_guard: bool,
}

#[function_component(App)]
fn app_component(props: &AppProps) -> Html {
    let storage = use_state(|| NoteStorageCtx::new(BrowserStorage::local()));

    html! {
        <ContextProvider<NoteStorageCtx> context={(*storage).clone()}>
            <IndexPage
                initial_room_address={props.initial_room_address.clone()}
                unload_guard={props.unload_guard}
            />
        </ContextProvider<NoteStorageCtx>>
    }
}

fn init_logging(config: &RuntimeConfig) {
    console_error_panic_hook::set_once();
    if let Some(level) = config.log_level().to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::error_1(&format!("logger already initialised: {e}").into());
        }
    }
}

fn main() {
    let config = app_config_or_default();
    init_logging(&config);
    log::info!("Starting VideoCode UI");

    yew::Renderer::<App>::with_props(AppProps {
        initial_room_address: config.default_room_url(),
        unload_guard: config.unload_guard_enabled(),
    })
    .render();
}
