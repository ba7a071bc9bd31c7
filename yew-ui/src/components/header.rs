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

use crate::components::video_control_buttons::NotepadButton;
use videocode_client::{NetworkState, NetworkStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct HeaderProps {
    pub room_address: String,
    pub on_room_address_change: Callback<String>,
    pub joined: bool,
    pub can_join: bool,
    pub on_join: Callback<()>,
    pub on_leave: Callback<()>,
    #[prop_or_default]
    pub network_status: Option<NetworkStatus>,
    pub notepad_open: bool,
    pub on_toggle_notepad: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_input = props.on_room_address_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let call_button = if props.joined {
        html! {
            <button class="btn-apple btn-danger leave-button" onclick={props.on_leave.reform(|_: MouseEvent| ())}>
                {"Leave"}
            </button>
        }
    } else {
        html! {
            <button
                class="btn-apple btn-primary join-button"
                disabled={!props.can_join}
                onclick={props.on_join.reform(|_: MouseEvent| ())}
            >
                {"Join"}
            </button>
        }
    };

    let network_badge = match (props.joined, props.network_status) {
        (true, Some(status)) => {
            let class = classes!(
                "network-status",
                match status.status {
                    NetworkState::Good => "network-good",
                    NetworkState::Bad => "network-bad",
                }
            );
            html! {
                <span {class} title="Network quality">
                    { format!("{} · {:.1}% loss", status.status, status.packet_loss) }
                </span>
            }
        }
        _ => html! {},
    };

    html! {
        <header class="top-bar">
            <div class="top-bar-left">
                <h1 class="app-title">{"VideoCode"}</h1>
                <input
                    id="room-address"
                    class="room-address-input"
                    type="url"
                    placeholder="Enter Daily.co room URL..."
                    value={props.room_address.clone()}
                    oninput={on_input}
                />
                { call_button }
                { network_badge }
            </div>
            <div class="top-bar-right">
                <NotepadButton
                    open={props.notepad_open}
                    onclick={props.on_toggle_notepad.reform(|_: MouseEvent| ())}
                />
            </div>
        </header>
    }
}
