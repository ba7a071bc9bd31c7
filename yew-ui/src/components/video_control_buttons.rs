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

//! Call and panel toggle buttons with SVG icons.

use yew::prelude::*;

// =============================================================================
// Microphone Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct MicButtonProps {
    /// Microphone is live.
    pub enabled: bool,
    /// Outside a call the button is inert.
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(MicButton)]
pub fn mic_button(props: &MicButtonProps) -> Html {
    let mut class = classes!("video-control-button", props.enabled.then_some("active"));
    if props.disabled {
        class.push("disabled");
    }
    let onclick = if props.disabled {
        Callback::noop()
    } else {
        props.onclick.clone()
    };

    html! {
        <button {class} disabled={props.disabled} {onclick}>
            {
                if props.enabled {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3z"></path>
                                <path d="M19 10v2a7 7 0 0 1-14 0v-2"></path>
                                <line x1="12" y1="19" x2="12" y2="22"></line>
                            </svg>
                            <span class="tooltip">{"Mute"}</span>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <line x1="1" y1="1" x2="23" y2="23"></line>
                                <path d="M9 9v3a3 3 0 0 0 5.12 2.12M15 9.34V5a3 3 0 0 0-5.94-.6"></path>
                                <path d="M17 16.95A7 7 0 0 1 5 12v-2m14 0v2a7 7 0 0 1-.11 1.23"></path>
                                <line x1="12" y1="19" x2="12" y2="22"></line>
                            </svg>
                            <span class="tooltip">{"Unmute"}</span>
                        </>
                    }
                }
            }
        </button>
    }
}

// =============================================================================
// Camera Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct CameraButtonProps {
    /// Camera is sending.
    pub enabled: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CameraButton)]
pub fn camera_button(props: &CameraButtonProps) -> Html {
    let mut class = classes!("video-control-button", props.enabled.then_some("active"));
    if props.disabled {
        class.push("disabled");
    }
    let onclick = if props.disabled {
        Callback::noop()
    } else {
        props.onclick.clone()
    };

    html! {
        <button {class} disabled={props.disabled} {onclick}>
            {
                if props.enabled {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <polygon points="23 7 16 12 23 17 23 7"></polygon>
                                <rect x="1" y="5" width="15" height="14" rx="2" ry="2"></rect>
                            </svg>
                            <span class="tooltip">{"Stop Video"}</span>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M16 16v1a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2m5.66 0H14a2 2 0 0 1 2 2v3.34l1 1L23 7v10"></path>
                                <line x1="1" y1="1" x2="23" y2="23"></line>
                            </svg>
                            <span class="tooltip">{"Start Video"}</span>
                        </>
                    }
                }
            }
        </button>
    }
}

// =============================================================================
// Notepad Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct NotepadButtonProps {
    pub open: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(NotepadButton)]
pub fn notepad_button(props: &NotepadButtonProps) -> Html {
    let class = classes!(
        "btn-apple",
        "notepad-toggle",
        if props.open { "btn-primary" } else { "btn-secondary" }
    );

    html! {
        <button {class} onclick={props.onclick.clone()} aria-pressed={props.open.to_string()}>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M13.4 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-7.4"></path>
                <path d="M2 6h4"></path>
                <path d="M2 10h4"></path>
                <path d="M2 14h4"></path>
                <path d="M2 18h4"></path>
                <path d="M18.4 2.6a2.17 2.17 0 0 1 3 3L16 11l-4 1 1-4Z"></path>
            </svg>
            <span>{"Notepad"}</span>
        </button>
    }
}
