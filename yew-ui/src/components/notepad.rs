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

//! Side-panel notepad.
//!
//! The page owns the [`NoteBuffer`] so edits survive closing the panel; this
//! view only renders it and reports changes. Storage is written on save only.

use crate::context::NoteStorageCtx;
use crate::download::trigger_download;
use chrono::Utc;
use videocode_client::{NoteBuffer, NoteMode};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct NotepadProps {
    pub buffer: NoteBuffer,
    /// Receives the edited buffer after every change.
    pub on_change: Callback<NoteBuffer>,
    pub on_close: Callback<()>,
}

#[function_component(Notepad)]
pub fn notepad(props: &NotepadProps) -> Html {
    let storage = use_context::<NoteStorageCtx>()
        .expect("Note storage context provider is missing – this is a bug");
    let buffer = &props.buffer;

    let on_input = {
        let buffer = buffer.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = buffer.clone();
            next.set_content(textarea.value());
            on_change.emit(next);
        })
    };

    let set_mode = |mode: NoteMode| {
        let buffer = buffer.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = buffer.clone();
            next.set_mode(mode);
            on_change.emit(next);
        })
    };

    let on_save = {
        let buffer = buffer.clone();
        Callback::from(move |_: MouseEvent| buffer.save(storage.store()))
    };

    let on_clear = {
        let buffer = buffer.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = buffer.clone();
            next.clear();
            on_change.emit(next);
        })
    };

    let on_download = {
        let buffer = buffer.clone();
        Callback::from(move |_: MouseEvent| {
            let artifact = buffer.download_artifact(Utc::now().date_naive());
            if let Err(e) = trigger_download(&artifact) {
                log::error!("Download of {} failed: {e:#}", artifact.file_name);
            }
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());

    let mode_button = |mode: NoteMode| {
        let class = classes!(
            "btn-apple",
            "btn-sm",
            "notepad-mode",
            format!("notepad-mode-{}", mode.as_str()),
            if buffer.mode() == mode { "btn-primary" } else { "btn-secondary" }
        );
        html! {
            <button {class} onclick={set_mode(mode)}>{ mode.label() }</button>
        }
    };

    html! {
        <div class="notepad">
            <div class="notepad-header">
                <div class="notepad-title">
                    <h3>{"Notepad"}</h3>
                    { mode_button(NoteMode::Code) }
                    { mode_button(NoteMode::Notes) }
                </div>
                <button class="btn-apple btn-ghost notepad-close" onclick={on_close} aria-label="Close notepad">{"×"}</button>
            </div>
            <div class="notepad-body">
                <textarea
                    class="notepad-editor"
                    style="min-height: 500px;"
                    placeholder={buffer.mode().placeholder()}
                    value={buffer.content().to_string()}
                    oninput={on_input}
                />
            </div>
            <div class="notepad-footer">
                <div class="notepad-stats">
                    { format!("{} lines • {} characters", buffer.line_count(), buffer.char_count()) }
                </div>
                <div class="notepad-actions">
                    <button class="btn-apple btn-ghost notepad-clear" onclick={on_clear} title="Clear">{"Clear"}</button>
                    <button class="btn-apple btn-secondary notepad-save" onclick={on_save} title="Save">{"Save"}</button>
                    <button class="btn-apple btn-primary notepad-download" onclick={on_download} title="Download">{"Download"}</button>
                </div>
            </div>
        </div>
    }
}
