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

//! Window listeners backing the unload guard.
//!
//! While attached, closing or reloading the tab asks for confirmation when
//! `needs_confirmation` says so, and the refresh shortcuts are turned into
//! an in-page request instead of a navigation. Dropping the value detaches
//! both listeners.

use std::rc::Rc;
use videocode_client::{is_refresh_shortcut, KeyPress};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, KeyboardEvent, Window};
use yew::Callback;

pub struct UnloadListeners {
    window: Window,
    before_unload: Closure<dyn FnMut(BeforeUnloadEvent)>,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
}

impl UnloadListeners {
    pub fn attach(
        needs_confirmation: impl Fn() -> bool + 'static,
        on_refresh_shortcut: Callback<()>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let needs_confirmation = Rc::new(needs_confirmation);

        let before_unload = {
            let needs_confirmation = needs_confirmation.clone();
            Closure::wrap(Box::new(move |e: BeforeUnloadEvent| {
                if (*needs_confirmation)() {
                    e.prevent_default();
                    e.set_return_value("");
                }
            }) as Box<dyn FnMut(BeforeUnloadEvent)>)
        };

        let key_down = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let key = e.key();
            let press = KeyPress {
                key: &key,
                ctrl: e.ctrl_key(),
                meta: e.meta_key(),
            };
            if is_refresh_shortcut(&press) && (*needs_confirmation)() {
                e.prevent_default();
                on_refresh_shortcut.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Err(e) = window.add_event_listener_with_callback(
            "beforeunload",
            before_unload.as_ref().unchecked_ref(),
        ) {
            log::warn!("Could not install beforeunload guard: {e:?}");
        }
        if let Err(e) =
            window.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())
        {
            log::warn!("Could not install refresh shortcut guard: {e:?}");
        }

        Some(Self {
            window,
            before_unload,
            key_down,
        })
    }
}

impl Drop for UnloadListeners {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "beforeunload",
            self.before_unload.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref());
    }
}
