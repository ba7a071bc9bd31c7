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

//! In-page confirmation shown when a refresh shortcut would throw away the
//! current session.

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct LeaveWarningModalProps {
    pub on_stay: Callback<()>,
    pub on_leave: Callback<()>,
}

#[function_component(LeaveWarningModal)]
pub fn leave_warning_modal(props: &LeaveWarningModalProps) -> Html {
    html! {
        <div class="glass-backdrop leave-warning-overlay" style="z-index: 9999;" role="dialog" aria-modal="true">
            <div class="card-apple" style="width: 420px; text-align: center;">
                <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"
                     viewBox="0 0 24 24" fill="none" stroke="#f59e0b"
                     stroke-width="2" style="margin: 0 auto 1rem;">
                    <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"></path>
                    <line x1="12" y1="9" x2="12" y2="13"></line>
                    <line x1="12" y1="17" x2="12.01" y2="17"></line>
                </svg>
                <h4 style="margin-top:0; margin-bottom: 0.5rem;">{"Leave this page?"}</h4>
                <p class="leave-warning-message"
                   style="font-size: 1rem; margin: 1.5rem 0; color: #666;">
                    {"Reloading ends your call and discards your saved notes."}
                </p>
                <div class="leave-warning-actions">
                    <button
                        class="btn-apple btn-secondary leave-warning-stay"
                        onclick={props.on_stay.reform(|_: MouseEvent| ())}>
                        {"Stay"}
                    </button>
                    <button
                        class="btn-apple btn-danger leave-warning-leave"
                        onclick={props.on_leave.reform(|_: MouseEvent| ())}>
                        {"Leave anyway"}
                    </button>
                </div>
            </div>
        </div>
    }
}
