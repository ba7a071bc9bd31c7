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

//! Index page: header, call area and notepad panel.
//!
//! Holds the session (room address plus what the call controller reported),
//! the note buffer, the notepad visibility and the leave-warning dialog. The
//! controller is created here and lent to the video view.

use std::rc::Rc;

use crate::components::header::Header;
use crate::components::leave_warning_modal::LeaveWarningModal;
use crate::components::notepad::Notepad;
use crate::components::video_call::VideoCall;
use crate::context::{CallControllerCtx, NoteStorageCtx};
use crate::unload::UnloadListeners;
use videocode_client::{
    resolve_leave, CallControllerOptions, CallEvent, Callback as ClientCallback, GuardSnapshot,
    LeaveDecision, NoteBuffer, Session,
};
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct IndexPageProps {
    #[prop_or_default]
    pub initial_room_address: String,

    /// Install the beforeunload / refresh-shortcut guard.
    #[prop_or(true)]
    pub unload_guard: bool,
}

/// Session as reducer state. Controller reports are folded in through
/// [`Session::apply`]; only the room address is set directly.
#[derive(Clone, Debug, Default, PartialEq)]
struct PageSession(Session);

enum SessionAction {
    RoomAddress(String),
    Call(CallEvent),
}

impl Reducible for PageSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.0.clone();
        match action {
            SessionAction::RoomAddress(address) => session.room_address = address,
            SessionAction::Call(event) => session.apply(&event),
        }
        Rc::new(Self(session))
    }
}

#[function_component(IndexPage)]
pub fn index_page(props: &IndexPageProps) -> Html {
    let storage = use_context::<NoteStorageCtx>()
        .expect("Note storage context provider is missing – this is a bug");

    let session = {
        let initial = props.initial_room_address.clone();
        use_reducer(move || PageSession(Session::with_room_address(initial)))
    };
    let note = {
        let storage = storage.clone();
        use_state(move || NoteBuffer::restore(storage.store()))
    };
    let notepad_open = use_state(|| false);
    let show_leave_warning = use_state(|| false);
    // Set right before a confirmed reload so the native prompt stays quiet.
    let leaving = use_mut_ref(|| false);

    let controller = {
        let dispatcher = session.dispatcher();
        use_state(move || {
            CallControllerCtx::new(CallControllerOptions {
                on_joined_change: {
                    let dispatcher = dispatcher.clone();
                    ClientCallback::from(move |joined: bool| {
                        let event = if joined {
                            CallEvent::Joined
                        } else {
                            CallEvent::Left
                        };
                        dispatcher.dispatch(SessionAction::Call(event));
                    })
                },
                on_network_status: ClientCallback::from(move |status| {
                    dispatcher.dispatch(SessionAction::Call(CallEvent::NetworkQualityChanged(
                        status,
                    )))
                }),
            })
        })
    };

    // Re-render when the widget is attached or dropped so the join button
    // follows the controller.
    {
        let refresh = use_force_update();
        use_effect_with((*controller).clone(), move |controller| {
            let id = controller.subscribe({
                let refresh = refresh.clone();
                Callback::from(move |_: ()| refresh.force_update())
            });
            // The view may have attached its widget before this subscription.
            if controller.has_widget() {
                refresh.force_update();
            }
            let controller = controller.clone();
            move || controller.unsubscribe(id)
        });
    }

    let session_state = session.0.clone();

    // Unload guard
    {
        let storage = storage.clone();
        let show_leave_warning = show_leave_warning.clone();
        let leaving = leaving.clone();
        use_effect_with(
            (session_state.clone(), *notepad_open, props.unload_guard),
            move |(session, notepad_open, enabled)| {
                let listeners = if *enabled {
                    let session = session.clone();
                    let notepad_open = *notepad_open;
                    UnloadListeners::attach(
                        move || {
                            !*leaving.borrow()
                                && GuardSnapshot::capture(&session, notepad_open, storage.store())
                                    .needs_confirmation()
                        },
                        Callback::from(move |_: ()| show_leave_warning.set(true)),
                    )
                } else {
                    None
                };
                move || drop(listeners)
            },
        );
    }

    let on_room_address_change = {
        let dispatcher = session.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(SessionAction::RoomAddress(value)))
    };

    let on_join = {
        let controller = (*controller).clone();
        let room_address = session_state.room_address.clone();
        Callback::from(move |_: ()| {
            controller.join(&room_address);
        })
    };

    let on_leave = {
        let controller = (*controller).clone();
        Callback::from(move |_: ()| {
            controller.leave();
        })
    };

    let on_note_change = {
        let note = note.clone();
        Callback::from(move |buffer: NoteBuffer| note.set(buffer))
    };

    let on_toggle_notepad = {
        let notepad_open = notepad_open.clone();
        Callback::from(move |_: ()| notepad_open.set(!*notepad_open))
    };

    let on_close_notepad = {
        let notepad_open = notepad_open.clone();
        Callback::from(move |_: ()| notepad_open.set(false))
    };

    let on_stay = {
        let show_leave_warning = show_leave_warning.clone();
        let storage = storage.clone();
        Callback::from(move |_: ()| {
            resolve_leave(LeaveDecision::Stay, storage.store());
            show_leave_warning.set(false);
        })
    };

    let on_leave_anyway = {
        let show_leave_warning = show_leave_warning.clone();
        let leaving = leaving.clone();
        Callback::from(move |_: ()| {
            if resolve_leave(LeaveDecision::LeaveAnyway, storage.store()) {
                *leaving.borrow_mut() = true;
                show_leave_warning.set(false);
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().reload() {
                        log::error!("Reload failed: {e:?}");
                    }
                }
            }
        })
    };

    html! {
        <div class="app-root">
            <Header
                room_address={session_state.room_address.clone()}
                {on_room_address_change}
                joined={session_state.joined}
                can_join={controller.can_join(&session_state.room_address)}
                {on_join}
                {on_leave}
                network_status={session_state.network_status}
                notepad_open={*notepad_open}
                {on_toggle_notepad}
            />
            <main class="main-content">
                <section class="video-section">
                    <VideoCall
                        controller={(*controller).clone()}
                        room_address={session_state.room_address.clone()}
                    />
                </section>
                {
                    if *notepad_open {
                        html! {
                            <aside class="notepad-panel">
                                <Notepad
                                    buffer={(*note).clone()}
                                    on_change={on_note_change}
                                    on_close={on_close_notepad}
                                />
                            </aside>
                        }
                    } else {
                        html! {}
                    }
                }
            </main>
            {
                if *show_leave_warning {
                    html! { <LeaveWarningModal {on_stay} on_leave={on_leave_anyway} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
