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

//! Shared handles passed down the component tree.
//!
//! The page owns the call controller and the note storage; children receive
//! them as capabilities instead of reaching for globals.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use videocode_client::{
    CallController, CallControllerOptions, CallEvent, CallWidget, Callback as ClientCallback,
    KeyValueStore, MemoryStore, NetworkStatus,
};
use yew::prelude::*;

// -----------------------------------------------------------------------------
// Call controller
// -----------------------------------------------------------------------------

type BoxedController = CallController<Box<dyn CallWidget>>;

/// Notifications raised while the controller was borrowed.
enum Notice {
    JoinedChanged(bool),
    NetworkStatus(NetworkStatus),
}

struct CallControllerInner {
    controller: RefCell<BoxedController>,
    pending: Rc<RefCell<Vec<Notice>>>,
    parent: CallControllerOptions,
    subscribers: RefCell<Vec<(usize, Callback<()>)>>,
    next_subscriber_id: Cell<usize>,
}

/// Page-owned call controller, shared with the video view.
///
/// Every mutating method releases the controller borrow before it tells the
/// page (`on_joined_change`, `on_network_status`) and the subscribed views, so
/// a synchronous re-render can read the controller again.
#[derive(Clone)]
pub struct CallControllerCtx {
    inner: Rc<CallControllerInner>,
}

impl PartialEq for CallControllerCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CallControllerCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallControllerCtx")
            .field(
                "joined",
                &self.inner.controller.try_borrow().ok().map(|c| c.is_joined()),
            )
            .finish()
    }
}

impl CallControllerCtx {
    pub fn new(parent: CallControllerOptions) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let options = CallControllerOptions {
            on_joined_change: {
                let pending = pending.clone();
                ClientCallback::from(move |joined| {
                    pending.borrow_mut().push(Notice::JoinedChanged(joined))
                })
            },
            on_network_status: {
                let pending = pending.clone();
                ClientCallback::from(move |status| {
                    pending.borrow_mut().push(Notice::NetworkStatus(status))
                })
            },
        };
        Self {
            inner: Rc::new(CallControllerInner {
                controller: RefCell::new(CallController::new(options)),
                pending,
                parent,
                subscribers: RefCell::new(Vec::new()),
                next_subscriber_id: Cell::new(0),
            }),
        }
    }

    /// Attach a created widget.
    pub fn init(&self, widget: Box<dyn CallWidget>) {
        self.mutate(|c| c.init(widget));
    }

    /// Destroy the widget. Called when the video view leaves the tree.
    pub fn dispose(&self) {
        self.mutate(|c| c.dispose());
    }

    pub fn join(&self, room_address: &str) -> bool {
        self.mutate(|c| c.join(room_address))
    }

    pub fn leave(&self) -> bool {
        self.mutate(|c| c.leave())
    }

    pub fn toggle_mute(&self) {
        self.mutate(|c| c.toggle_mute());
    }

    pub fn toggle_video(&self) {
        self.mutate(|c| c.toggle_video());
    }

    pub fn handle_event(&self, event: CallEvent) {
        self.mutate(|c| c.handle_event(event));
    }

    pub fn has_widget(&self) -> bool {
        self.inner.controller.borrow().has_widget()
    }

    /// Join is only offered when a widget is attached, no call is active and
    /// `room_address` is not blank.
    pub fn can_join(&self, room_address: &str) -> bool {
        self.inner.controller.borrow().can_join(room_address)
    }

    pub fn is_joined(&self) -> bool {
        self.inner.controller.borrow().is_joined()
    }

    pub fn controls_enabled(&self) -> bool {
        self.inner.controller.borrow().controls_enabled()
    }

    pub fn is_audio_muted(&self) -> bool {
        self.inner.controller.borrow().is_audio_muted()
    }

    pub fn is_video_off(&self) -> bool {
        self.inner.controller.borrow().is_video_off()
    }

    /// Subscribe to controller changes. Returns subscription ID for unsubscribing.
    pub fn subscribe(&self, callback: Callback<()>) -> usize {
        let id = self.inner.next_subscriber_id.get();
        self.inner.next_subscriber_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut BoxedController) -> R) -> R {
        let result = f(&mut self.inner.controller.borrow_mut());
        self.flush();
        result
    }

    fn flush(&self) {
        let notices = std::mem::take(&mut *self.inner.pending.borrow_mut());
        for notice in notices {
            match notice {
                Notice::JoinedChanged(joined) => self.inner.parent.on_joined_change.emit(joined),
                Notice::NetworkStatus(status) => self.inner.parent.on_network_status.emit(status),
            }
        }

        // Notify subscribers outside of borrow
        let subscribers: Vec<_> = self.inner.subscribers.borrow().clone();
        for (_, callback) in subscribers {
            callback.emit(());
        }
    }
}

// -----------------------------------------------------------------------------
// Note storage
// -----------------------------------------------------------------------------

/// Storage used by the notepad and the unload guard.
#[derive(Clone)]
pub struct NoteStorageCtx {
    store: Rc<dyn KeyValueStore>,
}

impl NoteStorageCtx {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}

impl PartialEq for NoteStorageCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Default for NoteStorageCtx {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}
