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

//! Unload guard.
//!
//! Decides whether closing or refreshing the tab would throw away something
//! the user cares about, and recognises the refresh keyboard shortcuts so the
//! page can show its own confirmation instead of navigating away.

use crate::session::Session;
use crate::storage::{clear_persisted_note, has_persisted_note, KeyValueStore};

/// The state the guard looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardSnapshot {
    pub joined: bool,
    pub room_address_set: bool,
    pub notepad_open: bool,
    pub persisted_note: bool,
}

impl GuardSnapshot {
    pub fn capture<S: KeyValueStore + ?Sized>(
        session: &Session,
        notepad_open: bool,
        storage: &S,
    ) -> Self {
        Self {
            joined: session.joined,
            room_address_set: !session.room_address.is_empty(),
            notepad_open,
            persisted_note: has_persisted_note(storage),
        }
    }

    /// Any meaningful session or note state makes leaving the page worth a
    /// confirmation.
    pub fn needs_confirmation(&self) -> bool {
        self.joined || self.room_address_set || self.notepad_open || self.persisted_note
    }
}

/// Modifier and key state of a keyboard event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

/// `F5`, `Ctrl+R`, or `Cmd+R`.
pub fn is_refresh_shortcut(press: &KeyPress<'_>) -> bool {
    match press.key {
        "F5" => true,
        "r" | "R" => press.ctrl || press.meta,
        _ => false,
    }
}

/// What the user chose in the leave-warning dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveDecision {
    Stay,
    LeaveAnyway,
}

/// Applies the storage side of a dialog decision. Returns `true` when the
/// caller should now reload the page.
pub fn resolve_leave<S: KeyValueStore + ?Sized>(decision: LeaveDecision, storage: &S) -> bool {
    match decision {
        LeaveDecision::Stay => false,
        LeaveDecision::LeaveAnyway => {
            clear_persisted_note(storage);
            log::info!("Discarding saved note and reloading");
            true
        }
    }
}
