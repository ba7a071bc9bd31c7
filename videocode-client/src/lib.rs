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

//! Framework-agnostic core of the VideoCode front-end.
//!
//! Nothing in this crate touches the DOM. The UI crate supplies a
//! [`CallWidget`] backed by the Daily.co iframe and a [`KeyValueStore`] backed
//! by `localStorage`; tests substitute [`MemoryStore`] and, with the
//! `testing` feature, `RecordingWidget`.
//!
//! # Outline of usage
//!
//! ```ignore
//! let mut controller = CallController::new(CallControllerOptions {
//!     on_joined_change: Callback::from(|joined| log::info!("joined: {joined}")),
//!     on_network_status: Callback::noop(),
//! });
//! controller.init(widget);
//! controller.join("https://your-team.daily.co/room");
//! // later, from the widget's listeners
//! controller.handle_event(CallEvent::Joined);
//! ```
//!
//! ```ignore
//! let mut notes = NoteBuffer::restore(&storage);
//! notes.set_content("- follow up with design");
//! notes.save(&storage);
//! let file = notes.download_artifact(today);
//! ```

pub mod callback;
pub mod controller;
pub mod error;
pub mod events;
pub mod guard;
pub mod notes;
pub mod session;
pub mod storage;
pub mod widget;

pub use callback::Callback;
pub use controller::{CallController, CallControllerOptions, CallState};
pub use error::{StorageError, UnknownNoteMode};
pub use events::{CallEvent, NetworkState, NetworkStatus};
pub use guard::{is_refresh_shortcut, resolve_leave, GuardSnapshot, KeyPress, LeaveDecision};
pub use notes::{download_file_name, DownloadArtifact, NoteBuffer, NoteMode};
pub use session::{is_joinable_address, Session};
pub use storage::{KeyValueStore, MemoryStore, NOTEPAD_CONTENT_KEY, NOTEPAD_MODE_KEY};
pub use widget::{CallWidget, WidgetOptions};

#[cfg(any(test, feature = "testing"))]
pub use widget::{RecordingWidget, WidgetCall};

/// Parses a configuration flag: `"true"` or `"1"` (any case) is on.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true", "1"].contains(&s.to_lowercase().as_str())
    } else {
        false
    }
}
