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

//! Call lifecycle controller.
//!
//! Owns the embedded widget and turns its lifecycle events into a `joined`
//! flag and a network status summary for the page. Local state only changes
//! when the widget confirms something; `join` and `leave` merely forward the
//! request.

use crate::callback::Callback;
use crate::events::{CallEvent, NetworkStatus};
use crate::session::is_joinable_address;
use crate::widget::CallWidget;
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallState {
    /// Not in a call. A join request may be in flight; that is not tracked.
    #[default]
    Idle,
    /// The widget confirmed membership of the room.
    Joined,
}

/// Notifications the controller sends to its owner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallControllerOptions {
    /// Emitted with `true` on a confirmed join and `false` on a confirmed leave.
    pub on_joined_change: Callback<bool>,
    /// Emitted verbatim for every network-quality report.
    pub on_network_status: Callback<NetworkStatus>,
}

pub struct CallController<W: CallWidget> {
    widget: Option<W>,
    state: CallState,
    audio_muted: bool,
    video_off: bool,
    network_status: Option<NetworkStatus>,
    options: CallControllerOptions,
}

impl<W: CallWidget> CallController<W> {
    pub fn new(options: CallControllerOptions) -> Self {
        Self {
            widget: None,
            state: CallState::Idle,
            audio_muted: false,
            video_off: false,
            network_status: None,
            options,
        }
    }

    /// Attaches a freshly created widget. A previously attached widget is
    /// destroyed first.
    pub fn init(&mut self, widget: W) {
        self.dispose();
        self.widget = Some(widget);
        debug!("Call widget attached");
    }

    /// Destroys the widget, if any, and returns to `Idle`. The owner is told
    /// about the implicit leave when a call was active.
    pub fn dispose(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
            debug!("Call widget destroyed");
        }
        if self.state == CallState::Joined {
            self.reset();
            self.options.on_joined_change.emit(false);
        }
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn is_joined(&self) -> bool {
        self.state == CallState::Joined
    }

    pub fn is_audio_muted(&self) -> bool {
        self.audio_muted
    }

    pub fn is_video_off(&self) -> bool {
        self.video_off
    }

    pub fn network_status(&self) -> Option<NetworkStatus> {
        self.network_status
    }

    /// Mute and camera controls are only live inside a call.
    pub fn controls_enabled(&self) -> bool {
        self.is_joined()
    }

    pub fn can_join(&self, room_address: &str) -> bool {
        self.widget.is_some() && !self.is_joined() && is_joinable_address(room_address)
    }

    /// Forwards a join request. Returns `false` when the request was not
    /// valid and nothing was sent to the widget.
    pub fn join(&mut self, room_address: &str) -> bool {
        if !self.can_join(room_address) {
            debug!("Ignoring join request for {room_address:?}");
            return false;
        }
        let Some(widget) = self.widget.as_mut() else {
            return false;
        };
        info!("Joining room {}", room_address.trim());
        widget.join(room_address.trim());
        true
    }

    /// Forwards a leave request. Only valid while joined.
    pub fn leave(&mut self) -> bool {
        if !self.is_joined() {
            debug!("Ignoring leave request while not joined");
            return false;
        }
        let Some(widget) = self.widget.as_mut() else {
            return false;
        };
        info!("Leaving room");
        widget.leave();
        true
    }

    /// Flips the local audio state. No effect outside a call.
    pub fn toggle_mute(&mut self) {
        if !self.controls_enabled() {
            return;
        }
        if let Some(widget) = self.widget.as_mut() {
            self.audio_muted = !self.audio_muted;
            widget.set_local_audio(!self.audio_muted);
        }
    }

    /// Flips the local camera state. No effect outside a call.
    pub fn toggle_video(&mut self) {
        if !self.controls_enabled() {
            return;
        }
        if let Some(widget) = self.widget.as_mut() {
            self.video_off = !self.video_off;
            widget.set_local_video(!self.video_off);
        }
    }

    /// Single entry point for everything the widget reports.
    pub fn handle_event(&mut self, event: CallEvent) {
        debug!("Widget event: {}", event.widget_event_name());
        match event {
            CallEvent::Joined => {
                self.state = CallState::Joined;
                info!("Joined call");
                self.options.on_joined_change.emit(true);
            }
            CallEvent::Left => {
                self.reset();
                info!("Left call");
                self.options.on_joined_change.emit(false);
            }
            CallEvent::NetworkQualityChanged(status) => {
                self.network_status = Some(status);
                self.options.on_network_status.emit(status);
            }
            CallEvent::Error(message) => {
                warn!("Call widget reported an error: {message}");
            }
        }
    }

    fn reset(&mut self) {
        self.state = CallState::Idle;
        self.audio_muted = false;
        self.video_off = false;
        self.network_status = None;
    }
}

impl<W: CallWidget> Drop for CallController<W> {
    fn drop(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
        }
    }
}
