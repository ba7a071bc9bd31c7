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

//! Events reported by the embedded call widget.
//!
//! Every widget callback is translated into one [`CallEvent`] and handed to
//! [`crate::CallController::handle_event`]. The set is closed on purpose:
//! widget events we do not subscribe to never reach the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse network classification, as reported by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkState {
    Good,
    Bad,
}

impl fmt::Display for NetworkState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkState::Good => write!(f, "Good"),
            NetworkState::Bad => write!(f, "Bad"),
        }
    }
}

/// Network status summary passed upward to the page header.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub status: NetworkState,
    /// Packet loss in percent.
    pub packet_loss: f64,
}

impl NetworkStatus {
    pub fn new(status: NetworkState, packet_loss: f64) -> Self {
        Self {
            status,
            packet_loss,
        }
    }
}

/// Events emitted by the call widget that the controller reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum CallEvent {
    /// The widget confirmed that the local participant joined the room.
    Joined,

    /// The widget confirmed that the local participant left the room.
    Left,

    /// The widget re-classified the connection quality.
    NetworkQualityChanged(NetworkStatus),

    /// The widget reported a failure (connection refused, permissions, ...).
    Error(String),
}

impl CallEvent {
    /// Name of the widget event this variant is produced from.
    pub fn widget_event_name(&self) -> &'static str {
        match self {
            CallEvent::Joined => "joined-meeting",
            CallEvent::Left => "left-meeting",
            CallEvent::NetworkQualityChanged(_) => "network-quality-change",
            CallEvent::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_status_serializes_in_camel_case() {
        let status = NetworkStatus::new(NetworkState::Bad, 12.5);
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["status"], "bad");
        assert_eq!(json["packetLoss"], 12.5);
    }

    #[test]
    fn event_names_match_the_widget_vocabulary() {
        assert_eq!(CallEvent::Joined.widget_event_name(), "joined-meeting");
        assert_eq!(CallEvent::Left.widget_event_name(), "left-meeting");
        assert_eq!(
            CallEvent::NetworkQualityChanged(NetworkStatus::new(NetworkState::Good, 0.0))
                .widget_event_name(),
            "network-quality-change"
        );
    }
}
