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

//! Page-level session state.

use crate::events::{CallEvent, NetworkStatus};

/// Returns `true` when `address` can be used to join a room. Blank input
/// disables the join affordance.
pub fn is_joinable_address(address: &str) -> bool {
    !address.trim().is_empty()
}

/// What the page knows about the current call. Created empty at load and
/// reset by a reload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub room_address: String,
    pub joined: bool,
    pub network_status: Option<NetworkStatus>,
}

impl Session {
    pub fn with_room_address(room_address: impl Into<String>) -> Self {
        Self {
            room_address: room_address.into(),
            ..Default::default()
        }
    }

    /// Mirrors a widget event already applied by the controller. Only
    /// widget-confirmed facts change `joined`.
    pub fn apply(&mut self, event: &CallEvent) {
        match event {
            CallEvent::Joined => self.joined = true,
            CallEvent::Left => {
                self.joined = false;
                self.network_status = None;
            }
            CallEvent::NetworkQualityChanged(status) => self.network_status = Some(*status),
            CallEvent::Error(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NetworkState;

    #[test]
    fn whitespace_is_not_an_address() {
        assert!(!is_joinable_address(""));
        assert!(!is_joinable_address("  \t"));
        assert!(is_joinable_address("https://a.daily.co/b"));
    }

    #[test]
    fn session_tracks_confirmed_events_only() {
        let mut session = Session::with_room_address("https://a.daily.co/b");

        session.apply(&CallEvent::Error("denied".into()));
        assert!(!session.joined);

        session.apply(&CallEvent::Joined);
        assert!(session.joined);

        let status = NetworkStatus::new(NetworkState::Good, 0.5);
        session.apply(&CallEvent::NetworkQualityChanged(status));
        assert_eq!(session.network_status, Some(status));

        session.apply(&CallEvent::Left);
        assert!(!session.joined);
        assert_eq!(session.network_status, None);
        assert_eq!(session.room_address, "https://a.daily.co/b");
    }
}
