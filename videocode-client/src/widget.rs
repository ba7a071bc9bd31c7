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

//! Contract between the call controller and the embedded video widget.
//!
//! The browser build implements [`CallWidget`] on top of `DailyIframe`; tests
//! use [`RecordingWidget`]. Creating a widget needs a DOM container, so
//! construction is not part of the trait: the owner creates the widget and
//! hands it to [`crate::CallController::init`].

use serde::Serialize;

/// Operations the controller forwards to the widget. All of them are
/// fire-and-forget: completion is only observed through later
/// [`crate::CallEvent`]s.
pub trait CallWidget {
    fn join(&mut self, url: &str);
    fn leave(&mut self);
    fn set_local_audio(&mut self, enabled: bool);
    fn set_local_video(&mut self, enabled: bool);
    /// Tears the widget down and releases its resources. Called exactly once.
    fn destroy(&mut self);
}

impl<W: CallWidget + ?Sized> CallWidget for Box<W> {
    fn join(&mut self, url: &str) {
        (**self).join(url)
    }

    fn leave(&mut self) {
        (**self).leave()
    }

    fn set_local_audio(&mut self, enabled: bool) {
        (**self).set_local_audio(enabled)
    }

    fn set_local_video(&mut self, enabled: bool) {
        (**self).set_local_video(enabled)
    }

    fn destroy(&mut self) {
        (**self).destroy()
    }
}

/// Frame options passed to the widget at creation time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub show_leave_button: bool,
    pub show_fullscreen_button: bool,
    pub show_local_video: bool,
    pub show_participants_bar: bool,
    pub theme: WidgetTheme,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            show_leave_button: false,
            show_fullscreen_button: false,
            show_local_video: true,
            show_participants_bar: false,
            theme: WidgetTheme::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WidgetTheme {
    pub colors: ThemeColors,
}

impl Default for WidgetTheme {
    fn default() -> Self {
        Self {
            colors: ThemeColors {
                accent: "#22c55e",
                accent_text: "#ffffff",
                background: "#0a0a0f",
                background_accent: "#141419",
                base_text: "#f1f5f9",
                border: "#1e293b",
                main_area_bg: "#0f172a",
                main_area_bg_accent: "#1e293b",
                main_area_text: "#f1f5f9",
                supportive_text: "#64748b",
            },
        }
    }
}

/// Dark palette matching the page styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub background: &'static str,
    pub background_accent: &'static str,
    pub base_text: &'static str,
    pub border: &'static str,
    pub main_area_bg: &'static str,
    pub main_area_bg_accent: &'static str,
    pub main_area_text: &'static str,
    pub supportive_text: &'static str,
}

/// A call the controller made on the widget.
#[cfg(any(test, feature = "testing"))]
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetCall {
    Join(String),
    Leave,
    SetLocalAudio(bool),
    SetLocalVideo(bool),
    Destroy,
}

/// In-memory widget that records every call. Clones share the same log, so
/// a test can keep one clone and hand the other to the controller.
#[cfg(any(test, feature = "testing"))]
#[derive(Clone, Debug, Default)]
pub struct RecordingWidget {
    calls: std::rc::Rc<std::cell::RefCell<Vec<WidgetCall>>>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<WidgetCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: WidgetCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[cfg(any(test, feature = "testing"))]
impl CallWidget for RecordingWidget {
    fn join(&mut self, url: &str) {
        self.record(WidgetCall::Join(url.to_string()));
    }

    fn leave(&mut self) {
        self.record(WidgetCall::Leave);
    }

    fn set_local_audio(&mut self, enabled: bool) {
        self.record(WidgetCall::SetLocalAudio(enabled));
    }

    fn set_local_video(&mut self, enabled: bool) {
        self.record(WidgetCall::SetLocalVideo(enabled));
    }

    fn destroy(&mut self) {
        self.record(WidgetCall::Destroy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_hide_the_builtin_chrome() {
        let json = serde_json::to_value(WidgetOptions::default()).unwrap();
        assert_eq!(json["showLeaveButton"], false);
        assert_eq!(json["showFullscreenButton"], false);
        assert_eq!(json["showLocalVideo"], true);
        assert_eq!(json["showParticipantsBar"], false);
        assert_eq!(json["theme"]["colors"]["accent"], "#22c55e");
        assert_eq!(json["theme"]["colors"]["mainAreaBg"], "#0f172a");
    }

    #[test]
    fn recording_widget_clones_share_the_log() {
        let probe = RecordingWidget::new();
        let mut boxed: Box<dyn CallWidget> = Box::new(probe.clone());
        boxed.join("https://example.daily.co/room");
        boxed.destroy();
        assert_eq!(
            probe.calls(),
            vec![
                WidgetCall::Join("https://example.daily.co/room".into()),
                WidgetCall::Destroy
            ]
        );
    }
}
