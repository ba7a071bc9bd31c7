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

//! Bindings to the Daily.co call frame (`DailyIframe`).
//!
//! `daily-js` is loaded by `index.html` and exposes the `DailyIframe` global.
//! [`DailyWidget`] wraps one call frame, forwards the controller's commands
//! to it and translates the frame's events into [`CallEvent`]s.

use anyhow::anyhow;
use serde::Deserialize;
use videocode_client::{
    CallEvent, CallWidget, Callback as ClientCallback, NetworkState, NetworkStatus,
    WidgetOptions,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = DailyCall)]
    pub type DailyCallFrame;

    #[wasm_bindgen(js_namespace = DailyIframe, js_name = createFrame, catch)]
    fn create_frame(parent: &HtmlElement, properties: &JsValue) -> Result<DailyCallFrame, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn join(this: &DailyCallFrame, properties: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn leave(this: &DailyCallFrame) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, js_name = setLocalAudio)]
    fn set_local_audio(this: &DailyCallFrame, enabled: bool) -> JsValue;

    #[wasm_bindgen(method, js_name = setLocalVideo)]
    fn set_local_video(this: &DailyCallFrame, enabled: bool) -> JsValue;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &DailyCallFrame) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &DailyCallFrame, event: &str, handler: &js_sys::Function) -> JsValue;

    #[wasm_bindgen(method)]
    fn off(this: &DailyCallFrame, event: &str, handler: &js_sys::Function) -> JsValue;
}

/// Payload of `network-quality-change`.
#[derive(Debug, Default, Deserialize)]
pub struct NetworkQualityPayload {
    /// `good`, `low` or `very-low`.
    #[serde(default)]
    pub threshold: String,
    #[serde(default)]
    pub stats: Option<NetworkStatsPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NetworkStatsPayload {
    #[serde(default)]
    pub latest: Option<LatestNetworkStats>,
}

/// Packet loss fractions (0.0..=1.0) from the most recent stats sample.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestNetworkStats {
    #[serde(default)]
    pub video_recv_packet_loss: Option<f64>,
    #[serde(default)]
    pub video_send_packet_loss: Option<f64>,
}

impl NetworkQualityPayload {
    /// Keeps Daily's own classification: only `good` is good.
    pub fn to_status(&self) -> NetworkStatus {
        let state = if self.threshold == "good" {
            NetworkState::Good
        } else {
            NetworkState::Bad
        };
        let loss = self
            .stats
            .as_ref()
            .and_then(|s| s.latest.as_ref())
            .map(|l| {
                l.video_recv_packet_loss
                    .unwrap_or_default()
                    .max(l.video_send_packet_loss.unwrap_or_default())
            })
            .unwrap_or_default();
        NetworkStatus::new(state, loss * 100.0)
    }
}

/// Decodes a raw `network-quality-change` event object.
pub fn network_status_from_js(payload: JsValue) -> Result<NetworkStatus, serde_wasm_bindgen::Error> {
    serde_wasm_bindgen::from_value::<NetworkQualityPayload>(payload).map(|p| p.to_status())
}

fn error_message(payload: &JsValue) -> String {
    js_sys::Reflect::get(payload, &JsValue::from_str("errorMsg"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{payload:?}"))
}

type Listener = Closure<dyn FnMut(JsValue)>;

/// One Daily call frame mounted into a container element.
pub struct DailyWidget {
    frame: DailyCallFrame,
    listeners: Vec<(&'static str, Listener)>,
    destroyed: bool,
}

impl DailyWidget {
    /// Creates the frame inside `container` and subscribes to the events the
    /// controller cares about. Each event is delivered to `on_event`.
    pub fn create(
        container: &HtmlElement,
        options: &WidgetOptions,
        on_event: ClientCallback<CallEvent>,
    ) -> anyhow::Result<Self> {
        let properties = serde_wasm_bindgen::to_value(options)
            .map_err(|e| anyhow!("failed to encode frame options: {e}"))?;
        let frame = create_frame(container, &properties)
            .map_err(|e| anyhow!("DailyIframe.createFrame failed: {e:?}"))?;

        let mut widget = Self {
            frame,
            listeners: Vec::new(),
            destroyed: false,
        };

        widget.listen("joined-meeting", {
            let on_event = on_event.clone();
            move |_| on_event.emit(CallEvent::Joined)
        });
        widget.listen("left-meeting", {
            let on_event = on_event.clone();
            move |_| on_event.emit(CallEvent::Left)
        });
        widget.listen("network-quality-change", {
            let on_event = on_event.clone();
            move |payload| match network_status_from_js(payload) {
                Ok(status) => on_event.emit(CallEvent::NetworkQualityChanged(status)),
                Err(e) => log::debug!("Unreadable network-quality-change payload: {e}"),
            }
        });
        widget.listen("error", move |payload| {
            on_event.emit(CallEvent::Error(error_message(&payload)))
        });

        Ok(widget)
    }

    fn listen(&mut self, event: &'static str, handler: impl FnMut(JsValue) + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
        self.frame.on(event, closure.as_ref().unchecked_ref());
        self.listeners.push((event, closure));
    }

    fn settle(action: &'static str, promise: Result<js_sys::Promise, JsValue>) {
        match promise {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Daily {action} rejected: {e:?}");
                }
            }),
            Err(e) => log::warn!("Daily {action} threw: {e:?}"),
        }
    }
}

impl CallWidget for DailyWidget {
    fn join(&mut self, url: &str) {
        let properties = js_sys::Object::new();
        if js_sys::Reflect::set(&properties, &"url".into(), &url.into()).is_err() {
            log::error!("Could not build join properties");
            return;
        }
        Self::settle("join", self.frame.join(&properties));
    }

    fn leave(&mut self) {
        Self::settle("leave", self.frame.leave());
    }

    fn set_local_audio(&mut self, enabled: bool) {
        self.frame.set_local_audio(enabled);
    }

    fn set_local_video(&mut self, enabled: bool) {
        self.frame.set_local_video(enabled);
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        for (event, closure) in self.listeners.drain(..) {
            self.frame.off(event, closure.as_ref().unchecked_ref());
        }
        Self::settle("destroy", self.frame.destroy());
    }
}

impl Drop for DailyWidget {
    fn drop(&mut self) {
        self.destroy();
    }
}
