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

//! Video area hosting the embedded call frame, plus the mute and camera
//! controls.

use crate::components::video_control_buttons::{CameraButton, MicButton};
use crate::context::CallControllerCtx;
use crate::daily::DailyWidget;
use log::{debug, warn};
use videocode_client::{Callback as ClientCallback, CallEvent, WidgetOptions};
use web_sys::HtmlElement;
use yew::prelude::*;

pub enum Msg {
    ControllerChanged,
    ToggleMute,
    ToggleVideo,
}

#[derive(Properties, Debug, PartialEq)]
pub struct VideoCallProps {
    pub controller: CallControllerCtx,

    /// Shown as an empty state while blank.
    #[prop_or_default]
    pub room_address: String,
}

pub struct VideoCall {
    container: NodeRef,
    subscription: usize,
}

impl Component for VideoCall {
    type Message = Msg;
    type Properties = VideoCallProps;

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = ctx
            .props()
            .controller
            .subscribe(ctx.link().callback(|_| Msg::ControllerChanged));
        Self {
            container: NodeRef::default(),
            subscription,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(container) = self.container.cast::<HtmlElement>() else {
            warn!("Video container is not mounted");
            return;
        };
        let controller = ctx.props().controller.clone();
        let on_event = {
            let controller = controller.clone();
            ClientCallback::from(move |event: CallEvent| controller.handle_event(event))
        };
        match DailyWidget::create(&container, &WidgetOptions::default(), on_event) {
            Ok(widget) => controller.init(Box::new(widget)),
            Err(e) => warn!("Call widget unavailable: {e:#}"),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let controller = &ctx.props().controller;
        match msg {
            Msg::ControllerChanged => true,
            Msg::ToggleMute => {
                controller.toggle_mute();
                false
            }
            Msg::ToggleVideo => {
                controller.toggle_video();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let controller = &ctx.props().controller;
        let controls_disabled = !controller.controls_enabled();
        let empty_state = if ctx.props().room_address.trim().is_empty() {
            html! {
                <div class="video-empty-state">
                    <div class="video-empty-icon">
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="32" height="32" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <polygon points="23 7 16 12 23 17 23 7"></polygon>
                            <rect x="1" y="5" width="15" height="14" rx="2" ry="2"></rect>
                        </svg>
                    </div>
                    <h3>{"Video Call Ready"}</h3>
                    <p>{"Connect to Daily.co room to start your video call. Add your room URL to get started."}</p>
                </div>
            }
        } else {
            html! {}
        };

        html! {
            <div class="video-call">
                <div class="video-area">
                    <div ref={self.container.clone()} class="video-frame-container" style="min-height: 400px;"></div>
                    { empty_state }
                </div>
                <div class="video-controls">
                    <MicButton
                        enabled={!controller.is_audio_muted()}
                        disabled={controls_disabled}
                        onclick={ctx.link().callback(|_| Msg::ToggleMute)}
                    />
                    <CameraButton
                        enabled={!controller.is_video_off()}
                        disabled={controls_disabled}
                        onclick={ctx.link().callback(|_| Msg::ToggleVideo)}
                    />
                </div>
            </div>
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        debug!("destroying call view");
        let controller = &ctx.props().controller;
        controller.unsubscribe(self.subscription);
        controller.dispose();
    }
}
