// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Decoding of Daily `network-quality-change` payloads.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use js_sys::{Object, Reflect};
use videocode_client::NetworkState;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use videocode_ui::daily::network_status_from_js;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn payload(threshold: &str, recv_loss: Option<f64>, send_loss: Option<f64>) -> JsValue {
    let latest = Object::new();
    if let Some(loss) = recv_loss {
        Reflect::set(&latest, &"videoRecvPacketLoss".into(), &loss.into()).unwrap();
    }
    if let Some(loss) = send_loss {
        Reflect::set(&latest, &"videoSendPacketLoss".into(), &loss.into()).unwrap();
    }
    let stats = Object::new();
    Reflect::set(&stats, &"latest".into(), &latest).unwrap();

    let event = Object::new();
    Reflect::set(&event, &"action".into(), &"network-quality-change".into()).unwrap();
    Reflect::set(&event, &"threshold".into(), &threshold.into()).unwrap();
    Reflect::set(&event, &"stats".into(), &stats).unwrap();
    event.into()
}

#[wasm_bindgen_test]
fn good_threshold_maps_to_good() {
    let status = network_status_from_js(payload("good", Some(0.01), Some(0.0))).unwrap();
    assert_eq!(status.status, NetworkState::Good);
    assert!((status.packet_loss - 1.0).abs() < 1e-9);
}

#[wasm_bindgen_test]
fn low_thresholds_map_to_bad_with_worst_loss() {
    let status = network_status_from_js(payload("low", Some(0.02), Some(0.05))).unwrap();
    assert_eq!(status.status, NetworkState::Bad);
    assert!((status.packet_loss - 5.0).abs() < 1e-9);

    let status = network_status_from_js(payload("very-low", None, None)).unwrap();
    assert_eq!(status.status, NetworkState::Bad);
    assert_eq!(status.packet_loss, 0.0);
}

#[wasm_bindgen_test]
fn payload_without_stats_has_zero_loss() {
    let event = Object::new();
    Reflect::set(&event, &"threshold".into(), &"good".into()).unwrap();

    let status = network_status_from_js(event.into()).unwrap();
    assert_eq!(status.status, NetworkState::Good);
    assert_eq!(status.packet_loss, 0.0);
}
