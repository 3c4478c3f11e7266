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
 */

//! Browser tests for the conversion between SDK commands/events and the
//! plain JS objects the eyeson SDK exchanges.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use conference_client::{decode_event, encode_command, SdkCommand, SdkEvent};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(object: &JsValue, key: &str) -> JsValue {
    Reflect::get(object, &key.into()).unwrap()
}

fn event(fields: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in fields {
        Reflect::set(&object, &(*key).into(), value).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn start_screen_capture_carries_null_screen_stream() {
    let encoded = encode_command(&SdkCommand::StartScreenCapture {
        audio: false,
        screen_stream: None,
        screen: true,
    });
    assert_eq!(field(&encoded, "type").as_string().unwrap(), "start_screen_capture");
    assert_eq!(field(&encoded, "audio").as_bool(), Some(false));
    assert!(field(&encoded, "screenStream").is_null());
    assert_eq!(field(&encoded, "screen").as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn change_stream_passes_the_stream_through() {
    let stream: JsValue = Object::new().into();
    let encoded = encode_command(&SdkCommand::ChangeStream {
        stream: Some(stream.clone()),
        video: false,
        audio: true,
    });
    assert_eq!(field(&encoded, "type").as_string().unwrap(), "change_stream");
    assert_eq!(field(&encoded, "stream"), stream);
    assert_eq!(field(&encoded, "video").as_bool(), Some(false));
    assert_eq!(field(&encoded, "audio").as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn stop_presenting_has_only_a_type() {
    let encoded = encode_command(&SdkCommand::<JsValue>::StopPresenting);
    assert_eq!(field(&encoded, "type").as_string().unwrap(), "stop_presenting");
    assert_eq!(Object::keys(encoded.unchecked_ref()).length(), 1);
}

#[wasm_bindgen_test]
fn accept_event_yields_both_streams() {
    let local: JsValue = Object::new().into();
    let remote: JsValue = Object::new().into();
    let decoded = decode_event(&event(&[
        ("type", "accept".into()),
        ("localStream", local.clone()),
        ("remoteStream", remote.clone()),
    ]));
    assert_eq!(
        decoded,
        SdkEvent::Accept {
            local_stream: local,
            remote_stream: remote,
        }
    );
}

#[wasm_bindgen_test]
fn accept_without_streams_is_unrecognized() {
    let decoded = decode_event(&event(&[("type", "accept".into())]));
    assert_eq!(decoded, SdkEvent::Unrecognized("accept".to_string()));
}

#[wasm_bindgen_test]
fn other_events_pass_through_by_type() {
    assert_eq!(
        decode_event(&event(&[("type", "presentation_ended".into())])),
        SdkEvent::PresentationEnded
    );
    assert_eq!(
        decode_event(&event(&[("type", "podium".into())])),
        SdkEvent::Unrecognized("podium".to_string())
    );
    assert_eq!(
        decode_event(&JsValue::NULL),
        SdkEvent::Unrecognized(String::new())
    );
}
