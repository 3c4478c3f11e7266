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

//! Bindings to the eyeson JavaScript SDK.
//!
//! The page must expose the SDK as the global `eyeson` object, with its
//! stream helpers reachable as `eyeson.StreamHelpers`.

use js_sys::{Object, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;

use crate::callback::Callback;
use crate::events::SdkEvent;
use crate::sdk::{MediaSdk, SdkCommand};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = eyeson, js_name = onEvent)]
    fn eyeson_on_event(handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_namespace = eyeson, js_name = start)]
    fn eyeson_start(token: &str);

    #[wasm_bindgen(js_namespace = eyeson, js_name = send)]
    fn eyeson_send(command: &JsValue);

    #[wasm_bindgen(js_namespace = ["eyeson", "StreamHelpers"], js_name = enableAudio)]
    fn stream_helpers_enable_audio(stream: &JsValue);

    #[wasm_bindgen(js_namespace = ["eyeson", "StreamHelpers"], js_name = disableAudio)]
    fn stream_helpers_disable_audio(stream: &JsValue);
}

/// The global eyeson SDK. Stream handles are the SDK's `MediaStream` objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct EyesonSdk;

impl MediaSdk for EyesonSdk {
    type Stream = JsValue;

    fn subscribe(&self, handler: Callback<SdkEvent<JsValue>>) {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            handler.emit(decode_event(&event));
        });
        eyeson_on_event(&closure);
        // The SDK keeps the handler for the lifetime of the page.
        closure.forget();
    }

    fn start(&self, token: &str) {
        eyeson_start(token);
    }

    fn send(&self, command: SdkCommand<JsValue>) {
        eyeson_send(&encode_command(&command));
    }

    fn enable_audio(&self, stream: &JsValue) {
        stream_helpers_enable_audio(stream);
    }

    fn disable_audio(&self, stream: &JsValue) {
        stream_helpers_disable_audio(stream);
    }
}

// Only called on freshly created, non-frozen objects, where `Reflect.set`
// cannot fail.
fn set(target: &Object, key: &str, value: &JsValue) {
    let stored = Reflect::set(target, &JsValue::from_str(key), value);
    debug_assert!(matches!(stored, Ok(true)), "failed to set {key}");
}

fn get(source: &JsValue, key: &str) -> JsValue {
    Reflect::get(source, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn stream_or_null(stream: &Option<JsValue>) -> JsValue {
    stream.clone().unwrap_or(JsValue::NULL)
}

/// Build the plain object the SDK's `send` expects, e.g.
/// `{ type: "change_stream", stream, video: false, audio: true }`.
pub fn encode_command(command: &SdkCommand<JsValue>) -> JsValue {
    let object = Object::new();
    set(&object, "type", &JsValue::from_str(command.kind()));
    match command {
        SdkCommand::StartStream { audio, video } => {
            set(&object, "audio", &JsValue::from_bool(*audio));
            set(&object, "video", &JsValue::from_bool(*video));
        }
        SdkCommand::ChangeStream {
            stream,
            video,
            audio,
        } => {
            set(&object, "stream", &stream_or_null(stream));
            set(&object, "video", &JsValue::from_bool(*video));
            set(&object, "audio", &JsValue::from_bool(*audio));
        }
        SdkCommand::StartScreenCapture {
            audio,
            screen_stream,
            screen,
        } => {
            set(&object, "audio", &JsValue::from_bool(*audio));
            set(&object, "screenStream", &stream_or_null(screen_stream));
            set(&object, "screen", &JsValue::from_bool(*screen));
        }
        SdkCommand::StopPresenting => {}
    }
    object.into()
}

/// Decode an event object received from `eyeson.onEvent`.
pub fn decode_event(event: &JsValue) -> SdkEvent<JsValue> {
    let kind = get(event, "type").as_string().unwrap_or_default();
    match kind.as_str() {
        "accept" => {
            let local_stream = get(event, "localStream");
            let remote_stream = get(event, "remoteStream");
            if local_stream.is_undefined()
                || local_stream.is_null()
                || remote_stream.is_undefined()
                || remote_stream.is_null()
            {
                warn!("accept event without streams, ignoring");
                return SdkEvent::Unrecognized(kind);
            }
            SdkEvent::Accept {
                local_stream,
                remote_stream,
            }
        }
        "presentation_ended" => SdkEvent::PresentationEnded,
        _ => SdkEvent::Unrecognized(kind),
    }
}
