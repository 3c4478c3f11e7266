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

//! The command surface of the external media SDK.
//!
//! The SDK owns signaling, stream acquisition and presentation handling.
//! This module only describes what the session asks of it, so the session
//! can be constructed against the real SDK in the browser and against a
//! recording fake in tests.

use crate::callback::Callback;
use crate::events::SdkEvent;

/// A command sent through the SDK's generic `send` entry point.
#[derive(Clone, Debug, PartialEq)]
pub enum SdkCommand<S> {
    /// Resume the camera/microphone stream with the given tracks.
    StartStream { audio: bool, video: bool },

    /// Change the tracks of the local stream.
    ChangeStream {
        stream: Option<S>,
        video: bool,
        audio: bool,
    },

    /// Start capturing the screen. `screen_stream` is always `None`: the SDK
    /// acquires the capture itself.
    StartScreenCapture {
        audio: bool,
        screen_stream: Option<S>,
        screen: bool,
    },

    /// Leave presentation mode. Completion is reported by
    /// [`SdkEvent::PresentationEnded`].
    StopPresenting,
}

impl<S> SdkCommand<S> {
    /// The wire `type` of the command.
    pub fn kind(&self) -> &'static str {
        match self {
            SdkCommand::StartStream { .. } => "start_stream",
            SdkCommand::ChangeStream { .. } => "change_stream",
            SdkCommand::StartScreenCapture { .. } => "start_screen_capture",
            SdkCommand::StopPresenting => "stop_presenting",
        }
    }
}

/// The media SDK as seen by the session.
///
/// All methods are fire-and-forget. Failures, if any, surface through the
/// SDK's own event stream.
pub trait MediaSdk {
    /// Opaque handle of a media stream owned by the SDK.
    type Stream: Clone;

    /// Register the handler of the SDK's global event channel.
    fn subscribe(&self, handler: Callback<SdkEvent<Self::Stream>>);

    /// Begin establishing a session for the given access key.
    fn start(&self, token: &str);

    /// Dispatch a command.
    fn send(&self, command: SdkCommand<Self::Stream>);

    /// Unmute the audio track of `stream`.
    fn enable_audio(&self, stream: &Self::Stream);

    /// Mute the audio track of `stream`.
    fn disable_audio(&self, stream: &Self::Stream);
}
