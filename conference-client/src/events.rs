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

//! Events emitted by the media SDK that the session reacts to.

/// An event from the media SDK's global event channel.
///
/// Only the two event types the session acts upon carry a typed payload.
/// Everything else the SDK emits arrives as [`SdkEvent::Unrecognized`] with
/// its wire type so it can be logged.
#[derive(Clone, Debug, PartialEq)]
pub enum SdkEvent<S> {
    /// Session negotiation succeeded and the streams are available.
    Accept { local_stream: S, remote_stream: S },

    /// Presentation (screen share) mode was left.
    PresentationEnded,

    /// Any other event type.
    Unrecognized(String),
}

impl<S> SdkEvent<S> {
    pub const ACCEPT: &'static str = "accept";
    pub const PRESENTATION_ENDED: &'static str = "presentation_ended";

    /// The wire `type` of the event.
    pub fn kind(&self) -> &str {
        match self {
            SdkEvent::Accept { .. } => Self::ACCEPT,
            SdkEvent::PresentationEnded => Self::PRESENTATION_ENDED,
            SdkEvent::Unrecognized(kind) => kind,
        }
    }
}
