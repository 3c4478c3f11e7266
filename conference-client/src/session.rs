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

//! The session controller: owns the UI-observable state of the call and
//! turns user intents and SDK events into state changes and SDK commands.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start(token)--> FetchingMetadata --(fetch settled)--> AwaitingAccept --accept--> Active
//! ```
//!
//! `start` runs whenever the stored token changes into a value of exactly
//! [`ACCESS_KEY_LENGTH`](crate::ACCESS_KEY_LENGTH) characters. The metadata
//! fetch always settles before the SDK is started; its failure is logged and
//! does not prevent joining.
//!
//! Audio and video toggles update state optimistically. Starting a screen
//! share is optimistic too, but stopping one is only reflected once the SDK
//! reports `presentation_ended`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use conference_meeting_client::MetadataResult;
use log::{debug, error, info, warn};

use crate::callback::Callback;
use crate::events::SdkEvent;
use crate::metadata::MetadataSource;
use crate::sdk::{MediaSdk, SdkCommand};
use crate::token::is_access_key;

/// Everything the view renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState<S> {
    pub token: String,
    pub connecting: bool,
    pub local_stream: Option<S>,
    pub remote_stream: Option<S>,
    pub audio_enabled: bool,
    pub video: bool,
    pub screen_sharing: bool,
    pub user_name: Option<String>,
    pub room_name: Option<String>,
}

impl<S> SessionState<S> {
    pub fn new(token: String) -> Self {
        Self {
            token,
            connecting: false,
            local_stream: None,
            remote_stream: None,
            audio_enabled: true,
            video: true,
            screen_sharing: false,
            user_name: None,
            room_name: None,
        }
    }

    /// `true` once the view should show the video surface instead of the
    /// access-key form.
    pub fn has_remote_stream(&self) -> bool {
        self.remote_stream.is_some()
    }

    /// The user/room pair, only when both are known.
    pub fn labels(&self) -> Option<(&str, &str)> {
        match (&self.user_name, &self.room_name) {
            (Some(user), Some(room)) => Some((user.as_str(), room.as_str())),
            _ => None,
        }
    }
}

impl<S> Default for SessionState<S> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    FetchingMetadata,
    AwaitingAccept,
    Active,
}

/// Drives one conference session against an injected SDK and metadata source.
///
/// Designed to live in an `Rc` on the UI thread. No `RefCell` borrow is held
/// across an `.await` or while calling into the SDK or observers, so SDK
/// handlers may re-enter the controller.
pub struct SessionController<S: MediaSdk, M: MetadataSource> {
    sdk: S,
    metadata: M,
    state: RefCell<SessionState<S::Stream>>,
    phase: Cell<SessionPhase>,
    observers: RefCell<Vec<Callback<SessionState<S::Stream>>>>,
}

impl<S: MediaSdk, M: MetadataSource> SessionController<S, M> {
    pub fn new(sdk: S, metadata: M, initial_token: Option<String>) -> Self {
        Self {
            sdk,
            metadata,
            state: RefCell::new(SessionState::new(initial_token.unwrap_or_default())),
            phase: Cell::new(SessionPhase::Idle),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Route the SDK's event channel into this controller.
    ///
    /// The handler only keeps a weak reference: once the last `Rc` is
    /// dropped, further events are discarded.
    pub fn attach(this: &Rc<Self>)
    where
        S: 'static,
        M: 'static,
        S::Stream: 'static,
    {
        let weak = Rc::downgrade(this);
        this.sdk.subscribe(Callback::from(move |event: SdkEvent<S::Stream>| {
            match weak.upgrade() {
                Some(controller) => controller.handle_event(event),
                None => debug!("Session gone, dropping SDK event {}", event.kind()),
            }
        }));
    }

    /// Register an observer that receives a snapshot after every change.
    pub fn subscribe(&self, observer: Callback<SessionState<S::Stream>>) {
        self.observers.borrow_mut().push(observer);
    }

    pub fn state(&self) -> SessionState<S::Stream> {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    /// Auto-submit the token the controller was created with, if any.
    pub async fn boot(&self) {
        let submit = is_access_key(&self.state.borrow().token);
        if submit {
            self.start().await;
        }
    }

    /// Store a new candidate token. A change into an access-key-length value
    /// starts the session; anything else is inert.
    ///
    /// Observers are notified even when the value is unchanged, so a bound
    /// text field snaps back to the stored (trimmed) token.
    pub async fn set_token(&self, token: String) {
        let submit = {
            let mut state = self.state.borrow_mut();
            let changed = state.token != token;
            state.token = token;
            changed && is_access_key(&state.token)
        };
        self.notify();
        if submit {
            self.start().await;
        }
    }

    /// Fetch metadata for the current token, then start the SDK with it.
    pub async fn start(&self) {
        let token = {
            let mut state = self.state.borrow_mut();
            state.connecting = true;
            state.token.clone()
        };
        self.phase.set(SessionPhase::FetchingMetadata);
        self.notify();

        match self.metadata.fetch_extra(&token).await {
            Ok(extra) => self.merge_metadata(&token, extra),
            Err(e) => error!("Failed to fetch extra user data: {e}"),
        }

        self.phase.set(SessionPhase::AwaitingAccept);
        info!("Starting media session");
        self.sdk.start(&token);
    }

    fn merge_metadata(&self, requested: &str, extra: MetadataResult) {
        {
            let mut state = self.state.borrow_mut();
            if state.token != requested {
                debug!("Discarding extra data fetched for a superseded token");
                return;
            }
            state.user_name = Some(extra.user_name);
            state.room_name = Some(extra.room_name);
        }
        self.notify();
    }

    pub fn handle_event(&self, event: SdkEvent<S::Stream>) {
        match event {
            SdkEvent::Accept {
                local_stream,
                remote_stream,
            } => {
                {
                    let mut state = self.state.borrow_mut();
                    state.local_stream = Some(local_stream);
                    state.remote_stream = Some(remote_stream);
                    state.connecting = false;
                }
                self.phase.set(SessionPhase::Active);
                info!("Session accepted");
                self.notify();
            }
            SdkEvent::PresentationEnded => {
                let (audio, video) = {
                    let state = self.state.borrow();
                    (state.audio_enabled, state.video)
                };
                info!("Presentation ended, resuming camera stream");
                self.sdk.send(SdkCommand::StartStream { audio, video });
                self.state.borrow_mut().screen_sharing = false;
                self.notify();
            }
            SdkEvent::Unrecognized(kind) => {
                debug!("Ignore received event: {kind}");
            }
        }
    }

    pub fn toggle_audio(&self) {
        let (enabled, local) = {
            let mut state = self.state.borrow_mut();
            state.audio_enabled = !state.audio_enabled;
            (state.audio_enabled, state.local_stream.clone())
        };
        match local {
            Some(stream) if enabled => self.sdk.enable_audio(&stream),
            Some(stream) => self.sdk.disable_audio(&stream),
            None => warn!("Audio toggled without a local stream"),
        }
        self.notify();
    }

    pub fn toggle_video(&self) {
        let command = {
            let mut state = self.state.borrow_mut();
            state.video = !state.video;
            SdkCommand::ChangeStream {
                stream: state.local_stream.clone(),
                video: state.video,
                audio: state.audio_enabled,
            }
        };
        self.sdk.send(command);
        self.notify();
    }

    pub fn toggle_screen(&self) {
        let (sharing, audio) = {
            let state = self.state.borrow();
            (state.screen_sharing, state.audio_enabled)
        };
        if sharing {
            // screen_sharing is cleared by PresentationEnded
            self.sdk.send(SdkCommand::StopPresenting);
            return;
        }
        self.sdk.send(SdkCommand::StartScreenCapture {
            audio,
            screen_stream: None,
            screen: true,
        });
        self.state.borrow_mut().screen_sharing = true;
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.state.borrow().clone();
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer.emit(snapshot.clone());
        }
    }
}
