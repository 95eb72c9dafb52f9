// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt::Debug, sync::Arc};

use media_engine::prelude::*;
use parking_lot::Mutex;

use crate::{
    error::{MediaStreamError, MediaStreamResult},
    options::MediaStreamOptions,
    runtime::WebRtcRuntime,
};

/// Audio stream as seen by the messaging SDK.
pub trait WebRtcMediaStream: Send + Sync {
    fn is_enabled(&self) -> bool;

    /// Operations on a closed stream are ignored.
    fn set_enabled(&self, enabled: bool);

    fn close(&self);
}

enum StreamState {
    Active {
        audio_track: RtcAudioTrack,
        // Only set for local streams, the adapter owns both the track and its source
        audio_source: Option<RtcAudioSource>,
    },
    Closed,
}

struct Inner {
    state: StreamState,
    enabled: bool,
}

/// Binds an engine [`MediaStream`] to the [`WebRtcMediaStream`] interface.
///
/// Local streams get a new audio track created from the factory and attached to the stream.
/// Remote streams are bound to the first audio track they already carry; the adapter never
/// ends a remote track.
///
/// The adapter is the only writer of the track's enabled flag, `is_enabled` reads the value
/// it last applied. Dropping an active adapter closes it.
pub struct MediaStreamAdapter {
    stream: MediaStream,
    is_local: bool,
    inner: Mutex<Inner>,
    // Keeps the shared factory alive as long as tracks created from it
    _runtime: Option<Arc<WebRtcRuntime>>,
}

impl Debug for MediaStreamAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStreamAdapter")
            .field("stream", &self.stream.id())
            .field("is_local", &self.is_local)
            .field("enabled", &self.is_enabled())
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl MediaStreamAdapter {
    /// Uses the factory of the shared [`WebRtcRuntime`], held until the adapter is dropped.
    pub fn new(stream: MediaStream, auto_play: bool, is_local: bool) -> MediaStreamResult<Self> {
        let runtime = WebRtcRuntime::instance();
        Self::build(
            runtime.pc_factory(),
            stream,
            is_local,
            MediaStreamOptions::with_auto_play(auto_play),
            Some(runtime.clone()),
        )
    }

    /// Remote stream that starts playing right away
    pub fn remote(stream: MediaStream) -> MediaStreamResult<Self> {
        Self::new(stream, true, false)
    }

    pub fn with_options(
        factory: &PeerConnectionFactory,
        stream: MediaStream,
        is_local: bool,
        options: MediaStreamOptions,
    ) -> MediaStreamResult<Self> {
        Self::build(factory, stream, is_local, options, None)
    }

    fn build(
        factory: &PeerConnectionFactory,
        stream: MediaStream,
        is_local: bool,
        options: MediaStreamOptions,
        runtime: Option<Arc<WebRtcRuntime>>,
    ) -> MediaStreamResult<Self> {
        let state = if is_local {
            let (audio_track, audio_source) = create_local_track(factory, &stream, &options)?;
            StreamState::Active { audio_track, audio_source: Some(audio_source) }
        } else {
            let audio_track = stream
                .audio_tracks()
                .into_iter()
                .next()
                .ok_or_else(|| MediaStreamError::NoAudioTrack { stream_id: stream.id() })?;
            StreamState::Active { audio_track, audio_source: None }
        };

        log::trace!("MediaStreamAdapter::new({}, local: {})", stream.id(), is_local);
        let adapter = Self {
            stream,
            is_local,
            inner: Mutex::new(Inner { state, enabled: false }),
            _runtime: runtime,
        };

        // On failure the adapter is dropped, which releases what was created above
        adapter.try_set_enabled(options.auto_play)?;
        Ok(adapter)
    }

    pub fn try_set_enabled(&self, enabled: bool) -> MediaStreamResult<()> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let StreamState::Active { audio_track, .. } = &inner.state else {
            return Err(MediaStreamError::Closed);
        };

        if !audio_track.set_enabled(enabled) {
            return Err(MediaStreamError::TrackRejected { track_id: audio_track.id() });
        }
        inner.enabled = enabled;
        Ok(())
    }

    pub fn stream(&self) -> &MediaStream {
        &self.stream
    }

    pub fn is_local(&self) -> bool {
        self.is_local
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.inner.lock().state, StreamState::Closed)
    }

    /// The bound track, `None` once closed
    pub fn audio_track(&self) -> Option<RtcAudioTrack> {
        match &self.inner.lock().state {
            StreamState::Active { audio_track, .. } => Some(audio_track.clone()),
            StreamState::Closed => None,
        }
    }

    fn release(&self) {
        let state = std::mem::replace(&mut self.inner.lock().state, StreamState::Closed);
        let StreamState::Active { audio_track, audio_source } = state else {
            return;
        };

        log::debug!("closing media stream {} (local: {})", self.stream.id(), self.is_local);
        if let Some(audio_source) = audio_source {
            if !self.stream.remove_track(&audio_track) {
                log::debug!("track {} was already detached", audio_track.id());
            }
            audio_track.stop();
            audio_source.release();
        }
    }
}

impl WebRtcMediaStream for MediaStreamAdapter {
    fn is_enabled(&self) -> bool {
        self.inner.lock().enabled
    }

    fn set_enabled(&self, enabled: bool) {
        if let Err(err) = self.try_set_enabled(enabled) {
            log::warn!("ignoring set_enabled({}) on {}: {}", enabled, self.stream.id(), err);
        }
    }

    fn close(&self) {
        self.release();
    }
}

impl Drop for MediaStreamAdapter {
    fn drop(&mut self) {
        log::trace!("MediaStreamAdapter::drop({})", self.stream.id());
        self.release();
    }
}

fn create_local_track(
    factory: &PeerConnectionFactory,
    stream: &MediaStream,
    options: &MediaStreamOptions,
) -> MediaStreamResult<(RtcAudioTrack, RtcAudioSource)> {
    let audio_source = factory.create_audio_source(&options.constraints)?;
    let audio_track = match factory.create_audio_track(&options.track_label, &audio_source) {
        Ok(track) => track,
        Err(err) => {
            audio_source.release();
            return Err(err.into());
        }
    };

    if !stream.add_track(&audio_track) {
        audio_track.stop();
        audio_source.release();
        return Err(MediaStreamError::AttachFailed {
            stream_id: stream.id(),
            track_id: audio_track.id(),
        });
    }

    log::debug!("attached local audio track {} to stream {}", audio_track.id(), stream.id());
    Ok((audio_track, audio_source))
}
