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

//! In-process engine without capture devices.
//!
//! Tracks, sources and streams only keep their state; no samples flow. Used as the default
//! engine and for tests of the layers above.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use parking_lot::Mutex;

use crate::{
    audio_source::{AudioSourceOptions, RtcAudioSource, SourceState},
    audio_track::RtcAudioTrack,
    media_constraints::MediaConstraints,
    media_stream::MediaStream,
    media_stream_track::RtcTrackState,
    sys::{
        AudioSourceInterface, AudioTrackInterface, MediaStreamInterface,
        PeerConnectionFactoryInterface,
    },
    RtcError, RtcErrorType,
};

#[derive(Debug, Default)]
pub struct HeadlessFactory {}

impl PeerConnectionFactoryInterface for HeadlessFactory {
    fn create_audio_source(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<RtcAudioSource, RtcError> {
        let source = HeadlessAudioSource {
            id: crate::create_random_uuid(),
            options: AudioSourceOptions::from(constraints),
            ended: AtomicBool::new(false),
        };
        log::trace!("HeadlessFactory::create_audio_source({})", source.id);
        Ok(RtcAudioSource::from_handle(Arc::new(source)))
    }

    fn create_audio_track(
        &self,
        label: &str,
        source: &RtcAudioSource,
    ) -> Result<RtcAudioTrack, RtcError> {
        if label.is_empty() {
            return Err(RtcError::new(RtcErrorType::InvalidParameter, "empty track label"));
        }

        if source.state() == SourceState::Ended {
            return Err(RtcError::new(
                RtcErrorType::InvalidState,
                format!("audio source {} has been released", source.id()),
            ));
        }

        log::trace!("HeadlessFactory::create_audio_track({}, {})", label, source.id());
        Ok(RtcAudioTrack::from_handle(Arc::new(HeadlessAudioTrack::new(label.to_owned()))))
    }

    fn create_local_media_stream(&self, label: &str) -> Result<MediaStream, RtcError> {
        if label.is_empty() {
            return Err(RtcError::new(RtcErrorType::InvalidParameter, "empty stream label"));
        }

        Ok(media_stream(label, Vec::new()))
    }
}

/// Audio track as received from a peer, enabled and live.
pub fn remote_audio_track(id: impl Into<String>) -> RtcAudioTrack {
    RtcAudioTrack::from_handle(Arc::new(HeadlessAudioTrack::new(id.into())))
}

pub fn media_stream(id: impl Into<String>, tracks: Vec<RtcAudioTrack>) -> MediaStream {
    MediaStream::from_handle(Arc::new(HeadlessMediaStream {
        id: id.into(),
        tracks: Mutex::new(tracks),
        disposed: AtomicBool::new(false),
    }))
}

#[derive(Debug)]
struct HeadlessAudioSource {
    id: String,
    options: AudioSourceOptions,
    ended: AtomicBool,
}

impl AudioSourceInterface for HeadlessAudioSource {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn audio_options(&self) -> AudioSourceOptions {
        self.options
    }

    fn state(&self) -> SourceState {
        if self.ended.load(Ordering::Acquire) {
            SourceState::Ended
        } else {
            SourceState::Live
        }
    }

    fn release(&self) {
        self.ended.store(true, Ordering::Release);
    }
}

#[derive(Debug)]
struct HeadlessAudioTrack {
    id: String,
    enabled: AtomicBool,
    ended: AtomicBool,
}

impl HeadlessAudioTrack {
    fn new(id: String) -> Self {
        Self { id, enabled: AtomicBool::new(true), ended: AtomicBool::new(false) }
    }
}

impl AudioTrackInterface for HeadlessAudioTrack {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn set_enabled(&self, enabled: bool) -> bool {
        if self.ended.load(Ordering::Acquire) {
            return false;
        }
        self.enabled.store(enabled, Ordering::Release);
        true
    }

    fn state(&self) -> RtcTrackState {
        if self.ended.load(Ordering::Acquire) {
            RtcTrackState::Ended
        } else {
            RtcTrackState::Live
        }
    }

    fn stop(&self) {
        self.ended.store(true, Ordering::Release);
    }
}

#[derive(Debug)]
struct HeadlessMediaStream {
    id: String,
    tracks: Mutex<Vec<RtcAudioTrack>>,
    disposed: AtomicBool,
}

impl MediaStreamInterface for HeadlessMediaStream {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn audio_tracks(&self) -> Vec<RtcAudioTrack> {
        self.tracks.lock().clone()
    }

    fn add_track(&self, track: &RtcAudioTrack) -> bool {
        if self.disposed.load(Ordering::Acquire) {
            return false;
        }

        let mut tracks = self.tracks.lock();
        if tracks.iter().any(|t| t.ptr_eq(track) || t.id() == track.id()) {
            return false;
        }
        tracks.push(track.clone());
        true
    }

    fn remove_track(&self, track: &RtcAudioTrack) -> bool {
        let mut tracks = self.tracks.lock();
        let len = tracks.len();
        tracks.retain(|t| !t.ptr_eq(track));
        tracks.len() != len
    }

    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        for track in self.tracks.lock().drain(..) {
            track.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispose_ends_tracks() {
        let first = remote_audio_track("a0");
        let second = remote_audio_track("a1");
        let stream = media_stream("remote", vec![first.clone(), second.clone()]);
        assert_eq!(stream.audio_tracks().len(), 2);

        stream.dispose();
        assert!(stream.audio_tracks().is_empty());
        assert_eq!(first.state(), RtcTrackState::Ended);
        assert_eq!(second.state(), RtcTrackState::Ended);
        assert!(!stream.add_track(&remote_audio_track("a2")));
    }

    #[test]
    fn duplicate_track_ids_refused() {
        let stream = media_stream("remote", vec![remote_audio_track("a0")]);
        assert!(!stream.add_track(&remote_audio_track("a0")));
        assert_eq!(stream.audio_tracks().len(), 1);
    }

    #[test]
    fn empty_labels_rejected() {
        let factory = HeadlessFactory::default();
        let source = factory.create_audio_source(&MediaConstraints::default()).unwrap();

        let err = factory.create_audio_track("", &source).unwrap_err();
        assert_eq!(err.error_type, RtcErrorType::InvalidParameter);
        assert!(factory.create_local_media_stream("").is_err());
    }

    #[test]
    fn source_keeps_constraint_options() {
        let factory = HeadlessFactory::default();
        let constraints = MediaConstraints::default().with_mandatory("echoCancellation", "false");
        let source = factory.create_audio_source(&constraints).unwrap();

        assert!(!source.audio_options().echo_cancellation);
        assert!(source.audio_options().noise_suppression);
        source.release();
        source.release();
        assert_eq!(source.state(), SourceState::Ended);
    }
}
