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

//! Engine-side interfaces.
//!
//! The safe handles of this crate (`MediaStream`, `RtcAudioTrack`, ...) only hold
//! reference-counted pointers to objects implementing these traits. A native binding or
//! the [`headless`](crate::headless) engine provides the implementations.

use std::fmt::Debug;

use crate::{
    audio_source::{AudioSourceOptions, RtcAudioSource, SourceState},
    audio_track::RtcAudioTrack,
    media_constraints::MediaConstraints,
    media_stream::MediaStream,
    media_stream_track::RtcTrackState,
    RtcError,
};

pub trait AudioSourceInterface: Debug + Send + Sync {
    fn id(&self) -> String;
    fn audio_options(&self) -> AudioSourceOptions;
    fn state(&self) -> SourceState;

    /// Stops feeding tracks. Releasing twice is a no-op.
    fn release(&self);
}

pub trait AudioTrackInterface: Debug + Send + Sync {
    fn id(&self) -> String;
    fn enabled(&self) -> bool;

    /// Returns false when the engine refused the change (e.g. the track has ended).
    fn set_enabled(&self, enabled: bool) -> bool;
    fn state(&self) -> RtcTrackState;

    /// Ends the track, it can't be re-enabled afterwards.
    fn stop(&self);
}

pub trait MediaStreamInterface: Debug + Send + Sync {
    fn id(&self) -> String;
    fn audio_tracks(&self) -> Vec<RtcAudioTrack>;
    fn add_track(&self, track: &RtcAudioTrack) -> bool;
    fn remove_track(&self, track: &RtcAudioTrack) -> bool;
    fn dispose(&self);
}

pub trait PeerConnectionFactoryInterface: Debug + Send + Sync {
    fn create_audio_source(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<RtcAudioSource, RtcError>;

    fn create_audio_track(
        &self,
        label: &str,
        source: &RtcAudioSource,
    ) -> Result<RtcAudioTrack, RtcError>;

    fn create_local_media_stream(&self, label: &str) -> Result<MediaStream, RtcError>;
}
