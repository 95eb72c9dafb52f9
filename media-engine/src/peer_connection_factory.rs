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

use crate::{
    audio_source::RtcAudioSource, audio_track::RtcAudioTrack, headless::HeadlessFactory,
    media_constraints::MediaConstraints, media_stream::MediaStream,
    sys::PeerConnectionFactoryInterface, RtcError,
};

#[derive(Clone)]
pub struct PeerConnectionFactory {
    pub(crate) handle: Arc<dyn PeerConnectionFactoryInterface>,
}

impl Default for PeerConnectionFactory {
    fn default() -> Self {
        Self::with_engine(Arc::new(HeadlessFactory::default()))
    }
}

impl Debug for PeerConnectionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PeerConnectionFactory").field("engine", &self.handle).finish()
    }
}

impl PeerConnectionFactory {
    pub fn with_engine(engine: Arc<dyn PeerConnectionFactoryInterface>) -> Self {
        Self { handle: engine }
    }

    pub fn create_audio_source(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<RtcAudioSource, RtcError> {
        self.handle.create_audio_source(constraints)
    }

    pub fn create_audio_track(
        &self,
        label: &str,
        source: &RtcAudioSource,
    ) -> Result<RtcAudioTrack, RtcError> {
        self.handle.create_audio_track(label, source)
    }

    pub fn create_local_media_stream(&self, label: &str) -> Result<MediaStream, RtcError> {
        self.handle.create_local_media_stream(label)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        audio_source::SourceState, media_constraints::MediaConstraints,
        media_stream_track::RtcTrackState, peer_connection_factory::PeerConnectionFactory,
    };

    #[test]
    fn create_audio_track_from_source() {
        let _ = env_logger::builder().is_test(true).try_init();

        let factory = PeerConnectionFactory::default();
        let source = factory.create_audio_source(&MediaConstraints::default()).unwrap();
        let track = factory.create_audio_track("audio_track_1", &source).unwrap();
        assert_eq!(track.id(), "audio_track_1");
        assert!(track.enabled());
        assert_eq!(track.state(), RtcTrackState::Live);
        assert_eq!(source.state(), SourceState::Live);

        assert!(track.set_enabled(false));
        assert!(!track.enabled());
        track.stop();
        assert_eq!(track.state(), RtcTrackState::Ended);
        assert!(!track.set_enabled(true));
        assert!(!track.enabled());
    }

    #[test]
    fn track_on_released_source_fails() {
        let factory = PeerConnectionFactory::default();
        let source = factory.create_audio_source(&MediaConstraints::default()).unwrap();
        source.release();
        assert_eq!(source.state(), SourceState::Ended);
        assert!(factory.create_audio_track("late", &source).is_err());
    }

    #[test]
    fn local_stream_add_remove() {
        let factory = PeerConnectionFactory::default();
        let stream = factory.create_local_media_stream("ARDAMS").unwrap();
        assert_eq!(stream.id(), "ARDAMS");
        assert!(stream.audio_tracks().is_empty());

        let source = factory.create_audio_source(&MediaConstraints::default()).unwrap();
        let track = factory.create_audio_track("ARDAMSa0", &source).unwrap();
        assert!(stream.add_track(&track));
        assert!(!stream.add_track(&track));
        assert_eq!(stream.audio_tracks(), vec![track.clone()]);

        assert!(stream.remove_track(&track));
        assert!(!stream.remove_track(&track));
        assert!(stream.audio_tracks().is_empty());
        assert_eq!(track.state(), RtcTrackState::Live);
    }
}
