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

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use webrtc_runtime::webrtc::{
    headless::HeadlessFactory, prelude::*, sys::PeerConnectionFactoryInterface,
};

/// Engine wrapper counting factory calls, optionally failing track creation.
#[derive(Debug, Default)]
pub struct CountingFactory {
    inner: HeadlessFactory,
    pub fail_tracks: bool,
    pub sources: AtomicUsize,
    pub tracks: AtomicUsize,
    pub created_sources: parking_lot::Mutex<Vec<RtcAudioSource>>,
}

impl CountingFactory {
    pub fn sources(&self) -> usize {
        self.sources.load(Ordering::SeqCst)
    }

    pub fn tracks(&self) -> usize {
        self.tracks.load(Ordering::SeqCst)
    }
}

impl PeerConnectionFactoryInterface for CountingFactory {
    fn create_audio_source(
        &self,
        constraints: &MediaConstraints,
    ) -> Result<RtcAudioSource, RtcError> {
        self.sources.fetch_add(1, Ordering::SeqCst);
        let source = self.inner.create_audio_source(constraints)?;
        self.created_sources.lock().push(source.clone());
        Ok(source)
    }

    fn create_audio_track(
        &self,
        label: &str,
        source: &RtcAudioSource,
    ) -> Result<RtcAudioTrack, RtcError> {
        self.tracks.fetch_add(1, Ordering::SeqCst);
        if self.fail_tracks {
            return Err(RtcError {
                error_type: RtcErrorType::Internal,
                message: "audio device unavailable".to_owned(),
            });
        }
        self.inner.create_audio_track(label, source)
    }

    fn create_local_media_stream(&self, label: &str) -> Result<MediaStream, RtcError> {
        self.inner.create_local_media_stream(label)
    }
}

pub fn counting_factory(fail_tracks: bool) -> (Arc<CountingFactory>, PeerConnectionFactory) {
    let engine = Arc::new(CountingFactory { fail_tracks, ..Default::default() });
    let factory = PeerConnectionFactory::with_engine(engine.clone());
    (engine, factory)
}
