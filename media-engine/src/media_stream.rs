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

use crate::{audio_track::RtcAudioTrack, sys::MediaStreamInterface};

/// Handle to an engine stream. Clones refer to the same stream.
#[derive(Clone)]
pub struct MediaStream {
    pub(crate) handle: Arc<dyn MediaStreamInterface>,
}

impl MediaStream {
    pub fn from_handle(handle: Arc<dyn MediaStreamInterface>) -> Self {
        Self { handle }
    }

    pub fn id(&self) -> String {
        self.handle.id()
    }

    pub fn audio_tracks(&self) -> Vec<RtcAudioTrack> {
        self.handle.audio_tracks()
    }

    pub fn add_track(&self, track: &RtcAudioTrack) -> bool {
        self.handle.add_track(track)
    }

    pub fn remove_track(&self, track: &RtcAudioTrack) -> bool {
        self.handle.remove_track(track)
    }

    pub fn dispose(&self) {
        self.handle.dispose()
    }

    pub fn ptr_eq(&self, other: &MediaStream) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl PartialEq for MediaStream {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Debug for MediaStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStream")
            .field("id", &self.id())
            .field("audio_tracks", &self.audio_tracks())
            .finish()
    }
}
