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
    media_stream_track::{media_stream_track, RtcTrackState},
    sys::AudioTrackInterface,
};

#[derive(Clone)]
pub struct RtcAudioTrack {
    pub(crate) handle: Arc<dyn AudioTrackInterface>,
}

impl RtcAudioTrack {
    pub fn from_handle(handle: Arc<dyn AudioTrackInterface>) -> Self {
        Self { handle }
    }

    media_stream_track!();

    /// Whether both handles point to the same engine track
    pub fn ptr_eq(&self, other: &RtcAudioTrack) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl PartialEq for RtcAudioTrack {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Debug for RtcAudioTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtcAudioTrack")
            .field("id", &self.id())
            .field("enabled", &self.enabled())
            .field("state", &self.state())
            .finish()
    }
}
