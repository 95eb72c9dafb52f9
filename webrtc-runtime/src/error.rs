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

use media_engine::RtcError;
use thiserror::Error;

pub type MediaStreamResult<T> = Result<T, MediaStreamError>;

#[derive(Error, Debug, Clone)]
pub enum MediaStreamError {
    #[error("stream {stream_id} has no audio track")]
    NoAudioTrack { stream_id: String },
    #[error("media stream has been closed")]
    Closed,
    #[error("track {track_id} refused the enabled change")]
    TrackRejected { track_id: String },
    #[error("failed to attach track {track_id} to stream {stream_id}")]
    AttachFailed { stream_id: String, track_id: String },
    #[error("engine error: {0}")]
    Rtc(#[from] RtcError),
}
