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

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcErrorType {
    Internal,
    InvalidState,
    InvalidParameter,
}

#[derive(Error, Debug, Clone)]
#[error("an RtcError occured: {error_type:?} - {message}")]
pub struct RtcError {
    pub error_type: RtcErrorType,
    pub message: String,
}

impl RtcError {
    pub(crate) fn new(error_type: RtcErrorType, message: impl Into<String>) -> Self {
        Self { error_type, message: message.into() }
    }
}

pub mod audio_source;
pub mod audio_track;
pub mod headless;
pub mod media_constraints;
pub mod media_stream;
pub mod media_stream_track;
pub mod peer_connection_factory;
pub mod prelude;
pub mod sys;

pub fn create_random_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}
