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

use serde::{Deserialize, Serialize};

use crate::sys::AudioSourceInterface;

/// Audio processing applied by the engine to captured samples
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSourceOptions {
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
    pub auto_gain_control: bool,
    pub high_pass_filter: bool,
}

impl Default for AudioSourceOptions {
    fn default() -> Self {
        Self {
            echo_cancellation: true,
            noise_suppression: true,
            auto_gain_control: true,
            high_pass_filter: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceState {
    Live,
    Ended,
}

#[derive(Clone)]
pub struct RtcAudioSource {
    pub(crate) handle: Arc<dyn AudioSourceInterface>,
}

impl RtcAudioSource {
    pub fn from_handle(handle: Arc<dyn AudioSourceInterface>) -> Self {
        Self { handle }
    }

    pub fn id(&self) -> String {
        self.handle.id()
    }

    pub fn audio_options(&self) -> AudioSourceOptions {
        self.handle.audio_options()
    }

    pub fn state(&self) -> SourceState {
        self.handle.state()
    }

    pub fn release(&self) {
        self.handle.release()
    }
}

impl Debug for RtcAudioSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtcAudioSource")
            .field("id", &self.id())
            .field("options", &self.audio_options())
            .field("state", &self.state())
            .finish()
    }
}
