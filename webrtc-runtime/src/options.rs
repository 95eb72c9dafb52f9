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

use media_engine::prelude::*;
use serde::{Deserialize, Serialize};

/// Label given to locally created audio tracks
pub const DEFAULT_AUDIO_TRACK_LABEL: &str = "ARDAMSa0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaStreamOptions {
    /// Initial enabled state of the audio track
    pub auto_play: bool,
    pub track_label: String,
    /// Constraints for the capture source of local streams
    pub constraints: MediaConstraints,
}

impl Default for MediaStreamOptions {
    fn default() -> Self {
        Self {
            auto_play: true,
            track_label: DEFAULT_AUDIO_TRACK_LABEL.to_owned(),
            constraints: MediaConstraints::default(),
        }
    }
}

impl MediaStreamOptions {
    pub fn with_auto_play(auto_play: bool) -> Self {
        Self { auto_play, ..Default::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let options = MediaStreamOptions::from_json(r#"{ "auto_play": false }"#).unwrap();
        assert!(!options.auto_play);
        assert_eq!(options.track_label, DEFAULT_AUDIO_TRACK_LABEL);
        assert!(options.constraints.is_empty());
    }

    #[test]
    fn constraints_from_json() {
        let options = MediaStreamOptions::from_json(
            r#"{
                "track_label": "mic",
                "constraints": {
                    "mandatory": [{ "key": "googEchoCancellation", "value": "false" }]
                }
            }"#,
        )
        .unwrap();

        assert!(options.auto_play);
        assert_eq!(options.track_label, "mic");
        assert!(!options.constraints.audio_options().echo_cancellation);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(MediaStreamOptions::from_json("{ auto_play: yes }").is_err());
    }
}
