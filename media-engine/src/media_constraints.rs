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

use serde::{Deserialize, Serialize};

use crate::audio_source::AudioSourceOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Capture constraints handed to the engine when creating a source.
///
/// Mandatory entries take precedence over optional ones. An empty set means the engine
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConstraints {
    pub mandatory: Vec<KeyValuePair>,
    pub optional: Vec<KeyValuePair>,
}

const ECHO_CANCELLATION: [&str; 2] = ["googEchoCancellation", "echoCancellation"];
const NOISE_SUPPRESSION: [&str; 2] = ["googNoiseSuppression", "noiseSuppression"];
const AUTO_GAIN_CONTROL: [&str; 2] = ["googAutoGainControl", "autoGainControl"];
const HIGH_PASS_FILTER: [&str; 1] = ["googHighpassFilter"];

impl MediaConstraints {
    pub fn is_empty(&self) -> bool {
        self.mandatory.is_empty() && self.optional.is_empty()
    }

    pub fn with_mandatory(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.mandatory.push(KeyValuePair::new(key, value));
        self
    }

    pub fn with_optional(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.optional.push(KeyValuePair::new(key, value));
        self
    }

    /// First parsable value for any of `keys`, mandatory entries first
    fn flag(&self, keys: &[&str]) -> Option<bool> {
        [&self.mandatory, &self.optional].into_iter().find_map(|pairs| {
            pairs
                .iter()
                .filter(|kv| keys.contains(&kv.key.as_str()))
                .find_map(|kv| parse_bool(&kv.value))
        })
    }

    pub fn audio_options(&self) -> AudioSourceOptions {
        let defaults = AudioSourceOptions::default();
        AudioSourceOptions {
            echo_cancellation: self.flag(&ECHO_CANCELLATION).unwrap_or(defaults.echo_cancellation),
            noise_suppression: self.flag(&NOISE_SUPPRESSION).unwrap_or(defaults.noise_suppression),
            auto_gain_control: self.flag(&AUTO_GAIN_CONTROL).unwrap_or(defaults.auto_gain_control),
            high_pass_filter: self.flag(&HIGH_PASS_FILTER).unwrap_or(defaults.high_pass_filter),
        }
    }
}

impl From<&MediaConstraints> for AudioSourceOptions {
    fn from(constraints: &MediaConstraints) -> Self {
        constraints.audio_options()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => {
            log::warn!("ignoring non-boolean constraint value: {}", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_constraints_use_engine_defaults() {
        let constraints = MediaConstraints::default();
        assert!(constraints.is_empty());
        assert_eq!(constraints.audio_options(), AudioSourceOptions::default());
    }

    #[test]
    fn mandatory_wins_over_optional() {
        let constraints = MediaConstraints::default()
            .with_optional("googEchoCancellation", "true")
            .with_mandatory("echoCancellation", "false");

        let options = constraints.audio_options();
        assert!(!options.echo_cancellation);
        assert!(options.noise_suppression);
    }

    #[test]
    fn invalid_values_fall_back() {
        let constraints = MediaConstraints::default()
            .with_mandatory("googAutoGainControl", "maybe")
            .with_optional("googAutoGainControl", "false")
            .with_optional("googHighpassFilter", "0");

        let options = AudioSourceOptions::from(&constraints);
        assert!(!options.auto_gain_control);
        assert!(!options.high_pass_filter);
    }

    #[test]
    fn valid_mandatory_alias_after_invalid_one() {
        let constraints = MediaConstraints::default()
            .with_mandatory("googEchoCancellation", "maybe")
            .with_mandatory("echoCancellation", "false")
            .with_optional("googEchoCancellation", "true");

        assert!(!constraints.audio_options().echo_cancellation);
    }

    #[test]
    fn deserialize_partial_json() {
        let constraints: MediaConstraints = serde_json::from_str(
            r#"{ "optional": [{ "key": "googNoiseSuppression", "value": "false" }] }"#,
        )
        .unwrap();

        assert!(constraints.mandatory.is_empty());
        assert!(!constraints.audio_options().noise_suppression);
    }
}
