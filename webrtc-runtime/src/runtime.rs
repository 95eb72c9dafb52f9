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

use std::{
    fmt::{Debug, Formatter},
    sync::{Arc, Weak},
};

use lazy_static::lazy_static;
use media_engine::prelude::*;
use parking_lot::Mutex;

lazy_static! {
    static ref WEBRTC_RUNTIME: Mutex<Weak<WebRtcRuntime>> = Mutex::new(Weak::new());
}

/// Owner of the engine factory shared by every media stream of the process.
pub struct WebRtcRuntime {
    pc_factory: PeerConnectionFactory,
}

impl Debug for WebRtcRuntime {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_struct("WebRtcRuntime").finish()
    }
}

impl WebRtcRuntime {
    /// Returns the shared runtime, creating it if no one holds it anymore.
    pub fn instance() -> Arc<WebRtcRuntime> {
        let mut runtime_ref = WEBRTC_RUNTIME.lock();
        if let Some(runtime) = runtime_ref.upgrade() {
            runtime
        } else {
            log::trace!("WebRtcRuntime::new()");
            let new_runtime = Self::with_factory(PeerConnectionFactory::default());
            *runtime_ref = Arc::downgrade(&new_runtime);
            new_runtime
        }
    }

    /// Standalone runtime around an injected factory, not registered as the shared one.
    pub fn with_factory(pc_factory: PeerConnectionFactory) -> Arc<WebRtcRuntime> {
        Arc::new(Self { pc_factory })
    }

    pub fn pc_factory(&self) -> &PeerConnectionFactory {
        &self.pc_factory
    }
}

impl Drop for WebRtcRuntime {
    fn drop(&mut self) {
        log::trace!("WebRtcRuntime::drop()");
    }
}
