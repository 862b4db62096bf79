// Copyright 2025 eraflo
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

//! Defines the per-tick time sample the host loop passes through `Update`.

use std::time::Duration;

/// The frame-time sample handed to every `update` call in a tick.
///
/// Carries only the elapsed wall time since the previous tick; the engine
/// keeps no clock of its own, so accumulators advance exactly as fast as the
/// host drives them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameTime {
    /// Wall time elapsed since the previous tick.
    pub elapsed: Duration,
}

impl GameTime {
    /// Creates a sample from an elapsed duration.
    #[inline]
    pub const fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }

    /// Creates a sample from whole elapsed milliseconds.
    #[inline]
    pub const fn from_millis(ms: u64) -> Self {
        Self {
            elapsed: Duration::from_millis(ms),
        }
    }

    /// The elapsed time in (fractional) milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// The elapsed time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let time = GameTime::from_millis(16);
        assert_eq!(time.elapsed_ms(), 16.0);
        assert_eq!(time.elapsed, Duration::from_millis(16));
    }

    #[test]
    fn fractional_milliseconds_survive() {
        let time = GameTime::new(Duration::from_micros(500));
        assert_eq!(time.elapsed_ms(), 0.5);
    }
}
