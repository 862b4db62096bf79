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

//! Defines a tick-driven elapsed-time accumulator.

use std::fmt;

use super::{GameTime, ResetMode};
use crate::event::EventDispatcher;

/// A tick-driven stopwatch.
///
/// Unlike a wall-clock timer, this accumulator only advances when the host
/// feeds it elapsed time through [`update`](StopWatch::update), and only
/// while running. Crossing the configured timeout raises the time-elapsed
/// event; in [`ResetMode::Auto`] the stopwatch then resets itself (which
/// also stops it).
pub struct StopWatch {
    elapsed_ms: f64,
    timeout_ms: f64,
    running: bool,
    reset_mode: ResetMode,
    time_elapsed: EventDispatcher<()>,
}

impl StopWatch {
    /// Creates a stopped stopwatch with the given timeout in milliseconds.
    pub fn new(timeout_ms: f64) -> Self {
        Self {
            elapsed_ms: 0.0,
            timeout_ms,
            running: false,
            reset_mode: ResetMode::default(),
            time_elapsed: EventDispatcher::new(),
        }
    }

    /// Starts accumulating elapsed time.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops accumulating; the elapsed value is preserved.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Zeroes the accumulator and stops the stopwatch.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.running = false;
    }

    /// Accumulates `time` while running; no-op while stopped.
    ///
    /// Raises the time-elapsed event when the accumulator crosses the
    /// timeout, then self-resets in `Auto` mode.
    pub fn update(&mut self, time: GameTime) {
        if !self.running {
            return;
        }

        self.elapsed_ms += time.elapsed_ms();

        if self.timeout_ms > 0.0 && self.elapsed_ms >= self.timeout_ms {
            self.time_elapsed.invoke(&());
            if self.reset_mode == ResetMode::Auto {
                self.reset();
            }
        }
    }

    /// Accumulated milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// `true` while the stopwatch is accumulating.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configured timeout in milliseconds.
    pub fn timeout_ms(&self) -> f64 {
        self.timeout_ms
    }

    /// Sets the timeout in milliseconds.
    pub fn set_timeout_ms(&mut self, timeout_ms: f64) {
        self.timeout_ms = timeout_ms;
    }

    /// The configured reset policy.
    pub fn reset_mode(&self) -> ResetMode {
        self.reset_mode
    }

    /// Sets the reset policy.
    pub fn set_reset_mode(&mut self, mode: ResetMode) {
        self.reset_mode = mode;
    }

    /// The event raised when the accumulator crosses the timeout.
    pub fn on_time_elapsed(&mut self) -> &mut EventDispatcher<()> {
        &mut self.time_elapsed
    }
}

impl fmt::Debug for StopWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopWatch")
            .field("elapsed_ms", &self.elapsed_ms)
            .field("timeout_ms", &self.timeout_ms)
            .field("running", &self.running)
            .field("reset_mode", &self.reset_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn accumulates_only_while_running() {
        let mut watch = StopWatch::new(1000.0);

        watch.update(GameTime::from_millis(16));
        assert_eq!(watch.elapsed_ms(), 0.0, "Stopped watch must not accumulate");

        watch.start();
        watch.update(GameTime::from_millis(16));
        watch.update(GameTime::from_millis(16));
        assert_eq!(watch.elapsed_ms(), 32.0);

        watch.stop();
        watch.update(GameTime::from_millis(16));
        assert_eq!(watch.elapsed_ms(), 32.0, "Elapsed is preserved across stop");
    }

    #[test]
    fn reset_zeroes_and_stops() {
        let mut watch = StopWatch::new(1000.0);
        watch.start();
        watch.update(GameTime::from_millis(500));

        watch.reset();
        assert_eq!(watch.elapsed_ms(), 0.0);
        assert!(!watch.is_running());
    }

    #[test]
    fn timeout_raises_event_and_auto_resets() {
        let mut watch = StopWatch::new(100.0);
        let fired = Rc::new(Cell::new(0));
        let sink = Rc::clone(&fired);
        watch.on_time_elapsed().subscribe(move |_| sink.set(sink.get() + 1));

        watch.start();
        watch.update(GameTime::from_millis(60));
        assert_eq!(fired.get(), 0);

        watch.update(GameTime::from_millis(60));
        assert_eq!(fired.get(), 1);
        assert_eq!(watch.elapsed_ms(), 0.0, "Auto mode self-resets after firing");
        assert!(!watch.is_running(), "Auto reset also stops the watch");
    }

    #[test]
    fn manual_mode_keeps_accumulating_past_timeout() {
        let mut watch = StopWatch::new(100.0);
        watch.set_reset_mode(ResetMode::Manual);
        let fired = Rc::new(Cell::new(0));
        let sink = Rc::clone(&fired);
        watch.on_time_elapsed().subscribe(move |_| sink.set(sink.get() + 1));

        watch.start();
        watch.update(GameTime::from_millis(120));
        watch.update(GameTime::from_millis(120));
        assert_eq!(fired.get(), 2, "Manual mode fires on every update past timeout");
        assert_eq!(watch.elapsed_ms(), 240.0);
    }
}
