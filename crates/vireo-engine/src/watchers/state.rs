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

//! The hit-count/timer/combo state machine shared by both watchers.

use vireo_core::event::EventDispatcher;
use vireo_core::utils::ResetMode;
use vireo_core::GameTime;

/// The watcher state machine, driven by three per-tick observations of the
/// bound input: a press edge, the current level, and whether every combo
/// input is down.
///
/// Per tick (skipped entirely while disabled, so no timers advance and no
/// events fire):
///
/// 1. A press edge increments the hit count; reaching `hit_count_max`
///    raises `hit_count_reached` and, in `Auto` mode, zeroes the count.
///    `hit_count_max == 0` disables hit counting.
/// 2. While down, the down timer accumulates and the release timer resets.
///    Passing a non-zero `down_timeout_ms` raises `down_timeout` and, in
///    `Auto` mode, zeroes the down timer.
/// 3. While up, the symmetric release path runs against
///    `release_timeout_ms`.
/// 4. When combo inputs exist and all are down this tick, `combo_pressed`
///    is raised.
pub struct WatcherState {
    enabled: bool,
    hit_count_max: u32,
    current_hit_count: u32,
    down_elapsed_ms: f64,
    release_elapsed_ms: f64,
    down_timeout_ms: f64,
    release_timeout_ms: f64,
    hit_count_reset_mode: ResetMode,
    down_elapsed_reset_mode: ResetMode,
    release_elapsed_reset_mode: ResetMode,
    hit_count_reached: EventDispatcher<u32>,
    down_timeout: EventDispatcher<f64>,
    release_timeout: EventDispatcher<f64>,
    combo_pressed: EventDispatcher<()>,
}

impl WatcherState {
    /// Creates an enabled watcher state with hit counting and both
    /// timeouts disabled.
    pub fn new() -> Self {
        Self {
            enabled: true,
            hit_count_max: 0,
            current_hit_count: 0,
            down_elapsed_ms: 0.0,
            release_elapsed_ms: 0.0,
            down_timeout_ms: 0.0,
            release_timeout_ms: 0.0,
            hit_count_reset_mode: ResetMode::default(),
            down_elapsed_reset_mode: ResetMode::default(),
            release_elapsed_reset_mode: ResetMode::default(),
            hit_count_reached: EventDispatcher::new(),
            down_timeout: EventDispatcher::new(),
            release_timeout: EventDispatcher::new(),
            combo_pressed: EventDispatcher::new(),
        }
    }

    /// Advances the machine one tick from this frame's input observations.
    pub fn advance(
        &mut self,
        pressed_edge: bool,
        down: bool,
        combo_all_down: bool,
        time: GameTime,
    ) {
        if !self.enabled {
            return;
        }

        let elapsed = time.elapsed_ms();

        if pressed_edge && self.hit_count_max > 0 && self.current_hit_count < self.hit_count_max {
            self.current_hit_count += 1;
            if self.current_hit_count == self.hit_count_max {
                let count = self.current_hit_count;
                self.hit_count_reached.invoke(&count);
                if self.hit_count_reset_mode == ResetMode::Auto {
                    self.current_hit_count = 0;
                }
            }
        }

        if down {
            self.down_elapsed_ms += elapsed;
            self.release_elapsed_ms = 0.0;
            if self.down_timeout_ms > 0.0 && self.down_elapsed_ms >= self.down_timeout_ms {
                let held = self.down_elapsed_ms;
                self.down_timeout.invoke(&held);
                if self.down_elapsed_reset_mode == ResetMode::Auto {
                    self.down_elapsed_ms = 0.0;
                }
            }
        } else {
            self.release_elapsed_ms += elapsed;
            self.down_elapsed_ms = 0.0;
            if self.release_timeout_ms > 0.0 && self.release_elapsed_ms >= self.release_timeout_ms
            {
                let released = self.release_elapsed_ms;
                self.release_timeout.invoke(&released);
                if self.release_elapsed_reset_mode == ResetMode::Auto {
                    self.release_elapsed_ms = 0.0;
                }
            }
        }

        if combo_all_down {
            self.combo_pressed.invoke(&());
        }
    }

    // --- Configuration ---

    /// `true` while `advance` processes input.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the whole machine.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The hit-count threshold; `0` disables hit counting.
    pub fn hit_count_max(&self) -> u32 {
        self.hit_count_max
    }

    /// Sets the hit-count threshold.
    pub fn set_hit_count_max(&mut self, max: u32) {
        self.hit_count_max = max;
    }

    /// Press edges counted so far this cycle.
    pub fn current_hit_count(&self) -> u32 {
        self.current_hit_count
    }

    /// The hit count as an integer-truncated percentage of the threshold.
    /// `0` while the threshold is disabled.
    pub fn current_hit_count_percentage(&self) -> u32 {
        if self.hit_count_max == 0 {
            return 0;
        }
        self.current_hit_count * 100 / self.hit_count_max
    }

    /// Milliseconds the input has been continuously down.
    pub fn down_elapsed_ms(&self) -> f64 {
        self.down_elapsed_ms
    }

    /// Milliseconds the input has been continuously up.
    pub fn release_elapsed_ms(&self) -> f64 {
        self.release_elapsed_ms
    }

    /// The held-down timeout in milliseconds; `0` disables it.
    pub fn down_timeout_ms(&self) -> f64 {
        self.down_timeout_ms
    }

    /// Sets the held-down timeout.
    pub fn set_down_timeout_ms(&mut self, timeout_ms: f64) {
        self.down_timeout_ms = timeout_ms;
    }

    /// The released timeout in milliseconds; `0` disables it.
    pub fn release_timeout_ms(&self) -> f64 {
        self.release_timeout_ms
    }

    /// Sets the released timeout.
    pub fn set_release_timeout_ms(&mut self, timeout_ms: f64) {
        self.release_timeout_ms = timeout_ms;
    }

    /// How the hit count resets after reaching the threshold.
    pub fn hit_count_reset_mode(&self) -> ResetMode {
        self.hit_count_reset_mode
    }

    /// Sets the hit-count reset policy.
    pub fn set_hit_count_reset_mode(&mut self, mode: ResetMode) {
        self.hit_count_reset_mode = mode;
    }

    /// How the down timer resets after a timeout fires.
    pub fn down_elapsed_reset_mode(&self) -> ResetMode {
        self.down_elapsed_reset_mode
    }

    /// Sets the down-timer reset policy.
    pub fn set_down_elapsed_reset_mode(&mut self, mode: ResetMode) {
        self.down_elapsed_reset_mode = mode;
    }

    /// How the release timer resets after a timeout fires.
    pub fn release_elapsed_reset_mode(&self) -> ResetMode {
        self.release_elapsed_reset_mode
    }

    /// Sets the release-timer reset policy.
    pub fn set_release_elapsed_reset_mode(&mut self, mode: ResetMode) {
        self.release_elapsed_reset_mode = mode;
    }

    // --- Manual resets ---

    /// Zeroes the hit count.
    pub fn reset_hit_count(&mut self) {
        self.current_hit_count = 0;
    }

    /// Zeroes the down timer.
    pub fn reset_down_elapsed(&mut self) {
        self.down_elapsed_ms = 0.0;
    }

    /// Zeroes the release timer.
    pub fn reset_release_elapsed(&mut self) {
        self.release_elapsed_ms = 0.0;
    }

    // --- Events ---

    /// Raised when the hit count reaches the threshold; carries the count.
    pub fn on_hit_count_reached(&mut self) -> &mut EventDispatcher<u32> {
        &mut self.hit_count_reached
    }

    /// Raised when the input stays down past the down timeout; carries the
    /// held milliseconds.
    pub fn on_down_timeout(&mut self) -> &mut EventDispatcher<f64> {
        &mut self.down_timeout
    }

    /// Raised when the input stays up past the release timeout; carries the
    /// released milliseconds.
    pub fn on_release_timeout(&mut self) -> &mut EventDispatcher<f64> {
        &mut self.release_timeout
    }

    /// Raised on every tick the full combo is held down.
    pub fn on_combo_pressed(&mut self) -> &mut EventDispatcher<()> {
        &mut self.combo_pressed
    }
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WatcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherState")
            .field("enabled", &self.enabled)
            .field("hit_count_max", &self.hit_count_max)
            .field("current_hit_count", &self.current_hit_count)
            .field("down_elapsed_ms", &self.down_elapsed_ms)
            .field("release_elapsed_ms", &self.release_elapsed_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    const TICK: GameTime = GameTime::from_millis(16);

    #[test]
    fn six_press_edges_out_of_ten_report_sixty_percent() {
        let mut state = WatcherState::new();
        state.set_hit_count_max(10);

        for _ in 0..6 {
            state.advance(true, true, false, TICK);
            state.advance(false, false, false, TICK);
        }

        assert_eq!(state.current_hit_count(), 6, "six edges should be counted");
        assert_eq!(
            state.current_hit_count_percentage(),
            60,
            "6 of 10 hits should report 60 percent"
        );
    }

    #[test]
    fn hit_count_threshold_fires_and_auto_resets() {
        let mut state = WatcherState::new();
        state.set_hit_count_max(3);

        let fired = Rc::new(Cell::new(0u32));
        let observed = fired.clone();
        state
            .on_hit_count_reached()
            .subscribe(move |count| observed.set(*count));

        for _ in 0..3 {
            state.advance(true, true, false, TICK);
        }

        assert_eq!(fired.get(), 3, "event should carry the reached count");
        assert_eq!(
            state.current_hit_count(),
            0,
            "auto mode should reset the count after the threshold event"
        );
    }

    #[test]
    fn down_timeout_fires_after_accumulated_hold() {
        let mut state = WatcherState::new();
        state.set_down_timeout_ms(50.0);

        let fired = Rc::new(Cell::new(false));
        let observed = fired.clone();
        state.on_down_timeout().subscribe(move |_| observed.set(true));

        for _ in 0..3 {
            state.advance(false, true, false, TICK);
        }
        assert!(!fired.get(), "48ms held should stay under a 50ms timeout");

        state.advance(false, true, false, TICK);
        assert!(fired.get(), "64ms held should trip a 50ms timeout");
        assert_eq!(
            state.down_elapsed_ms(),
            0.0,
            "auto mode should reset the down timer after the timeout"
        );
    }

    #[test]
    fn release_resets_the_down_timer() {
        let mut state = WatcherState::new();

        state.advance(false, true, false, TICK);
        state.advance(false, true, false, TICK);
        assert_eq!(state.down_elapsed_ms(), 32.0);

        state.advance(false, false, false, TICK);
        assert_eq!(state.down_elapsed_ms(), 0.0, "going up should zero the down timer");
        assert_eq!(state.release_elapsed_ms(), 16.0);
    }

    #[test]
    fn disabled_state_never_counts_or_fires() {
        let mut state = WatcherState::new();
        state.set_hit_count_max(1);
        state.set_down_timeout_ms(1.0);
        state.set_enabled(false);

        let fired = Rc::new(Cell::new(false));
        let hit = fired.clone();
        state.on_hit_count_reached().subscribe(move |_| hit.set(true));
        let timed = fired.clone();
        state.on_down_timeout().subscribe(move |_| timed.set(true));
        let combo = fired.clone();
        state.on_combo_pressed().subscribe(move |_| combo.set(true));

        for _ in 0..10 {
            state.advance(true, true, true, TICK);
        }

        assert!(!fired.get(), "disabled watcher should raise nothing");
        assert_eq!(state.current_hit_count(), 0);
        assert_eq!(state.down_elapsed_ms(), 0.0);
    }

    #[test]
    fn manual_reset_mode_keeps_the_count_until_reset() {
        let mut state = WatcherState::new();
        state.set_hit_count_max(2);
        state.set_hit_count_reset_mode(ResetMode::Manual);

        state.advance(true, true, false, TICK);
        state.advance(true, true, false, TICK);
        assert_eq!(state.current_hit_count(), 2, "manual mode should hold the count");

        state.reset_hit_count();
        assert_eq!(state.current_hit_count(), 0);
    }
}
