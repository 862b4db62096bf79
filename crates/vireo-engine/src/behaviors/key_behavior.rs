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

//! A per-key state machine polling the keyboard capability every tick.

use vireo_core::event::EventDispatcher;
use vireo_core::input::{KeyCode, SharedKeyboard};
use vireo_core::GameTime;

use super::Behavior;
use crate::entities::EntityBody;

/// Selects which condition a [`KeyBehavior`] fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehaviorKind {
    /// Fires the key-down event on every tick the key is held.
    KeyDownContinuous,
    /// Fires the key-down event once per up -> down transition.
    OnceOnDown,
    /// Fires the key-up event once per down -> up transition.
    OnceOnRelease,
    /// Fires the key-down event when the delay interval elapses while the
    /// key is held.
    OnKeyDownTimeDelay,
    /// Fires the key-up event when the delay interval elapses while the key
    /// is up.
    OnKeyReleaseTimeDelay,
    /// Fires the key-press event whenever any key at all is held.
    OnAnyKeyPress,
}

/// What a [`KeyBehavior`] tick observed, returned so composite behaviors can
/// react without subscribing to their own events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySignal {
    /// The bound key qualified for a key-down fire.
    KeyDown(KeyCode),
    /// The bound key qualified for a key-up fire.
    KeyUp(KeyCode),
    /// At least one key is held; carries the full pressed set.
    AnyKeyPress(Vec<KeyCode>),
}

/// The default delay interval for the time-delay kinds, in milliseconds.
pub const DEFAULT_TIME_DELAY_MS: f64 = 1000.0;

/// A per-key state machine that polls the keyboard capability every tick and
/// raises edge-triggered or continuous events.
///
/// Each update brackets its evaluation with the keyboard's double-buffer
/// refresh: the current snapshot is refreshed before the branch logic runs
/// and rolled into the previous snapshot after, so edge detection compares
/// this tick's poll against last tick's.
///
/// For the two time-delay kinds, the elapsed accumulator resets to zero
/// every time it crosses the delay — whether or not the key condition held —
/// so the delay governs the polling cadence, not just firing.
pub struct KeyBehavior {
    name: String,
    enabled: bool,
    key: KeyCode,
    kind: KeyBehaviorKind,
    time_delay_ms: f64,
    elapsed_ms: f64,
    keyboard: SharedKeyboard,
    key_down: EventDispatcher<KeyCode>,
    key_up: EventDispatcher<KeyCode>,
    key_press: EventDispatcher<Vec<KeyCode>>,
}

impl KeyBehavior {
    /// Creates a behavior bound to `key`, firing once per press by default.
    pub fn new(key: KeyCode, keyboard: SharedKeyboard) -> Self {
        Self {
            name: String::from("key_behavior"),
            enabled: true,
            key,
            kind: KeyBehaviorKind::OnceOnDown,
            time_delay_ms: DEFAULT_TIME_DELAY_MS,
            elapsed_ms: 0.0,
            keyboard,
            key_down: EventDispatcher::new(),
            key_up: EventDispatcher::new(),
            key_press: EventDispatcher::new(),
        }
    }

    /// Creates a behavior bound to `key` with an explicit firing kind.
    pub fn with_kind(key: KeyCode, kind: KeyBehaviorKind, keyboard: SharedKeyboard) -> Self {
        let mut behavior = Self::new(key, keyboard);
        behavior.kind = kind;
        behavior
    }

    /// The bound key.
    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// Rebinds the behavior to a different key.
    pub fn set_key(&mut self, key: KeyCode) {
        self.key = key;
    }

    /// The configured firing kind.
    pub fn kind(&self) -> KeyBehaviorKind {
        self.kind
    }

    /// Sets the firing kind.
    pub fn set_kind(&mut self, kind: KeyBehaviorKind) {
        self.kind = kind;
    }

    /// The delay interval for the time-delay kinds, in milliseconds.
    pub fn time_delay_ms(&self) -> f64 {
        self.time_delay_ms
    }

    /// Sets the delay interval for the time-delay kinds.
    pub fn set_time_delay_ms(&mut self, delay_ms: f64) {
        self.time_delay_ms = delay_ms;
    }

    /// Milliseconds accumulated since the last delay-interval rollover.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// The event raised on qualifying key-down ticks.
    pub fn on_key_down(&mut self) -> &mut EventDispatcher<KeyCode> {
        &mut self.key_down
    }

    /// The event raised on qualifying key-up ticks.
    pub fn on_key_up(&mut self) -> &mut EventDispatcher<KeyCode> {
        &mut self.key_up
    }

    /// The event raised while any key is held (kind `OnAnyKeyPress`);
    /// carries the full pressed-key list.
    pub fn on_key_press(&mut self) -> &mut EventDispatcher<Vec<KeyCode>> {
        &mut self.key_press
    }

    /// Runs one tick of the state machine and reports what fired.
    ///
    /// Events are dispatched after the keyboard borrow is released, so
    /// handlers may freely poll the shared keyboard.
    pub fn process(&mut self, time: GameTime) -> Option<KeySignal> {
        if !self.enabled {
            return None;
        }

        self.elapsed_ms += time.elapsed_ms();

        let signal = {
            let mut keyboard = self.keyboard.borrow_mut();
            keyboard.update_current_state();

            let signal = match self.kind {
                KeyBehaviorKind::KeyDownContinuous => keyboard
                    .is_key_down(self.key)
                    .then_some(KeySignal::KeyDown(self.key)),
                KeyBehaviorKind::OnceOnDown => keyboard
                    .is_key_pressed(self.key)
                    .then_some(KeySignal::KeyDown(self.key)),
                KeyBehaviorKind::OnceOnRelease => {
                    let released = keyboard.is_key_up(self.key)
                        && keyboard.previous_pressed_keys().contains(&self.key);
                    released.then_some(KeySignal::KeyUp(self.key))
                }
                KeyBehaviorKind::OnKeyDownTimeDelay => {
                    if self.elapsed_ms >= self.time_delay_ms {
                        // The accumulator rolls over on cadence even when
                        // the key condition is false.
                        self.elapsed_ms = 0.0;
                        keyboard
                            .is_key_down(self.key)
                            .then_some(KeySignal::KeyDown(self.key))
                    } else {
                        None
                    }
                }
                KeyBehaviorKind::OnKeyReleaseTimeDelay => {
                    if self.elapsed_ms >= self.time_delay_ms {
                        self.elapsed_ms = 0.0;
                        keyboard
                            .is_key_up(self.key)
                            .then_some(KeySignal::KeyUp(self.key))
                    } else {
                        None
                    }
                }
                KeyBehaviorKind::OnAnyKeyPress => {
                    let pressed = keyboard.current_pressed_keys();
                    (!pressed.is_empty()).then_some(KeySignal::AnyKeyPress(pressed))
                }
            };

            keyboard.update_previous_state();
            signal
        };

        match &signal {
            Some(KeySignal::KeyDown(key)) => self.key_down.invoke(key),
            Some(KeySignal::KeyUp(key)) => self.key_up.invoke(key),
            Some(KeySignal::AnyKeyPress(keys)) => self.key_press.invoke(keys),
            None => {}
        }

        signal
    }
}

impl Behavior for KeyBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update(&mut self, _host: &mut EntityBody, time: GameTime) {
        self.process(time);
    }
}
