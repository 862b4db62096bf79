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

//! Watches a single key on the shared keyboard capability.

use std::ops::{Deref, DerefMut};

use vireo_core::input::{KeyCode, SharedKeyboard};
use vireo_core::GameTime;

use super::WatcherState;

/// A [`WatcherState`] driven by one key of the keyboard capability.
///
/// Each `update` refreshes the keyboard's double-buffered snapshot, samples
/// the bound key's press edge and level plus the combo keys' levels, then
/// advances the machine. Derefs to [`WatcherState`] for configuration and
/// event access.
pub struct KeyboardWatcher {
    state: WatcherState,
    keyboard: SharedKeyboard,
    key: KeyCode,
    combo_keys: Vec<KeyCode>,
}

impl KeyboardWatcher {
    /// Creates a watcher bound to `key`.
    pub fn new(key: KeyCode, keyboard: SharedKeyboard) -> Self {
        Self {
            state: WatcherState::new(),
            keyboard,
            key,
            combo_keys: Vec::new(),
        }
    }

    /// The watched key.
    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// Rebinds the watched key.
    pub fn set_key(&mut self, key: KeyCode) {
        self.key = key;
    }

    /// The combo keys, in the order they were configured.
    pub fn combo_keys(&self) -> &[KeyCode] {
        &self.combo_keys
    }

    /// Replaces the combo keys. Order is preserved; the combo event fires
    /// on ticks where every listed key is down at once.
    pub fn set_combo_keys(&mut self, keys: Vec<KeyCode>) {
        self.combo_keys = keys;
    }

    /// Samples the keyboard and advances the watcher one tick.
    pub fn update(&mut self, time: GameTime) {
        let (pressed_edge, down, combo_all_down) = {
            let mut keyboard = self.keyboard.borrow_mut();
            keyboard.update_current_state();

            let pressed_edge = keyboard.is_key_pressed(self.key);
            let down = keyboard.is_key_down(self.key);
            let combo_all_down = !self.combo_keys.is_empty()
                && self.combo_keys.iter().all(|key| keyboard.is_key_down(*key));

            keyboard.update_previous_state();
            (pressed_edge, down, combo_all_down)
        };

        self.state.advance(pressed_edge, down, combo_all_down, time);
    }
}

impl Deref for KeyboardWatcher {
    type Target = WatcherState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl DerefMut for KeyboardWatcher {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl std::fmt::Debug for KeyboardWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardWatcher")
            .field("key", &self.key)
            .field("combo_keys", &self.combo_keys)
            .field("state", &self.state)
            .finish()
    }
}
