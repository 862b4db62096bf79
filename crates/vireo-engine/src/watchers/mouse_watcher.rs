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

//! Watches a single button on the shared mouse capability.

use std::ops::{Deref, DerefMut};

use vireo_core::input::{MouseButton, SharedMouse};
use vireo_core::GameTime;

use super::WatcherState;

/// A [`WatcherState`] driven by one button of the mouse capability.
///
/// Structurally the mouse twin of
/// [`KeyboardWatcher`](super::KeyboardWatcher): same snapshot bracketing,
/// same machine, button levels in place of key levels.
pub struct MouseWatcher {
    state: WatcherState,
    mouse: SharedMouse,
    button: MouseButton,
    combo_buttons: Vec<MouseButton>,
}

impl MouseWatcher {
    /// Creates a watcher bound to `button`.
    pub fn new(button: MouseButton, mouse: SharedMouse) -> Self {
        Self {
            state: WatcherState::new(),
            mouse,
            button,
            combo_buttons: Vec::new(),
        }
    }

    /// The watched button.
    pub fn button(&self) -> MouseButton {
        self.button
    }

    /// Rebinds the watched button.
    pub fn set_button(&mut self, button: MouseButton) {
        self.button = button;
    }

    /// The combo buttons, in the order they were configured.
    pub fn combo_buttons(&self) -> &[MouseButton] {
        &self.combo_buttons
    }

    /// Replaces the combo buttons. Order is preserved; the combo event
    /// fires on ticks where every listed button is down at once.
    pub fn set_combo_buttons(&mut self, buttons: Vec<MouseButton>) {
        self.combo_buttons = buttons;
    }

    /// Samples the mouse and advances the watcher one tick.
    pub fn update(&mut self, time: GameTime) {
        let (pressed_edge, down, combo_all_down) = {
            let mut mouse = self.mouse.borrow_mut();
            mouse.update_current_state();

            let pressed_edge = mouse.is_button_pressed(self.button);
            let down = mouse.is_button_down(self.button);
            let combo_all_down = !self.combo_buttons.is_empty()
                && self
                    .combo_buttons
                    .iter()
                    .all(|button| mouse.is_button_down(*button));

            mouse.update_previous_state();
            (pressed_edge, down, combo_all_down)
        };

        self.state.advance(pressed_edge, down, combo_all_down, time);
    }
}

impl Deref for MouseWatcher {
    type Target = WatcherState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl DerefMut for MouseWatcher {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl std::fmt::Debug for MouseWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseWatcher")
            .field("button", &self.button)
            .field("combo_buttons", &self.combo_buttons)
            .field("state", &self.state)
            .finish()
    }
}
