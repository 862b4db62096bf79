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

//! Frame-scripted keyboard and mouse doubles.

use std::collections::{HashSet, VecDeque};

use vireo_core::input::{KeyCode, Keyboard, Mouse, MouseButton};

/// A [`Keyboard`] whose state is scripted ahead of time, one frame per
/// `update_current_state` call.
///
/// Queue frames with [`push_frame`](Self::push_frame); each
/// `update_current_state` consumes the next queued frame (or holds the last
/// one once the queue drains), and `update_previous_state` rolls the
/// current snapshot into the previous one, exactly like a real
/// double-buffered backend.
#[derive(Debug, Default)]
pub struct ScriptedKeyboard {
    pending: VecDeque<HashSet<KeyCode>>,
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl ScriptedKeyboard {
    /// Creates a keyboard with no keys down and no frames queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the set of keys held during the next unconsumed frame.
    pub fn push_frame(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.pending.push_back(keys.into_iter().collect());
    }
}

impl Keyboard for ScriptedKeyboard {
    fn update_current_state(&mut self) {
        if let Some(frame) = self.pending.pop_front() {
            self.current = frame;
        }
    }

    fn update_previous_state(&mut self) {
        self.previous = self.current.clone();
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    fn is_key_up(&self, key: KeyCode) -> bool {
        !self.current.contains(&key)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    fn current_pressed_keys(&self) -> Vec<KeyCode> {
        self.current.iter().copied().collect()
    }

    fn previous_pressed_keys(&self) -> Vec<KeyCode> {
        self.previous.iter().copied().collect()
    }
}

/// The mouse twin of [`ScriptedKeyboard`]: scripted button frames plus a
/// settable cursor position.
#[derive(Debug, Default)]
pub struct ScriptedMouse {
    pending: VecDeque<HashSet<MouseButton>>,
    current: HashSet<MouseButton>,
    previous: HashSet<MouseButton>,
    x: f32,
    y: f32,
}

impl ScriptedMouse {
    /// Creates a mouse with no buttons down at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the set of buttons held during the next unconsumed frame.
    pub fn push_frame(&mut self, buttons: impl IntoIterator<Item = MouseButton>) {
        self.pending.push_back(buttons.into_iter().collect());
    }
}

impl Mouse for ScriptedMouse {
    fn update_current_state(&mut self) {
        if let Some(frame) = self.pending.pop_front() {
            self.current = frame;
        }
    }

    fn update_previous_state(&mut self) {
        self.previous = self.current.clone();
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.current.contains(&button)
    }

    fn is_button_up(&self, button: MouseButton) -> bool {
        !self.current.contains(&button)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.current.contains(&button) && !self.previous.contains(&button)
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}
