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

//! Binds four key behaviors to an entity's directional moves.

use vireo_core::input::{KeyCode, SharedKeyboard};
use vireo_core::GameTime;

use super::{Behavior, KeyBehavior, KeyBehaviorKind, KeySignal};
use crate::entities::EntityBody;

/// A composite behavior translating held movement keys into directional
/// force application on the owning entity.
///
/// Owns one continuous [`KeyBehavior`] per direction (defaults W/A/S/D for
/// up/left/down/right, all remappable) and calls the matching move method at
/// the configured linear speed on every tick a key is held.
pub struct MovementByKeyboardBehavior {
    name: String,
    enabled: bool,
    linear_speed: f32,
    move_up: KeyBehavior,
    move_down: KeyBehavior,
    move_left: KeyBehavior,
    move_right: KeyBehavior,
}

impl MovementByKeyboardBehavior {
    /// Creates the behavior over a shared keyboard at the given speed.
    pub fn new(keyboard: SharedKeyboard, linear_speed: f32) -> Self {
        let continuous = |key| {
            KeyBehavior::with_kind(key, KeyBehaviorKind::KeyDownContinuous, keyboard.clone())
        };

        Self {
            name: String::from("movement_by_keyboard"),
            enabled: true,
            linear_speed,
            move_up: continuous(KeyCode::KeyW),
            move_down: continuous(KeyCode::KeyS),
            move_left: continuous(KeyCode::KeyA),
            move_right: continuous(KeyCode::KeyD),
        }
    }

    /// The speed passed to each directional move.
    pub fn linear_speed(&self) -> f32 {
        self.linear_speed
    }

    /// Sets the speed passed to each directional move.
    pub fn set_linear_speed(&mut self, speed: f32) {
        self.linear_speed = speed;
    }

    /// Rebinds the move-up key.
    pub fn set_move_up_key(&mut self, key: KeyCode) {
        self.move_up.set_key(key);
    }

    /// Rebinds the move-down key.
    pub fn set_move_down_key(&mut self, key: KeyCode) {
        self.move_down.set_key(key);
    }

    /// Rebinds the move-left key.
    pub fn set_move_left_key(&mut self, key: KeyCode) {
        self.move_left.set_key(key);
    }

    /// Rebinds the move-right key.
    pub fn set_move_right_key(&mut self, key: KeyCode) {
        self.move_right.set_key(key);
    }
}

impl Behavior for MovementByKeyboardBehavior {
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

    fn update(&mut self, host: &mut EntityBody, time: GameTime) {
        let speed = self.linear_speed;
        let moves: [(&mut KeyBehavior, fn(&mut EntityBody, f32) -> Result<(), crate::EntityError>); 4] = [
            (&mut self.move_up, |host, speed| host.move_up_at(speed)),
            (&mut self.move_down, |host, speed| host.move_down_at(speed)),
            (&mut self.move_left, |host, speed| host.move_left_at(speed)),
            (&mut self.move_right, |host, speed| host.move_right_at(speed)),
        ];

        for (key_behavior, apply) in moves {
            if let Some(KeySignal::KeyDown(_)) = key_behavior.process(time) {
                if let Err(error) = apply(host, speed) {
                    log::warn!("Keyboard movement skipped: {error}");
                }
            }
        }
    }
}
