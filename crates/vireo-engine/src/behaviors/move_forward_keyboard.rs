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

//! Binds rotation keys plus a thrust key to heading-relative movement.

use vireo_core::input::{KeyCode, SharedKeyboard};
use vireo_core::GameTime;

use super::{Behavior, KeyBehavior, KeyBehaviorKind, KeySignal};
use crate::entities::EntityBody;

/// A composite behavior for heading-relative driving: hold a key to thrust
/// along the entity's current facing, two more to rotate it.
///
/// Defaults: `W` thrusts forward, `D` rotates clockwise, `A` rotates
/// counter-clockwise; all three are remappable. Thrust goes through
/// `move_at_set_angle`, so the applied force follows the body's heading
/// (0 degrees = up, clockwise-positive).
pub struct MoveForwardKeyboardBehavior {
    name: String,
    enabled: bool,
    linear_speed: f32,
    angular_speed: f32,
    thrust: KeyBehavior,
    rotate_cw: KeyBehavior,
    rotate_ccw: KeyBehavior,
}

impl MoveForwardKeyboardBehavior {
    /// Creates the behavior over a shared keyboard with the given thrust
    /// and rotation speeds.
    pub fn new(keyboard: SharedKeyboard, linear_speed: f32, angular_speed: f32) -> Self {
        let continuous = |key| {
            KeyBehavior::with_kind(key, KeyBehaviorKind::KeyDownContinuous, keyboard.clone())
        };

        Self {
            name: String::from("move_forward_keyboard"),
            enabled: true,
            linear_speed,
            angular_speed,
            thrust: continuous(KeyCode::KeyW),
            rotate_cw: continuous(KeyCode::KeyD),
            rotate_ccw: continuous(KeyCode::KeyA),
        }
    }

    /// The thrust force magnitude.
    pub fn linear_speed(&self) -> f32 {
        self.linear_speed
    }

    /// Sets the thrust force magnitude.
    pub fn set_linear_speed(&mut self, speed: f32) {
        self.linear_speed = speed;
    }

    /// The rotation impulse magnitude.
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Sets the rotation impulse magnitude.
    pub fn set_angular_speed(&mut self, speed: f32) {
        self.angular_speed = speed;
    }

    /// Rebinds the thrust key.
    pub fn set_thrust_key(&mut self, key: KeyCode) {
        self.thrust.set_key(key);
    }

    /// Rebinds the clockwise-rotation key.
    pub fn set_rotate_cw_key(&mut self, key: KeyCode) {
        self.rotate_cw.set_key(key);
    }

    /// Rebinds the counter-clockwise-rotation key.
    pub fn set_rotate_ccw_key(&mut self, key: KeyCode) {
        self.rotate_ccw.set_key(key);
    }
}

impl Behavior for MoveForwardKeyboardBehavior {
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
        if let Some(KeySignal::KeyDown(_)) = self.rotate_cw.process(time) {
            if let Err(error) = host.rotate_cw_at(self.angular_speed) {
                log::warn!("Keyboard rotation skipped: {error}");
            }
        }
        if let Some(KeySignal::KeyDown(_)) = self.rotate_ccw.process(time) {
            if let Err(error) = host.rotate_ccw_at(self.angular_speed) {
                log::warn!("Keyboard rotation skipped: {error}");
            }
        }
        if let Some(KeySignal::KeyDown(_)) = self.thrust.process(time) {
            if let Err(error) = host.move_at_set_angle(self.linear_speed) {
                log::warn!("Keyboard thrust skipped: {error}");
            }
        }
    }
}
