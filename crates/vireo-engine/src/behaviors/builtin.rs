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

//! The built-in behaviors every dynamic entity is constructed with.
//!
//! Exactly six are created regardless of which constructor is used — two
//! stop handlers, two speed clamps, and two velocity-snap bookkeeping
//! behaviors. The fixed count is part of the entity contract and verified
//! by tests.

use vireo_core::math::{Vec2, EPSILON};
use vireo_core::GameTime;

use super::Behavior;
use crate::entities::EntityBody;

/// Creates the fixed built-in behavior set, in execution order.
pub(crate) fn built_in_behaviors() -> Vec<Box<dyn Behavior>> {
    vec![
        Box::new(StopMovementBehavior::new()),
        Box::new(StopRotationBehavior::new()),
        Box::new(LinearSpeedClampBehavior::new()),
        Box::new(AngularSpeedClampBehavior::new()),
        Box::new(LinearVelocitySnapBehavior::new()),
        Box::new(AngularVelocitySnapBehavior::new()),
    ]
}

macro_rules! behavior_boilerplate {
    ($ty:ident, $default_name:literal) => {
        impl $ty {
            fn new() -> Self {
                Self {
                    name: String::from($default_name),
                    enabled: true,
                }
            }
        }

        impl Behavior for $ty {
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
                Self::run(host, time);
            }
        }
    };
}

/// Drives linear velocity toward zero while a movement stop is in progress.
///
/// Applies a counter-force proportional to the current velocity, the linear
/// deceleration rate, and the elapsed time; once the velocity reaches zero
/// the stopping flag clears.
struct StopMovementBehavior {
    name: String,
    enabled: bool,
}

impl StopMovementBehavior {
    fn run(host: &mut EntityBody, time: GameTime) {
        if !host.is_stopping_movement() {
            return;
        }
        let deceleration = host.linear_deceleration();
        let Some(body) = host.physics_body_mut() else {
            return;
        };

        let velocity = body.linear_velocity();
        if velocity.length() > EPSILON {
            let decay = (deceleration * time.elapsed_ms() as f32 / 1000.0).clamp(0.0, 1.0);
            let position = body.position();
            body.apply_force(-velocity * decay, position);
        }

        if body.linear_velocity().length() <= EPSILON {
            body.set_linear_velocity(Vec2::ZERO);
            host.set_stopping_movement(false);
        }
    }
}

behavior_boilerplate!(StopMovementBehavior, "stop_movement");

/// Drives angular velocity toward zero while a rotation stop is in progress.
struct StopRotationBehavior {
    name: String,
    enabled: bool,
}

impl StopRotationBehavior {
    fn run(host: &mut EntityBody, time: GameTime) {
        if !host.is_stopping_rotation() {
            return;
        }
        let deceleration = host.angular_deceleration();
        let Some(body) = host.physics_body_mut() else {
            return;
        };

        let velocity = body.angular_velocity();
        if velocity.abs() > EPSILON {
            let decay = (deceleration * time.elapsed_ms() as f32 / 1000.0).clamp(0.0, 1.0);
            body.apply_angular_impulse(-velocity * decay);
        }

        if body.angular_velocity().abs() <= EPSILON {
            body.set_angular_velocity(0.0);
            host.set_stopping_rotation(false);
        }
    }
}

behavior_boilerplate!(StopRotationBehavior, "stop_rotation");

/// Clamps the linear velocity magnitude to the configured ceiling.
struct LinearSpeedClampBehavior {
    name: String,
    enabled: bool,
}

impl LinearSpeedClampBehavior {
    fn run(host: &mut EntityBody, _time: GameTime) {
        let Some(max) = host.max_linear_speed() else {
            return;
        };
        let Some(body) = host.physics_body_mut() else {
            return;
        };
        let velocity = body.linear_velocity();
        let clamped = velocity.clamp_length(max);
        if clamped != velocity {
            body.set_linear_velocity(clamped);
        }
    }
}

behavior_boilerplate!(LinearSpeedClampBehavior, "linear_speed_clamp");

/// Clamps the angular velocity to the configured ceiling.
struct AngularSpeedClampBehavior {
    name: String,
    enabled: bool,
}

impl AngularSpeedClampBehavior {
    fn run(host: &mut EntityBody, _time: GameTime) {
        let Some(max) = host.max_rotation_speed() else {
            return;
        };
        let Some(body) = host.physics_body_mut() else {
            return;
        };
        let limit = max.abs();
        let velocity = body.angular_velocity();
        let clamped = velocity.clamp(-limit, limit);
        if clamped != velocity {
            body.set_angular_velocity(clamped);
        }
    }
}

behavior_boilerplate!(AngularSpeedClampBehavior, "angular_speed_clamp");

/// Snaps near-zero linear velocity to exactly zero.
///
/// Keeps `is_moving` from reading residual float drift as motion.
struct LinearVelocitySnapBehavior {
    name: String,
    enabled: bool,
}

impl LinearVelocitySnapBehavior {
    fn run(host: &mut EntityBody, _time: GameTime) {
        let Some(body) = host.physics_body_mut() else {
            return;
        };
        let velocity = body.linear_velocity();
        if velocity != Vec2::ZERO && velocity.length() <= EPSILON {
            body.set_linear_velocity(Vec2::ZERO);
        }
    }
}

behavior_boilerplate!(LinearVelocitySnapBehavior, "linear_velocity_snap");

/// Snaps near-zero angular velocity to exactly zero.
struct AngularVelocitySnapBehavior {
    name: String,
    enabled: bool,
}

impl AngularVelocitySnapBehavior {
    fn run(host: &mut EntityBody, _time: GameTime) {
        let Some(body) = host.physics_body_mut() else {
            return;
        };
        let velocity = body.angular_velocity();
        if velocity != 0.0 && velocity.abs() <= EPSILON {
            body.set_angular_velocity(0.0);
        }
    }
}

behavior_boilerplate!(AngularVelocitySnapBehavior, "angular_velocity_snap");
