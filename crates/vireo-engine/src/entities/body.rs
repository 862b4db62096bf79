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

//! The motion state an entity's behaviors act on.
//!
//! [`EntityBody`] bundles the injected physics-body capability with the
//! motion attributes (cruise speeds, clamp ceilings, deceleration rates,
//! stopping flags). It lives as a separate struct so the entity can hand a
//! mutable borrow of it to each behavior while the behavior list itself is
//! owned by the entity — the movement methods and the built-in behaviors all
//! go through this one surface.
//!
//! Movement is expressed as force application, never direct position writes:
//! a directional move decomposes the requested speed into a force vector
//! matching the direction's sign convention (right = +X, down = +Y, up = −Y)
//! and applies it at the body's current world position. Diagonals place the
//! magnitude on each axis independently; they are not normalized to a
//! constant total magnitude.

use vireo_core::math::Vec2;
use vireo_core::physics::PhysicsBody;

use crate::errors::EntityError;

/// The default force magnitude used by the parameterless move methods.
pub const DEFAULT_LINEAR_SPEED: f32 = 0.25;

/// The default impulse magnitude used by the parameterless rotate methods.
pub const DEFAULT_ROTATE_SPEED: f32 = 1.0;

/// The physics body plus the motion attributes driving it.
///
/// Every movement and rotation operation fails with
/// [`EntityError::NotInitialized`] — before any computation — when the body
/// capability is absent or its geometry has not been bound yet.
pub struct EntityBody {
    body: Option<Box<dyn PhysicsBody>>,
    speed_x: f32,
    speed_y: f32,
    rotate_speed: f32,
    max_linear_speed: Option<f32>,
    max_rotation_speed: Option<f32>,
    linear_deceleration: f32,
    angular_deceleration: f32,
    rotation_enabled: bool,
    stopping_movement: bool,
    stopping_rotation: bool,
    friction: f32,
}

impl EntityBody {
    /// Creates the motion state around an optional injected body.
    pub(crate) fn new(body: Option<Box<dyn PhysicsBody>>, friction: f32) -> Self {
        Self {
            body,
            speed_x: DEFAULT_LINEAR_SPEED,
            speed_y: DEFAULT_LINEAR_SPEED,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            max_linear_speed: None,
            max_rotation_speed: None,
            linear_deceleration: 1.0,
            angular_deceleration: 1.0,
            rotation_enabled: true,
            stopping_movement: false,
            stopping_rotation: false,
            friction,
        }
    }

    // --- Capability access ---

    /// The injected physics body, if any.
    pub fn physics_body(&self) -> Option<&dyn PhysicsBody> {
        self.body.as_deref()
    }

    /// Mutable access to the injected physics body, if any.
    pub fn physics_body_mut(&mut self) -> Option<&mut dyn PhysicsBody> {
        // Coerce the box borrow here; `as_deref_mut` would pin the trait
        // object's lifetime at `'static` inside the `Option`.
        self.body.as_mut().map(|body| &mut **body as &mut dyn PhysicsBody)
    }

    /// Returns the body only when it is present and initialized.
    fn ready_body(&mut self) -> Result<&mut dyn PhysicsBody, EntityError> {
        match self.body.as_deref_mut() {
            Some(body) if body.is_initialized() => Ok(body),
            _ => Err(EntityError::NotInitialized),
        }
    }

    /// `true` once a body is bound and its geometry initialized.
    pub fn is_ready(&self) -> bool {
        matches!(&self.body, Some(body) if body.is_initialized())
    }

    // --- Motion attributes ---

    /// The cruise speed applied on horizontal moves.
    pub fn speed_x(&self) -> f32 {
        self.speed_x
    }

    /// Sets the cruise speed applied on horizontal moves.
    pub fn set_speed_x(&mut self, speed: f32) {
        self.speed_x = speed;
    }

    /// The cruise speed applied on vertical moves.
    pub fn speed_y(&self) -> f32 {
        self.speed_y
    }

    /// Sets the cruise speed applied on vertical moves.
    pub fn set_speed_y(&mut self, speed: f32) {
        self.speed_y = speed;
    }

    /// The impulse magnitude applied on parameterless rotations.
    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }

    /// Sets the impulse magnitude applied on parameterless rotations.
    pub fn set_rotate_speed(&mut self, speed: f32) {
        self.rotate_speed = speed;
    }

    /// The linear-velocity clamp ceiling; `None` means unbounded.
    pub fn max_linear_speed(&self) -> Option<f32> {
        self.max_linear_speed
    }

    /// Sets the linear-velocity clamp ceiling. Survives `initialize` calls
    /// regardless of whether it was configured before or after them.
    pub fn set_max_linear_speed(&mut self, max: Option<f32>) {
        self.max_linear_speed = max;
    }

    /// The angular-velocity clamp ceiling; `None` means unbounded.
    pub fn max_rotation_speed(&self) -> Option<f32> {
        self.max_rotation_speed
    }

    /// Sets the angular-velocity clamp ceiling.
    pub fn set_max_rotation_speed(&mut self, max: Option<f32>) {
        self.max_rotation_speed = max;
    }

    /// The decay rate used while stopping linear movement.
    pub fn linear_deceleration(&self) -> f32 {
        self.linear_deceleration
    }

    /// Sets the decay rate used while stopping linear movement.
    pub fn set_linear_deceleration(&mut self, deceleration: f32) {
        self.linear_deceleration = deceleration;
    }

    /// The decay rate used while stopping rotation.
    pub fn angular_deceleration(&self) -> f32 {
        self.angular_deceleration
    }

    /// Sets the decay rate used while stopping rotation.
    pub fn set_angular_deceleration(&mut self, deceleration: f32) {
        self.angular_deceleration = deceleration;
    }

    /// Whether rotation methods have any effect.
    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// Enables or disables the rotation methods.
    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.rotation_enabled = enabled;
    }

    /// `true` while a gradual movement stop is in progress.
    pub fn is_stopping_movement(&self) -> bool {
        self.stopping_movement
    }

    pub(crate) fn set_stopping_movement(&mut self, stopping: bool) {
        self.stopping_movement = stopping;
    }

    /// `true` while a gradual rotation stop is in progress.
    pub fn is_stopping_rotation(&self) -> bool {
        self.stopping_rotation
    }

    pub(crate) fn set_stopping_rotation(&mut self, stopping: bool) {
        self.stopping_rotation = stopping;
    }

    /// The friction coefficient forwarded at body creation.
    pub fn friction(&self) -> f32 {
        self.friction
    }

    // --- Derived state ---

    /// `true` while the body has any linear or angular velocity.
    ///
    /// Sampled live from the body on every call; a detached or uninitialized
    /// body reads as not moving.
    pub fn is_moving(&self) -> bool {
        match &self.body {
            Some(body) if body.is_initialized() => {
                body.linear_velocity().length() > 0.0 || body.angular_velocity() != 0.0
            }
            _ => false,
        }
    }

    // --- Movement operations ---

    /// Applies `force` at the body's current world position.
    fn apply_linear_force(&mut self, force: Vec2) -> Result<(), EntityError> {
        let body = self.ready_body()?;
        let position = body.position();
        body.apply_force(force, position);
        Ok(())
    }

    /// Moves right at the configured horizontal cruise speed.
    pub fn move_right(&mut self) -> Result<(), EntityError> {
        let speed = self.speed_x;
        self.move_right_at(speed)
    }

    /// Moves right by applying a `(+speed, 0)` force.
    pub fn move_right_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(speed, 0.0))
    }

    /// Moves left at the configured horizontal cruise speed.
    pub fn move_left(&mut self) -> Result<(), EntityError> {
        let speed = self.speed_x;
        self.move_left_at(speed)
    }

    /// Moves left by applying a `(-speed, 0)` force.
    pub fn move_left_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(-speed, 0.0))
    }

    /// Moves up at the configured vertical cruise speed.
    pub fn move_up(&mut self) -> Result<(), EntityError> {
        let speed = self.speed_y;
        self.move_up_at(speed)
    }

    /// Moves up by applying a `(0, -speed)` force.
    pub fn move_up_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(0.0, -speed))
    }

    /// Moves down at the configured vertical cruise speed.
    pub fn move_down(&mut self) -> Result<(), EntityError> {
        let speed = self.speed_y;
        self.move_down_at(speed)
    }

    /// Moves down by applying a `(0, +speed)` force.
    pub fn move_down_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(0.0, speed))
    }

    /// Moves up-right at the configured cruise speeds.
    pub fn move_up_right(&mut self) -> Result<(), EntityError> {
        let force = Vec2::new(self.speed_x, -self.speed_y);
        self.apply_linear_force(force)
    }

    /// Moves up-right placing `speed` on each axis independently.
    pub fn move_up_right_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(speed, -speed))
    }

    /// Moves up-left at the configured cruise speeds.
    pub fn move_up_left(&mut self) -> Result<(), EntityError> {
        let force = Vec2::new(-self.speed_x, -self.speed_y);
        self.apply_linear_force(force)
    }

    /// Moves up-left placing `speed` on each axis independently.
    pub fn move_up_left_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(-speed, -speed))
    }

    /// Moves down-right at the configured cruise speeds.
    pub fn move_down_right(&mut self) -> Result<(), EntityError> {
        let force = Vec2::new(self.speed_x, self.speed_y);
        self.apply_linear_force(force)
    }

    /// Moves down-right placing `speed` on each axis independently.
    pub fn move_down_right_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(speed, speed))
    }

    /// Moves down-left at the configured cruise speeds.
    pub fn move_down_left(&mut self) -> Result<(), EntityError> {
        let force = Vec2::new(-self.speed_x, self.speed_y);
        self.apply_linear_force(force)
    }

    /// Moves down-left placing `speed` on each axis independently.
    pub fn move_down_left_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.apply_linear_force(Vec2::new(-speed, speed))
    }

    /// Applies force using the configured cruise speeds directly.
    pub fn move_at_set_speed(&mut self) -> Result<(), EntityError> {
        let force = Vec2::new(self.speed_x, self.speed_y);
        self.apply_linear_force(force)
    }

    /// Applies a force of magnitude `speed` along the body's current heading.
    ///
    /// Heading convention: 0 degrees = up, clockwise-positive.
    pub fn move_at_set_angle(&mut self, speed: f32) -> Result<(), EntityError> {
        let body = self.ready_body()?;
        let force = Vec2::from_heading_deg(body.angle_deg(), speed);
        let position = body.position();
        body.apply_force(force, position);
        Ok(())
    }

    // --- Rotation operations ---

    /// Rotates clockwise at the configured rotate speed.
    pub fn rotate_cw(&mut self) -> Result<(), EntityError> {
        let speed = self.rotate_speed;
        self.rotate_cw_at(speed)
    }

    /// Rotates clockwise by applying a `+speed` angular impulse.
    pub fn rotate_cw_at(&mut self, speed: f32) -> Result<(), EntityError> {
        let rotation_enabled = self.rotation_enabled;
        let body = self.ready_body()?;
        if rotation_enabled {
            body.apply_angular_impulse(speed);
        }
        Ok(())
    }

    /// Rotates counter-clockwise at the configured rotate speed.
    pub fn rotate_ccw(&mut self) -> Result<(), EntityError> {
        let speed = self.rotate_speed;
        self.rotate_ccw_at(speed)
    }

    /// Rotates counter-clockwise by applying a `-speed` angular impulse.
    pub fn rotate_ccw_at(&mut self, speed: f32) -> Result<(), EntityError> {
        let rotation_enabled = self.rotation_enabled;
        let body = self.ready_body()?;
        if rotation_enabled {
            body.apply_angular_impulse(-speed);
        }
        Ok(())
    }

    // --- Stopping ---

    /// Begins a gradual movement stop.
    ///
    /// The linear velocity is driven toward zero by the stop-movement
    /// behavior across subsequent update ticks, scaled by the linear
    /// deceleration rate; this is a state transition, not an instantaneous
    /// zeroing.
    pub fn stop_movement(&mut self) -> Result<(), EntityError> {
        self.ready_body()?;
        self.stopping_movement = true;
        Ok(())
    }

    /// Begins a gradual rotation stop, symmetric to [`stop_movement`](Self::stop_movement).
    pub fn stop_rotation(&mut self) -> Result<(), EntityError> {
        self.ready_body()?;
        self.stopping_rotation = true;
        Ok(())
    }

    // --- Clamping ---

    /// Clamps the body's velocities to the configured ceilings.
    ///
    /// Runs once per update after behaviors; no-ops for unlimited axes or a
    /// missing body.
    pub(crate) fn apply_speed_limits(&mut self) {
        let max_linear = self.max_linear_speed;
        let max_rotation = self.max_rotation_speed;
        let Ok(body) = self.ready_body() else {
            return;
        };

        if let Some(max) = max_linear {
            let velocity = body.linear_velocity();
            let clamped = velocity.clamp_length(max);
            if clamped != velocity {
                body.set_linear_velocity(clamped);
            }
        }

        if let Some(max) = max_rotation {
            let velocity = body.angular_velocity();
            let clamped = velocity.clamp(-max.abs(), max.abs());
            if clamped != velocity {
                body.set_angular_velocity(clamped);
            }
        }
    }
}

impl std::fmt::Debug for EntityBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityBody")
            .field("has_body", &self.body.is_some())
            .field("speed_x", &self.speed_x)
            .field("speed_y", &self.speed_y)
            .field("rotate_speed", &self.rotate_speed)
            .field("max_linear_speed", &self.max_linear_speed)
            .field("max_rotation_speed", &self.max_rotation_speed)
            .field("rotation_enabled", &self.rotation_enabled)
            .field("stopping_movement", &self.stopping_movement)
            .field("stopping_rotation", &self.stopping_rotation)
            .finish()
    }
}
