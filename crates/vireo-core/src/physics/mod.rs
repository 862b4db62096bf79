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

//! # Physics Abstractions
//!
//! Capability contracts for the physics backend the entity layer is built on.
//! The engine never simulates bodies itself; it consumes an implementation of
//! [`PhysicsBody`] injected at entity construction and a [`PhysicsWorld`]
//! driven by the host's tick loop. Each entity holds exactly one body and
//! bodies are never shared between entities.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Construction parameters an entity forwards when its body is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct BodyDesc {
    /// Surface friction coefficient.
    pub friction: f32,
    /// Mass density of the body.
    pub density: f32,
    /// Bounciness on contact.
    pub restitution: f32,
    /// Whether the body is fixed in place.
    pub is_static: bool,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            friction: 0.2,
            density: 1.0,
            restitution: 0.0,
            is_static: false,
        }
    }
}

/// A simulated rigid body consumed by the entity layer.
///
/// The body is externally owned state: the engine reads position, velocity,
/// and geometry from it every tick and mutates it only through the explicit
/// setter and force-application operations below. Angles are expressed in
/// degrees, 0 = up, clockwise-positive.
pub trait PhysicsBody {
    /// Binds the body's local-space geometry and initial world position.
    ///
    /// Called once by `Entity::initialize`; geometry is fixed afterwards.
    fn init(&mut self, vertices: &[Vec2], position: Vec2);

    /// Returns `true` once `init` has bound geometry to this body.
    fn is_initialized(&self) -> bool;

    /// The body's world position.
    fn position(&self) -> Vec2;
    /// Manually sets the body's world position.
    fn set_position(&mut self, position: Vec2);

    /// The body's linear velocity.
    fn linear_velocity(&self) -> Vec2;
    /// Manually sets the body's linear velocity.
    fn set_linear_velocity(&mut self, velocity: Vec2);

    /// The body's heading in degrees.
    fn angle_deg(&self) -> f32;
    /// Manually sets the body's heading in degrees.
    fn set_angle_deg(&mut self, angle: f32);

    /// The body's angular velocity in degrees per second.
    fn angular_velocity(&self) -> f32;
    /// Manually sets the body's angular velocity.
    fn set_angular_velocity(&mut self, velocity: f32);

    /// The rate at which linear velocity decays while stopping.
    fn linear_deceleration(&self) -> f32;
    /// Sets the linear deceleration rate.
    fn set_linear_deceleration(&mut self, deceleration: f32);

    /// The rate at which angular velocity decays while stopping.
    fn angular_deceleration(&self) -> f32;
    /// Sets the angular deceleration rate.
    fn set_angular_deceleration(&mut self, deceleration: f32);

    /// The body's current world-space vertices. Empty before `init`.
    fn vertices(&self) -> &[Vec2];

    /// Applies a force at a world-space point.
    fn apply_force(&mut self, force: Vec2, world_point: Vec2);

    /// Applies an instantaneous change to the angular velocity.
    fn apply_angular_impulse(&mut self, value: f32);
}

/// The simulation driver owning gravity and the integration step.
///
/// Consumed only at the boundary: the engine's entities never call `step`
/// themselves; the host's tick loop does.
pub trait PhysicsWorld {
    /// The global gravity vector.
    fn gravity(&self) -> Vec2;

    /// Sets the global gravity vector.
    fn set_gravity(&mut self, gravity: Vec2);

    /// Advances the simulation by `dt` seconds.
    fn step(&mut self, dt: f32);
}
