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

//! The physics-driven entity with directional movement and rotation.

use std::ops::{Deref, DerefMut};

use vireo_core::content::Texture;
use vireo_core::math::Vec2;
use vireo_core::physics::{BodyDesc, PhysicsBody};
use vireo_core::GameTime;

use super::{shape, Entity};
use crate::behaviors::built_in_behaviors;
use crate::errors::EntityError;

/// An entity whose motion is expressed through its physics body.
///
/// Every constructor wires the same six built-in behaviors (stop-movement,
/// stop-rotation, the two speed clamps, and the two velocity snaps); the
/// fixed count is part of the contract. Movement and rotation methods apply
/// forces and impulses to the injected body and fail with
/// [`EntityError::NotInitialized`] while it is absent or unbound.
///
/// Derefs to [`Entity`] for the shared shape/visibility/behavior surface.
pub struct DynamicEntity {
    entity: Entity,
}

impl DynamicEntity {
    fn new_internal(
        body: Option<Box<dyn PhysicsBody>>,
        texture: Option<Texture>,
        desc: BodyDesc,
        vertices: Vec<Vec2>,
        position: Vec2,
    ) -> Self {
        let mut entity = Entity::new(body, vertices, position, desc.friction);
        if let Some(texture) = texture {
            entity.set_texture(texture);
        }
        for behavior in built_in_behaviors() {
            entity.add_behavior(behavior);
        }
        Self { entity }
    }

    /// Creates an entity with a unit-square shape at the origin.
    pub fn new(body: Box<dyn PhysicsBody>) -> Self {
        Self::new_internal(
            Some(body),
            None,
            BodyDesc::default(),
            shape::unit_square(),
            Vec2::ZERO,
        )
    }

    /// Creates an entity with a unit-square shape and explicit body
    /// construction parameters.
    pub fn with_desc(body: Box<dyn PhysicsBody>, desc: BodyDesc) -> Self {
        Self::new_internal(Some(body), None, desc, shape::unit_square(), Vec2::ZERO)
    }

    /// Creates an entity from an explicit shape and position.
    pub fn from_vertices(body: Box<dyn PhysicsBody>, vertices: Vec<Vec2>, position: Vec2) -> Self {
        Self::new_internal(Some(body), None, BodyDesc::default(), vertices, position)
    }

    /// Creates an entity from an explicit shape, position, and body
    /// construction parameters.
    pub fn from_vertices_with_desc(
        body: Box<dyn PhysicsBody>,
        desc: BodyDesc,
        vertices: Vec<Vec2>,
        position: Vec2,
    ) -> Self {
        Self::new_internal(Some(body), None, desc, vertices, position)
    }

    /// Creates a textured entity from an explicit shape and position.
    pub fn from_texture(
        body: Box<dyn PhysicsBody>,
        texture: Texture,
        vertices: Vec<Vec2>,
        position: Vec2,
    ) -> Self {
        Self::new_internal(Some(body), Some(texture), BodyDesc::default(), vertices, position)
    }

    /// Creates a textured entity with explicit body construction
    /// parameters.
    pub fn from_texture_with_desc(
        body: Box<dyn PhysicsBody>,
        texture: Texture,
        desc: BodyDesc,
        vertices: Vec<Vec2>,
        position: Vec2,
    ) -> Self {
        Self::new_internal(Some(body), Some(texture), desc, vertices, position)
    }

    /// Runs behaviors, then clamps the body's velocities to the configured
    /// ceilings.
    pub fn update(&mut self, time: GameTime) {
        self.entity.update(time);
        self.entity.body_mut().apply_speed_limits();
    }

    // --- Movement (delegated to the motion state) ---

    /// Moves right at the configured horizontal cruise speed.
    pub fn move_right(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_right()
    }

    /// Moves right by applying a `(+speed, 0)` force.
    pub fn move_right_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_right_at(speed)
    }

    /// Moves left at the configured horizontal cruise speed.
    pub fn move_left(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_left()
    }

    /// Moves left by applying a `(-speed, 0)` force.
    pub fn move_left_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_left_at(speed)
    }

    /// Moves up at the configured vertical cruise speed.
    pub fn move_up(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_up()
    }

    /// Moves up by applying a `(0, -speed)` force.
    pub fn move_up_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_up_at(speed)
    }

    /// Moves down at the configured vertical cruise speed.
    pub fn move_down(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_down()
    }

    /// Moves down by applying a `(0, +speed)` force.
    pub fn move_down_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_down_at(speed)
    }

    /// Moves up-right at the configured cruise speeds.
    pub fn move_up_right(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_up_right()
    }

    /// Moves up-right placing `speed` on each axis independently.
    pub fn move_up_right_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_up_right_at(speed)
    }

    /// Moves up-left at the configured cruise speeds.
    pub fn move_up_left(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_up_left()
    }

    /// Moves up-left placing `speed` on each axis independently.
    pub fn move_up_left_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_up_left_at(speed)
    }

    /// Moves down-right at the configured cruise speeds.
    pub fn move_down_right(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_down_right()
    }

    /// Moves down-right placing `speed` on each axis independently.
    pub fn move_down_right_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_down_right_at(speed)
    }

    /// Moves down-left at the configured cruise speeds.
    pub fn move_down_left(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_down_left()
    }

    /// Moves down-left placing `speed` on each axis independently.
    pub fn move_down_left_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_down_left_at(speed)
    }

    /// Applies force using the configured cruise speeds directly.
    pub fn move_at_set_speed(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().move_at_set_speed()
    }

    /// Applies a force of magnitude `speed` along the current heading.
    pub fn move_at_set_angle(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().move_at_set_angle(speed)
    }

    // --- Rotation ---

    /// Rotates clockwise at the configured rotate speed.
    pub fn rotate_cw(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().rotate_cw()
    }

    /// Rotates clockwise by applying a `+speed` angular impulse.
    pub fn rotate_cw_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().rotate_cw_at(speed)
    }

    /// Rotates counter-clockwise at the configured rotate speed.
    pub fn rotate_ccw(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().rotate_ccw()
    }

    /// Rotates counter-clockwise by applying a `-speed` angular impulse.
    pub fn rotate_ccw_at(&mut self, speed: f32) -> Result<(), EntityError> {
        self.entity.body_mut().rotate_ccw_at(speed)
    }

    // --- Stopping and derived state ---

    /// Begins a gradual movement stop handled across subsequent updates.
    pub fn stop_movement(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().stop_movement()
    }

    /// Begins a gradual rotation stop handled across subsequent updates.
    pub fn stop_rotation(&mut self) -> Result<(), EntityError> {
        self.entity.body_mut().stop_rotation()
    }

    /// `true` while the body has any linear or angular velocity, sampled
    /// live from the body.
    pub fn is_moving(&self) -> bool {
        self.entity.body().is_moving()
    }
}

impl Default for DynamicEntity {
    /// Creates a detached entity with no physics body bound.
    ///
    /// All movement and rotation methods fail with
    /// [`EntityError::NotInitialized`] until a real constructor is used;
    /// the six built-in behaviors are still wired.
    fn default() -> Self {
        Self::new_internal(
            None,
            None,
            BodyDesc::default(),
            shape::unit_square(),
            Vec2::ZERO,
        )
    }
}

impl Deref for DynamicEntity {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.entity
    }
}

impl DerefMut for DynamicEntity {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entity
    }
}

impl std::fmt::Debug for DynamicEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicEntity")
            .field("entity", &self.entity)
            .finish()
    }
}
