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

//! The non-moving entity: shape, texture, and behaviors without motion.

use std::ops::{Deref, DerefMut};

use vireo_core::content::Texture;
use vireo_core::math::Vec2;
use vireo_core::physics::{BodyDesc, PhysicsBody};
use vireo_core::GameTime;

use super::{shape, Entity};

/// An entity pinned in place: scenery, pickups, triggers.
///
/// Carries the full [`Entity`] surface (shape, texture, visibility,
/// behaviors) but exposes no movement or rotation methods and wires no
/// built-in motion behaviors. The injected body, when present, is created
/// with `is_static` forced on so the physics backend never integrates it.
pub struct StaticEntity {
    entity: Entity,
}

impl StaticEntity {
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
        Self { entity }
    }

    /// Creates a static entity from an explicit shape and position.
    pub fn new(body: Box<dyn PhysicsBody>, vertices: Vec<Vec2>, position: Vec2) -> Self {
        let desc = BodyDesc {
            is_static: true,
            ..BodyDesc::default()
        };
        Self::new_internal(Some(body), None, desc, vertices, position)
    }

    /// Creates a textured static entity from an explicit shape and position.
    pub fn from_texture(
        body: Box<dyn PhysicsBody>,
        texture: Texture,
        vertices: Vec<Vec2>,
        position: Vec2,
    ) -> Self {
        let desc = BodyDesc {
            is_static: true,
            ..BodyDesc::default()
        };
        Self::new_internal(Some(body), Some(texture), desc, vertices, position)
    }

    /// Runs the entity's behaviors for this tick.
    pub fn update(&mut self, time: GameTime) {
        self.entity.update(time);
    }
}

impl Default for StaticEntity {
    /// Creates a detached static entity with a unit-square shape and no
    /// physics body bound.
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

impl Deref for StaticEntity {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.entity
    }
}

impl DerefMut for StaticEntity {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entity
    }
}

impl std::fmt::Debug for StaticEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticEntity")
            .field("entity", &self.entity)
            .finish()
    }
}
