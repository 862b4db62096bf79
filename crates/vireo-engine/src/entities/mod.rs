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

//! # Entities
//!
//! The entity hierarchy: [`Entity`] owns a vertex shape, an optional
//! texture, and an ordered behavior list; [`DynamicEntity`] layers
//! physics-driven movement on top; [`StaticEntity`] only runs behaviors.
//!
//! Entities receive their physics-body capability through constructor
//! injection and bind geometry to it exactly once in `initialize`. Settings
//! configured before initialization (speed limits, deceleration rates) are
//! cached in the motion state and survive it.

mod body;
mod dynamic_entity;
mod entity;
mod static_entity;

pub use self::body::{EntityBody, DEFAULT_LINEAR_SPEED, DEFAULT_ROTATE_SPEED};
pub use self::dynamic_entity::DynamicEntity;
pub use self::entity::Entity;
pub use self::static_entity::StaticEntity;

pub(crate) mod shape {
    use vireo_core::math::Vec2;

    /// The fallback shape used when a constructor takes no vertices: an
    /// axis-aligned unit square centered on the origin.
    pub(crate) fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ]
    }
}
