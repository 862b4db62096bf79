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

//! A physics body double that records every applied force and impulse.

use std::cell::RefCell;
use std::rc::Rc;

use vireo_core::math::Vec2;
use vireo_core::physics::PhysicsBody;

/// How [`FakePhysicsBody::apply_force`] folds a force into the stored
/// linear velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceMode {
    /// The force becomes the velocity verbatim.
    #[default]
    SetVelocity,
    /// The force adds onto the current velocity.
    Accumulate,
    /// Any force zeroes the velocity, so gradual stops complete in one
    /// tick.
    ZeroVelocity,
}

#[derive(Debug, Default)]
struct FakeBodyState {
    initialized: bool,
    mode: ForceMode,
    position: Vec2,
    linear_velocity: Vec2,
    angle_deg: f32,
    angular_velocity: f32,
    linear_deceleration: f32,
    angular_deceleration: f32,
    last_force: Option<Vec2>,
    last_force_point: Option<Vec2>,
    last_angular_impulse: Option<f32>,
    force_count: u32,
}

/// A deterministic [`PhysicsBody`] for tests.
///
/// Cloning produces another handle to the same underlying state, so a test
/// can box one clone into an entity and keep the other to inspect the
/// forces the entity applied. Vertices are per-handle; the handle that was
/// initialized holds them.
#[derive(Debug, Clone, Default)]
pub struct FakePhysicsBody {
    state: Rc<RefCell<FakeBodyState>>,
    vertices: Vec<Vec2>,
}

impl FakePhysicsBody {
    /// Creates an uninitialized body in [`ForceMode::SetVelocity`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an uninitialized body with an explicit force mode.
    pub fn with_mode(mode: ForceMode) -> Self {
        let body = Self::default();
        body.state.borrow_mut().mode = mode;
        body
    }

    /// Changes how subsequent forces fold into the velocity.
    pub fn set_mode(&self, mode: ForceMode) {
        self.state.borrow_mut().mode = mode;
    }

    /// The most recent force passed to `apply_force`, if any.
    pub fn last_force(&self) -> Option<Vec2> {
        self.state.borrow().last_force
    }

    /// The world point the most recent force was applied at.
    pub fn last_force_point(&self) -> Option<Vec2> {
        self.state.borrow().last_force_point
    }

    /// The most recent value passed to `apply_angular_impulse`, if any.
    pub fn last_angular_impulse(&self) -> Option<f32> {
        self.state.borrow().last_angular_impulse
    }

    /// How many forces have been applied in total.
    pub fn force_count(&self) -> u32 {
        self.state.borrow().force_count
    }
}

impl PhysicsBody for FakePhysicsBody {
    fn init(&mut self, vertices: &[Vec2], position: Vec2) {
        self.vertices = vertices.to_vec();
        let mut state = self.state.borrow_mut();
        state.position = position;
        state.initialized = true;
    }

    fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    fn position(&self) -> Vec2 {
        self.state.borrow().position
    }

    fn set_position(&mut self, position: Vec2) {
        self.state.borrow_mut().position = position;
    }

    fn linear_velocity(&self) -> Vec2 {
        self.state.borrow().linear_velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.state.borrow_mut().linear_velocity = velocity;
    }

    fn angle_deg(&self) -> f32 {
        self.state.borrow().angle_deg
    }

    fn set_angle_deg(&mut self, angle_deg: f32) {
        self.state.borrow_mut().angle_deg = angle_deg;
    }

    fn angular_velocity(&self) -> f32 {
        self.state.borrow().angular_velocity
    }

    fn set_angular_velocity(&mut self, velocity: f32) {
        self.state.borrow_mut().angular_velocity = velocity;
    }

    fn linear_deceleration(&self) -> f32 {
        self.state.borrow().linear_deceleration
    }

    fn set_linear_deceleration(&mut self, deceleration: f32) {
        self.state.borrow_mut().linear_deceleration = deceleration;
    }

    fn angular_deceleration(&self) -> f32 {
        self.state.borrow().angular_deceleration
    }

    fn set_angular_deceleration(&mut self, deceleration: f32) {
        self.state.borrow_mut().angular_deceleration = deceleration;
    }

    fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn apply_force(&mut self, force: Vec2, world_point: Vec2) {
        let mut state = self.state.borrow_mut();
        state.last_force = Some(force);
        state.last_force_point = Some(world_point);
        state.force_count += 1;
        match state.mode {
            ForceMode::SetVelocity => state.linear_velocity = force,
            ForceMode::Accumulate => state.linear_velocity += force,
            ForceMode::ZeroVelocity => state.linear_velocity = Vec2::ZERO,
        }
    }

    fn apply_angular_impulse(&mut self, value: f32) {
        let mut state = self.state.borrow_mut();
        state.last_angular_impulse = Some(value);
        state.angular_velocity += value;
    }
}
