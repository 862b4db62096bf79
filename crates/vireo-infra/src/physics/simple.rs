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

//! A minimal Euler-integrating physics backend.
//!
//! Good enough for headless demos and tests that need motion over time:
//! forces fold straight into velocity, the world integrates velocity into
//! position once per step, and there is no collision response.

use std::cell::RefCell;
use std::rc::Rc;

use vireo_core::math::Vec2;
use vireo_core::physics::{BodyDesc, PhysicsBody, PhysicsWorld};

#[derive(Debug)]
struct SimpleBodyState {
    initialized: bool,
    is_static: bool,
    position: Vec2,
    linear_velocity: Vec2,
    angle_deg: f32,
    angular_velocity: f32,
    linear_deceleration: f32,
    angular_deceleration: f32,
}

/// A [`PhysicsBody`] integrated by [`SimplePhysicsWorld`].
///
/// Create bodies through [`SimplePhysicsWorld::create_body`] so the world
/// holds a handle for integration; the returned body is boxed into an
/// entity. Vertices are stored in local space and never transformed.
#[derive(Debug)]
pub struct SimplePhysicsBody {
    state: Rc<RefCell<SimpleBodyState>>,
    vertices: Vec<Vec2>,
}

impl PhysicsBody for SimplePhysicsBody {
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

    fn set_angle_deg(&mut self, angle: f32) {
        self.state.borrow_mut().angle_deg = angle;
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

    fn apply_force(&mut self, force: Vec2, _world_point: Vec2) {
        let mut state = self.state.borrow_mut();
        if state.is_static {
            return;
        }
        state.linear_velocity += force;
    }

    fn apply_angular_impulse(&mut self, value: f32) {
        let mut state = self.state.borrow_mut();
        if state.is_static {
            return;
        }
        state.angular_velocity += value;
    }
}

/// A [`PhysicsWorld`] that Euler-integrates the bodies it created.
///
/// Static bodies never move; dynamic bodies accumulate gravity, then
/// integrate velocity into position and angular velocity into heading.
pub struct SimplePhysicsWorld {
    gravity: Vec2,
    bodies: Vec<Rc<RefCell<SimpleBodyState>>>,
}

impl SimplePhysicsWorld {
    /// Creates a world with no gravity and no bodies.
    pub fn new() -> Self {
        Self {
            gravity: Vec2::ZERO,
            bodies: Vec::new(),
        }
    }

    /// Creates a body registered for integration by this world.
    pub fn create_body(&mut self, desc: BodyDesc) -> SimplePhysicsBody {
        let state = Rc::new(RefCell::new(SimpleBodyState {
            initialized: false,
            is_static: desc.is_static,
            position: Vec2::ZERO,
            linear_velocity: Vec2::ZERO,
            angle_deg: 0.0,
            angular_velocity: 0.0,
            linear_deceleration: 0.0,
            angular_deceleration: 0.0,
        }));
        self.bodies.push(state.clone());
        SimplePhysicsBody {
            state,
            vertices: Vec::new(),
        }
    }

    /// The number of bodies this world integrates.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Default for SimplePhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld for SimplePhysicsWorld {
    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn step(&mut self, dt: f32) {
        for body in &self.bodies {
            let mut state = body.borrow_mut();
            if !state.initialized || state.is_static {
                continue;
            }
            let gravity = self.gravity;
            state.linear_velocity += gravity * dt;
            let velocity = state.linear_velocity;
            state.position += velocity * dt;
            state.angle_deg += state.angular_velocity * dt;
        }
    }
}

impl std::fmt::Debug for SimplePhysicsWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplePhysicsWorld")
            .field("gravity", &self.gravity)
            .field("bodies", &self.bodies.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ]
    }

    #[test]
    fn step_integrates_velocity_into_position() {
        let mut world = SimplePhysicsWorld::new();
        let mut body = world.create_body(BodyDesc::default());
        body.init(&unit_square(), Vec2::ZERO);

        body.apply_force(Vec2::new(2.0, 0.0), Vec2::ZERO);
        world.step(0.5);

        assert_eq!(body.position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn gravity_accelerates_dynamic_bodies_only() {
        let mut world = SimplePhysicsWorld::new();
        world.set_gravity(Vec2::new(0.0, 10.0));

        let mut falling = world.create_body(BodyDesc::default());
        falling.init(&unit_square(), Vec2::ZERO);
        let mut anchored = world.create_body(BodyDesc {
            is_static: true,
            ..BodyDesc::default()
        });
        anchored.init(&unit_square(), Vec2::new(5.0, 5.0));

        world.step(1.0);

        assert_eq!(falling.linear_velocity(), Vec2::new(0.0, 10.0));
        assert_eq!(anchored.position(), Vec2::new(5.0, 5.0));
        assert_eq!(anchored.linear_velocity(), Vec2::ZERO);
    }

    #[test]
    fn uninitialized_bodies_are_skipped() {
        let mut world = SimplePhysicsWorld::new();
        let body = world.create_body(BodyDesc::default());

        world.step(1.0);
        assert_eq!(body.position(), Vec2::ZERO);
        assert!(!body.is_initialized());
    }

    #[test]
    fn static_bodies_reject_forces() {
        let mut world = SimplePhysicsWorld::new();
        let mut body = world.create_body(BodyDesc {
            is_static: true,
            ..BodyDesc::default()
        });
        body.init(&unit_square(), Vec2::ZERO);

        body.apply_force(Vec2::new(3.0, 0.0), Vec2::ZERO);
        body.apply_angular_impulse(2.0);

        assert_eq!(body.linear_velocity(), Vec2::ZERO);
        assert_eq!(body.angular_velocity(), 0.0);
    }
}
