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

//! Composite keyboard behaviors driven through the entity update loop.

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use vireo_core::input::{KeyCode, SharedKeyboard};
use vireo_core::math::Vec2;
use vireo_core::physics::PhysicsBody;
use vireo_core::GameTime;
use vireo_engine::behaviors::{MoveForwardKeyboardBehavior, MovementByKeyboardBehavior};
use vireo_engine::entities::DynamicEntity;
use vireo_engine::testing::{FakePhysicsBody, ScriptedKeyboard};

const TICK: GameTime = GameTime::from_millis(16);

fn scripted() -> (Rc<RefCell<ScriptedKeyboard>>, SharedKeyboard) {
    let keyboard = Rc::new(RefCell::new(ScriptedKeyboard::new()));
    let shared: SharedKeyboard = keyboard.clone();
    (keyboard, shared)
}

fn initialized_entity() -> (DynamicEntity, FakePhysicsBody) {
    let inspector = FakePhysicsBody::new();
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));
    entity.initialize().expect("entity with body and shape should initialize");
    (entity, inspector)
}

/// Queues the held-key set once per poll, since every owned key behavior
/// consumes one scripted frame on each composite update.
fn push_held(keyboard: &Rc<RefCell<ScriptedKeyboard>>, keys: &[KeyCode], polls: usize) {
    let mut keyboard = keyboard.borrow_mut();
    for _ in 0..polls {
        keyboard.push_frame(keys.iter().copied());
    }
}

// MovementByKeyboardBehavior owns four key behaviors, MoveForwardKeyboardBehavior three.
const MOVEMENT_POLLS: usize = 4;
const FORWARD_POLLS: usize = 3;

#[test]
fn held_movement_key_applies_a_directional_force_each_tick() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    entity.add_behavior(Box::new(MovementByKeyboardBehavior::new(shared, 2.5)));

    push_held(&keyboard, &[KeyCode::KeyD], MOVEMENT_POLLS);
    entity.update(TICK);

    assert_eq!(inspector.last_force(), Some(Vec2::new(2.5, 0.0)));
    assert_eq!(inspector.force_count(), 1);

    push_held(&keyboard, &[KeyCode::KeyD], MOVEMENT_POLLS);
    entity.update(TICK);
    assert_eq!(
        inspector.force_count(),
        2,
        "The continuous kind fires on every tick the key is held"
    );
}

#[test]
fn each_direction_key_maps_to_its_sign_convention() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    entity.add_behavior(Box::new(MovementByKeyboardBehavior::new(shared, 2.5)));

    push_held(&keyboard, &[KeyCode::KeyW], MOVEMENT_POLLS);
    entity.update(TICK);
    assert_eq!(inspector.last_force(), Some(Vec2::new(0.0, -2.5)));

    push_held(&keyboard, &[KeyCode::KeyS], MOVEMENT_POLLS);
    entity.update(TICK);
    assert_eq!(inspector.last_force(), Some(Vec2::new(0.0, 2.5)));

    push_held(&keyboard, &[KeyCode::KeyA], MOVEMENT_POLLS);
    entity.update(TICK);
    assert_eq!(inspector.last_force(), Some(Vec2::new(-2.5, 0.0)));
}

#[test]
fn releasing_the_key_stops_force_application() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    entity.add_behavior(Box::new(MovementByKeyboardBehavior::new(shared, 2.5)));

    push_held(&keyboard, &[KeyCode::KeyD], MOVEMENT_POLLS);
    entity.update(TICK);
    assert_eq!(inspector.force_count(), 1);

    push_held(&keyboard, &[], MOVEMENT_POLLS);
    entity.update(TICK);
    assert_eq!(
        inspector.force_count(),
        1,
        "A released key must apply no further force"
    );
}

#[test]
fn thrust_follows_the_current_heading() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    entity.add_behavior(Box::new(MoveForwardKeyboardBehavior::new(shared, 3.0, 1.5)));

    push_held(&keyboard, &[KeyCode::KeyW], FORWARD_POLLS);
    entity.update(TICK);

    let force = inspector.last_force().expect("thrust was applied");
    assert_relative_eq!(force.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(force.y, -3.0, epsilon = 1e-5);
    assert_eq!(
        inspector.last_angular_impulse(),
        None,
        "No rotation key was held"
    );
}

#[test]
fn rotation_keys_apply_signed_angular_impulses() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    entity.add_behavior(Box::new(MoveForwardKeyboardBehavior::new(shared, 3.0, 1.5)));

    push_held(&keyboard, &[KeyCode::KeyD], FORWARD_POLLS);
    entity.update(TICK);
    assert_eq!(inspector.last_angular_impulse(), Some(1.5));

    push_held(&keyboard, &[KeyCode::KeyA], FORWARD_POLLS);
    entity.update(TICK);
    assert_eq!(inspector.last_angular_impulse(), Some(-1.5));
}

#[test]
fn disabling_rotation_makes_the_rotation_keys_inert() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    entity.add_behavior(Box::new(MoveForwardKeyboardBehavior::new(shared, 3.0, 1.5)));
    entity.body_mut().set_rotation_enabled(false);

    push_held(&keyboard, &[KeyCode::KeyD], FORWARD_POLLS);
    entity.update(TICK);

    assert_eq!(inspector.last_angular_impulse(), None);
    assert_eq!(inspector.angular_velocity(), 0.0);
}

#[test]
fn remapped_movement_key_drives_the_rebound_direction() {
    let (keyboard, shared) = scripted();
    let (mut entity, inspector) = initialized_entity();
    let mut movement = MovementByKeyboardBehavior::new(shared, 2.5);
    movement.set_move_right_key(KeyCode::ArrowRight);
    entity.add_behavior(Box::new(movement));

    push_held(&keyboard, &[KeyCode::ArrowRight], MOVEMENT_POLLS);
    entity.update(TICK);

    assert_eq!(inspector.last_force(), Some(Vec2::new(2.5, 0.0)));
}
