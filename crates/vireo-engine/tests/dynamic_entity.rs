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

//! Dynamic-entity movement, rotation, clamping, and stop semantics.

use approx::assert_relative_eq;
use vireo_core::math::Vec2;
use vireo_core::physics::{BodyDesc, PhysicsBody};
use vireo_core::GameTime;
use vireo_engine::entities::DynamicEntity;
use vireo_engine::testing::{FakePhysicsBody, ForceMode};
use vireo_engine::EntityError;

const TICK: GameTime = GameTime::from_millis(16);

fn triangle() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ]
}

fn initialized_entity() -> (DynamicEntity, FakePhysicsBody) {
    let inspector = FakePhysicsBody::new();
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));
    entity.initialize().expect("entity with body and shape should initialize");
    (entity, inspector)
}

#[test]
fn every_constructor_wires_exactly_six_builtin_behaviors() {
    let entities = [
        DynamicEntity::new(Box::new(FakePhysicsBody::new())),
        DynamicEntity::with_desc(Box::new(FakePhysicsBody::new()), BodyDesc::default()),
        DynamicEntity::from_vertices(
            Box::new(FakePhysicsBody::new()),
            triangle(),
            Vec2::ZERO,
        ),
        DynamicEntity::from_vertices_with_desc(
            Box::new(FakePhysicsBody::new()),
            BodyDesc::default(),
            triangle(),
            Vec2::ZERO,
        ),
        DynamicEntity::from_texture(
            Box::new(FakePhysicsBody::new()),
            vireo_core::content::Texture {
                name: String::from("ship"),
                width: 16,
                height: 16,
            },
            triangle(),
            Vec2::ZERO,
        ),
        DynamicEntity::default(),
    ];

    for entity in &entities {
        assert_eq!(
            entity.behaviors().len(),
            6,
            "every construction path must produce the fixed built-in set"
        );
    }
}

#[test]
fn movement_on_a_detached_entity_fails_before_any_state_change() {
    let mut entity = DynamicEntity::default();

    assert_eq!(entity.move_right(), Err(EntityError::NotInitialized));
    assert_eq!(entity.move_up_left_at(3.0), Err(EntityError::NotInitialized));
    assert_eq!(entity.move_at_set_angle(1.0), Err(EntityError::NotInitialized));
    assert_eq!(entity.rotate_cw(), Err(EntityError::NotInitialized));
    assert_eq!(entity.stop_movement(), Err(EntityError::NotInitialized));
    assert!(!entity.is_moving(), "a detached entity is never moving");
}

#[test]
fn movement_before_initialize_fails_even_with_a_body_bound() {
    let inspector = FakePhysicsBody::new();
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));

    assert_eq!(entity.move_down(), Err(EntityError::NotInitialized));
    assert_eq!(
        inspector.force_count(),
        0,
        "the failed move must not reach the body"
    );
}

#[test]
fn directional_moves_decompose_into_signed_axis_forces() {
    let (mut entity, inspector) = initialized_entity();

    entity.move_right_at(123.456).expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(123.456, 0.0)));

    entity.move_left_at(2.0).expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(-2.0, 0.0)));

    entity.move_up_at(2.0).expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(0.0, -2.0)));

    entity.move_down_at(2.0).expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(0.0, 2.0)));
}

#[test]
fn default_move_uses_the_quarter_unit_cruise_speed() {
    let (mut entity, inspector) = initialized_entity();

    entity.move_right().expect("initialized move");
    assert_eq!(
        inspector.last_force(),
        Some(Vec2::new(0.25, 0.0)),
        "parameterless moves use the 0.25 default speed"
    );
}

#[test]
fn diagonal_moves_place_the_magnitude_on_each_axis_unnormalized() {
    let (mut entity, inspector) = initialized_entity();

    entity.move_up_right_at(4.0).expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(4.0, -4.0)));

    entity.move_down_left_at(4.0).expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(-4.0, 4.0)));
}

#[test]
fn forces_are_applied_at_the_body_position() {
    let (mut entity, mut inspector) = initialized_entity();
    inspector.set_position(Vec2::new(10.0, -3.0));

    entity.move_right().expect("initialized move");
    assert_eq!(inspector.last_force_point(), Some(Vec2::new(10.0, -3.0)));
}

#[test]
fn move_at_set_angle_follows_the_heading_convention() {
    let (mut entity, mut inspector) = initialized_entity();

    // 0 degrees = up.
    entity.move_at_set_angle(2.0).expect("initialized move");
    let force = inspector.last_force().expect("a force was applied");
    assert_relative_eq!(force.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(force.y, -2.0, epsilon = 1e-5);

    // 90 degrees clockwise = right.
    inspector.set_angle_deg(90.0);
    entity.move_at_set_angle(2.0).expect("initialized move");
    let force = inspector.last_force().expect("a force was applied");
    assert_relative_eq!(force.x, 2.0, epsilon = 1e-5);
    assert_relative_eq!(force.y, 0.0, epsilon = 1e-5);
}

#[test]
fn move_at_set_speed_uses_both_configured_cruise_speeds() {
    let (mut entity, inspector) = initialized_entity();
    entity.body_mut().set_speed_x(1.5);
    entity.body_mut().set_speed_y(2.5);

    entity.move_at_set_speed().expect("initialized move");
    assert_eq!(inspector.last_force(), Some(Vec2::new(1.5, 2.5)));
}

#[test]
fn physics_body_is_reachable_through_the_motion_state() {
    let (mut entity, inspector) = initialized_entity();

    let body = entity
        .body_mut()
        .physics_body_mut()
        .expect("a body is bound");
    body.set_linear_velocity(Vec2::new(4.0, 0.0));

    assert_eq!(inspector.linear_velocity(), Vec2::new(4.0, 0.0));
    assert!(entity.is_moving());
    assert!(entity.body().physics_body().is_some());
}

#[test]
fn rotation_applies_signed_angular_impulses() {
    let (mut entity, inspector) = initialized_entity();

    entity.rotate_cw().expect("initialized rotate");
    assert_eq!(
        inspector.last_angular_impulse(),
        Some(1.0),
        "parameterless clockwise rotation uses the default magnitude"
    );

    entity.rotate_cw_at(123.0).expect("initialized rotate");
    assert_eq!(inspector.last_angular_impulse(), Some(123.0));

    entity.rotate_ccw().expect("initialized rotate");
    assert_eq!(inspector.last_angular_impulse(), Some(-1.0));
}

#[test]
fn update_clamps_linear_velocity_to_the_configured_ceiling() {
    let (mut entity, mut inspector) = initialized_entity();
    entity.body_mut().set_max_linear_speed(Some(20.0));

    inspector.set_linear_velocity(Vec2::new(30.0, 40.0));
    entity.update(TICK);

    assert_relative_eq!(
        inspector.linear_velocity().length(),
        20.0,
        epsilon = 1e-4
    );
}

#[test]
fn limits_configured_before_initialize_are_honored_after_it() {
    let inspector = FakePhysicsBody::new();
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));
    entity.body_mut().set_max_linear_speed(Some(20.0));
    entity.body_mut().set_max_rotation_speed(Some(5.0));

    entity.initialize().expect("should initialize");
    entity.initialize().expect("repeat initialize is a no-op");

    let mut handle = inspector.clone();
    handle.set_linear_velocity(Vec2::new(100.0, 0.0));
    handle.set_angular_velocity(-9.0);
    entity.update(TICK);

    assert_relative_eq!(inspector.linear_velocity().x, 20.0, epsilon = 1e-4);
    assert_relative_eq!(inspector.angular_velocity(), -5.0, epsilon = 1e-4);
}

#[test]
fn stop_movement_zeroes_velocity_and_clears_the_flag() {
    let inspector = FakePhysicsBody::with_mode(ForceMode::ZeroVelocity);
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));
    entity.initialize().expect("should initialize");

    let mut handle = inspector.clone();
    handle.set_linear_velocity(Vec2::new(5.0, -3.0));
    assert!(entity.is_moving());

    entity.stop_movement().expect("initialized stop");
    assert!(entity.body().is_stopping_movement());

    entity.update(TICK);
    assert_eq!(inspector.linear_velocity(), Vec2::ZERO);
    assert!(
        !entity.body().is_stopping_movement(),
        "reaching zero velocity ends the stop"
    );
    assert!(!entity.is_moving());
}

#[test]
fn stop_movement_decays_gradually_under_accumulating_forces() {
    let inspector = FakePhysicsBody::with_mode(ForceMode::Accumulate);
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));
    entity.initialize().expect("should initialize");
    entity.body_mut().set_linear_deceleration(1.0);

    let mut handle = inspector.clone();
    handle.set_linear_velocity(Vec2::new(8.0, 0.0));
    entity.stop_movement().expect("initialized stop");

    // decay per 500ms tick = 1.0 * 500 / 1000 = 0.5
    entity.update(GameTime::from_millis(500));
    assert_relative_eq!(inspector.linear_velocity().x, 4.0, epsilon = 1e-4);
    assert!(
        entity.body().is_stopping_movement(),
        "velocity is still above zero, the stop continues"
    );

    entity.update(GameTime::from_millis(500));
    assert_relative_eq!(inspector.linear_velocity().x, 2.0, epsilon = 1e-4);
}

#[test]
fn is_moving_samples_the_body_live() {
    let (entity, mut inspector) = initialized_entity();
    assert!(!entity.is_moving());

    inspector.set_angular_velocity(0.5);
    assert!(entity.is_moving(), "angular motion alone counts as moving");

    inspector.set_angular_velocity(0.0);
    assert!(!entity.is_moving());
}
