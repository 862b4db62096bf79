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

//! Entity lifecycle: initialization, content, visibility, bounds, rendering.

use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;
use vireo_core::math::Vec2;
use vireo_core::physics::PhysicsBody;
use vireo_core::GameTime;
use vireo_engine::entities::{DynamicEntity, StaticEntity};
use vireo_engine::testing::{DrawCall, FakePhysicsBody, MemoryContentLoader, RecordingRenderer};
use vireo_engine::EntityError;

fn square() -> Vec<Vec2> {
    vec![
        Vec2::new(-2.0, -1.0),
        Vec2::new(2.0, -1.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(-2.0, 1.0),
    ]
}

#[test]
fn initialize_requires_vertices() {
    let mut entity = DynamicEntity::from_vertices(
        Box::new(FakePhysicsBody::new()),
        Vec::new(),
        Vec2::ZERO,
    );
    assert_eq!(entity.initialize(), Err(EntityError::MissingVertices));
}

#[test]
fn initialize_requires_a_body() {
    let mut entity = DynamicEntity::default();
    assert_eq!(entity.initialize(), Err(EntityError::NotInitialized));
    assert!(!entity.is_initialized());
}

#[test]
fn vertices_are_frozen_after_initialization() {
    let mut entity =
        DynamicEntity::from_vertices(Box::new(FakePhysicsBody::new()), square(), Vec2::ZERO);

    entity.set_vertices(square()).expect("mutable before initialize");
    entity.initialize().expect("should initialize");
    assert_eq!(
        entity.set_vertices(Vec::new()),
        Err(EntityError::AlreadyInitialized)
    );
}

#[test]
fn bounds_derive_from_the_body_vertices() {
    let mut entity =
        DynamicEntity::from_vertices(Box::new(FakePhysicsBody::new()), square(), Vec2::ZERO);
    entity.initialize().expect("should initialize");

    assert_relative_eq!(entity.bounds_width(), 4.0);
    assert_relative_eq!(entity.bounds_height(), 2.0);
    assert_relative_eq!(entity.bounds_half_width(), 2.0);
    assert_relative_eq!(entity.bounds_half_height(), 1.0);
}

#[test]
fn bounds_are_zero_sized_without_a_body() {
    let entity = DynamicEntity::default();
    assert_relative_eq!(entity.bounds_width(), 0.0);
    assert_relative_eq!(entity.bounds_height(), 0.0);
}

#[test]
fn position_routes_to_the_body_once_initialized() {
    let inspector = FakePhysicsBody::new();
    let mut entity = DynamicEntity::from_vertices(
        Box::new(inspector.clone()),
        square(),
        Vec2::new(3.0, 4.0),
    );
    assert_eq!(
        entity.position(),
        Vec2::new(3.0, 4.0),
        "pre-initialize reads come from the construction cache"
    );

    entity.initialize().expect("should initialize");
    assert_eq!(inspector.position(), Vec2::new(3.0, 4.0));

    entity.set_position(Vec2::new(-1.0, 0.5));
    assert_eq!(inspector.position(), Vec2::new(-1.0, 0.5));
    assert_eq!(entity.position(), Vec2::new(-1.0, 0.5));
}

#[test]
fn visibility_events_are_edge_triggered() {
    let mut entity = DynamicEntity::default();
    let shows = Rc::new(Cell::new(0u32));
    let hides = Rc::new(Cell::new(0u32));
    let sink = shows.clone();
    entity.on_show().subscribe(move |_| sink.set(sink.get() + 1));
    let sink = hides.clone();
    entity.on_hide().subscribe(move |_| sink.set(sink.get() + 1));

    entity.set_visible(true);
    assert_eq!(shows.get(), 0, "writing the current value raises nothing");

    entity.set_visible(false);
    entity.set_visible(false);
    assert_eq!(hides.get(), 1, "only the transition raises the event");

    entity.set_visible(true);
    assert_eq!(shows.get(), 1);
}

#[test]
fn content_loads_by_name_and_unloads_cleanly() {
    let mut loader = MemoryContentLoader::new();
    loader.insert("ship", 64, 32);

    let mut entity = DynamicEntity::default();
    entity.set_texture_name("ship");
    assert!(!entity.content_loaded());

    entity.load_content(&mut loader).expect("registered texture");
    entity.load_content(&mut loader).expect("repeat load is safe");
    assert!(entity.content_loaded());
    assert_eq!(entity.texture().map(|texture| texture.width), Some(64));

    entity.unload_content(&mut loader);
    entity.unload_content(&mut loader);
    assert!(!entity.content_loaded());
    assert!(entity.texture().is_none());
}

#[test]
fn missing_content_surfaces_the_loader_error() {
    let mut loader = MemoryContentLoader::new();
    let mut entity = DynamicEntity::default();
    entity.set_texture_name("absent");

    assert!(entity.load_content(&mut loader).is_err());
    assert!(
        !entity.content_loaded(),
        "a failed load must not mark content as loaded"
    );
}

#[test]
fn render_draws_texture_and_debug_outline() {
    let mut loader = MemoryContentLoader::new();
    loader.insert("ship", 16, 16);

    let mut entity = DynamicEntity::from_vertices(
        Box::new(FakePhysicsBody::new()),
        square(),
        Vec2::new(1.0, 2.0),
    );
    entity.set_texture_name("ship");
    entity.initialize().expect("should initialize");
    entity.load_content(&mut loader).expect("registered texture");
    entity.set_debug_draw(true);

    let mut renderer = RecordingRenderer::new();
    entity.render(&mut renderer);

    assert_eq!(renderer.calls().len(), 2);
    assert!(matches!(
        &renderer.calls()[0],
        DrawCall::Texture { name, position, .. }
            if name == "ship" && *position == Vec2::new(1.0, 2.0)
    ));
    assert!(matches!(
        &renderer.calls()[1],
        DrawCall::Outline { vertex_count: 4, .. }
    ));
}

#[test]
fn hidden_entities_render_nothing() {
    let mut entity =
        DynamicEntity::from_vertices(Box::new(FakePhysicsBody::new()), square(), Vec2::ZERO);
    entity.initialize().expect("should initialize");
    entity.set_debug_draw(true);
    entity.set_visible(false);

    let mut renderer = RecordingRenderer::new();
    entity.render(&mut renderer);
    assert!(renderer.calls().is_empty());
}

#[test]
fn disabled_entity_skips_its_behaviors() {
    let inspector = FakePhysicsBody::new();
    let mut entity = DynamicEntity::new(Box::new(inspector.clone()));
    entity.initialize().expect("should initialize");
    entity.stop_movement().expect("initialized stop");

    entity.set_enabled(false);
    entity.update(GameTime::from_millis(500));

    assert!(
        entity.body().is_stopping_movement(),
        "behaviors must not run while the entity is disabled"
    );
}

#[test]
fn static_entity_runs_behaviors_but_exposes_no_movement() {
    let mut entity = StaticEntity::new(
        Box::new(FakePhysicsBody::new()),
        square(),
        Vec2::ZERO,
    );
    entity.initialize().expect("should initialize");
    assert!(
        entity.behaviors().is_empty(),
        "static entities get no built-in motion behaviors"
    );

    // The shared entity surface still works through the wrapper.
    entity.update(GameTime::from_millis(16));
    assert!(entity.visible());
}
