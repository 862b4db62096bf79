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

//! The base entity: shape, texture, behavior list, and lifecycle.

use vireo_core::content::{ContentError, ContentLoader, Texture};
use vireo_core::event::EventDispatcher;
use vireo_core::math::{Aabb2, LinearRgba, Vec2};
use vireo_core::physics::PhysicsBody;
use vireo_core::render::Renderer;
use vireo_core::GameTime;

use super::EntityBody;
use crate::behaviors::Behavior;
use crate::errors::EntityError;

/// The base game object: a vertex polygon shape, an optional texture, and an
/// ordered collection of behaviors run once per tick.
///
/// Lifecycle: construct with shape and position, then `initialize` binds the
/// injected physics body to the geometry exactly once. Repeated `initialize`
/// calls are no-ops that preserve previously configured state. The shape is
/// immutable after initialization; bounds are derived from the body's
/// current vertex extents on every read, never stored.
pub struct Entity {
    body: EntityBody,
    vertices: Vec<Vec2>,
    position: Vec2,
    visible: bool,
    enabled: bool,
    debug_draw: bool,
    debug_draw_color: LinearRgba,
    texture: Option<Texture>,
    texture_name: Option<String>,
    behaviors: Vec<Box<dyn Behavior>>,
    content_loaded: bool,
    initialized: bool,
    on_show: EventDispatcher<()>,
    on_hide: EventDispatcher<()>,
}

impl Entity {
    /// Creates an entity around an optionally injected physics body.
    pub fn new(
        body: Option<Box<dyn PhysicsBody>>,
        vertices: Vec<Vec2>,
        position: Vec2,
        friction: f32,
    ) -> Self {
        Self {
            body: EntityBody::new(body, friction),
            vertices,
            position,
            visible: true,
            enabled: true,
            debug_draw: false,
            debug_draw_color: LinearRgba::WHITE,
            texture: None,
            texture_name: None,
            behaviors: Vec::new(),
            content_loaded: false,
            initialized: false,
            on_show: EventDispatcher::new(),
            on_hide: EventDispatcher::new(),
        }
    }

    // --- Lifecycle ---

    /// Binds the stored vertices and position into the physics body.
    ///
    /// Idempotent: a second call returns `Ok` without recreating anything,
    /// so limits configured between calls are never discarded. Fails with
    /// [`EntityError::MissingVertices`] when no shape is bound and
    /// [`EntityError::NotInitialized`] when no body was injected.
    pub fn initialize(&mut self) -> Result<(), EntityError> {
        if self.initialized {
            return Ok(());
        }
        if self.vertices.is_empty() {
            return Err(EntityError::MissingVertices);
        }

        let linear_deceleration = self.body.linear_deceleration();
        let angular_deceleration = self.body.angular_deceleration();
        let position = self.position;
        let Some(physics) = self.body.physics_body_mut() else {
            return Err(EntityError::NotInitialized);
        };

        physics.init(&self.vertices, position);
        physics.set_linear_deceleration(linear_deceleration);
        physics.set_angular_deceleration(angular_deceleration);
        self.initialized = true;
        Ok(())
    }

    /// `true` once `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Runs every enabled behavior in insertion order.
    ///
    /// Safe on an empty behavior list. The list is detached for the
    /// duration of the walk so each behavior can mutably borrow the
    /// entity's motion state.
    pub fn update(&mut self, time: GameTime) {
        if !self.enabled {
            return;
        }

        let mut behaviors = std::mem::take(&mut self.behaviors);
        for behavior in behaviors.iter_mut() {
            if behavior.is_enabled() {
                behavior.update(&mut self.body, time);
            }
        }
        // Preserve anything an event handler appended mid-walk.
        let appended = std::mem::replace(&mut self.behaviors, behaviors);
        self.behaviors.extend(appended);
    }

    /// Loads the entity's texture through the content capability and marks
    /// content as loaded. Safe to call repeatedly.
    pub fn load_content(&mut self, loader: &mut dyn ContentLoader) -> Result<(), ContentError> {
        if self.texture.is_none() {
            if let Some(name) = &self.texture_name {
                self.texture = Some(loader.load_texture(name)?);
            }
        }
        self.content_loaded = true;
        Ok(())
    }

    /// Drops the loaded texture and clears the content-loaded flag. Safe to
    /// call repeatedly.
    pub fn unload_content(&mut self, _loader: &mut dyn ContentLoader) {
        self.texture = None;
        self.content_loaded = false;
    }

    /// `true` while content is loaded.
    pub fn content_loaded(&self) -> bool {
        self.content_loaded
    }

    /// Draws the texture at the body's position and heading, plus the debug
    /// outline when enabled. Hidden entities draw nothing.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        if !self.visible {
            return;
        }

        let position = self.position();
        let angle = self.angle_deg();
        if let Some(texture) = &self.texture {
            renderer.render_texture(texture, position, angle);
        }

        if self.debug_draw {
            if let Some(physics) = self.body.physics_body() {
                renderer.render_outline(physics.vertices(), self.debug_draw_color);
            }
        }
    }

    // --- Shape and spatial state ---

    /// The entity's shape vertices as configured at construction.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Replaces the shape vertices.
    ///
    /// Fails with [`EntityError::AlreadyInitialized`] once the body is
    /// bound: bounds derive from fixed geometry.
    pub fn set_vertices(&mut self, vertices: Vec<Vec2>) -> Result<(), EntityError> {
        if self.initialized {
            return Err(EntityError::AlreadyInitialized);
        }
        self.vertices = vertices;
        Ok(())
    }

    /// The entity's world position: live from the body once initialized,
    /// the construction-time cache before that.
    pub fn position(&self) -> Vec2 {
        match self.body.physics_body() {
            Some(physics) if physics.is_initialized() => physics.position(),
            _ => self.position,
        }
    }

    /// Moves the entity. Routed to the body once initialized.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        if let Some(physics) = self.body.physics_body_mut() {
            if physics.is_initialized() {
                physics.set_position(position);
            }
        }
    }

    /// The entity's heading in degrees; `0.0` before a body is bound.
    pub fn angle_deg(&self) -> f32 {
        match self.body.physics_body() {
            Some(physics) if physics.is_initialized() => physics.angle_deg(),
            _ => 0.0,
        }
    }

    /// The bounding box of the body's current vertices.
    ///
    /// A pure function of vertex extents: zero-sized when geometry is
    /// absent, never an error.
    pub fn bounds(&self) -> Aabb2 {
        match self.body.physics_body() {
            Some(physics) => Aabb2::from_points(physics.vertices()),
            None => Aabb2::default(),
        }
    }

    /// The bounds' extent along the X-axis.
    pub fn bounds_width(&self) -> f32 {
        self.bounds().width()
    }

    /// The bounds' extent along the Y-axis.
    pub fn bounds_height(&self) -> f32 {
        self.bounds().height()
    }

    /// Half the bounds' extent along the X-axis.
    pub fn bounds_half_width(&self) -> f32 {
        self.bounds().half_width()
    }

    /// Half the bounds' extent along the Y-axis.
    pub fn bounds_half_height(&self) -> f32 {
        self.bounds().half_height()
    }

    // --- Flags, texture, events ---

    /// `true` while the entity renders.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the entity.
    ///
    /// Edge-triggered: transitioning raises `on_show`/`on_hide`; writing
    /// the current value raises nothing.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.on_show.invoke(&());
        } else {
            self.on_hide.invoke(&());
        }
    }

    /// `true` while `update` runs behaviors.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables behavior processing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the debug outline is drawn.
    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }

    /// Toggles the debug outline.
    pub fn set_debug_draw(&mut self, debug_draw: bool) {
        self.debug_draw = debug_draw;
    }

    /// The debug outline color.
    pub fn debug_draw_color(&self) -> LinearRgba {
        self.debug_draw_color
    }

    /// Sets the debug outline color.
    pub fn set_debug_draw_color(&mut self, color: LinearRgba) {
        self.debug_draw_color = color;
    }

    /// The loaded texture, if any.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Assigns an already-loaded texture.
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    /// The content name `load_content` resolves the texture from.
    pub fn texture_name(&self) -> Option<&str> {
        self.texture_name.as_deref()
    }

    /// Sets the content name `load_content` resolves the texture from.
    pub fn set_texture_name(&mut self, name: impl Into<String>) {
        self.texture_name = Some(name.into());
    }

    /// The event raised when the entity becomes visible.
    pub fn on_show(&mut self) -> &mut EventDispatcher<()> {
        &mut self.on_show
    }

    /// The event raised when the entity becomes hidden.
    pub fn on_hide(&mut self) -> &mut EventDispatcher<()> {
        &mut self.on_hide
    }

    // --- Behaviors and motion state ---

    /// The entity's behaviors, in execution order.
    pub fn behaviors(&self) -> &[Box<dyn Behavior>] {
        &self.behaviors
    }

    /// Mutable access to the behavior list.
    pub fn behaviors_mut(&mut self) -> &mut Vec<Box<dyn Behavior>> {
        &mut self.behaviors
    }

    /// Appends a behavior; it runs after all previously added ones.
    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }

    /// The motion state shared with behaviors.
    pub fn body(&self) -> &EntityBody {
        &self.body
    }

    /// Mutable access to the motion state.
    pub fn body_mut(&mut self) -> &mut EntityBody {
        &mut self.body
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("vertices", &self.vertices.len())
            .field("position", &self.position)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("behaviors", &self.behaviors.len())
            .field("content_loaded", &self.content_loaded)
            .field("initialized", &self.initialized)
            .finish()
    }
}
