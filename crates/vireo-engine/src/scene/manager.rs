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

//! Registers scenes by id and dispatches tick/render to the active one.

use vireo_core::render::Renderer;
use vireo_core::GameTime;

use super::Scene;
use crate::errors::SceneError;

/// Owns the registered scenes and the active-scene selection.
///
/// Scene ids must be unique within a manager; registering a duplicate fails
/// with [`SceneError::IdConflict`]. `update` and `render` are safe no-ops
/// while nothing is active.
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
    active: Option<usize>,
}

impl SceneManager {
    /// Creates an empty manager with no active scene.
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            active: None,
        }
    }

    /// Registers a scene. The first registered scene becomes active.
    pub fn add(&mut self, scene: Box<dyn Scene>) -> Result<(), SceneError> {
        let id = scene.id();
        if self.scenes.iter().any(|existing| existing.id() == id) {
            return Err(SceneError::IdConflict(id));
        }
        self.scenes.push(scene);
        if self.active.is_none() {
            self.active = Some(self.scenes.len() - 1);
        }
        Ok(())
    }

    /// Removes and returns the scene with the given id. Removing the active
    /// scene leaves the manager with no active scene.
    pub fn remove(&mut self, id: u32) -> Result<Box<dyn Scene>, SceneError> {
        let index = self
            .scenes
            .iter()
            .position(|scene| scene.id() == id)
            .ok_or(SceneError::IdNotFound(id))?;

        match self.active {
            Some(active) if active == index => self.active = None,
            Some(active) if active > index => self.active = Some(active - 1),
            _ => {}
        }
        Ok(self.scenes.remove(index))
    }

    /// Makes the scene with the given id active.
    pub fn set_active(&mut self, id: u32) -> Result<(), SceneError> {
        let index = self
            .scenes
            .iter()
            .position(|scene| scene.id() == id)
            .ok_or(SceneError::IdNotFound(id))?;
        self.active = Some(index);
        Ok(())
    }

    /// Makes the scene with the given name active.
    pub fn set_active_by_name(&mut self, name: &str) -> Result<(), SceneError> {
        let index = self
            .scenes
            .iter()
            .position(|scene| scene.name() == name)
            .ok_or_else(|| SceneError::NameNotFound(name.to_owned()))?;
        self.active = Some(index);
        Ok(())
    }

    /// The active scene, if any.
    pub fn active(&self) -> Option<&dyn Scene> {
        self.active.map(|index| self.scenes[index].as_ref())
    }

    /// The number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// `true` when no scene is registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Advances the active scene one tick.
    pub fn update(&mut self, time: GameTime) {
        if let Some(index) = self.active {
            self.scenes[index].update(time);
        }
    }

    /// Draws the active scene.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        if let Some(index) = self.active {
            self.scenes[index].render(renderer);
        }
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SceneManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneManager")
            .field("scenes", &self.scenes.len())
            .field("active", &self.active)
            .finish()
    }
}
