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

//! # Scenes
//!
//! A minimal scene registry: the game loop drives one active [`Scene`] at a
//! time through the [`SceneManager`].

mod manager;

pub use self::manager::SceneManager;

use vireo_core::render::Renderer;
use vireo_core::GameTime;

/// A unit of game content the manager can activate, update, and render.
pub trait Scene {
    /// The scene's unique id within a manager.
    fn id(&self) -> u32;

    /// The scene's display name.
    fn name(&self) -> &str;

    /// Advances the scene one tick.
    fn update(&mut self, time: GameTime);

    /// Draws the scene.
    fn render(&mut self, renderer: &mut dyn Renderer);
}
