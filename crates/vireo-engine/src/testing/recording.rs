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

//! Recording doubles for the content and render capabilities.

use std::collections::HashMap;

use vireo_core::content::{ContentError, ContentLoader, Texture};
use vireo_core::math::{LinearRgba, Vec2};
use vireo_core::render::Renderer;

/// A [`ContentLoader`] backed by a name -> texture map.
#[derive(Debug, Default)]
pub struct MemoryContentLoader {
    textures: HashMap<String, Texture>,
}

impl MemoryContentLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture available under `name`.
    pub fn insert(&mut self, name: impl Into<String>, width: u32, height: u32) {
        let name = name.into();
        self.textures.insert(
            name.clone(),
            Texture {
                name,
                width,
                height,
            },
        );
    }
}

impl ContentLoader for MemoryContentLoader {
    fn load_texture(&mut self, name: &str) -> Result<Texture, ContentError> {
        self.textures
            .get(name)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                name: name.to_owned(),
            })
    }
}

/// One draw call observed by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// A texture drawn at a position and heading.
    Texture {
        /// The texture's content name.
        name: String,
        /// The world position it was drawn at.
        position: Vec2,
        /// The heading it was drawn with, in degrees.
        angle_deg: f32,
    },
    /// A debug outline drawn through a vertex loop.
    Outline {
        /// The number of vertices in the loop.
        vertex_count: usize,
        /// The outline color.
        color: LinearRgba,
    },
}

/// A [`Renderer`] that records draw calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// Creates a renderer with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draw calls observed so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render_texture(&mut self, texture: &Texture, position: Vec2, angle_deg: f32) {
        self.calls.push(DrawCall::Texture {
            name: texture.name.clone(),
            position,
            angle_deg,
        });
    }

    fn render_outline(&mut self, vertices: &[Vec2], color: LinearRgba) {
        self.calls.push(DrawCall::Outline {
            vertex_count: vertices.len(),
            color,
        });
    }
}
