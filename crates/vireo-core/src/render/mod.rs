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

//! # Render Abstractions
//!
//! The minimal drawing surface entities render through. Pixel fidelity is a
//! backend concern; the contract only carries what the entity layer submits.

use crate::content::Texture;
use crate::math::{LinearRgba, Vec2};

/// A drawing surface the entity layer submits to once per frame.
pub trait Renderer {
    /// Draws `texture` centered at `position`, rotated by `angle_deg`.
    fn render_texture(&mut self, texture: &Texture, position: Vec2, angle_deg: f32);

    /// Draws a closed outline through `vertices` in the given color.
    ///
    /// Used for entity debug drawing.
    fn render_outline(&mut self, vertices: &[Vec2], color: LinearRgba);
}
