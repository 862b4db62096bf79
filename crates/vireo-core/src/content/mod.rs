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

//! # Content Abstractions
//!
//! The content-loading capability entities use to resolve texture names into
//! opaque handles. The actual decoding backend lives in the infrastructure
//! layer.

use std::fmt;

/// An opaque handle to a loaded texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// The content name the texture was loaded from.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Resolves content names into texture handles.
pub trait ContentLoader {
    /// Loads the texture registered under `name`.
    fn load_texture(&mut self, name: &str) -> Result<Texture, ContentError>;
}

/// An error produced while loading content.
#[derive(Debug)]
pub enum ContentError {
    /// No content exists under the requested name.
    NotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// The content exists but could not be decoded.
    Decode {
        /// The name of the content that failed to decode.
        name: String,
        /// Detailed error message from the decoding backend.
        details: String,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NotFound { name } => {
                write!(f, "Content not found for name '{name}'")
            }
            ContentError::Decode { name, details } => {
                write!(f, "Failed to decode content '{name}': {details}")
            }
        }
    }
}

impl std::error::Error for ContentError {}
