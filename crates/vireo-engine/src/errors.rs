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

//! Error types for the entity and scene layers.
//!
//! All errors here are synchronous, immediate, and non-retryable: a failing
//! operation either rejects its inputs before mutating anything or reports a
//! lifecycle violation. There is no partial application of a force or
//! impulse.

use thiserror::Error;

/// An error raised by entity lifecycle and movement operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    /// A movement or rotation method was invoked while the physics-body
    /// capability is absent or not yet initialized. Checked before any
    /// computation; no state changes on this path.
    #[error("entity physics body is missing or not initialized")]
    NotInitialized,

    /// `initialize` was called without any shape vertices bound.
    #[error("entity cannot initialize without vertices")]
    MissingVertices,

    /// An attempt was made to mutate the shape after initialization.
    /// Bounds derive from fixed geometry, so the shape is immutable
    /// once the body is bound.
    #[error("entity shape is fixed after initialization")]
    AlreadyInitialized,
}

/// An error raised by scene-manager operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// A scene with the given id was already added.
    #[error("a scene with id {0} already exists")]
    IdConflict(u32),

    /// No scene exists under the given id.
    #[error("no scene found with id {0}")]
    IdNotFound(u32),

    /// No scene exists under the given name.
    #[error("no scene found with name '{0}'")]
    NameNotFound(String),
}
