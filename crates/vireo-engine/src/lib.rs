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

//! # Vireo Engine
//!
//! The behavioral simulation layer: entities with physics-driven movement,
//! pluggable per-tick behaviors, per-key input state machines, and input
//! watchers tracking hit counts, hold/release timing, and combos.
//!
//! Everything here is single-threaded and cooperative. One external tick
//! loop drives `update(GameTime)` on entities and watchers; no component
//! spawns threads or suspends. Events are raised synchronously through
//! [`vireo_core::EventDispatcher`], inline on the caller's stack.

pub mod behaviors;
pub mod entities;
pub mod scene;
pub mod testing;
pub mod watchers;

mod errors;

pub use errors::{EntityError, SceneError};
