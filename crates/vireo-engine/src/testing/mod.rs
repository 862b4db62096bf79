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

//! # Testing Doubles
//!
//! Deterministic capability implementations for unit and integration
//! tests: a physics body that records applied forces, frame-scripted
//! keyboard and mouse doubles, an in-memory content loader, and a renderer
//! that records draw calls.

mod fake_physics;
mod recording;
mod scripted_input;

pub use self::fake_physics::{FakePhysicsBody, ForceMode};
pub use self::recording::{DrawCall, MemoryContentLoader, RecordingRenderer};
pub use self::scripted_input::{ScriptedKeyboard, ScriptedMouse};
