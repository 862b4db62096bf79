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

//! # Input Abstractions
//!
//! Backend-agnostic keyboard and mouse capability contracts. Both expose a
//! double-buffered snapshot model: the consumer refreshes the current
//! snapshot, evaluates its logic, then rolls the current snapshot into the
//! previous one so the next tick can detect edges (state transitions).
//!
//! The simulation layer is single-threaded and cooperative, so capabilities
//! are shared between behaviors as `Rc<RefCell<...>>` handles rather than
//! locked.

pub mod keyboard;
pub mod mouse;

pub use self::keyboard::{KeyCode, Keyboard, SharedKeyboard};
pub use self::mouse::{Mouse, MouseButton, SharedMouse};
