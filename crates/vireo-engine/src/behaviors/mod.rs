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

//! # Behaviors
//!
//! Named, enable-able units of per-tick logic attached to entities. An
//! entity runs its behaviors in insertion order on every update, handing
//! each one a mutable borrow of its [`EntityBody`](crate::entities::EntityBody)
//! motion state. Disabled behaviors are skipped entirely.

mod behavior;
mod builtin;
mod key_behavior;
mod move_forward_keyboard;
mod movement_by_keyboard;

pub use self::behavior::Behavior;
pub use self::key_behavior::{KeyBehavior, KeyBehaviorKind, KeySignal};
pub use self::move_forward_keyboard::MoveForwardKeyboardBehavior;
pub use self::movement_by_keyboard::MovementByKeyboardBehavior;

pub(crate) use self::builtin::built_in_behaviors;
