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

use vireo_core::GameTime;

use crate::entities::EntityBody;

/// A named, enable-able unit of per-tick logic attached to an entity.
///
/// The owning entity invokes [`update`](Behavior::update) once per tick,
/// in insertion order, passing a mutable borrow of its motion state. A
/// behavior whose `is_enabled` returns `false` is skipped by the entity and
/// must not advance any internal timers while skipped.
pub trait Behavior {
    /// The behavior's display name.
    fn name(&self) -> &str;

    /// Renames the behavior.
    fn set_name(&mut self, name: String);

    /// Whether the entity runs this behavior on update.
    fn is_enabled(&self) -> bool;

    /// Enables or disables this behavior.
    fn set_enabled(&mut self, enabled: bool);

    /// Runs one tick of the behavior's logic against the entity's motion
    /// state.
    fn update(&mut self, host: &mut EntityBody, time: GameTime);
}
