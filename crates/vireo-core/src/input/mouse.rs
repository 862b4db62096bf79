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

//! Defines the mouse button set and the mouse capability.

use std::cell::RefCell;
use std::rc::Rc;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A shared, single-threaded handle to a mouse capability.
pub type SharedMouse = Rc<RefCell<dyn Mouse>>;

/// An engine-internal representation of a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// Polling access to double-buffered mouse state.
///
/// Mirrors the [`Keyboard`](super::Keyboard) snapshot model for buttons and
/// additionally exposes the cursor position.
pub trait Mouse {
    /// Refreshes the current-state snapshot from the backend.
    fn update_current_state(&mut self);

    /// Rolls the current snapshot into the previous one.
    fn update_previous_state(&mut self);

    /// Returns `true` while `button` is held down in the current snapshot.
    fn is_button_down(&self, button: MouseButton) -> bool;

    /// Returns `true` while `button` is up in the current snapshot.
    fn is_button_up(&self, button: MouseButton) -> bool;

    /// Returns `true` only on the tick where `button` transitioned up -> down.
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// The cursor's current x-coordinate.
    fn x(&self) -> f32;

    /// The cursor's current y-coordinate.
    fn y(&self) -> f32;

    /// Moves the cursor to the given coordinates.
    fn set_position(&mut self, x: f32, y: f32);
}
