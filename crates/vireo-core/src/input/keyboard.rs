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

//! Defines the engine-internal key code set and the keyboard capability.

use std::cell::RefCell;
use std::rc::Rc;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A shared, single-threaded handle to a keyboard capability.
pub type SharedKeyboard = Rc<RefCell<dyn Keyboard>>;

/// An engine-internal representation of a physical keyboard key.
///
/// Names follow the physical-key convention of the windowing backend
/// (letter keys are positional, not layout-mapped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
#[allow(missing_docs)]
pub enum KeyCode {
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
}

/// Polling access to double-buffered keyboard state.
///
/// `update_current_state` refreshes the snapshot the `is_key_*` queries read
/// from; `update_previous_state` rolls it into the previous snapshot. Edge
/// queries (`is_key_pressed`) compare the two.
pub trait Keyboard {
    /// Refreshes the current-state snapshot from the backend.
    fn update_current_state(&mut self);

    /// Rolls the current snapshot into the previous one.
    fn update_previous_state(&mut self);

    /// Returns `true` while `key` is held down in the current snapshot.
    fn is_key_down(&self, key: KeyCode) -> bool;

    /// Returns `true` while `key` is up in the current snapshot.
    fn is_key_up(&self, key: KeyCode) -> bool;

    /// Returns `true` only on the tick where `key` transitioned up -> down.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// All keys held down in the current snapshot.
    fn current_pressed_keys(&self) -> Vec<KeyCode>;

    /// All keys held down in the previous snapshot.
    fn previous_pressed_keys(&self) -> Vec<KeyCode>;
}
