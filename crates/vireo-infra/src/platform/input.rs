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

//! Provides translation from a concrete windowing backend (`winit`) to the
//! engine's abstract input events, plus the double-buffered keyboard and
//! mouse capabilities fed by those events.
//!
//! This module acts as an adapter layer, decoupling the rest of the engine
//! from the specific input event format of the `winit` crate.

use std::collections::HashSet;

use vireo_core::input::{KeyCode, Keyboard, Mouse, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// An engine-internal representation of a user input event.
///
/// This enum is backend-agnostic and represents the high-level input actions
/// the engine's input capabilities consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The physical key that went down.
        key: KeyCode,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// The physical key that went up.
        key: KeyCode,
    },
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// The mouse button that was pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// The mouse button that was released.
        button: MouseButton,
    },
    /// The mouse cursor moved.
    MouseMoved {
        /// The new x-coordinate of the cursor.
        x: f32,
        /// The new y-coordinate of the cursor.
        y: f32,
    },
}

/// Translates a `winit::event::WindowEvent` into the engine's [`InputEvent`].
///
/// Filters and converts raw windowing events into a format the input
/// capabilities can process. Events that are not direct user input actions
/// (window resizing, focus changes), repeats, and keys the engine does not
/// track all map to `None`.
pub fn translate_winit_input(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let PhysicalKey::Code(keycode) = key_event.physical_key else {
                return None;
            };
            let key = map_keycode(keycode)?;
            match key_event.state {
                ElementState::Pressed if !key_event.repeat => {
                    Some(InputEvent::KeyPressed { key })
                }
                ElementState::Released => Some(InputEvent::KeyReleased { key }),
                _ => None,
            }
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            match state {
                ElementState::Pressed => Some(InputEvent::MouseButtonPressed { button }),
                ElementState::Released => Some(InputEvent::MouseButtonReleased { button }),
            }
        }
        _ => None,
    }
}

/// (Internal) Maps a `winit::keyboard::KeyCode` to the engine's key set.
fn map_keycode(keycode: WinitKeyCode) -> Option<KeyCode> {
    let mapped = match keycode {
        WinitKeyCode::KeyA => KeyCode::KeyA,
        WinitKeyCode::KeyB => KeyCode::KeyB,
        WinitKeyCode::KeyC => KeyCode::KeyC,
        WinitKeyCode::KeyD => KeyCode::KeyD,
        WinitKeyCode::KeyE => KeyCode::KeyE,
        WinitKeyCode::KeyF => KeyCode::KeyF,
        WinitKeyCode::KeyG => KeyCode::KeyG,
        WinitKeyCode::KeyH => KeyCode::KeyH,
        WinitKeyCode::KeyI => KeyCode::KeyI,
        WinitKeyCode::KeyJ => KeyCode::KeyJ,
        WinitKeyCode::KeyK => KeyCode::KeyK,
        WinitKeyCode::KeyL => KeyCode::KeyL,
        WinitKeyCode::KeyM => KeyCode::KeyM,
        WinitKeyCode::KeyN => KeyCode::KeyN,
        WinitKeyCode::KeyO => KeyCode::KeyO,
        WinitKeyCode::KeyP => KeyCode::KeyP,
        WinitKeyCode::KeyQ => KeyCode::KeyQ,
        WinitKeyCode::KeyR => KeyCode::KeyR,
        WinitKeyCode::KeyS => KeyCode::KeyS,
        WinitKeyCode::KeyT => KeyCode::KeyT,
        WinitKeyCode::KeyU => KeyCode::KeyU,
        WinitKeyCode::KeyV => KeyCode::KeyV,
        WinitKeyCode::KeyW => KeyCode::KeyW,
        WinitKeyCode::KeyX => KeyCode::KeyX,
        WinitKeyCode::KeyY => KeyCode::KeyY,
        WinitKeyCode::KeyZ => KeyCode::KeyZ,
        WinitKeyCode::Digit0 => KeyCode::Digit0,
        WinitKeyCode::Digit1 => KeyCode::Digit1,
        WinitKeyCode::Digit2 => KeyCode::Digit2,
        WinitKeyCode::Digit3 => KeyCode::Digit3,
        WinitKeyCode::Digit4 => KeyCode::Digit4,
        WinitKeyCode::Digit5 => KeyCode::Digit5,
        WinitKeyCode::Digit6 => KeyCode::Digit6,
        WinitKeyCode::Digit7 => KeyCode::Digit7,
        WinitKeyCode::Digit8 => KeyCode::Digit8,
        WinitKeyCode::Digit9 => KeyCode::Digit9,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Enter => KeyCode::Enter,
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::Tab => KeyCode::Tab,
        WinitKeyCode::Backspace => KeyCode::Backspace,
        WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
        WinitKeyCode::ShiftRight => KeyCode::ShiftRight,
        WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
        WinitKeyCode::ControlRight => KeyCode::ControlRight,
        WinitKeyCode::AltLeft => KeyCode::AltLeft,
        WinitKeyCode::AltRight => KeyCode::AltRight,
        _ => return None,
    };
    Some(mapped)
}

/// (Internal) Maps a `winit::event::MouseButton` to the engine's button set.
fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

/// A [`Keyboard`] fed by translated window events.
///
/// Events accumulate into a live key set between ticks;
/// `update_current_state` snapshots the live set and
/// `update_previous_state` rolls it over, giving the engine the
/// double-buffered view its edge detection expects.
#[derive(Debug, Default)]
pub struct BufferedKeyboard {
    live: HashSet<KeyCode>,
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl BufferedKeyboard {
    /// Creates a keyboard with no keys down.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one translated event into the live key set. Non-keyboard
    /// events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key } => {
                self.live.insert(*key);
            }
            InputEvent::KeyReleased { key } => {
                self.live.remove(key);
            }
            _ => {}
        }
    }
}

impl Keyboard for BufferedKeyboard {
    fn update_current_state(&mut self) {
        self.current = self.live.clone();
    }

    fn update_previous_state(&mut self) {
        self.previous = self.current.clone();
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    fn is_key_up(&self, key: KeyCode) -> bool {
        !self.current.contains(&key)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    fn current_pressed_keys(&self) -> Vec<KeyCode> {
        self.current.iter().copied().collect()
    }

    fn previous_pressed_keys(&self) -> Vec<KeyCode> {
        self.previous.iter().copied().collect()
    }
}

/// A [`Mouse`] fed by translated window events, the button twin of
/// [`BufferedKeyboard`].
#[derive(Debug, Default)]
pub struct BufferedMouse {
    live: HashSet<MouseButton>,
    current: HashSet<MouseButton>,
    previous: HashSet<MouseButton>,
    x: f32,
    y: f32,
}

impl BufferedMouse {
    /// Creates a mouse with no buttons down at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one translated event into the live button set and cursor
    /// position. Keyboard events are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::MouseButtonPressed { button } => {
                self.live.insert(*button);
            }
            InputEvent::MouseButtonReleased { button } => {
                self.live.remove(button);
            }
            InputEvent::MouseMoved { x, y } => {
                self.x = *x;
                self.y = *y;
            }
            _ => {}
        }
    }
}

impl Mouse for BufferedMouse {
    fn update_current_state(&mut self) {
        self.current = self.live.clone();
    }

    fn update_previous_state(&mut self) {
        self.previous = self.current.clone();
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.current.contains(&button)
    }

    fn is_button_up(&self, button: MouseButton) -> bool {
        !self.current.contains(&button)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.current.contains(&button) && !self.previous.contains(&button)
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn maps_standard_mouse_buttons() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(
            map_mouse_button(WinitMouseButton::Middle),
            MouseButton::Middle
        );
        assert_eq!(
            map_mouse_button(WinitMouseButton::Other(8)),
            MouseButton::Other(8)
        );
    }

    #[test]
    fn maps_tracked_keycodes_and_drops_untracked_ones() {
        assert_eq!(map_keycode(WinitKeyCode::KeyA), Some(KeyCode::KeyA));
        assert_eq!(map_keycode(WinitKeyCode::Digit1), Some(KeyCode::Digit1));
        assert_eq!(map_keycode(WinitKeyCode::Space), Some(KeyCode::Space));
        assert_eq!(map_keycode(WinitKeyCode::F1), None);
    }

    #[test]
    fn translates_mouse_input_events() {
        let winit_event = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        assert_eq!(
            translate_winit_input(&winit_event),
            Some(InputEvent::MouseButtonPressed {
                button: MouseButton::Left
            })
        );
    }

    #[test]
    fn translates_cursor_movement() {
        let winit_event = WindowEvent::CursorMoved {
            device_id: winit::event::DeviceId::dummy(),
            position: PhysicalPosition::new(100.5, 200.75),
        };
        assert_eq!(
            translate_winit_input(&winit_event),
            Some(InputEvent::MouseMoved {
                x: 100.5,
                y: 200.75
            })
        );
    }

    #[test]
    fn non_input_events_translate_to_none() {
        let resize = WindowEvent::Resized(winit::dpi::PhysicalSize::new(100, 100));
        let focus = WindowEvent::Focused(true);
        assert_eq!(translate_winit_input(&resize), None);
        assert_eq!(translate_winit_input(&focus), None);
    }

    #[test]
    fn buffered_keyboard_detects_edges_across_snapshots() {
        let mut keyboard = BufferedKeyboard::new();
        keyboard.apply(&InputEvent::KeyPressed { key: KeyCode::KeyW });

        keyboard.update_current_state();
        assert!(keyboard.is_key_pressed(KeyCode::KeyW));
        keyboard.update_previous_state();

        keyboard.update_current_state();
        assert!(keyboard.is_key_down(KeyCode::KeyW));
        assert!(
            !keyboard.is_key_pressed(KeyCode::KeyW),
            "still held: the edge was consumed last tick"
        );

        keyboard.apply(&InputEvent::KeyReleased { key: KeyCode::KeyW });
        keyboard.update_previous_state();
        keyboard.update_current_state();
        assert!(keyboard.is_key_up(KeyCode::KeyW));
    }

    #[test]
    fn buffered_mouse_tracks_position_and_buttons() {
        let mut mouse = BufferedMouse::new();
        mouse.apply(&InputEvent::MouseMoved { x: 4.0, y: -2.0 });
        mouse.apply(&InputEvent::MouseButtonPressed {
            button: MouseButton::Right,
        });

        mouse.update_current_state();
        assert_eq!((mouse.x(), mouse.y()), (4.0, -2.0));
        assert!(mouse.is_button_down(MouseButton::Right));
        assert!(mouse.is_button_up(MouseButton::Left));
    }
}
