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

//! # Input Watchers
//!
//! Per-input state machines tracking down/up timing, repeat-hit counts, and
//! combo presses, independent of any entity. [`WatcherState`] holds the
//! shared machine; [`KeyboardWatcher`] and [`MouseWatcher`] drive it from
//! the respective input capability.
//!
//! Event raising is synchronous: handlers run inline during `update`, so a
//! handler that mutates watcher state affects the same tick's remaining
//! processing.

mod keyboard_watcher;
mod mouse_watcher;
mod state;

pub use self::keyboard_watcher::KeyboardWatcher;
pub use self::mouse_watcher::MouseWatcher;
pub use self::state::WatcherState;
