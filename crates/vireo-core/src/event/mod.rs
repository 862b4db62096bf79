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

//! Provides foundational primitives for event-driven communication.
//!
//! The simulation layer raises its notifications synchronously: a component
//! holds an [`EventDispatcher`] per event and invokes every registered
//! handler inline, in registration order, on the caller's stack. An event
//! with no subscribers is a free no-op.

mod dispatcher;

pub use self::dispatcher::EventDispatcher;
