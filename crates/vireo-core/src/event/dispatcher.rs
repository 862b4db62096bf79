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

use std::fmt;

/// An ordered list of synchronous event handlers.
///
/// Handlers run inline on the caller's stack, in registration order, every
/// time [`invoke`](EventDispatcher::invoke) is called. Invoking with no
/// subscribers is a free no-op and never an error.
///
/// Dispatch is intentionally not reentrancy-guarded: a handler that mutates
/// the owning component's state affects the remainder of the same tick's
/// processing. Hosts that need isolation should defer their reaction to the
/// next tick.
pub struct EventDispatcher<T> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> EventDispatcher<T> {
    /// Creates a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers a handler; handlers are invoked in registration order.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Invokes every registered handler with `payload`.
    pub fn invoke(&mut self, payload: &T) {
        for handler in &mut self.handlers {
            handler(payload);
        }
    }

    /// Returns `true` if at least one handler is registered.
    pub fn has_subscribers(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// The number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn invoke_without_subscribers_is_a_no_op() {
        let mut dispatcher = EventDispatcher::<i32>::new();
        dispatcher.invoke(&42);
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::<()>::new();

        let first = Rc::clone(&order);
        dispatcher.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        dispatcher.subscribe(move |_| second.borrow_mut().push("second"));

        dispatcher.invoke(&());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn payload_reaches_every_handler() {
        let total = Rc::new(RefCell::new(0));
        let mut dispatcher = EventDispatcher::<i32>::new();

        for _ in 0..3 {
            let sink = Rc::clone(&total);
            dispatcher.subscribe(move |value| *sink.borrow_mut() += *value);
        }

        dispatcher.invoke(&5);
        assert_eq!(*total.borrow(), 15, "All three handlers should observe 5");
    }
}
