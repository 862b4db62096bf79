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

//! Defines a bounded counter with configurable direction and reset policy.

use std::fmt;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::ResetMode;
use crate::event::EventDispatcher;

/// The direction a [`Counter`] advances in.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode,
)]
pub enum CountDirection {
    /// `count()` adds the step amount.
    #[default]
    Increment,
    /// `count()` subtracts the step amount.
    Decrement,
}

/// An error produced by malformed counter configuration.
///
/// Range errors are fatal to the call that caused them; the counter never
/// silently clamps a bad configuration into a valid one.
#[derive(Debug, PartialEq, Eq)]
pub enum CounterError {
    /// The requested bounds would put `min` above `max`.
    InvalidRange {
        /// The offending minimum.
        min: i32,
        /// The offending maximum.
        max: i32,
    },
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::InvalidRange { min, max } => {
                write!(f, "Counter min ({min}) must not exceed max ({max})")
            }
        }
    }
}

impl std::error::Error for CounterError {}

/// A bounded increment/decrement counter with min/max wrap and reset policy.
///
/// `count()` advances the value by the step amount in the configured
/// direction. The value is allowed to pass the bound; crossing it raises the
/// corresponding reached event, and in [`ResetMode::Auto`] the counter then
/// wraps to the opposite bound. In [`ResetMode::Manual`] the value keeps
/// running past the bound until [`reset`](Counter::reset) is called — the
/// reset policy is the sole gate on wrap-around.
pub struct Counter {
    min: i32,
    max: i32,
    value: i32,
    step: i32,
    direction: CountDirection,
    reset_mode: ResetMode,
    max_reached: EventDispatcher<i32>,
    min_reached: EventDispatcher<i32>,
}

impl Counter {
    /// Creates a counter over `min..=max` advancing by `step`.
    ///
    /// The value starts at `min`. Fails with
    /// [`CounterError::InvalidRange`] when `min > max`.
    pub fn new(min: i32, max: i32, step: i32) -> Result<Self, CounterError> {
        if min > max {
            return Err(CounterError::InvalidRange { min, max });
        }

        Ok(Self {
            min,
            max,
            value: min,
            step,
            direction: CountDirection::default(),
            reset_mode: ResetMode::default(),
            max_reached: EventDispatcher::new(),
            min_reached: EventDispatcher::new(),
        })
    }

    /// Advances the value by the step amount in the configured direction.
    ///
    /// Raises the reached event when the value crosses the active bound and
    /// wraps to the opposite bound when the reset mode is `Auto`.
    pub fn count(&mut self) {
        match self.direction {
            CountDirection::Increment => {
                self.value += self.step;
                if self.value > self.max {
                    let reached = self.value;
                    self.max_reached.invoke(&reached);
                    if self.reset_mode == ResetMode::Auto {
                        self.value = self.min;
                    }
                }
            }
            CountDirection::Decrement => {
                self.value -= self.step;
                if self.value < self.min {
                    let reached = self.value;
                    self.min_reached.invoke(&reached);
                    if self.reset_mode == ResetMode::Auto {
                        self.value = self.max;
                    }
                }
            }
        }
    }

    /// Returns the value to the bound it counts away from.
    pub fn reset(&mut self) {
        self.value = match self.direction {
            CountDirection::Increment => self.min,
            CountDirection::Decrement => self.max,
        };
    }

    /// The current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The configured minimum bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Sets the minimum bound; fails when it would exceed the maximum.
    pub fn set_min(&mut self, min: i32) -> Result<(), CounterError> {
        if min > self.max {
            return Err(CounterError::InvalidRange { min, max: self.max });
        }
        self.min = min;
        Ok(())
    }

    /// The configured maximum bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Sets the maximum bound; fails when it would fall below the minimum.
    pub fn set_max(&mut self, max: i32) -> Result<(), CounterError> {
        if max < self.min {
            return Err(CounterError::InvalidRange { min: self.min, max });
        }
        self.max = max;
        Ok(())
    }

    /// The amount each `count()` call advances by.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Sets the step amount.
    pub fn set_step(&mut self, step: i32) {
        self.step = step;
    }

    /// The configured count direction.
    pub fn direction(&self) -> CountDirection {
        self.direction
    }

    /// Sets the count direction.
    pub fn set_direction(&mut self, direction: CountDirection) {
        self.direction = direction;
    }

    /// The configured reset policy.
    pub fn reset_mode(&self) -> ResetMode {
        self.reset_mode
    }

    /// Sets the reset policy.
    pub fn set_reset_mode(&mut self, mode: ResetMode) {
        self.reset_mode = mode;
    }

    /// The event raised when the value crosses the maximum while
    /// incrementing; the payload is the value that crossed the bound.
    pub fn on_max_reached(&mut self) -> &mut EventDispatcher<i32> {
        &mut self.max_reached
    }

    /// The event raised when the value crosses the minimum while
    /// decrementing; the payload is the value that crossed the bound.
    pub fn on_min_reached(&mut self) -> &mut EventDispatcher<i32> {
        &mut self.min_reached
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("step", &self.step)
            .field("direction", &self.direction)
            .field("reset_mode", &self.reset_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn auto_reset_wraps_to_min_after_crossing_max() {
        let mut counter = Counter::new(0, 2, 1).expect("valid range");

        counter.count();
        counter.count();
        assert_eq!(counter.value(), 2, "Value should sit on max before wrap");

        counter.count();
        assert_eq!(counter.value(), 0, "Crossing max with Auto should wrap to min");
    }

    #[test]
    fn manual_reset_lets_value_run_past_max() {
        let mut counter = Counter::new(0, 2, 1).expect("valid range");
        counter.set_reset_mode(ResetMode::Manual);

        counter.count();
        counter.count();
        counter.count();
        assert_eq!(counter.value(), 3, "Manual mode must not wrap or clamp");

        counter.reset();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn max_reached_event_carries_crossing_value() {
        let mut counter = Counter::new(0, 2, 1).expect("valid range");
        let observed = Rc::new(Cell::new(0));
        let sink = Rc::clone(&observed);
        counter.on_max_reached().subscribe(move |value| sink.set(*value));

        counter.count();
        counter.count();
        assert_eq!(observed.get(), 0, "Event must not fire before the bound is crossed");

        counter.count();
        assert_eq!(observed.get(), 3);
    }

    #[test]
    fn decrement_wraps_to_max_in_auto_mode() {
        let mut counter = Counter::new(0, 2, 1).expect("valid range");
        counter.set_direction(CountDirection::Decrement);
        counter.reset();
        assert_eq!(counter.value(), 2, "Decrement reset returns to max");

        counter.count();
        counter.count();
        counter.count();
        assert_eq!(counter.value(), 2, "Crossing min with Auto should wrap to max");
    }

    #[test]
    fn invalid_range_is_rejected() {
        assert_eq!(
            Counter::new(5, 1, 1).unwrap_err(),
            CounterError::InvalidRange { min: 5, max: 1 }
        );

        let mut counter = Counter::new(0, 10, 1).expect("valid range");
        assert!(counter.set_min(11).is_err());
        assert!(counter.set_max(-1).is_err());
        assert_eq!(counter.min(), 0);
        assert_eq!(counter.max(), 10);
    }
}
