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

//! Utility state machines shared across the simulation layer.

pub mod counter;
pub mod stopwatch;
pub mod timing;

pub use self::counter::{CountDirection, Counter, CounterError};
pub use self::stopwatch::StopWatch;
pub use self::timing::GameTime;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Governs whether a timer or counter clears itself after completing its
/// triggering condition, or waits for an explicit reset call.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode,
)]
pub enum ResetMode {
    /// The component self-resets when its condition completes a cycle.
    #[default]
    Auto,
    /// The consumer must call the explicit reset operation.
    Manual,
}
