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

//! Provides the 2D vector type and its associated operations.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::{DEG_TO_RAD, EPSILON};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// A 2-dimensional vector with `f32` components.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0.0 { -self.x } else { self.x },
            y: if self.y < 0.0 { -self.y } else { self.y },
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    /// If the vector's length is near zero, it returns `Vec2::ZERO`.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON * EPSILON {
            *self * (1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Performs a linear interpolation between two vectors.
    /// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t.clamp(0.0, 1.0)
    }

    /// Returns this vector scaled down so its length does not exceed `max`.
    ///
    /// A non-positive `max` clamps to `Vec2::ZERO`. Vectors already within
    /// the limit are returned unchanged, preserving their exact components.
    #[inline]
    pub fn clamp_length(self, max: f32) -> Self {
        if max <= 0.0 {
            return Self::ZERO;
        }
        let len_sq = self.length_squared();
        if len_sq > max * max {
            self * (max / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Resolves a heading given in degrees into a vector of length `magnitude`.
    ///
    /// Headings follow the entity convention: 0 degrees points up (negative Y
    /// in screen space) and positive angles turn clockwise, so 90 degrees
    /// points right.
    #[inline]
    pub fn from_heading_deg(degrees: f32, magnitude: f32) -> Self {
        let radians = degrees * DEG_TO_RAD;
        Self {
            x: radians.sin() * magnitude,
            y: -radians.cos() * magnitude,
        }
    }
}

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    /// Multiplies each component of the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    /// Divides each component of the vector by a scalar.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    /// Negates each component of the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    /// Accesses a component by index (`0` = x, `1` = y).
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    /// Mutably accesses a component by index (`0` = x, `1` = y).
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vec2_basic_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);

        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
        assert_eq!(b * 2.0, Vec2::new(6.0, -8.0));
        assert_eq!(-b, Vec2::new(-3.0, 4.0));
        assert_eq!(b.abs(), Vec2::new(3.0, 4.0));
        assert_relative_eq!(b.length(), 5.0);
    }

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn clamp_length_scales_only_when_exceeded() {
        let v = Vec2::new(40.0, 0.0);
        assert_eq!(v.clamp_length(20.0), Vec2::new(20.0, 0.0));

        // Within the limit the exact components are preserved.
        let w = Vec2::new(3.0, 4.0);
        assert_eq!(w.clamp_length(10.0), w);

        let diagonal = Vec2::new(30.0, 40.0).clamp_length(25.0);
        assert_relative_eq!(diagonal.length(), 25.0, max_relative = 1e-5);
    }

    #[test]
    fn heading_zero_degrees_points_up() {
        let v = Vec2::from_heading_deg(0.0, 2.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn heading_ninety_degrees_points_right() {
        let v = Vec2::from_heading_deg(90.0, 2.0);
        assert_relative_eq!(v.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-4);
    }
}
