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

//! Provides geometric primitive shapes for spatial calculations.

use super::Vec2;

/// Represents a 2D Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corner points. Entity bounds are pure
/// functions of a body's current vertex extents, expressed through this type.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Aabb2 {
    /// The corner of the box with the smallest coordinates on both axes.
    pub min: Vec2,
    /// The corner of the box with the largest coordinates on both axes.
    pub max: Vec2,
}

impl Aabb2 {
    /// Creates a new `Aabb2` from two corner points.
    ///
    /// The `min` field always holds the component-wise minimum and `max` the
    /// component-wise maximum, regardless of the order the points are passed in.
    #[inline]
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Computes the bounding box of a point set.
    ///
    /// Returns a degenerate box at the origin for an empty set, so callers
    /// with missing geometry read zero extents rather than panicking.
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let mut min = *first;
        let mut max = *first;
        for point in iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Self { min, max }
    }

    /// The box's extent along the X-axis.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// The box's extent along the Y-axis.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Half of the box's extent along the X-axis.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width() / 2.0
    }

    /// Half of the box's extent along the Y-axis.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height() / 2.0
    }

    /// The center point of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_tracks_extents() {
        let bounds = Aabb2::from_points(&[
            Vec2::new(-1.0, 4.0),
            Vec2::new(3.0, -2.0),
            Vec2::new(0.5, 0.5),
        ]);

        assert_eq!(bounds.min, Vec2::new(-1.0, -2.0));
        assert_eq!(bounds.max, Vec2::new(3.0, 4.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.half_width(), 2.0);
        assert_eq!(bounds.half_height(), 3.0);
    }

    #[test]
    fn empty_point_set_yields_zero_extents() {
        let bounds = Aabb2::from_points(&[]);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn from_min_max_reorders_corners() {
        let bounds = Aabb2::from_min_max(Vec2::new(5.0, -1.0), Vec2::new(-5.0, 1.0));
        assert_eq!(bounds.min, Vec2::new(-5.0, -1.0));
        assert_eq!(bounds.max, Vec2::new(5.0, 1.0));
    }
}
