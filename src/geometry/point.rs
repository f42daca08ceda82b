// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::Index;

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::vector::Vector3,
    numeric::approx_eq,
};

/// A location in 3D space. Coordinates are never NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point3 {
    coords: [f64; 3],
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> GeometryResult<Self> {
        if x.is_nan() || y.is_nan() || z.is_nan() {
            return Err(GeometryError::NaNParameter);
        }
        Ok(Point3 { coords: [x, y, z] })
    }

    pub fn origin() -> Self {
        Point3 { coords: [0.0; 3] }
    }

    /// Caller guarantees the coordinates are not NaN.
    pub(crate) fn from_coords_unchecked(coords: [f64; 3]) -> Self {
        debug_assert!(coords.iter().all(|c| !c.is_nan()));
        Point3 { coords }
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    pub fn coords(&self) -> &[f64; 3] {
        &self.coords
    }

    /// The position vector of this point (displacement from the origin).
    pub fn as_vector(&self) -> Vector3 {
        Vector3::from_coords_unchecked(self.coords)
    }

    pub fn add_vector(&self, v: &Vector3) -> Point3 {
        Point3 {
            coords: [self[0] + v[0], self[1] + v[1], self[2] + v[2]],
        }
    }

    /// Displacement from `self` to `other`.
    pub fn vector_to(&self, other: &Point3) -> Vector3 {
        Vector3::between(self, other)
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.vector_to(other).length()
    }

    pub fn midpoint(&self, other: &Point3) -> Point3 {
        Point3 {
            coords: std::array::from_fn(|i| (self.coords[i] + other.coords[i]) * 0.5),
        }
    }

    /// Arithmetic mean of `points`; the origin for an empty slice.
    pub fn centroid(points: &[Point3]) -> Point3 {
        if points.is_empty() {
            return Point3::origin();
        }
        let mut sum = Vector3::zero();
        for p in points {
            sum += p.as_vector();
        }
        (sum * (1.0 / points.len() as f64)).as_point()
    }
}

impl Index<usize> for Point3 {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Self) -> bool {
        (0..3).all(|i| approx_eq(self.coords[i], other.coords[i]))
    }
}

impl TryFrom<[f64; 3]> for Point3 {
    type Error = GeometryError;

    fn try_from(coords: [f64; 3]) -> Result<Self, Self::Error> {
        Point3::new(coords[0], coords[1], coords[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.coords
    }
}
