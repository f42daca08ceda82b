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

use crate::{
    geometry::{point::Point3, vector::Vector3},
    numeric::approx_leq,
};

/// An axis-aligned bounding box. Used only as a conservative pre-test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    min: Point3,
    max: Point3,
}

impl Aabb3 {
    /// The smallest box containing both corners, given in any order.
    pub fn new(a: &Point3, b: &Point3) -> Self {
        Aabb3 {
            min: Point3::from_coords_unchecked(std::array::from_fn(|i| a[i].min(b[i]))),
            max: Point3::from_coords_unchecked(std::array::from_fn(|i| a[i].max(b[i]))),
        }
    }

    /// The smallest box containing every point, `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Aabb3::new(first, first), |acc, p| acc.union(&Aabb3::new(p, p))),
        )
    }

    pub fn min(&self) -> &Point3 {
        &self.min
    }

    pub fn max(&self) -> &Point3 {
        &self.max
    }

    pub fn union(&self, other: &Aabb3) -> Aabb3 {
        Aabb3 {
            min: Point3::from_coords_unchecked(std::array::from_fn(|i| {
                self.min[i].min(other.min[i])
            })),
            max: Point3::from_coords_unchecked(std::array::from_fn(|i| {
                self.max[i].max(other.max[i])
            })),
        }
    }

    /// Closed-interval overlap on every axis: boxes touching at a face, an
    /// edge or a single corner intersect.
    pub fn intersects(&self, other: &Aabb3) -> bool {
        (0..3).all(|i| approx_leq(self.min[i], other.max[i]) && approx_leq(other.min[i], self.max[i]))
    }

    pub fn contains_point(&self, p: &Point3) -> bool {
        (0..3).all(|i| approx_leq(self.min[i], p[i]) && approx_leq(p[i], self.max[i]))
    }

    pub fn translated(&self, v: &Vector3) -> Aabb3 {
        Aabb3 {
            min: self.min.add_vector(v),
            max: self.max.add_vector(v),
        }
    }
}
