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
    error::{GeometryError, GeometryResult},
    geometry::{point::Point3, vector::Vector3},
};

/// An infinite line: anchor point plus unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Line3 {
    direction: Vector3,
    anchor: Point3,
}

impl Line3 {
    pub fn new(direction: Vector3, anchor: Point3) -> GeometryResult<Self> {
        let direction = direction.normalized();
        if direction.is_zero() {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(Line3 { direction, anchor })
    }

    /// The line through `p` and `q`, directed from `p` to `q`.
    pub fn through(p: &Point3, q: &Point3) -> GeometryResult<Self> {
        Line3::new(p.vector_to(q), *p)
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        self.anchor.add_vector(&(self.direction * t))
    }

    /// Coordinate of the orthogonal projection of `p` along the line.
    pub fn parameter_of(&self, p: &Point3) -> f64 {
        self.direction.dot(&self.anchor.vector_to(p))
    }

    pub fn is_parallel_to(&self, other: &Line3) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }

    pub fn has_point(&self, q: &Point3) -> bool {
        self.direction.cross(&self.anchor.vector_to(q)).is_zero()
    }
}

impl PartialEq for Line3 {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel_to(other) && other.has_point(&self.anchor)
    }
}
