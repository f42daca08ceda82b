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
    geometry::{aabb::Aabb3, point::Point3, vector::Vector3},
    numeric::{Scalar, approx_geq, approx_leq},
};

/// A bounded segment `[start, end]` with its displacement and box cached.
#[derive(Clone, Copy, Debug)]
pub struct Segment3 {
    start: Point3,
    end: Point3,
    vector: Vector3,
    bbox: Aabb3,
}

impl Segment3 {
    pub fn new(start: Point3, end: Point3) -> GeometryResult<Self> {
        Segment3::build(start, end, start.vector_to(&end))
    }

    /// The segment from `start` to `start + v`.
    pub fn from_vector(start: Point3, v: Vector3) -> GeometryResult<Self> {
        Segment3::build(start, start.add_vector(&v), v)
    }

    /// Caller guarantees `start != end`.
    pub(crate) fn new_unchecked(start: Point3, end: Point3) -> Self {
        Segment3 {
            start,
            end,
            vector: start.vector_to(&end),
            bbox: Aabb3::new(&start, &end),
        }
    }

    fn build(start: Point3, end: Point3, vector: Vector3) -> GeometryResult<Self> {
        if vector.is_zero() {
            return Err(GeometryError::DegenerateSegment);
        }
        Ok(Segment3 {
            start,
            end,
            vector,
            bbox: Aabb3::new(&start, &end),
        })
    }

    pub fn start(&self) -> &Point3 {
        &self.start
    }

    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// `end - start`.
    pub fn vector(&self) -> &Vector3 {
        &self.vector
    }

    pub fn length(&self) -> f64 {
        self.vector.length()
    }

    pub fn bounding_box(&self) -> &Aabb3 {
        &self.bbox
    }

    pub fn midpoint(&self) -> Point3 {
        self.start.midpoint(&self.end)
    }

    pub fn has_point(&self, q: &Point3) -> bool {
        let to_q = self.start.vector_to(q);
        self.vector.cross(&to_q).is_zero()
            && approx_geq(self.vector.dot(&to_q), 0.0)
            && approx_leq(to_q.length(), self.vector.length())
    }

    pub fn intersects_segment(&self, other: &Segment3) -> bool {
        let w = self.start.vector_to(&other.start);
        if !self.vector.triple(&other.vector, &w).is_zero_eps() {
            return false;
        }

        // touching, overlapping and collinear cases
        if self.has_point(&other.start)
            || self.has_point(&other.end)
            || other.has_point(&self.start)
            || other.has_point(&self.end)
        {
            return true;
        }

        let n = self.vector.cross(&other.vector);
        if n.is_zero() {
            return false;
        }

        let t = w.cross(&other.vector).dot(&n) / n.length_squared();
        let crossing = self.start.add_vector(&(self.vector * t));
        self.has_point(&crossing) && other.has_point(&crossing)
    }
}
