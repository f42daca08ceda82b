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
    geometry::{line::Line3, point::Point3, vector::Vector3},
    numeric::Scalar,
};

/// A plane given by a unit normal and a point on it.
#[derive(Clone, Copy, Debug)]
pub struct Plane3 {
    normal: Vector3,
    anchor: Point3,
}

impl Plane3 {
    pub fn new(normal: Vector3, anchor: Point3) -> GeometryResult<Self> {
        let normal = normal.normalized();
        if normal.is_zero() {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(Plane3 { normal, anchor })
    }

    /// Plane through three points, oriented by `(p2 - p1) × (p3 - p1)` and
    /// anchored at `p1`.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> GeometryResult<Self> {
        let normal = p1.vector_to(p2).cross(&p1.vector_to(p3));
        Plane3::new(normal, *p1)
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// `d` in `normal · x = d`.
    pub fn offset(&self) -> f64 {
        self.normal.dot(&self.anchor.as_vector())
    }

    /// Positive on the side the normal points toward.
    pub fn signed_distance(&self, q: &Point3) -> f64 {
        self.normal.dot(&self.anchor.vector_to(q))
    }

    pub fn has_point(&self, q: &Point3) -> bool {
        self.signed_distance(q).is_zero_eps()
    }

    pub fn is_parallel_to(&self, other: &Plane3) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }

    pub fn intersect(&self, other: &Plane3) -> Option<Line3> {
        intersect_planes(self, other)
    }

    pub fn translated(&self, v: &Vector3) -> Plane3 {
        Plane3 {
            normal: self.normal,
            anchor: self.anchor.add_vector(v),
        }
    }
}

impl PartialEq for Plane3 {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel_to(other) && other.has_point(&self.anchor)
    }
}

/// Line shared by two planes, `None` when they are parallel.
///
/// The anchor is the point of the line lying in the span of both normals,
/// `a·n1 + b·n2`, solved in closed form from the plane offsets.
pub fn intersect_planes(p1: &Plane3, p2: &Plane3) -> Option<Line3> {
    let n1 = p1.normal;
    let n2 = p2.normal;
    let direction = n1.cross(&n2);
    if direction.is_zero() {
        return None;
    }

    let s1 = p1.offset();
    let s2 = p2.offset();
    let k = n1.dot(&n2);
    let denom = k * k - 1.0;
    debug_assert!(denom != 0.0, "intersect_planes: parallel normals");

    let a = (s2 * k - s1) / denom;
    let b = (s1 * k - s2) / denom;
    let anchor = (n1 * a + n2 * b).as_point();

    Line3::new(direction, anchor).ok()
}
