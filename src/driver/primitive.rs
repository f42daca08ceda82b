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

use tracing::debug;

use crate::{
    error::GeometryResult,
    geometry::{Aabb3, Point3, Segment3, Triangle3},
    numeric::approx_leq,
};

/// What a 9-number record degenerates to.
#[derive(Clone, Copy, Debug)]
pub enum Primitive {
    Point(Point3),
    Segment(Segment3),
    Triangle(Triangle3),
}

impl Primitive {
    pub fn bounding_box(&self) -> Aabb3 {
        match self {
            Primitive::Point(p) => Aabb3::new(p, p),
            Primitive::Segment(s) => *s.bounding_box(),
            Primitive::Triangle(t) => *t.bounding_box(),
        }
    }

    pub fn intersects(&self, other: &Primitive) -> bool {
        use Primitive::*;
        match (self, other) {
            (Point(p), Point(q)) => p == q,
            (Point(p), Segment(s)) | (Segment(s), Point(p)) => s.has_point(p),
            (Point(p), Triangle(t)) | (Triangle(t), Point(p)) => t.has_point(p),
            (Segment(a), Segment(b)) => a.intersects_segment(b),
            (Segment(s), Triangle(t)) | (Triangle(t), Segment(s)) => t.intersects_segment(s),
            (Triangle(a), Triangle(b)) => a.intersects_triangle(b),
        }
    }
}

/// Classify three points into the primitive they span.
///
/// Coincident points collapse to a point, a repeated point or collinear
/// points to the segment between the two outermost points, anything else is
/// a triangle.
pub fn classify(p1: Point3, p2: Point3, p3: Point3) -> GeometryResult<Primitive> {
    let equal_pairs = [p1 == p2, p2 == p3, p1 == p3]
        .iter()
        .filter(|e| **e)
        .count();

    let primitive = match equal_pairs {
        0 => {
            let v12 = p1.vector_to(&p2);
            let v13 = p1.vector_to(&p3);
            if !v12.cross(&v13).is_zero() {
                Primitive::Triangle(Triangle3::new(p1, p2, p3)?)
            } else {
                let d = v12.dot(&v13);
                let (a, b) = if approx_leq(d, 0.0) {
                    // p1 lies between p2 and p3
                    (p3, p2)
                } else if approx_leq(d, v12.length_squared()) {
                    (p1, p2)
                } else {
                    (p1, p3)
                };
                Primitive::Segment(Segment3::new(a, b)?)
            }
        }
        1 => {
            let (a, b) = if p1 == p2 { (p1, p3) } else { (p1, p2) };
            Primitive::Segment(Segment3::new(a, b)?)
        }
        // two equal pairs can only happen through tolerance chaining
        _ => Primitive::Point(p1),
    };
    debug!(?primitive, "classified record");
    Ok(primitive)
}
