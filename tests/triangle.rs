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

use tri3d::GeometryError;
use tri3d::geometry::{Point3, Segment3, Triangle3, Vector3};

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z).unwrap()
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle3 {
    Triangle3::new(p(a[0], a[1], a[2]), p(b[0], b[1], b[2]), p(c[0], c[1], c[2])).unwrap()
}

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment3 {
    Segment3::new(p(a[0], a[1], a[2]), p(b[0], b[1], b[2])).unwrap()
}

#[test]
fn test_triangle_construction() {
    let t = tri([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [-7.0, 8.0, 9.0]);
    assert_eq!(*t.p1(), p(1.0, 2.0, 3.0));
    assert_eq!(*t.p2(), p(4.0, 5.0, 6.0));
    assert_eq!(*t.p3(), p(-7.0, 8.0, 9.0));
    assert_eq!(t.centroid(), p(-2.0 / 3.0, 5.0, 6.0));
    for v in t.vertices() {
        assert!(t.plane().has_point(v));
    }
}

#[test]
fn test_triangle_plane_normal() {
    let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    assert_eq!(*t.plane().normal(), Vector3::new(0.0, 0.0, 1.0).unwrap());

    let t = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
    assert_eq!(*t.plane().normal(), Vector3::new(0.0, 0.0, -1.0).unwrap());
}

#[test]
fn test_triangle_degenerate() {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 2.0, 3.0);
    for (x, y, z) in [(a, a, b), (a, b, b), (b, a, b), (a, a, a)] {
        assert_eq!(Triangle3::new(x, y, z).unwrap_err(), GeometryError::DegenerateTriangle);
    }

    let collinear = Triangle3::new(a, b, p(2.0, 4.0, 6.0));
    assert_eq!(collinear.unwrap_err(), GeometryError::DegenerateTriangle);
}

#[test]
fn test_triangle_edges() {
    let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let edges = t.edges();
    assert_eq!(*edges[0].start(), *t.p1());
    assert_eq!(*edges[0].end(), *t.p2());
    assert_eq!(*edges[1].end(), *t.p3());
    assert_eq!(*edges[2].end(), *t.p1());
}

fn check_has_point(t: &Triangle3) {
    for q in [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
        assert!(t.has_point(&p(q[0], q[1], q[2])), "vertex {q:?}");
    }
    for q in [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [0.0, 1.0, 1.0],
        [0.0, 0.0, 2.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, -1.0],
    ] {
        assert!(!t.has_point(&p(q[0], q[1], q[2])), "outside {q:?}");
    }
    for q in [
        [0.0, 0.2, 0.2],
        [0.0, 0.5, 0.5],
        [0.0, 0.8, 0.2],
        [0.0, 0.2, 0.8],
        [0.0, 0.5, 0.0],
        [0.0, 0.0, 0.5],
    ] {
        assert!(t.has_point(&p(q[0], q[1], q[2])), "inside {q:?}");
    }
}

#[test]
fn test_triangle_has_point() {
    check_has_point(&tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]));
    check_has_point(&tri([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]));
}

#[test]
fn test_triangle_intersects_segment() {
    let t = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);

    // endpoint on a vertex
    assert!(t.intersects_segment(&seg([0.0, 0.0, 0.0], [2.0, 2.0, 2.0])));
    assert!(t.intersects_segment(&seg([0.0, 1.0, 0.0], [2.0, 2.0, 2.0])));
    assert!(t.intersects_segment(&seg([0.0, 0.0, 1.0], [2.0, 2.0, 2.0])));
    assert!(t.intersects_segment(&seg([2.0, 2.0, 2.0], [0.0, 0.0, 0.0])));
    assert!(t.intersects_segment(&seg([2.0, 2.0, 2.0], [0.0, 1.0, 0.0])));
    assert!(t.intersects_segment(&seg([2.0, 2.0, 2.0], [0.0, 0.0, 1.0])));

    // piercing
    assert!(t.intersects_segment(&seg([1.0, 0.5, 0.5], [-1.0, 0.5, 0.5])));
    assert!(t.intersects_segment(&seg([1.0, 0.5, 0.5], [-1.0, 0.0, 0.0])));

    assert!(!t.intersects_segment(&seg([1.0, 1.0, 1.0], [2.0, 2.0, 2.0])));
    assert!(!t.intersects_segment(&seg([1.0, 0.0, 0.0], [1.0, 2.0, 2.0])));
    assert!(!t.intersects_segment(&seg([-1.0, 0.0, 0.0], [-1.0, 2.0, 2.0])));

    // crosses the plane outside the triangle
    assert!(!t.intersects_segment(&seg([1.0, 2.5, 0.5], [-1.0, 2.5, 0.5])));
    assert!(!t.intersects_segment(&seg([1.0, 0.5, 2.5], [-1.0, 0.5, 2.5])));
}

#[test]
fn test_triangle_intersects_segment_in_plane() {
    let t = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);

    // both endpoints outside, segment cuts across the triangle
    assert!(t.intersects_segment(&seg([0.0, -1.0, 0.5], [0.0, 2.0, 0.5])));

    // in the plane, beyond the hypotenuse
    assert!(!t.intersects_segment(&seg([0.0, 0.9, 0.9], [0.0, 0.6, 1.0])));
}

#[test]
fn test_triangle_translated() {
    let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let shift = Vector3::new(3.0, -2.0, 5.0).unwrap();
    let moved = t.translated(&shift);

    assert_eq!(*moved.p1(), p(3.0, -2.0, 5.0));
    assert_eq!(*moved.plane().normal(), *t.plane().normal());
    assert!(moved.has_point(&p(3.25, -1.75, 5.0)));
    assert!(!moved.has_point(&p(0.25, 0.25, 0.0)));
    assert_eq!(*moved.bounding_box().max(), p(4.0, -1.0, 5.0));
}
