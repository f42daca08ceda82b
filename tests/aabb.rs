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

use tri3d::geometry::{Aabb3, Point3, Vector3};

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z).unwrap()
}

fn bbox(a: [f64; 3], b: [f64; 3]) -> Aabb3 {
    Aabb3::new(&p(a[0], a[1], a[2]), &p(b[0], b[1], b[2]))
}

#[test]
fn test_aabb_corners_any_order() {
    let b = bbox([1.0, -1.0, 5.0], [-2.0, 3.0, 0.0]);
    assert_eq!(*b.min(), p(-2.0, -1.0, 0.0));
    assert_eq!(*b.max(), p(1.0, 3.0, 5.0));
}

#[test]
fn test_aabb_intersects() {
    let unit = bbox([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let b = bbox([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
    assert!(b.intersects(&b));

    // single corner, extreme and non-extreme
    assert!(unit.intersects(&bbox([0.0, 0.0, 0.0], [-1.0, -1.0, -1.0])));
    assert!(unit.intersects(&bbox([1.0, -1.0, 1.0], [2.0, 0.0, 2.0])));

    // shared edge
    assert!(unit.intersects(&bbox([2.0, 0.0, 2.0], [1.0, -1.0, -1.0])));

    // containment
    assert!(unit.intersects(&bbox([-1.0, -1.0, -1.0], [2.0, 2.0, 2.0])));

    // shared face and slab
    assert!(unit.intersects(&bbox([2.0, 0.0, 2.0], [-1.0, -1.0, -1.0])));
    assert!(unit.intersects(&bbox([-1.0, 0.5, -1.0], [2.0, 0.7, 2.0])));
}

#[test]
fn test_aabb_disjoint() {
    let unit = bbox([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    assert!(!unit.intersects(&bbox([1.5, 0.0, 0.0], [2.0, 1.0, 1.0])));
    assert!(!unit.intersects(&bbox([0.0, 0.0, -2.0], [1.0, 1.0, -0.5])));
    assert!(!unit.intersects(&bbox([2.0, 2.0, 2.0], [3.0, 3.0, 3.0])));
}

#[test]
fn test_aabb_intersects_is_symmetric() {
    let boxes = [
        bbox([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
        bbox([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]),
        bbox([0.5, -3.0, 0.5], [0.6, 3.0, 0.6]),
        bbox([5.0, 5.0, 5.0], [6.0, 6.0, 6.0]),
    ];
    for a in &boxes {
        assert!(a.intersects(a));
        for b in &boxes {
            assert_eq!(a.intersects(b), b.intersects(a));
        }
    }
}

#[test]
fn test_aabb_from_points() {
    assert!(Aabb3::from_points(&[]).is_none());

    let single = Aabb3::from_points(&[p(1.0, 2.0, 3.0)]).unwrap();
    assert_eq!(*single.min(), *single.max());

    let b = Aabb3::from_points(&[p(1.0, 0.0, 0.0), p(0.0, -2.0, 0.0), p(0.0, 0.0, 3.0)]).unwrap();
    assert_eq!(*b.min(), p(0.0, -2.0, 0.0));
    assert_eq!(*b.max(), p(1.0, 0.0, 3.0));
}

#[test]
fn test_aabb_contains_union_translate() {
    let a = bbox([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    assert!(a.contains_point(&p(1.0, 0.5, 0.0)));
    assert!(!a.contains_point(&p(1.1, 0.5, 0.0)));

    let u = a.union(&bbox([2.0, -1.0, 0.5], [3.0, 0.0, 0.5]));
    assert_eq!(*u.min(), p(0.0, -1.0, 0.0));
    assert_eq!(*u.max(), p(3.0, 1.0, 1.0));

    let moved = a.translated(&Vector3::new(1.0, 1.0, 1.0).unwrap());
    assert_eq!(moved, bbox([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]));
    assert!(a.intersects(&moved));
}
