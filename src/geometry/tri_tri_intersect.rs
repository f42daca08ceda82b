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

//! Triangle–triangle overlap in the style of Möller's interval test.
//!
//! Non-coplanar pairs are cut by the line shared by both planes; each triangle
//! covers an interval of that line and the pair intersects iff the intervals
//! overlap. Coplanar pairs fall back to a 2D separating-edge test.

use tracing::trace;

use crate::{
    geometry::{
        line::Line3,
        plane::intersect_planes,
        point::Point3,
        triangle::{Triangle3, strictly_one_side, vertex_distances},
    },
    numeric::{Scalar, Sign, in_range},
};

/// Overlap test on triangles already moved close to the origin.
pub(crate) fn triangles_intersect(a: &Triangle3, b: &Triangle3) -> bool {
    let d_b = vertex_distances(a.plane(), b);
    if strictly_one_side(&d_b) {
        trace!("triangle pair separated by the first plane");
        return false;
    }

    if all_zero(&d_b) {
        return coplanar_triangles_intersect(a, b);
    }
    if a.plane().is_parallel_to(b.plane()) {
        if a.plane() != b.plane() {
            trace!("triangle pair on distinct parallel planes");
            return false;
        }
        return coplanar_triangles_intersect(a, b);
    }

    let d_a = vertex_distances(b.plane(), a);
    if strictly_one_side(&d_a) {
        trace!("triangle pair separated by the second plane");
        return false;
    }
    if all_zero(&d_a) {
        return coplanar_triangles_intersect(b, a);
    }

    let Some(line) = intersect_planes(a.plane(), b.plane()) else {
        return false;
    };

    let ia = compute_interval(&line, a, d_a);
    let ib = compute_interval(&line, b, d_b);
    trace!(?ia, ?ib, "triangle intervals on the plane intersection line");
    intervals_overlap(ia, ib)
}

fn all_zero(dists: &[f64; 3]) -> bool {
    dists.iter().all(|d| d.is_zero_eps())
}

/// Intersection test for two triangles lying in the same plane.
///
/// An edge separates the pair when every vertex of the other triangle lies
/// strictly outside it, measured along the edge's outward in-plane normal.
/// No separating edge among the six means the triangles overlap.
pub fn coplanar_triangles_intersect(a: &Triangle3, b: &Triangle3) -> bool {
    debug_assert!(
        a.plane() == b.plane() || b.vertices().iter().all(|q| a.plane().has_point(q)),
        "coplanar_triangles_intersect: triangles are not coplanar"
    );
    !has_separating_edge(a, b) && !has_separating_edge(b, a)
}

fn has_separating_edge(tri: &Triangle3, other: &Triangle3) -> bool {
    let v = tri.vertices();
    let normal = tri.plane().normal();
    (0..3).any(|i| {
        let start = &v[i];
        let outward = start.vector_to(&v[(i + 1) % 3]).cross(normal);
        other
            .vertices()
            .iter()
            .all(|q| outward.dot(&start.vector_to(q)).is_positive_eps())
    })
}

/// Parameter interval along `line` covered by `tri`, where `dists` are the
/// signed distances of its vertices to the other triangle's plane.
///
/// The ends are returned in vertex order, not sorted.
pub fn compute_interval(line: &Line3, tri: &Triangle3, dists: [f64; 3]) -> (f64, f64) {
    let v = tri.vertices();
    let signs = dists.map(|d| d.sign());
    let zero_count = signs.iter().filter(|s| **s == Sign::Zero).count();
    debug_assert!(zero_count < 3, "compute_interval: triangle lies in the plane");

    let param = |p: &Point3| line.parameter_of(p);
    let cut = |i: usize, j: usize| param(&crossing(&v[i], dists[i], &v[j], dists[j]));

    match zero_count {
        0 => {
            let k = lone_sign(&signs);
            let (i, j) = others(k);
            (cut(i, k), cut(j, k))
        }
        1 => {
            let z = signs.iter().position(|s| *s == Sign::Zero).unwrap_or(0);
            let (i, j) = others(z);
            let t = param(&v[z]);
            if signs[i] == signs[j] {
                // touches the line at a single vertex
                (t, t)
            } else {
                (t, cut(i, j))
            }
        }
        2 => {
            let k = signs.iter().position(|s| *s != Sign::Zero).unwrap_or(2);
            let (i, j) = others(k);
            (param(&v[i]), param(&v[j]))
        }
        _ => {
            let ts = v.map(|p| param(&p));
            (ts[0].min(ts[1]).min(ts[2]), ts[0].max(ts[1]).max(ts[2]))
        }
    }
}

/// Overlap of two closed intervals whose ends may come in either order.
pub fn intervals_overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    let (a0, a1) = ordered(a);
    let (b0, b1) = ordered(b);
    in_range(b0, a0, b1) || in_range(b0, a1, b1) || in_range(a0, b0, a1) || in_range(a0, b1, a1)
}

fn ordered((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}

/// Index of the vertex whose sign differs from the other two.
fn lone_sign(signs: &[Sign; 3]) -> usize {
    debug_assert!(
        !(signs[0] == signs[1] && signs[1] == signs[2]),
        "compute_interval: all vertices on one side"
    );
    if signs[0] == signs[1] {
        2
    } else if signs[0] == signs[2] {
        1
    } else {
        0
    }
}

/// The two vertex indices other than `k`, ascending.
fn others(k: usize) -> (usize, usize) {
    match k {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Point where the edge `a → b` crosses the plane, given the signed distances
/// of its ends.
fn crossing(a: &Point3, da: f64, b: &Point3, db: f64) -> Point3 {
    a.add_vector(&(a.vector_to(b) * (da / (da - db))))
}
