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

use tracing::trace;

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::{
        aabb::Aabb3, plane::Plane3, point::Point3, segment::Segment3, tri_tri_intersect,
        vector::Vector3,
    },
    numeric::{Scalar, Sign, approx_geq, approx_leq},
};

/// A non-degenerate triangle with its supporting plane and bounding box.
///
/// The plane normal is `(p2 - p1) × (p3 - p1)` normalized, so the vertices run
/// counter-clockwise when seen from the side the normal points to.
#[derive(Clone, Copy, Debug)]
pub struct Triangle3 {
    vertices: [Point3; 3],
    plane: Plane3,
    bbox: Aabb3,
}

impl Triangle3 {
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> GeometryResult<Self> {
        if p1 == p2 || p2 == p3 || p1 == p3 {
            return Err(GeometryError::DegenerateTriangle);
        }
        // distinct but collinear vertices only show up as a degenerate plane
        let plane = Plane3::from_points(&p1, &p2, &p3)
            .map_err(|_| GeometryError::DegenerateTriangle)?;
        let vertices = [p1, p2, p3];
        let bbox = Aabb3::new(&p1, &p2).union(&Aabb3::new(&p3, &p3));
        Ok(Triangle3 {
            vertices,
            plane,
            bbox,
        })
    }

    pub fn p1(&self) -> &Point3 {
        &self.vertices[0]
    }

    pub fn p2(&self) -> &Point3 {
        &self.vertices[1]
    }

    pub fn p3(&self) -> &Point3 {
        &self.vertices[2]
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane3 {
        &self.plane
    }

    pub fn bounding_box(&self) -> &Aabb3 {
        &self.bbox
    }

    pub fn centroid(&self) -> Point3 {
        Point3::centroid(&self.vertices)
    }

    /// Edges `p1→p2`, `p2→p3`, `p3→p1`.
    pub fn edges(&self) -> [Segment3; 3] {
        let v = &self.vertices;
        std::array::from_fn(|i| Segment3::new_unchecked(v[i], v[(i + 1) % 3]))
    }

    /// Rigid translation; plane and box move with the vertices.
    pub fn translated(&self, v: &Vector3) -> Triangle3 {
        Triangle3 {
            vertices: self.vertices.map(|p| p.add_vector(v)),
            plane: self.plane.translated(v),
            bbox: self.bbox.translated(v),
        }
    }

    /// Inside or on the boundary.
    pub fn has_point(&self, p: &Point3) -> bool {
        if !self.plane.has_point(p) {
            return false;
        }

        let n = self.plane.normal();
        let v = &self.vertices;
        let side: [f64; 3] = std::array::from_fn(|i| {
            let edge = v[i].vector_to(&v[(i + 1) % 3]);
            edge.cross(&v[i].vector_to(p)).dot(n)
        });

        side.iter().all(|s| approx_geq(*s, 0.0)) || side.iter().all(|s| approx_leq(*s, 0.0))
    }

    pub fn intersects_segment(&self, seg: &Segment3) -> bool {
        if !self.bbox.intersects(seg.bounding_box()) {
            return false;
        }

        if self.has_point(seg.start()) || self.has_point(seg.end()) {
            return true;
        }

        let d_start = self.plane.signed_distance(seg.start());
        let d_end = self.plane.signed_distance(seg.end());
        match (d_start.sign(), d_end.sign()) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => false,
            // lying in the plane with both ends outside: it must cross an edge
            (Sign::Zero, Sign::Zero) => self.edges().iter().any(|e| e.intersects_segment(seg)),
            _ => {
                let t = -d_start / seg.vector().dot(self.plane.normal());
                let crossing = seg.start().add_vector(&(*seg.vector() * t));
                self.has_point(&crossing)
            }
        }
    }

    pub fn intersects_triangle(&self, other: &Triangle3) -> bool {
        if !self.bbox.intersects(&other.bbox) {
            trace!("triangle pair rejected by bounding boxes");
            return false;
        }

        let mut all = [Point3::origin(); 6];
        all[..3].copy_from_slice(&self.vertices);
        all[3..].copy_from_slice(&other.vertices);
        let shift = -Point3::centroid(&all).as_vector();

        tri_tri_intersect::triangles_intersect(&self.translated(&shift), &other.translated(&shift))
    }
}

/// Signed distances of the vertices of `tri` to `plane`.
pub(crate) fn vertex_distances(plane: &Plane3, tri: &Triangle3) -> [f64; 3] {
    tri.vertices.map(|p| plane.signed_distance(&p))
}

/// True when all three values are strictly on the same side of zero.
pub(crate) fn strictly_one_side(dists: &[f64; 3]) -> bool {
    dists.iter().all(|d| d.is_positive_eps()) || dists.iter().all(|d| d.is_negative_eps())
}
