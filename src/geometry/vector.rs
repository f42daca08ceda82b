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

use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::point::Point3,
    numeric::{Scalar, approx_eq},
};

/// A free displacement in 3D space. Components are never NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3 {
    coords: [f64; 3],
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> GeometryResult<Self> {
        if x.is_nan() || y.is_nan() || z.is_nan() {
            return Err(GeometryError::NaNParameter);
        }
        Ok(Vector3 { coords: [x, y, z] })
    }

    pub fn zero() -> Self {
        Vector3 { coords: [0.0; 3] }
    }

    pub(crate) fn from_coords_unchecked(coords: [f64; 3]) -> Self {
        Vector3 { coords }
    }

    /// `end - start`, component-wise.
    pub fn between(start: &Point3, end: &Point3) -> Self {
        Vector3 {
            coords: [end[0] - start[0], end[1] - start[1], end[2] - start[2]],
        }
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

    /// The point this vector reaches when applied at the origin.
    pub fn as_point(&self) -> Point3 {
        Point3::from_coords_unchecked(self.coords)
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self[0] * other[0] + self[1] * other[1] + self[2] * other[2]
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            coords: [
                self[1] * other[2] - self[2] * other[1],
                self[2] * other[0] - self[0] * other[2],
                self[0] * other[1] - self[1] * other[0],
            ],
        }
    }

    /// `self · (b × c)`: signed volume of the parallelepiped spanned by the
    /// three vectors. Zero iff they are coplanar.
    pub fn triple(&self, b: &Vector3, c: &Vector3) -> f64 {
        self.dot(&b.cross(c))
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.length().is_zero_eps()
    }

    /// Unit vector in the same direction, or the zero vector when the length
    /// is within tolerance of 0.
    pub fn normalized(&self) -> Vector3 {
        let len = self.length();
        if len.is_zero_eps() {
            return Vector3::zero();
        }
        *self * (1.0 / len)
    }

    /// Same direction up to sign, compared on the unit vectors.
    pub fn is_parallel_to(&self, other: &Vector3) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        a == b || a == -b
    }
}

pub fn triple_product(a: &Vector3, b: &Vector3, c: &Vector3) -> f64 {
    a.triple(b, c)
}

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        (0..3).all(|i| approx_eq(self.coords[i], other.coords[i]))
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            coords: std::array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        for i in 0..3 {
            self.coords[i] += rhs.coords[i];
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            coords: std::array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3 {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3 {
            coords: self.coords.map(|c| c * s),
        }
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl TryFrom<[f64; 3]> for Vector3 {
    type Error = GeometryError;

    fn try_from(coords: [f64; 3]) -> Result<Self, Self::Error> {
        Vector3::new(coords[0], coords[1], coords[2])
    }
}
