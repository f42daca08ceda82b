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

use std::fmt::Debug;

use num_traits::Float;

/// Tolerance shared by every predicate of the kernel.
///
/// All derived equalities (points, vectors, planes, lines) go through this one
/// value; mixing tolerances breaks their transitivity.
pub const EPSILON: f64 = 1e-10;

/// Sign of a scalar, with a zero band of width `tolerance()` around 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

pub trait Scalar: Float + Debug {
    fn tolerance() -> Self;

    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < Self::tolerance()
    }

    fn is_zero_eps(self) -> bool {
        self.abs() < Self::tolerance()
    }

    fn is_positive_eps(self) -> bool {
        self >= Self::tolerance()
    }

    fn is_negative_eps(self) -> bool {
        self <= -Self::tolerance()
    }

    fn sign(self) -> Sign {
        if self.is_zero_eps() {
            Sign::Zero
        } else if self > Self::zero() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn tolerance() -> Self {
        EPSILON
    }
}

#[inline]
pub fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    a.approx_eq(b)
}

/// `a > b` or `a ≈ b`.
#[inline]
pub fn approx_geq<T: Scalar>(a: T, b: T) -> bool {
    a > b || a.approx_eq(b)
}

/// `a < b` or `a ≈ b`.
#[inline]
pub fn approx_leq<T: Scalar>(a: T, b: T) -> bool {
    a < b || a.approx_eq(b)
}

/// Inclusive, tolerance-aware `lo <= x <= hi`.
///
/// `lo <= hi` is a precondition; calling this with a reversed range is a logic
/// error and trips a debug assertion.
#[inline]
pub fn in_range<T: Scalar>(lo: T, x: T, hi: T) -> bool {
    debug_assert!(approx_leq(lo, hi), "in_range: lo {lo:?} > hi {hi:?}");
    approx_leq(lo, x) && approx_leq(x, hi)
}
