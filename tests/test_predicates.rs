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

use tri3d::numeric::{EPSILON, Scalar, Sign, approx_eq, approx_geq, approx_leq, in_range};

#[test]
fn test_approx_eq() {
    assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
    assert!(approx_eq(0.1 + 0.2, 0.3));
}

#[test]
fn test_approx_ordering() {
    assert!(approx_geq(2.0, 1.0));
    assert!(approx_geq(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_geq(1.0, 2.0));

    assert!(approx_leq(1.0, 2.0));
    assert!(approx_leq(1.0 + EPSILON / 2.0, 1.0));
    assert!(!approx_leq(2.0, 1.0));
}

#[test]
fn test_in_range() {
    assert!(in_range(-1.0, 0.0, 1.0));
    assert!(in_range(0.0, 0.0, 1.0));
    assert!(in_range(-1.0, 0.0, 0.0));
    assert!(in_range(0.0, 0.0, 0.0));

    assert!(!in_range(1.0, 5.0, 2.0));
    assert!(!in_range(1.0, -3.0, 2.0));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn test_in_range_reversed_bounds() {
    in_range(1.0, 0.0, -1.0);
}

#[test]
fn test_sign() {
    assert_eq!(3.0_f64.sign(), Sign::Positive);
    assert_eq!((-3.0_f64).sign(), Sign::Negative);
    assert_eq!((EPSILON / 10.0).sign(), Sign::Zero);
    assert_eq!((-EPSILON / 10.0).sign(), Sign::Zero);
    assert_eq!(f64::tolerance(), EPSILON);
}
