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

//! Random record streams for testing and benchmarking the pairwise pass.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::Rng;

pub type Record = [[f64; 3]; 3];

/// `n` records whose nine coordinates are drawn uniformly from `[lo, hi)`.
pub fn uniform_triangles<R: Rng>(rng: &mut R, n: usize, lo: f64, hi: f64) -> Vec<Record> {
    (0..n)
        .map(|_| std::array::from_fn(|_| std::array::from_fn(|_| sample(rng, lo, hi))))
        .collect()
}

/// `n` triangles whose vertices sit at distance `size` (drawn from
/// `[0, size_bound)`) from a centre drawn from `[0, centre_bound)³`, in random
/// directions. Gives small, locally dense triangles instead of long slivers.
pub fn clustered_triangles<R: Rng>(
    rng: &mut R,
    n: usize,
    centre_bound: f64,
    size_bound: f64,
) -> Vec<Record> {
    (0..n)
        .map(|_| {
            let centre: [f64; 3] = std::array::from_fn(|_| sample(rng, 0.0, centre_bound));
            let size = sample(rng, 0.0, size_bound);
            std::array::from_fn(|_| {
                let phi = sample(rng, 0.0, TAU);
                let psi = sample(rng, -FRAC_PI_2, FRAC_PI_2);
                [
                    centre[0] + size * phi.cos() * psi.cos(),
                    centre[1] + size * phi.sin() * psi.cos(),
                    centre[2] + size * psi.sin(),
                ]
            })
        })
        .collect()
}

fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}
