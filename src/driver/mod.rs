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

//! Glue around the geometry kernel: reading record streams, classifying
//! records into primitives and reporting which primitives intersect.

pub mod generate;
pub mod input;
pub mod primitive;

use thiserror::Error;
use tracing::debug;

use crate::{error::GeometryError, geometry::Point3};

pub use input::{InputError, read_input, write_input};
pub use primitive::{Primitive, classify};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("record {index}: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },
}

/// Turn a flat list of numbers into primitives, 9 numbers per record.
///
/// A trailing partial record is ignored.
pub fn parse_records(values: &[f64]) -> Result<Vec<Primitive>, DriverError> {
    values
        .chunks_exact(9)
        .enumerate()
        .map(|(index, r)| {
            let with_index = |source| DriverError::Geometry { index, source };
            let p1 = Point3::new(r[0], r[1], r[2]).map_err(with_index)?;
            let p2 = Point3::new(r[3], r[4], r[5]).map_err(with_index)?;
            let p3 = Point3::new(r[6], r[7], r[8]).map_err(with_index)?;
            classify(p1, p2, p3).map_err(with_index)
        })
        .collect()
}

/// Sorted indices of the primitives that intersect at least one other one.
pub fn intersecting_indices(primitives: &[Primitive]) -> Vec<usize> {
    let boxes: Vec<_> = primitives.iter().map(Primitive::bounding_box).collect();
    let mut hit = vec![false; primitives.len()];
    let mut tests = 0usize;

    for i in 0..primitives.len() {
        for j in (i + 1)..primitives.len() {
            if hit[i] && hit[j] {
                continue;
            }
            if !boxes[i].intersects(&boxes[j]) {
                continue;
            }
            tests += 1;
            if primitives[i].intersects(&primitives[j]) {
                hit[i] = true;
                hit[j] = true;
            }
        }
    }

    let indices: Vec<usize> = (0..primitives.len()).filter(|i| hit[*i]).collect();
    debug!(
        primitives = primitives.len(),
        exact_tests = tests,
        intersecting = indices.len(),
        "pairwise pass done"
    );
    indices
}
