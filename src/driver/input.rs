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

use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("not a number: {token:?}")]
    Parse { token: String },
    #[error("record count must be a positive integer")]
    BadCount,
    #[error("expected {expected} numbers, found {found}")]
    Incomplete { expected: usize, found: usize },
}

/// Cap on the buffer reserved from the record count alone.
const MAX_PREALLOC: usize = 1 << 16;

/// Read a record stream.
///
/// Format (whitespace separated, line breaks irrelevant):
///   N
///   x1 y1 z1 x2 y2 z2 x3 y3 z3   (N times)
///
/// Returns the `9 * N` numbers in order. Tokens are parsed as lines are read;
/// reading stops once the last record is complete and anything after it is
/// ignored.
pub fn read_input<R: BufRead>(reader: R) -> Result<Vec<f64>, InputError> {
    let mut expected: Option<usize> = None;
    let mut values = Vec::new();

    'lines: for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let Some(total) = expected else {
                let total = token
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .and_then(|n| n.checked_mul(9))
                    .ok_or(InputError::BadCount)?;
                values.reserve(total.min(MAX_PREALLOC));
                expected = Some(total);
                continue;
            };

            let value = token.parse::<f64>().map_err(|_| InputError::Parse {
                token: token.to_owned(),
            })?;
            values.push(value);
            if values.len() == total {
                break 'lines;
            }
        }
    }

    let expected = expected.ok_or(InputError::BadCount)?;
    if values.len() < expected {
        return Err(InputError::Incomplete {
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

/// Write records in the format accepted by [`read_input`], one point per
/// line and a blank line after each record.
pub fn write_input<W: Write>(out: &mut W, records: &[[[f64; 3]; 3]]) -> io::Result<()> {
    writeln!(out, "{}", records.len())?;
    for record in records {
        for p in record {
            writeln!(out, "{} {} {}", p[0], p[1], p[2])?;
        }
        writeln!(out)?;
    }
    out.flush()
}
