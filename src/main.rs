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

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    process::ExitCode,
    str::FromStr,
};

use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tri3d::driver::{self, DriverError, InputError, generate};

const USAGE: &str = "usage:
  tri3d [FILE]                                 report intersecting records
  tri3d gen uniform N LO HI [SEED]             random records in [LO, HI)^3
  tri3d gen clustered N CENTRE SIZE [SEED]     small records around random centres";

#[derive(Debug, Error)]
enum CliError {
    #[error("{}", USAGE)]
    Usage,
    #[error("invalid {name}: {value:?}")]
    BadArg { name: &'static str, value: String },
    #[error(transparent)]
    Driver(#[from] DriverError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<InputError> for CliError {
    fn from(e: InputError) -> Self {
        CliError::Driver(e.into())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage) => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    match args {
        [cmd, rest @ ..] if cmd == "gen" => run_generate(rest),
        [] => report(io::stdin().lock()),
        [path] => report(BufReader::new(File::open(path)?)),
        _ => Err(CliError::Usage),
    }
}

fn report<R: io::BufRead>(reader: R) -> Result<(), CliError> {
    let values = driver::read_input(reader)?;
    let primitives = driver::parse_records(&values)?;
    let indices = driver::intersecting_indices(&primitives);

    let mut out = BufWriter::new(io::stdout().lock());
    for i in indices {
        writeln!(out, "{i}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_generate(args: &[String]) -> Result<(), CliError> {
    let (kind, n, a, b, seed) = match args {
        [kind, n, a, b] => (kind, n, a, b, None),
        [kind, n, a, b, seed] => (kind, n, a, b, Some(parse_arg::<u64>("seed", seed)?)),
        _ => return Err(CliError::Usage),
    };
    let n = parse_arg::<usize>("N", n)?;
    let lo = parse_arg::<f64>("bound", a)?;
    let hi = parse_arg::<f64>("bound", b)?;

    // an empty sampling range yields identical, degenerate records
    let bounds_ok = match kind.as_str() {
        "uniform" => lo < hi,
        "clustered" => lo > 0.0 && hi > 0.0,
        _ => return Err(CliError::Usage),
    };
    if !bounds_ok {
        return Err(CliError::BadArg {
            name: "bounds",
            value: format!("{a} {b}"),
        });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let records = if kind == "uniform" {
        generate::uniform_triangles(&mut rng, n, lo, hi)
    } else {
        generate::clustered_triangles(&mut rng, n, lo, hi)
    };

    let mut out = BufWriter::new(io::stdout().lock());
    driver::write_input(&mut out, &records)?;
    Ok(())
}

fn parse_arg<T: FromStr>(name: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::BadArg {
        name,
        value: value.to_owned(),
    })
}
