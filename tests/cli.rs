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

use std::io::Write;
use std::process::{Command, Stdio};

fn tri3d() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tri3d"))
}

fn run_with_stdin(input: &str) -> std::process::Output {
    let mut child = tri3d()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_cli_reports_intersections() {
    let input = "3\n\
                 0 0 0  1 0 0  0 1 0\n\
                 0.2 0.2 -1  0.2 0.2 -1  0.2 0.2 1\n\
                 10 10 10  11 10 10  10 11 10\n";
    let out = run_with_stdin(input);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "0\n1\n");
}

#[test]
fn test_cli_rejects_bad_input() {
    let out = run_with_stdin("2\n0 0 0 1 0 0");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_generate_then_report() {
    let out = tri3d()
        .args(["gen", "uniform", "20", "0", "10", "3"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let generated = String::from_utf8(out.stdout).unwrap();
    assert_eq!(generated.lines().next(), Some("20"));

    let report = run_with_stdin(&generated);
    assert!(report.status.success());
}

#[test]
fn test_cli_usage() {
    let out = tri3d().args(["gen", "spiral", "1", "0", "1"]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("usage"));

    let out = tri3d().args(["gen", "uniform", "many", "0", "1"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn test_cli_generate_rejects_empty_ranges() {
    for args in [
        ["gen", "uniform", "5", "3", "1"],
        ["gen", "uniform", "5", "2", "2"],
        ["gen", "clustered", "5", "10", "0"],
        ["gen", "clustered", "5", "-1", "1"],
    ] {
        let out = tri3d().args(args).output().unwrap();
        assert!(!out.status.success(), "{args:?}");
        assert!(out.stdout.is_empty(), "{args:?}");
    }
}
