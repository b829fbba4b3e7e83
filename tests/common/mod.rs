//! Shared helpers for the harness integration tests.

#![allow(dead_code)]

use ctest::{fenv, Capture, ExceptionFlags, Harness};

/// A harness writing uncolored output into a buffer the test can read.
pub fn capture_harness() -> (Harness, Capture) {
    let capture = Capture::plain();
    let harness = Harness::with_sink(capture.sink());
    (harness, capture)
}

/// Clears the exception latch of the current test thread.
pub fn clear_flags() {
    fenv::clear_except(ExceptionFlags::ALL);
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

pub fn divide(a: i32, b: i32) -> f32 {
    fenv::div(a as f32, b as f32)
}

/// Number of lines in `out` that start a failure report.
pub fn failure_lines(out: &str) -> usize {
    out.lines()
        .filter(|line| {
            let line = line.trim_start();
            line.starts_with("fail ") || line.starts_with("assessment fail ")
        })
        .count()
}
