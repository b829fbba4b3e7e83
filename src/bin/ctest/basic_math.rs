//! The library the demo suite exercises.

use ctest::fenv;

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

/// Float division; dividing by zero latches `DIVIDE_BY_ZERO`.
pub fn divide(a: i32, b: i32) -> f32 {
    fenv::div(a as f32, b as f32)
}
