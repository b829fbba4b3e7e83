//! The binary outcome every test function and check produces.

use std::fmt;

/// Status code of a passing test.
pub const PASS: i32 = 1;
/// Status code of a failing test.
pub const FAIL: i32 = 0;

/// Outcome of a single check or of a whole test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// The numeric status code (`PASS` = 1, `FAIL` = 0).
    pub fn code(self) -> i32 {
        match self {
            Verdict::Pass => PASS,
            Verdict::Fail => FAIL,
        }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }

    pub fn is_fail(self) -> bool {
        self == Verdict::Fail
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "passed"),
            Verdict::Fail => write!(f, "failed"),
        }
    }
}
