//! CTest: a small unit-testing harness.
//!
//! Tests are plain functions taking `&mut Harness` and returning a
//! [`Verdict`]. Inside, `assert_*!` macros decide the verdict and return it
//! immediately, while `assess_*!` macros record outcomes and let the test keep
//! checking. The runner groups tests, aggregates outcomes and prints a
//! colorized report to the configured sink.
//!
//! ```rust,no_run
//! use ctest::{assert_equal, run_test, test_group, Harness, HarnessConfig, Verdict};
//!
//! fn add_two_numbers(h: &mut Harness) -> Verdict {
//!     let result = 1 + 2;
//!     assert_equal!(h, result, 3);
//! }
//!
//! let mut h = Harness::with_config(&HarnessConfig::default()).unwrap();
//! h.start();
//! test_group!(h, math_lib);
//! run_test!(h, add_two_numbers);
//! h.end_group();
//! h.end();
//! ```

pub mod assertion;
pub mod assessment;
pub mod check;
pub mod config;
pub mod error;
pub mod fenv;
pub mod harness;
mod macros;
pub mod probe;
pub mod report;
pub mod runner;
pub mod sink;
pub mod state;
pub mod timer;
pub mod verdict;

pub use check::{Comparison, Exprs};
pub use config::{ColorMode, HarnessConfig, OutputTarget};
pub use error::HarnessError;
pub use fenv::{ExceptionFlags, ExceptionSource};
pub use harness::Harness;
pub use report::Level;
pub use runner::{Phase, RunSummary, TestFn, CTEST_VERSION};
pub use sink::Capture;
pub use state::RunState;
pub use timer::Timer;
pub use verdict::{Verdict, FAIL, PASS};

pub const DIVIDE_BY_ZERO_EXCEPTION: ExceptionFlags = ExceptionFlags::DIVIDE_BY_ZERO;
pub const OVERFLOW_EXCEPTION: ExceptionFlags = ExceptionFlags::OVERFLOW;
pub const UNDERFLOW_EXCEPTION: ExceptionFlags = ExceptionFlags::UNDERFLOW;
pub const INEXACT_EXCEPTION: ExceptionFlags = ExceptionFlags::INEXACT;
pub const INVALID_EXCEPTION: ExceptionFlags = ExceptionFlags::INVALID;
