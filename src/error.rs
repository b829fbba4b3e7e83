//! Harness configuration errors.
//!
//! Check failures are never errors: they become a `Verdict`. The variants here
//! cover the cases where the harness itself cannot produce output.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("no output sink configured for the test harness")]
    #[diagnostic(
        code(ctest::config::sink),
        help("set the sink before running tests: `harness.set_output(...)` or `Harness::with_config(...)`")
    )]
    SinkNotConfigured,

    #[error("failed to open test output file '{}'", path.display())]
    #[diagnostic(code(ctest::config::output))]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
