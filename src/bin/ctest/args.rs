//! Command-line arguments for the demo runner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ctest::{ColorMode, HarnessConfig, OutputTarget};

#[derive(Debug, Parser)]
#[command(
    name = "ctest",
    version,
    about = "Runs the CTest demo suite against a small math library."
)]
pub struct CtestArgs {
    /// Report destination: `stderr`, `stdout`, or a file path.
    #[arg(short, long, default_value = "stderr", value_parser = parse_target)]
    pub output: OutputTarget,

    /// When to color the report.
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Skip sink configuration and make one harness call (default: `start`).
    #[arg(
        long,
        hide = true,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "start"
    )]
    pub no_sink: Option<FirstCall>,
}

/// The harness call made by `--no-sink` on an unconfigured harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstCall {
    Start,
    Assertion,
    Exception,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

impl CtestArgs {
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig::new(self.output.clone(), self.color.into())
    }
}

fn parse_target(value: &str) -> Result<OutputTarget, String> {
    match value {
        "" => Err("output target must not be empty".to_string()),
        "stderr" => Ok(OutputTarget::Stderr),
        "stdout" | "-" => Ok(OutputTarget::Stdout),
        path => Ok(OutputTarget::File(PathBuf::from(path))),
    }
}
