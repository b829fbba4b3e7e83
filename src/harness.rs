//! The run context threaded through every test function.

use std::io::{self, BufRead, BufReader};

use termcolor::WriteColor;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::fenv::{ExceptionSource, ThreadLatch};
use crate::report;
use crate::runner::{Phase, RunSummary};
use crate::state::RunState;
use crate::timer::Timer;

/// Owns the output sink, run flags, timer, manual-input reader and the
/// arithmetic exception source for one linear run.
pub struct Harness {
    sink: Option<Box<dyn WriteColor>>,
    pub(crate) state: RunState,
    pub(crate) timer: Timer,
    pub(crate) phase: Phase,
    pub(crate) summary: RunSummary,
    exceptions: Box<dyn ExceptionSource>,
    input: Box<dyn BufRead>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// A harness with no sink. Any output before `set_output` is fatal.
    pub fn new() -> Self {
        Self {
            sink: None,
            state: RunState::new(),
            timer: Timer::default(),
            phase: Phase::NotStarted,
            summary: RunSummary::default(),
            exceptions: Box::new(ThreadLatch),
            input: Box::new(BufReader::new(io::stdin())),
        }
    }

    pub fn with_sink(sink: Box<dyn WriteColor>) -> Self {
        let mut harness = Self::new();
        harness.set_output(sink);
        harness
    }

    pub fn with_config(config: &HarnessConfig) -> Result<Self> {
        Ok(Self::with_sink(config.open_sink()?))
    }

    pub fn set_output(&mut self, sink: Box<dyn WriteColor>) {
        tracing::debug!(color = sink.supports_color(), "output sink configured");
        self.sink = Some(sink);
    }

    pub fn has_output(&self) -> bool {
        self.sink.is_some()
    }

    /// Replaces the reader consulted by manual checks (stdin by default).
    pub fn set_input(&mut self, input: Box<dyn BufRead>) {
        self.input = input;
    }

    /// Replaces where the exception probe reads flags from.
    pub fn set_exception_source(&mut self, source: Box<dyn ExceptionSource>) {
        self.exceptions = source;
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub(crate) fn exceptions(&self) -> &dyn ExceptionSource {
        self.exceptions.as_ref()
    }

    pub(crate) fn input(&mut self) -> &mut dyn BufRead {
        self.input.as_mut()
    }

    pub(crate) fn sink(&mut self) -> &mut dyn WriteColor {
        match self.sink.as_deref_mut() {
            Some(sink) => sink,
            None => report::configuration_error(),
        }
    }

    /// Terminates the process unless a sink is configured.
    pub(crate) fn require_output(&self) {
        if self.sink.is_none() {
            report::configuration_error();
        }
    }

    pub(crate) fn colors_enabled(&mut self) -> bool {
        self.sink().supports_color()
    }
}
