//! Leveled, colorized console output.
//!
//! Every line the harness prints goes through [`Harness::emit`] or
//! [`Harness::emit_plain`]; both refuse to run without a configured sink.

use std::fmt;
use std::process;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::HarnessError;
use crate::harness::Harness;

/// Output level; each carries a fixed truecolor foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Pass,
    Fail,
    Group,
    End,
    Info,
    Intro,
}

impl Level {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Level::Pass => (0, 189, 142),
            Level::Fail => (212, 55, 92),
            Level::Group => (227, 202, 111),
            Level::End => (0, 120, 90),
            Level::Info => (200, 200, 200),
            Level::Intro => (52, 152, 219),
        }
    }

    pub fn color_spec(self) -> ColorSpec {
        let (r, g, b) = self.rgb();
        let mut spec = ColorSpec::new();
        // No leading reset: the stream carries exactly `ESC[38;2;R;G;Bm ... ESC[0m`.
        spec.set_fg(Some(Color::Rgb(r, g, b))).set_reset(false);
        spec
    }
}

/// Writes `args` to `out`, wrapped in the level color when the sink supports it.
///
/// Write failures are dropped, like any failed console print.
pub fn write_leveled(out: &mut dyn WriteColor, level: Level, args: fmt::Arguments<'_>) {
    let colored = out.supports_color();
    if colored {
        let _ = out.set_color(&level.color_spec());
    }
    let _ = out.write_fmt(args);
    if colored {
        let _ = out.reset();
    }
    let _ = out.flush();
}

/// Reports a missing sink on stderr and terminates the process with code 1.
pub(crate) fn configuration_error() -> ! {
    let err = HarnessError::SinkNotConfigured;
    tracing::error!(error = %err, "harness output used before configuration");
    let mut stderr = StandardStream::stderr(ColorChoice::AlwaysAnsi);
    write_leveled(
        &mut stderr,
        Level::Fail,
        format_args!(
            "{err}: set the sink in main, e.g. harness.set_output(Box::new(StandardStream::stderr(ColorChoice::Auto)))\n"
        ),
    );
    process::exit(1)
}

impl Harness {
    /// Writes a message at `level`.
    pub fn emit(&mut self, level: Level, args: fmt::Arguments<'_>) {
        write_leveled(self.sink(), level, args);
    }

    /// Writes a message with no color.
    pub fn emit_plain(&mut self, args: fmt::Arguments<'_>) {
        let out = self.sink();
        let _ = out.write_fmt(args);
        let _ = out.flush();
    }

    pub fn pass(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::Pass, args);
    }

    pub fn fail(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::Fail, args);
    }

    pub fn group(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::Group, args);
    }

    pub fn end_line(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::End, args);
    }

    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    pub fn intro(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::Intro, args);
    }

    /// User-level print: indented, info colored.
    pub fn tprint(&mut self, args: fmt::Arguments<'_>) {
        self.emit_plain(format_args!("    "));
        self.info(args);
    }

    /// Prints `    <a> == <b>` without color.
    pub fn print_equal<A: fmt::Display, B: fmt::Display>(&mut self, a: A, b: B) {
        self.emit_plain(format_args!("    {} == {}\n", a, b));
    }
}
