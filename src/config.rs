//! Where harness output goes and whether it is colored.

use std::fs::File;
use std::path::PathBuf;

use termcolor::{Ansi, ColorChoice, NoColor, StandardStream, WriteColor};

use crate::error::{HarnessError, Result};

/// Destination of the harness output stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    File(PathBuf),
}

/// Color policy for the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color standard streams attached to a terminal; never color files.
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration for building a harness sink.
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    pub output: OutputTarget,
    pub color: ColorMode,
}

impl HarnessConfig {
    pub fn new(output: OutputTarget, color: ColorMode) -> Self {
        Self { output, color }
    }

    /// Whether the configured sink will carry ANSI escapes.
    pub fn use_colors(&self) -> bool {
        match (self.color, &self.output) {
            (ColorMode::Always, _) => true,
            (ColorMode::Never, _) => false,
            (ColorMode::Auto, OutputTarget::Stderr) => atty::is(atty::Stream::Stderr),
            (ColorMode::Auto, OutputTarget::Stdout) => atty::is(atty::Stream::Stdout),
            (ColorMode::Auto, OutputTarget::File(_)) => false,
        }
    }

    /// Builds the sink described by this configuration.
    pub fn open_sink(&self) -> Result<Box<dyn WriteColor>> {
        let choice = if self.use_colors() {
            ColorChoice::AlwaysAnsi
        } else {
            ColorChoice::Never
        };
        let sink: Box<dyn WriteColor> = match &self.output {
            OutputTarget::Stderr => Box::new(StandardStream::stderr(choice)),
            OutputTarget::Stdout => Box::new(StandardStream::stdout(choice)),
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| HarnessError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
                if choice == ColorChoice::AlwaysAnsi {
                    Box::new(Ansi::new(file))
                } else {
                    Box::new(NoColor::new(file))
                }
            }
        };
        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_uncolored_unless_forced() {
        let path = std::env::temp_dir().join("ctest-config-auto.txt");
        let auto = HarnessConfig::new(OutputTarget::File(path.clone()), ColorMode::Auto);
        assert!(!auto.use_colors());
        assert!(!auto.open_sink().unwrap().supports_color());

        let forced = HarnessConfig::new(OutputTarget::File(path.clone()), ColorMode::Always);
        assert!(forced.open_sink().unwrap().supports_color());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn never_disables_standard_stream_color() {
        let config = HarnessConfig::new(OutputTarget::Stdout, ColorMode::Never);
        assert!(!config.open_sink().unwrap().supports_color());
    }

    #[test]
    fn unwritable_file_is_reported() {
        let path = std::env::temp_dir()
            .join("ctest-missing-dir")
            .join("nested")
            .join("out.txt");
        let config = HarnessConfig::new(OutputTarget::File(path), ColorMode::Never);
        let err = config.open_sink().err().unwrap();
        assert!(matches!(err, HarnessError::OpenOutput { .. }));
    }
}
