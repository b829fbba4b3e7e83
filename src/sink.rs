//! In-memory output sink.
//!
//! `Capture` collects everything the reporter writes so it can be inspected
//! afterwards. Clones share the same buffer: hand one clone to the harness and
//! keep the other to read from.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use termcolor::{ColorSpec, WriteColor};

#[derive(Clone, Default)]
pub struct Capture {
    buffer: Rc<RefCell<Vec<u8>>>,
    color: bool,
}

impl Capture {
    /// A capture buffer that reports itself as not color-capable.
    pub fn plain() -> Self {
        Self::default()
    }

    /// A capture buffer that receives ANSI color escapes.
    pub fn colored() -> Self {
        Self {
            buffer: Rc::default(),
            color: true,
        }
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }

    /// Boxes a sharing clone for `Harness::set_output`.
    pub fn sink(&self) -> Box<dyn WriteColor> {
        Box::new(self.clone())
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteColor for Capture {
    fn supports_color(&self) -> bool {
        self.color
    }

    fn set_color(&mut self, spec: &ColorSpec) -> io::Result<()> {
        if !self.color {
            return Ok(());
        }
        // Delegate escape generation so captured bytes match a real terminal.
        let mut ansi = termcolor::Ansi::new(Vec::new());
        ansi.set_color(spec)?;
        self.write_all(&ansi.into_inner())
    }

    fn reset(&mut self) -> io::Result<()> {
        if !self.color {
            return Ok(());
        }
        self.write_all(b"\x1b[0m")
    }
}
