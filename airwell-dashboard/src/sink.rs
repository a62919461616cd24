// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io::{self, Write};

/// Output surface for rendered dashboard frames.
///
/// Keeps the refresh loop independent of where frames end up, so tests can
/// collect them instead of printing.
pub trait DashboardSink {
    /// Show one rendered frame.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying output.
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

/// Writes each frame followed by a blank line.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DashboardSink for TerminalSink<W> {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        writeln!(self.out, "{frame}")?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl DashboardSink for Vec<String> {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.push(frame.to_string());
        Ok(())
    }
}
