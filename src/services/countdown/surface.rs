//! Display surfaces a refresh loop can render into.

use std::io::Write;

use thiserror::Error;

use crate::models::display::DisplayFragments;

/// Raised by a surface that can no longer be written to. The refresh loop
/// stops on the first one.
#[derive(Debug, Error)]
#[error("display surface unavailable: {reason}")]
pub struct SurfaceUnavailable {
    pub reason: String,
}

impl SurfaceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SurfaceUnavailable {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Two writable text regions: one for the days phrase, one for the clock.
#[cfg_attr(test, mockall::automock)]
pub trait DisplaySurface: Send {
    fn render(&mut self, fragments: &DisplayFragments) -> Result<(), SurfaceUnavailable>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn render(&mut self, fragments: &DisplayFragments) -> Result<(), SurfaceUnavailable> {
        (**self).render(fragments)
    }
}

/// Redraws a single terminal line in place.
pub struct TerminalSurface<W: Write + Send> {
    out: W,
    last_width: usize,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_width: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySurface for TerminalSurface<W> {
    fn render(&mut self, fragments: &DisplayFragments) -> Result<(), SurfaceUnavailable> {
        let line = fragments.to_string();
        let padding = self.last_width.saturating_sub(line.len());
        write!(self.out, "\r{}{}", line, " ".repeat(padding))?;
        self.out.flush()?;
        self.last_width = line.len();
        Ok(())
    }
}

/// Writes one JSON object per tick, for piping into other tools.
pub struct JsonLinesSurface<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonLinesSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySurface for JsonLinesSurface<W> {
    fn render(&mut self, fragments: &DisplayFragments) -> Result<(), SurfaceUnavailable> {
        serde_json::to_writer(&mut self.out, fragments)
            .map_err(|err| SurfaceUnavailable::new(err.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
