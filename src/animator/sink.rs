//! Display targets the animator writes into

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Output surface owned by a single animator
pub trait TextSink {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str) -> io::Result<()>;

    /// Called once when the run ends
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: TextSink + ?Sized> TextSink for Box<T> {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        (**self).set_text(text)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Records every frame in memory
///
/// Clones share the same buffer, so a test can keep one clone while the
/// animator owns another. Frames are never dropped; use it for runs with a
/// cycle limit or an explicit cancel.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// Most recently written text, empty if nothing was written yet
    pub fn current(&self) -> String {
        self.frames
            .lock()
            .ok()
            .and_then(|f| f.last().cloned())
            .unwrap_or_default()
    }
}

impl TextSink for MemorySink {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        let mut frames = self
            .frames
            .lock()
            .map_err(|_| io::Error::other("frame buffer poisoned"))?;
        frames.push(text.to_string());
        Ok(())
    }
}

/// Redraws a single terminal line in place
///
/// Only the current line is cleared, so text wider than the terminal leaves
/// wrapped remnants behind.
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextSink for TerminalSink<W> {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if self.color {
            queue!(self.out, Print(text.cyan().bold()))?;
        } else {
            queue!(self.out, Print(text))?;
        }
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Overwrites a file with the current text on every tick
///
/// Each frame goes to a temporary file in the same directory that is then
/// renamed over the target, so a poller sees either the old or the new frame.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    dir: PathBuf,
}

impl FileSink {
    /// Open the target, failing if it cannot be created
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::write(&path, "").map_err(|source| Error::TargetUnavailable {
            path: path.clone(),
            source,
        })?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self { path, dir })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSink for FileSink {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
