use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use std::fs;

/// The lines of one benchmark log, read once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct LogDocument {
    lines: Vec<String>,
}

impl LogDocument {
    /// Read a log file into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading benchmark log '{path}'"))?;
        Ok(Self::from_text(&text))
    }

    /// Build a document from in-memory text; line terminators are stripped.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
