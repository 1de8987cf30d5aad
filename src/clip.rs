//! # Clipboard Sink
//!
//! The seam between "produce the final document" and "put it somewhere".
//! The core only ever sees [`CopySink`]; the real implementation wraps
//! the system clipboard via `arboard`, and tests substitute an
//! in-memory recorder.

use std::fmt;

use log::info;

/// Where the committed document goes.
pub trait CopySink {
    fn copy(&mut self, text: &str) -> Result<(), SinkError>;
}

/// A failed copy. Surfaces as a failed commit; the session must not
/// report success past one of these.
#[derive(Debug)]
pub struct SinkError(String);

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard error: {}", self.0)
    }
}

impl std::error::Error for SinkError {}

/// The system clipboard. The `arboard` handle is opened per copy; on
/// some platforms a held-open handle keeps clipboard ownership pinned
/// to this process.
pub struct SystemClipboard;

impl CopySink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), SinkError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SinkError::new(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SinkError::new(e.to_string()))?;
        info!("copied {} bytes to the system clipboard", text.len());
        Ok(())
    }
}
