//! Structured diagnostic messages with severity and optional notes.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single diagnostic record emitted by a placement stage.
///
/// Placement diagnostics have no source text to point into, so a diagnostic
/// is a severity, a message, and optional follow-up notes carrying geometry
/// detail (axis values, residuals, module names).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The main diagnostic message.
    pub message: String,
    /// Explanatory footnotes (e.g. intermediate geometry).
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates an info diagnostic with the given message.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a warning diagnostic with the given message.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates an error diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
