//! The diagnostic log: positional recovery records, append-only.

use core::fmt;

use thiserror::Error;

/// One recovery record: the byte offset where the fault was detected and a
/// stable human-readable description of the policy applied.
///
/// Diagnostics are not a structured taxonomy; consumers that need to
/// distinguish kinds filter on the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub position: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[pos {}] {}", self.position, self.message)
    }
}

/// Strict-mode abort: wraps the first diagnostic and unwinds the parse.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub(crate) struct FatalError(pub(crate) Diagnostic);

/// Accumulates diagnostics in the chronological order recoveries occurred.
///
/// In strict mode the first `push` short-circuits with [`FatalError`]
/// instead of recording anything.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticLog {
    entries: Vec<Diagnostic>,
    strict: bool,
}

impl DiagnosticLog {
    pub(crate) fn new(strict: bool) -> Self {
        Self {
            entries: Vec::new(),
            strict,
        }
    }

    pub(crate) fn push(
        &mut self,
        position: usize,
        message: impl Into<String>,
    ) -> Result<(), FatalError> {
        let diagnostic = Diagnostic {
            position,
            message: message.into(),
        };
        if self.strict {
            return Err(FatalError(diagnostic));
        }
        self.entries.push(diagnostic);
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Each entry rendered as `[pos <N>] <message>`.
    pub(crate) fn formatted(&self) -> Vec<String> {
        self.entries.iter().map(Diagnostic::to_string).collect()
    }

    pub(crate) fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
