//! Out-of-band diagnostics.
//!
//! The evaluator never aborts a rung over a recoverable error (§7): it
//! appends a [`Diagnostic`] here and moves on to the next token. This is
//! pure observation — it cannot affect tag-store state or the outcome of
//! later tokens — so the caller is free to ignore, log, or filter by
//! [`Severity`] after the scan returns.

use std::fmt;

use crate::error::Error;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Recorded for trace/debugging purposes; did not change behavior.
    Hint,
    /// An instruction was skipped but the rung continued normally.
    Warning,
    /// A rung was aborted early (branch stack underflow).
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What happened, independent of where.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// An opcode the dispatcher doesn't recognize; the token was
    /// skipped.
    UnknownOpcode { opcode: String },
    /// A recoverable instruction failure (`NotFound`, `TypeMismatch`,
    /// `MalformedToken`, `MalformedParams`).
    InstructionFailed { opcode: String, source: Error },
    /// `BND`/`NXB` with no matching `BST`; the rung was aborted.
    UnbalancedBranch { source: Error },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownOpcode { opcode } => {
                write!(f, "unknown opcode '{}'", opcode)
            }
            DiagnosticKind::InstructionFailed { opcode, source } => {
                write!(f, "{} failed: {}", opcode, source)
            }
            DiagnosticKind::UnbalancedBranch { source } => {
                write!(f, "{}", source)
            }
        }
    }
}

/// A single diagnostic observation, located by rung and token index.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Index into the program's rung list.
    pub rung_index: usize,
    /// Index into the rung's token list.
    pub token_index: usize,
}

impl Diagnostic {
    pub fn warning(kind: DiagnosticKind, rung_index: usize, token_index: usize) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            rung_index,
            token_index,
        }
    }

    pub fn error(kind: DiagnosticKind, rung_index: usize, token_index: usize) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            rung_index,
            token_index,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: rung {}, token {}: {}",
            self.severity, self.rung_index, self.token_index, self.kind
        )
    }
}
