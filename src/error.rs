//! Error types for KFX core operations.

use thiserror::Error;

/// Errors that can occur while building or serializing a KFX fragment graph.
#[derive(Error, Debug)]
pub enum Error {
    #[error("duplicate fragment key: ftype={ftype} fid={fid}")]
    DuplicateFragmentKey { ftype: String, fid: String },

    #[error("unresolved symbol-by-name reference: {0}")]
    UnresolvedSymbol(String),

    #[error("fragment id name not present in local symbol table: {0}")]
    UnresolvedFragmentId(String),

    #[error("cycle detected while resolving symbol-by-name references: {0}")]
    CycleDetected(String),

    #[error("style {0} has no registered definition")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal conditions collected during a build (§7: "recoverable").
///
/// Unlike [`Error`], these never abort construction; they're pushed here
/// *and* reported with `eprintln!` at the point of detection, matching the
/// teacher's practice of diagnostic `println!`/`eprintln!` rather than a
/// logging-framework dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// A sink for recoverable conditions, returned alongside the build result.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning, echoing it to stderr the way the teacher's CLI does
    /// for non-fatal conditions.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("warning: {message}");
        self.entries.push(Diagnostic::warning(message));
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
