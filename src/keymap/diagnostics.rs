//! Diagnostics emitted while normalizing descriptors and building key maps
//!
//! Malformed entries never abort normalization. Each problem is reported as a
//! [`Diagnostic`] to a caller-supplied [`DiagnosticSink`] and the offending
//! entry is skipped. The default sink forwards to `tracing`.

use std::cell::RefCell;
use std::fmt;

/// How loudly a diagnostic should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input was rejected or partially ignored
    Warning,
    /// Input was accepted but rewritten
    Info,
}

/// A recoverable problem found in a descriptor or binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No key token left after trimming
    EmptyKey,
    /// `Cmd` or `Opt` was rewritten to its canonical modifier
    AliasRemapped {
        alias: &'static str,
        canonical: &'static str,
        descriptor: String,
    },
    /// The same modifier appeared more than once
    ModifierDefinedTwice { descriptor: String },
    /// More than one non-modifier token; `key` is the one that was kept
    MultipleKeys { key: String, descriptor: String },
    /// The raw key did not normalize to any descriptor
    MalformedKey {
        key: String,
        command: Option<String>,
    },
    /// The binding has no usable command
    FalsyCommand {
        key: String,
        command: Option<String>,
    },
    /// An earlier binding already claimed this descriptor
    DuplicateDescriptor {
        key: String,
        descriptor: String,
        command: String,
    },
    /// The binding was accepted under its canonical spelling
    CorrectedKey {
        key: String,
        descriptor: String,
        command: String,
    },
}

impl Diagnostic {
    /// Stable identifier, used as a structured log field and in tests
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::EmptyKey => "empty_key",
            Diagnostic::AliasRemapped { .. } => "alias_remapped",
            Diagnostic::ModifierDefinedTwice { .. } => "modifier_defined_twice",
            Diagnostic::MultipleKeys { .. } => "multiple_keys",
            Diagnostic::MalformedKey { .. } => "malformed_key",
            Diagnostic::FalsyCommand { .. } => "falsy_command",
            Diagnostic::DuplicateDescriptor { .. } => "duplicate_descriptor",
            Diagnostic::CorrectedKey { .. } => "corrected_key",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::AliasRemapped { .. } | Diagnostic::CorrectedKey { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

fn display_command(command: &Option<String>) -> &str {
    match command {
        Some(command) => command,
        None => "<none>",
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyKey => write!(f, "No key provided"),
            Diagnostic::AliasRemapped {
                alias,
                canonical,
                descriptor,
            } => write!(
                f,
                "{} getting mapped to {} from: {}",
                alias, canonical, descriptor
            ),
            Diagnostic::ModifierDefinedTwice { descriptor } => {
                write!(f, "Modifier defined twice: {}", descriptor)
            }
            Diagnostic::MultipleKeys { key, descriptor } => write!(
                f,
                "Multiple keys defined. Using key: {} from: {}",
                key, descriptor
            ),
            Diagnostic::MalformedKey { key, command } => write!(
                f,
                "Rejecting malformed key: {} (command: {})",
                key,
                display_command(command)
            ),
            Diagnostic::FalsyCommand { key, command } => write!(
                f,
                "Rejecting key without a command: {} (command: {})",
                key,
                display_command(command)
            ),
            Diagnostic::DuplicateDescriptor {
                key,
                descriptor,
                command,
            } => write!(
                f,
                "Rejecting key because {} was defined twice: {} (command: {})",
                descriptor, key, command
            ),
            Diagnostic::CorrectedKey {
                key,
                descriptor,
                command,
            } => write!(
                f,
                "Corrected a malformed key: {} -> {} (command: {})",
                key, descriptor, command
            ),
        }
    }
}

/// Receiver for diagnostics produced during normalization
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic),
{
    fn emit(&self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => {
                tracing::warn!(code = diagnostic.code(), "{}", diagnostic)
            }
            Severity::Info => tracing::info!(code = diagnostic.code(), "{}", diagnostic),
        }
    }
}

/// Drops every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Records diagnostics in emission order
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Codes of everything recorded so far, in order
    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.borrow().iter().map(Diagnostic::code).collect()
    }

    /// Drain the recorded diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}
