//! Merging declared bindings into one conflict-free canonical table

use std::collections::HashSet;

use super::descriptor::normalize_descriptor;
use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::types::{Binding, RawBinding};

/// Normalize every raw binding and keep the first one seen per descriptor
///
/// Entries whose key does not normalize, whose command is empty, or whose
/// descriptor was already claimed are reported and skipped. Output order
/// follows input order.
pub fn normalize_bindings(raw: &[RawBinding], sink: &dyn DiagnosticSink) -> Vec<Binding> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for entry in raw {
        let Some(descriptor) = normalize_descriptor(&entry.key, sink) else {
            sink.emit(Diagnostic::MalformedKey {
                key: entry.key.clone(),
                command: entry.command.clone(),
            });
            continue;
        };

        let Some(command) = entry.truthy_command() else {
            sink.emit(Diagnostic::FalsyCommand {
                key: entry.key.clone(),
                command: entry.command.clone(),
            });
            continue;
        };

        if seen.contains(&descriptor) {
            sink.emit(Diagnostic::DuplicateDescriptor {
                key: entry.key.clone(),
                descriptor: descriptor.into_string(),
                command: command.to_string(),
            });
            continue;
        }

        if descriptor != entry.key.as_str() {
            sink.emit(Diagnostic::CorrectedKey {
                key: entry.key.clone(),
                descriptor: descriptor.to_string(),
                command: command.to_string(),
            });
        }

        seen.insert(descriptor.clone());
        out.push(Binding {
            descriptor,
            command: command.to_string(),
        });
    }

    out
}
