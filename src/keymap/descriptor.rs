//! Descriptor parsing and canonical assembly
//!
//! Descriptors are strings of the form `[modifier-modifier-...-]key`. The
//! modifiers may appear in any order and any case; the canonical form is
//! always `Ctrl-Alt-Shift-<KEY>` with absent modifiers left out.

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::types::{Descriptor, ModifierAlias, Modifiers};

/// Assemble the canonical descriptor for a modifier set and key token
///
/// Returns `None` (after reporting [`Diagnostic::EmptyKey`]) when the key is
/// blank.
pub fn build_descriptor(
    mods: Modifiers,
    key: &str,
    sink: &dyn DiagnosticSink,
) -> Option<Descriptor> {
    let key = key.trim();
    if key.is_empty() {
        sink.emit(Diagnostic::EmptyKey);
        return None;
    }

    let mut parts: Vec<String> = mods.segments().map(str::to_string).collect();
    parts.push(key.to_uppercase());

    Some(Descriptor::from_canonical(parts.join("-")))
}

/// Normalize an arbitrary-order descriptor string into canonical form
///
/// The first non-modifier token is the key; later ones are ignored with a
/// diagnostic. Repeated modifiers are harmless but reported.
pub fn normalize_descriptor(descriptor: &str, sink: &dyn DiagnosticSink) -> Option<Descriptor> {
    let mut mods = Modifiers::NONE;
    let mut key: Option<&str> = None;

    for token in descriptor.split('-') {
        match ModifierAlias::classify(token) {
            Some(alias) => {
                let flag = alias.modifier();
                if mods.contains(flag) {
                    sink.emit(Diagnostic::ModifierDefinedTwice {
                        descriptor: descriptor.to_string(),
                    });
                }
                if alias.is_synonym() {
                    sink.emit(Diagnostic::AliasRemapped {
                        alias: alias.name(),
                        canonical: alias.canonical_name(),
                        descriptor: descriptor.to_string(),
                    });
                }
                mods = mods | flag;
            }
            None => match key {
                Some(kept) => sink.emit(Diagnostic::MultipleKeys {
                    key: kept.to_string(),
                    descriptor: descriptor.to_string(),
                }),
                None => {
                    let token = token.trim();
                    if !token.is_empty() {
                        key = Some(token);
                    }
                }
            },
        }
    }

    build_descriptor(mods, key.unwrap_or_default(), sink)
}
