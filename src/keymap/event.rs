//! Translating raw key presses into canonical descriptors
//!
//! The UI layer hands over a key code and modifier flags. Running them through
//! the same builder as declared bindings means a key press and a binding for
//! the same shortcut produce identical descriptors.

use serde::Deserialize;

use super::descriptor::build_descriptor;
use super::diagnostics::DiagnosticSink;
use super::types::{Descriptor, Modifiers};

/// A key press as reported by the UI event source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputEvent {
    /// Ctrl, or Cmd on macOS
    pub primary_modifier: bool,
    pub alt_modifier: bool,
    pub shift_modifier: bool,
    pub key_code: u32,
}

impl InputEvent {
    pub const fn new(ctrl: bool, alt: bool, shift: bool, key_code: u32) -> Self {
        Self {
            primary_modifier: ctrl,
            alt_modifier: alt,
            shift_modifier: shift,
            key_code,
        }
    }

    /// Build an event from separate meta and ctrl signals
    ///
    /// Either one counts as the primary modifier.
    pub const fn from_platform(
        meta: bool,
        ctrl: bool,
        alt: bool,
        shift: bool,
        key_code: u32,
    ) -> Self {
        Self::new(meta || ctrl, alt, shift, key_code)
    }

    pub const fn modifiers(&self) -> Modifiers {
        Modifiers::new(self.primary_modifier, self.alt_modifier, self.shift_modifier)
    }

    /// The character for this key code, if it is a printable scalar value
    pub fn key_char(&self) -> Option<char> {
        char::from_u32(self.key_code).filter(|c| !c.is_control())
    }
}

/// Canonical descriptor for a key press
///
/// Key codes without a printable character take the builder's empty-key path
/// and yield `None`.
pub fn translate_event(event: &InputEvent, sink: &dyn DiagnosticSink) -> Option<Descriptor> {
    let key = event.key_char().map(String::from).unwrap_or_default();
    build_descriptor(event.modifiers(), &key, sink)
}
