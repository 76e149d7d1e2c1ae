//! Canonical keyboard shortcut descriptors and key maps
//!
//! This module turns loosely written shortcut descriptions into one canonical
//! spelling and builds conflict-free lookup tables from them:
//! - Modifiers in any order and case (`alt-CTRL-a` → `Ctrl-Alt-A`)
//! - `Cmd` and `Opt` accepted as synonyms for `Ctrl` and `Alt`
//! - First declaration wins when two bindings normalize to the same descriptor
//! - Key presses translate to the same descriptors as declared bindings
//!
//! # Architecture
//!
//! ```text
//! [RawBinding] → normalize_bindings() → normalize_descriptor() → build_descriptor() → KeyMap
//! InputEvent → translate_event() → build_descriptor() → KeyMap::lookup()
//! ```
//!
//! Problems in individual bindings never fail the whole map; they are
//! reported through a [`DiagnosticSink`] and the binding is skipped.
//!
//! # Loading Keymaps
//!
//! ```ignore
//! let keymap = keymap::create(Some(bindings.as_slice()))?;
//!
//! // Or from a YAML file
//! let keymap = load_keymap_file(path)?.into_keymap(&TracingSink)?;
//! ```

mod config;
mod descriptor;
mod diagnostics;
mod event;
#[allow(clippy::module_inception)]
mod keymap;
mod normalize;
mod types;

pub use config::{
    load_keymap_file, load_user_keymap, parse_keymap_yaml, KeymapConfig, KeymapError,
};
pub use descriptor::{build_descriptor, normalize_descriptor};
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticSink, NullSink, Severity, TracingSink,
};
pub use event::{translate_event, InputEvent};
pub use keymap::KeyMap;
pub use normalize::normalize_bindings;
pub use types::{Binding, Descriptor, ModifierAlias, Modifiers, RawBinding};

/// Build a keymap, reporting diagnostics through `tracing`
///
/// Fails only when no binding list is supplied.
pub fn create(raw: Option<&[RawBinding]>) -> Result<KeyMap, KeymapError> {
    KeyMap::create(raw, &TracingSink)
}

/// Canonical descriptor for a key press, reporting diagnostics through `tracing`
pub fn translate_input_event(event: &InputEvent) -> Option<Descriptor> {
    translate_event(event, &TracingSink)
}

/// Normalize a single descriptor string, reporting diagnostics through `tracing`
pub fn normalize(descriptor: &str) -> Option<Descriptor> {
    normalize_descriptor(descriptor, &TracingSink)
}
