//! KeyMap struct holding one canonical descriptor-to-command table

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::config::KeymapError;
use super::diagnostics::DiagnosticSink;
use super::event::{translate_event, InputEvent};
use super::normalize::normalize_bindings;
use super::types::{Binding, Descriptor, RawBinding};

/// An immutable, conflict-free mapping from descriptors to commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Surviving bindings in declaration order
    bindings: Vec<Binding>,
    /// Fast lookup by canonical descriptor (indices into bindings)
    lookup: HashMap<String, usize>,
}

impl KeyMap {
    /// Build a keymap from raw bindings
    ///
    /// Malformed entries are reported to `sink` and skipped. Only a missing
    /// binding list is an error.
    pub fn create(
        raw: Option<&[RawBinding]>,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, KeymapError> {
        let raw = raw.ok_or(KeymapError::MissingBindings)?;
        let bindings = normalize_bindings(raw, sink);
        let lookup = bindings
            .iter()
            .enumerate()
            .map(|(idx, binding)| (binding.descriptor.as_str().to_string(), idx))
            .collect();

        tracing::debug!(
            "Built keymap with {} of {} declared bindings",
            bindings.len(),
            raw.len()
        );

        Ok(Self { bindings, lookup })
    }

    /// Command bound to a canonical descriptor (exact match, no normalization)
    pub fn lookup(&self, descriptor: &str) -> Option<&str> {
        let idx = *self.lookup.get(descriptor)?;
        Some(self.bindings[idx].command.as_str())
    }

    /// Translate a key press and look up its command
    pub fn lookup_event(&self, event: &InputEvent, sink: &dyn DiagnosticSink) -> Option<&str> {
        let descriptor = translate_event(event, sink)?;
        self.lookup(descriptor.as_str())
    }

    pub fn contains(&self, descriptor: &str) -> bool {
        self.lookup.contains_key(descriptor)
    }

    /// First descriptor bound to a command (for menus and hints)
    pub fn descriptor_for(&self, command: &str) -> Option<&Descriptor> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(|b| &b.descriptor)
    }

    /// All bindings in declaration order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Descriptor, &str)> {
        self.bindings
            .iter()
            .map(|b| (&b.descriptor, b.command.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Serialize for KeyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for binding in &self.bindings {
            map.serialize_entry(&binding.descriptor, &binding.command)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::diagnostics::{CollectingSink, NullSink};

    fn sample() -> KeyMap {
        let raw = vec![
            RawBinding::new("Cmd-S", "file.save"),
            RawBinding::new("ctrl-shift-s", "file.save_as"),
            RawBinding::new("Alt-Ctrl-F", "edit.find"),
            RawBinding::new("F3", "edit.find"),
        ];
        KeyMap::create(Some(raw.as_slice()), &NullSink).unwrap()
    }

    #[test]
    fn test_missing_bindings_is_fatal() {
        let sink = CollectingSink::new();
        let err = KeyMap::create(None, &sink).unwrap_err();
        assert!(matches!(err, KeymapError::MissingBindings));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_bindings_is_valid() {
        let raw: Vec<RawBinding> = Vec::new();
        let keymap = KeyMap::create(Some(raw.as_slice()), &NullSink).unwrap();
        assert!(keymap.is_empty());
        assert_eq!(keymap.len(), 0);
    }

    #[test]
    fn test_lookup_is_exact() {
        let keymap = sample();
        assert_eq!(keymap.lookup("Ctrl-S"), Some("file.save"));
        assert_eq!(keymap.lookup("Ctrl-Shift-S"), Some("file.save_as"));
        assert_eq!(keymap.lookup("Ctrl-Alt-F"), Some("edit.find"));
        // Non-canonical spellings are not normalized on lookup
        assert_eq!(keymap.lookup("ctrl-s"), None);
        assert!(keymap.contains("F3"));
        assert!(!keymap.contains("Cmd-S"));
    }

    #[test]
    fn test_lookup_event() {
        let keymap = sample();
        let event = InputEvent::from_platform(true, false, false, true, 83);
        assert_eq!(keymap.lookup_event(&event, &NullSink), Some("file.save_as"));

        let unbound = InputEvent::new(false, false, false, 83);
        assert_eq!(keymap.lookup_event(&unbound, &NullSink), None);
    }

    #[test]
    fn test_descriptor_for_first_binding() {
        let keymap = sample();
        assert_eq!(keymap.descriptor_for("edit.find").unwrap(), "Ctrl-Alt-F");
        assert!(keymap.descriptor_for("file.close").is_none());
    }

    #[test]
    fn test_iter_in_declaration_order() {
        let keymap = sample();
        let descriptors: Vec<_> = keymap.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(descriptors, ["Ctrl-S", "Ctrl-Shift-S", "Ctrl-Alt-F", "F3"]);
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Ctrl-S":"file.save","Ctrl-Shift-S":"file.save_as","Ctrl-Alt-F":"edit.find","F3":"edit.find"}"#
        );
    }
}
