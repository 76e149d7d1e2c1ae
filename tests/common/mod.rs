//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use keydesc::keymap::{CollectingSink, KeyMap, RawBinding};

/// Raw bindings from `(key, command)` pairs, `None` meaning unbound
pub fn raw(entries: &[(&str, Option<&str>)]) -> Vec<RawBinding> {
    entries
        .iter()
        .map(|(key, command)| match command {
            Some(command) => RawBinding::new(*key, *command),
            None => RawBinding::unbound(*key),
        })
        .collect()
}

/// Build a keymap and return it with the diagnostic codes it produced
pub fn build(entries: &[(&str, Option<&str>)]) -> (KeyMap, Vec<&'static str>) {
    let sink = CollectingSink::new();
    let bindings = raw(entries);
    let keymap = KeyMap::create(Some(bindings.as_slice()), &sink)
        .expect("a binding list was supplied");
    (keymap, sink.codes())
}

/// `(descriptor, command)` pairs of a keymap in declaration order
pub fn pairs(keymap: &KeyMap) -> Vec<(String, String)> {
    keymap
        .iter()
        .map(|(descriptor, command)| (descriptor.to_string(), command.to_string()))
        .collect()
}

/// Owned pairs, for comparing against [`pairs`]
pub fn expected(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(d, c)| (d.to_string(), c.to_string()))
        .collect()
}
