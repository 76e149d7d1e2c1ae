//! keydesc - canonical keyboard shortcut descriptors
//!
//! This crate normalizes shortcut descriptions such as `alt-ctrl-a` into a
//! single canonical spelling (`Ctrl-Alt-A`) and builds conflict-free key maps
//! from declared bindings, so that key presses and bindings compare equal.

pub mod cli;
pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use keymap::{
    create, normalize, translate_input_event, Descriptor, InputEvent, KeyMap, KeymapError,
    RawBinding,
};
