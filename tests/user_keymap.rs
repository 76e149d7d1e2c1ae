//! User keymap loading from the config directory
//!
//! Kept in its own test binary because it points XDG_CONFIG_HOME at a
//! temporary directory.

#![cfg(not(target_os = "windows"))]

use std::fs;

use keydesc::cli::CliArgs;
use keydesc::config_paths;
use keydesc::keymap::{load_user_keymap, CollectingSink};

use clap::Parser;

#[test]
fn test_user_keymap_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let keymap_path = config_paths::keymap_file().unwrap();
    assert!(keymap_path.starts_with(dir.path()));

    // No file yet
    assert!(load_user_keymap(&CollectingSink::new()).is_none());

    // Unusable file
    fs::create_dir_all(keymap_path.parent().unwrap()).unwrap();
    fs::write(&keymap_path, "bindings: [\n").unwrap();
    assert!(load_user_keymap(&CollectingSink::new()).is_none());

    // Valid file
    fs::write(
        &keymap_path,
        "bindings:\n  - key: opt-cmd-n\n    command: window.new\n",
    )
    .unwrap();
    let sink = CollectingSink::new();
    let keymap = load_user_keymap(&sink).unwrap();
    assert_eq!(keymap.lookup("Ctrl-Alt-N"), Some("window.new"));
    assert_eq!(sink.codes(), ["alias_remapped", "alias_remapped", "corrected_key"]);

    // `keydesc table` without a path reads the same file
    let cli = CliArgs::try_parse_from(["keydesc", "table", "--format", "json"]).unwrap();
    let mut out = Vec::new();
    cli.run(&mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed["Ctrl-Alt-N"], "window.new");

    // Log directory is created on demand
    let logs = config_paths::ensure_logs_dir().unwrap();
    assert!(logs.is_dir());
    assert!(logs.starts_with(dir.path()));
}
