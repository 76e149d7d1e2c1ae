//! Benchmarks for descriptor normalization and keymap construction
//!
//! Run with: cargo bench normalize

use keydesc::keymap::{normalize_bindings, normalize_descriptor, KeyMap, NullSink, RawBinding};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Single descriptors
// ============================================================================

#[divan::bench(args = ["A", "Ctrl-S", "shift-alt-ctrl-z", "Cmd-Opt-Shift-F12", "A-B-C-D"])]
fn normalize_single(descriptor: &str) {
    divan::black_box(normalize_descriptor(divan::black_box(descriptor), &NullSink));
}

// ============================================================================
// Whole keymaps
// ============================================================================

/// Bindings with a mix of canonical, reordered and duplicate descriptors
fn make_bindings(count: usize) -> Vec<RawBinding> {
    const MODS: [&str; 6] = ["Ctrl", "alt-ctrl", "Shift-Cmd", "opt", "", "shift-alt-ctrl"];
    (0..count)
        .map(|i| {
            let key = char::from(b'A' + (i % 26) as u8);
            let mods = MODS[(i / 26) % MODS.len()];
            let descriptor = if mods.is_empty() {
                key.to_string()
            } else {
                format!("{}-{}", mods, key)
            };
            RawBinding::new(descriptor, format!("command.{}", i))
        })
        .collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn normalize_bindings_table(bencher: divan::Bencher, count: usize) {
    let raw = make_bindings(count);
    bencher.bench(|| normalize_bindings(divan::black_box(&raw), &NullSink));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn build_keymap(bencher: divan::Bencher, count: usize) {
    let raw = make_bindings(count);
    bencher.bench(|| KeyMap::create(Some(divan::black_box(raw.as_slice())), &NullSink));
}
