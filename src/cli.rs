//! Command-line interface for keydesc
//!
//! Supports:
//! - Normalizing descriptors passed as arguments
//! - Printing the canonical table for a keymap file
//! - Translating a key press into its descriptor

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::keymap::{self, InputEvent, TracingSink};

/// Canonicalize keyboard shortcut descriptors
#[derive(Parser, Debug)]
#[command(name = "keydesc", version, about = "Canonicalize keyboard shortcut descriptors")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the canonical form of each descriptor
    Normalize {
        /// Descriptors such as "alt-ctrl-a" or "Cmd-S"
        #[arg(value_name = "DESCRIPTOR", required = true, allow_hyphen_values = true)]
        descriptors: Vec<String>,
    },

    /// Print the canonical table for a keymap file
    Table {
        /// Keymap YAML file (defaults to the user keymap)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Print the descriptor for a key press
    Translate {
        /// Numeric key code (e.g. 65 for A)
        #[arg(value_name = "KEY_CODE")]
        key_code: u32,

        #[arg(long)]
        ctrl: bool,

        /// Cmd on macOS, counts as Ctrl
        #[arg(long)]
        meta: bool,

        #[arg(long)]
        alt: bool,

        #[arg(long)]
        shift: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Printed in place of a descriptor that could not be normalized
pub const INVALID_MARKER: &str = "<invalid>";

impl CliArgs {
    /// Execute the parsed command, writing results to `out`
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        match self.command {
            CliCommand::Normalize { descriptors } => {
                for descriptor in &descriptors {
                    match keymap::normalize(descriptor) {
                        Some(normalized) => writeln!(out, "{}", normalized)?,
                        None => writeln!(out, "{}", INVALID_MARKER)?,
                    }
                }
            }
            CliCommand::Table { path, format } => {
                let keymap = match path {
                    Some(path) => keymap::load_keymap_file(&path)
                        .and_then(|config| config.into_keymap(&TracingSink))
                        .with_context(|| {
                            format!("Failed to load keymap from {}", path.display())
                        })?,
                    None => keymap::load_user_keymap(&TracingSink)
                        .context("No usable user keymap found in the config directory")?,
                };

                match format {
                    OutputFormat::Yaml => {
                        // serde_yaml renders an empty map as "{}" without a newline
                        let yaml = serde_yaml::to_string(&keymap)?;
                        write!(out, "{}", yaml)?;
                        if !yaml.ends_with('\n') {
                            writeln!(out)?;
                        }
                    }
                    OutputFormat::Json => {
                        serde_json::to_writer_pretty(&mut *out, &keymap)?;
                        writeln!(out)?;
                    }
                }
            }
            CliCommand::Translate {
                key_code,
                ctrl,
                meta,
                alt,
                shift,
            } => {
                let event = InputEvent::from_platform(meta, ctrl, alt, shift, key_code);
                match keymap::translate_input_event(&event) {
                    Some(descriptor) => writeln!(out, "{}", descriptor)?,
                    None => writeln!(out, "{}", INVALID_MARKER)?,
                }
            }
        }

        Ok(())
    }
}
