//! Core types for the keymap system: Modifiers, Descriptor, bindings

use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b001); // Cmd on macOS
    pub const ALT: Modifiers = Modifiers(0b010); // Option on macOS
    pub const SHIFT: Modifiers = Modifiers(0b100);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b001;
        }
        if alt {
            bits |= 0b010;
        }
        if shift {
            bits |= 0b100;
        }
        Modifiers(bits)
    }

    /// Check if the primary accelerator (ctrl/cmd) is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Canonical segment names of the held modifiers, in Ctrl, Alt, Shift order
    pub fn segments(self) -> impl Iterator<Item = &'static str> {
        [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().collect::<Vec<_>>().join("-"))
    }
}

/// A modifier token recognised inside a descriptor string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierAlias {
    Ctrl,
    Cmd,
    Alt,
    Opt,
    Shift,
}

impl ModifierAlias {
    /// Classify a raw descriptor token, ignoring case and surrounding whitespace
    pub fn classify(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "ctrl" => Some(ModifierAlias::Ctrl),
            "cmd" => Some(ModifierAlias::Cmd),
            "alt" => Some(ModifierAlias::Alt),
            "opt" => Some(ModifierAlias::Opt),
            "shift" => Some(ModifierAlias::Shift),
            _ => None,
        }
    }

    /// The modifier flag this alias sets
    pub const fn modifier(self) -> Modifiers {
        match self {
            ModifierAlias::Ctrl | ModifierAlias::Cmd => Modifiers::CTRL,
            ModifierAlias::Alt | ModifierAlias::Opt => Modifiers::ALT,
            ModifierAlias::Shift => Modifiers::SHIFT,
        }
    }

    /// Whether this alias is a synonym that gets remapped to a canonical name
    pub const fn is_synonym(self) -> bool {
        matches!(self, ModifierAlias::Cmd | ModifierAlias::Opt)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ModifierAlias::Ctrl => "Ctrl",
            ModifierAlias::Cmd => "Cmd",
            ModifierAlias::Alt => "Alt",
            ModifierAlias::Opt => "Opt",
            ModifierAlias::Shift => "Shift",
        }
    }

    /// Name of the canonical modifier this alias resolves to
    pub const fn canonical_name(self) -> &'static str {
        match self {
            ModifierAlias::Ctrl | ModifierAlias::Cmd => "Ctrl",
            ModifierAlias::Alt | ModifierAlias::Opt => "Alt",
            ModifierAlias::Shift => "Shift",
        }
    }
}

/// A canonical shortcut descriptor: `[Ctrl-][Alt-][Shift-]<KEY>`
///
/// Only the descriptor builder creates these, so holding one means the
/// string is already in canonical form and can be compared byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Descriptor(String);

impl Descriptor {
    pub(crate) fn from_canonical(canonical: String) -> Self {
        Descriptor(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Descriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Descriptor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Descriptor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One declared binding, as supplied by a config file or caller
///
/// `command` is opaque; `None` or an empty string counts as "no command".
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawBinding {
    pub key: String,
    #[serde(default)]
    pub command: Option<String>,
}

impl RawBinding {
    pub fn new(key: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            command: Some(command.into()),
        }
    }

    /// A binding that declares a key but no command
    pub fn unbound(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            command: None,
        }
    }

    /// The command if it is usable (present and non-empty)
    pub fn truthy_command(&self) -> Option<&str> {
        self.command.as_deref().filter(|command| !command.is_empty())
    }
}

/// A canonical binding that survived normalization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub descriptor: Descriptor,
    pub command: String,
}
