//! Input event shape.

use crate::key::Key;
use crate::mods::Mods;

/// The three kinds of key transition the Kitty protocol can report.
/// Legacy/PC-style and CSI-u encoding only ever see `Press` (and treat
/// `Repeat` the same as `Press`); `Release` is only emitted when
/// `report_events` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// A single keyboard event to encode.
///
/// `text` holds the UTF-8 produced by the platform's input method for this
/// key, if any (spec.md refers to this as `utf8`); it is empty for bare
/// modifier presses and most control-key combinations.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub mods: Mods,
    pub action: KeyAction,
    pub text: String,
    /// Codepoint this key would produce without shift, or 0 if unknown.
    /// Used by the Kitty path to synthesize a table entry for keys the
    /// functional-key table doesn't name.
    pub unshifted_codepoint: u32,
    /// True while an IME dead-key composition is in progress.
    pub composing: bool,
}

impl KeyEvent {
    pub fn new(key: Key, mods: Mods, action: KeyAction) -> Self {
        Self {
            key,
            mods,
            action,
            text: String::new(),
            unshifted_codepoint: 0,
            composing: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_unshifted_codepoint(mut self, cp: u32) -> Self {
        self.unshifted_codepoint = cp;
        self
    }

    pub fn composing(mut self) -> Self {
        self.composing = true;
        self
    }
}
