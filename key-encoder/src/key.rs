//! Logical key identity.

/// A single named (non-character) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Tab,
    Backspace,
    Escape,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    // Modifier keys, reportable under the Kitty protocol (spec.md §4.1.2).
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,
    LeftHyper,
    RightHyper,
    LeftMeta,
    RightMeta,
    CapsLock,
    NumLock,
}

impl NamedKey {
    /// True for the keys that represent a modifier being pressed/released
    /// by itself, rather than a key that carries modifiers.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            NamedKey::LeftShift
                | NamedKey::RightShift
                | NamedKey::LeftControl
                | NamedKey::RightControl
                | NamedKey::LeftAlt
                | NamedKey::RightAlt
                | NamedKey::LeftSuper
                | NamedKey::RightSuper
                | NamedKey::LeftHyper
                | NamedKey::RightHyper
                | NamedKey::LeftMeta
                | NamedKey::RightMeta
                | NamedKey::CapsLock
                | NamedKey::NumLock
        )
    }
}

/// The logical key identity carried by a [`crate::event::KeyEvent`].
///
/// `Char` covers letters, digits, and bracketed punctuation; `Named` covers
/// everything else, including bare modifier presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Named(NamedKey),
}

impl Key {
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Named(n) if n.is_modifier())
    }
}
