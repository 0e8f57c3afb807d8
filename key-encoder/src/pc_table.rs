//! Legacy/PC-style function-key table (spec.md §4.1.1, step 2).

use crate::key::NamedKey;
use crate::state::CursorKeyMode;

/// Shape of a table entry, before modifier/mode bytes are applied.
pub enum PcSeq {
    /// A fixed byte sequence, used only when no modifier applies.
    Fixed(&'static [u8]),
    /// `CSI <final>` normally, `SS3 <final>` in cursor-key application
    /// mode when unmodified; `CSI 1 ; <code> <final>` when modified.
    CursorFinal(u8),
    /// `CSI <code> ~` unmodified, `CSI <code> ; <mod> ~` when modified.
    TildeCode(u8),
    /// `SS3 <final>` unmodified, `CSI 1 ; <code> <final>` when modified.
    Ss3Final(u8),
}

const FIXED: &[(NamedKey, &[u8])] = &[
    (NamedKey::Enter, b"\r"),
    (NamedKey::Tab, b"\t"),
    (NamedKey::Backspace, b"\x7f"),
    (NamedKey::Space, b" "),
    (NamedKey::Escape, b"\x1b"),
];

const CURSOR_FINALS: &[(NamedKey, u8)] = &[
    (NamedKey::ArrowUp, b'A'),
    (NamedKey::ArrowDown, b'B'),
    (NamedKey::ArrowRight, b'C'),
    (NamedKey::ArrowLeft, b'D'),
    (NamedKey::Home, b'H'),
    (NamedKey::End, b'F'),
];

const TILDE_CODES: &[(NamedKey, u8)] = &[
    (NamedKey::Insert, 2),
    (NamedKey::Delete, 3),
    (NamedKey::PageUp, 5),
    (NamedKey::PageDown, 6),
    (NamedKey::F5, 15),
    (NamedKey::F6, 17),
    (NamedKey::F7, 18),
    (NamedKey::F8, 19),
    (NamedKey::F9, 20),
    (NamedKey::F10, 21),
    (NamedKey::F11, 23),
    (NamedKey::F12, 24),
];

const SS3_FINALS: &[(NamedKey, u8)] = &[
    (NamedKey::F1, b'P'),
    (NamedKey::F2, b'Q'),
    (NamedKey::F3, b'R'),
    (NamedKey::F4, b'S'),
];

/// Look up the table shape for `key`. Callers apply modifiers and the
/// current [`CursorKeyMode`] themselves; `cursor_mode` is accepted here
/// only to document that arrow/Home/End entries are mode-sensitive even
/// though the shape returned (`CursorFinal`) is the same either way.
pub fn lookup(key: NamedKey, _cursor_mode: CursorKeyMode) -> Option<PcSeq> {
    if let Some((_, seq)) = FIXED.iter().find(|(k, _)| *k == key) {
        return Some(PcSeq::Fixed(seq));
    }
    if let Some((_, f)) = CURSOR_FINALS.iter().find(|(k, _)| *k == key) {
        return Some(PcSeq::CursorFinal(*f));
    }
    if let Some((_, c)) = TILDE_CODES.iter().find(|(k, _)| *k == key) {
        return Some(PcSeq::TildeCode(*c));
    }
    if let Some((_, f)) = SS3_FINALS.iter().find(|(k, _)| *k == key) {
        return Some(PcSeq::Ss3Final(*f));
    }
    None
}
