//! Kitty keyboard protocol functional-key table (spec.md §4.1.2, step 1).

use crate::key::NamedKey;

/// A table row: the numeric key code Kitty reports, and the final byte
/// that decides full form (`'u'`/`'~'`) vs special form (any other
/// letter).
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub code: u32,
    pub final_byte: u8,
    pub is_modifier: bool,
}

pub fn lookup(key: NamedKey) -> Option<Entry> {
    let (code, final_byte) = match key {
        NamedKey::Escape => (27, b'u'),
        NamedKey::Enter => (13, b'u'),
        NamedKey::Tab => (9, b'u'),
        NamedKey::Backspace => (127, b'u'),
        NamedKey::ArrowUp => (1, b'A'),
        NamedKey::ArrowDown => (1, b'B'),
        NamedKey::ArrowRight => (1, b'C'),
        NamedKey::ArrowLeft => (1, b'D'),
        NamedKey::Home => (1, b'H'),
        NamedKey::End => (1, b'F'),
        NamedKey::F1 => (1, b'P'),
        NamedKey::F2 => (1, b'Q'),
        NamedKey::F3 => (1, b'R'),
        NamedKey::F4 => (1, b'S'),
        NamedKey::Insert => (2, b'~'),
        NamedKey::Delete => (3, b'~'),
        NamedKey::PageUp => (5, b'~'),
        NamedKey::PageDown => (6, b'~'),
        NamedKey::F5 => (15, b'~'),
        NamedKey::F6 => (17, b'~'),
        NamedKey::F7 => (18, b'~'),
        NamedKey::F8 => (19, b'~'),
        NamedKey::F9 => (20, b'~'),
        NamedKey::F10 => (21, b'~'),
        NamedKey::F11 => (23, b'~'),
        NamedKey::F12 => (24, b'~'),
        NamedKey::LeftShift => (57441, b'u'),
        NamedKey::LeftControl => (57442, b'u'),
        NamedKey::LeftAlt => (57443, b'u'),
        NamedKey::LeftSuper => (57444, b'u'),
        NamedKey::LeftHyper => (57445, b'u'),
        NamedKey::LeftMeta => (57446, b'u'),
        NamedKey::RightShift => (57447, b'u'),
        NamedKey::RightControl => (57448, b'u'),
        NamedKey::RightAlt => (57449, b'u'),
        NamedKey::RightSuper => (57450, b'u'),
        NamedKey::RightHyper => (57451, b'u'),
        NamedKey::RightMeta => (57452, b'u'),
        NamedKey::CapsLock => (57358, b'u'),
        NamedKey::NumLock => (57360, b'u'),
        NamedKey::Space => (32, b'u'),
        _ => return None,
    };
    Some(Entry {
        code,
        final_byte,
        is_modifier: key.is_modifier(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_shift_matches_kitty_protocol_assignment() {
        let e = lookup(NamedKey::LeftShift).unwrap();
        assert_eq!(e.code, 57441);
        assert!(e.is_modifier);
    }

    #[test]
    fn arrow_keys_use_special_form_finals() {
        let e = lookup(NamedKey::ArrowUp).unwrap();
        assert_eq!(e.final_byte, b'A');
    }

    #[test]
    fn escape_uses_full_form() {
        let e = lookup(NamedKey::Escape).unwrap();
        assert_eq!((e.code, e.final_byte), (27, b'u'));
    }
}
