//! ctrl control-byte table (spec.md §4.1.1, step 4; see §9 for the
//! digit/punctuation overrides).

/// Map a character to its C0 control byte under ctrl, independent of alt
/// (callers apply the ESC prefix for alt themselves).
///
/// `[` and `i` are deliberately absent: both would collide with a byte a
/// literal key already produces (Escape and Tab respectively), so the
/// legacy path defers them to the fixterms fallback (spec.md §4.1.1 step
/// 7) instead of hardcoding a collision here.
pub fn lookup(c: char) -> Option<u8> {
    match c {
        ' ' => Some(0x00),
        'i' | '[' => None,
        'a'..='z' => Some((c as u8) - b'a' + 1),
        'A'..='Z' => Some((c.to_ascii_lowercase() as u8) - b'a' + 1),
        '2' => Some(0x00),
        '3' => Some(0x1b),
        '4' => Some(0x1c),
        '5' => Some(0x1d),
        '6' => Some(0x1e),
        '7' => Some(0x1f),
        '8' => Some(0x7f),
        '\\' => Some(0x1c),
        ']' => Some(0x1d),
        '/' => Some(0x1f),
        '?' => Some(0x7f),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_1_26() {
        assert_eq!(lookup('a'), Some(1));
        assert_eq!(lookup('c'), Some(3));
        assert_eq!(lookup('h'), Some(8));
        assert_eq!(lookup('z'), Some(26));
    }

    #[test]
    fn digit_overrides_match_spec_table() {
        assert_eq!(lookup('2'), Some(0x00));
        assert_eq!(lookup('6'), Some(0x1e));
        assert_eq!(lookup('8'), Some(0x7f));
    }

    #[test]
    fn bracket_and_i_are_excluded() {
        assert_eq!(lookup('['), None);
        assert_eq!(lookup('i'), None);
    }
}
