//! Terminal-mode state that the encoder consults on every key.

use crate::mods::KittyFlags;

/// DECCKM: whether arrow keys emit `CSI A`/`O A` (Normal) or `SS3 A`
/// (Application).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKeyMode {
    Normal,
    Application,
}

/// DECKPAM/DECKPNM: application vs normal keypad, mirrors
/// [`CursorKeyMode`] but governs the numeric keypad table (unused by this
/// crate's table, which only covers the main keyboard, but retained so
/// `EncoderState` carries the full legacy mode set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKeyMode {
    Normal,
    Application,
}

/// The subset of terminal mode state the key encoder needs to pick a
/// byte sequence for a given key event (spec.md §2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncoderState {
    /// `meta sends escape` (xterm's `metaSendsEscape`): alt-modified keys
    /// are prefixed with ESC rather than folded into a modifier code.
    pub alt_esc_prefix: bool,
    pub cursor_key_mode: CursorKeyMode,
    pub keypad_key_mode: KeypadKeyMode,
    /// xterm `modifyOtherKeys` resource, collapsed to a single flag: off,
    /// or state 2 ("set" and "setOther" differ only in which otherwise-
    /// unmodified keys are reported, a distinction this crate does not
    /// need to draw — see DESIGN.md).
    pub modify_other_keys_state_2: bool,
    pub kitty_flags: KittyFlags,
}

impl Default for EncoderState {
    fn default() -> Self {
        Self {
            alt_esc_prefix: true,
            cursor_key_mode: CursorKeyMode::Normal,
            keypad_key_mode: KeypadKeyMode::Normal,
            modify_other_keys_state_2: false,
            kitty_flags: KittyFlags::default(),
        }
    }
}
