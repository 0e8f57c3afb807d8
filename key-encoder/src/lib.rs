//! Translates keyboard events and terminal mode state into the exact PTY
//! byte sequences xterm-family and Kitty-aware terminals expect.
//!
//! The legacy/PC-style, xterm `modifyOtherKeys`, and fixterms CSI-u
//! behaviors live under [`legacy`]; the Kitty keyboard protocol lives
//! under [`kitty`]. [`encode`] picks between them based on
//! [`EncoderState::kitty_flags`].

mod c0_table;
mod error;
mod event;
mod key;
mod kitty;
mod kitty_table;
mod legacy;
mod mods;
mod pc_table;
mod state;

pub use error::EncodeError;
pub use event::{KeyAction, KeyEvent};
pub use key::{Key, NamedKey};
pub use mods::{KittyFlags, Mods};
pub use state::{CursorKeyMode, EncoderState, KeypadKeyMode};

/// Encode `event` into `buf`, returning the written slice.
///
/// Dispatches to the Kitty protocol path when any progressive-enhancement
/// flag is set, otherwise to the legacy/`modifyOtherKeys` path.
pub fn encode<'a>(
    event: &KeyEvent,
    state: &EncoderState,
    buf: &'a mut [u8],
) -> Result<&'a [u8], EncodeError> {
    let mut scratch = Vec::with_capacity(16);

    let wrote = if state.kitty_flags.any() {
        kitty::encode(event, state, &mut scratch)
    } else {
        legacy::encode(event, state, &mut scratch)
    };

    if !wrote {
        return Ok(&buf[..0]);
    }

    if scratch.len() > buf.len() {
        return Err(EncodeError::BufferTooSmall {
            needed: scratch.len(),
            available: buf.len(),
        });
    }

    buf[..scratch.len()].copy_from_slice(&scratch);
    Ok(&buf[..scratch.len()])
}
