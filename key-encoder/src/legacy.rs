//! Legacy/PC-style, xterm `modifyOtherKeys`, and fixterms CSI-u encoding
//! path (spec.md §4.1.1). Steps execute in order; the first match wins.

use crate::c0_table;
use crate::event::{KeyAction, KeyEvent};
use crate::key::{Key, NamedKey};
use crate::mods::Mods;
use crate::pc_table::{self, PcSeq};
use crate::state::EncoderState;

/// Encode `event` under the legacy path, appending bytes to `out`.
/// Returns `true` if a sequence was written.
pub fn encode(event: &KeyEvent, state: &EncoderState, out: &mut Vec<u8>) -> bool {
    // Step 1.
    if !matches!(event.action, KeyAction::Press | KeyAction::Repeat) {
        return false;
    }
    // Step 2.
    if event.composing {
        return false;
    }

    let binding_mods = event.mods.binding();

    // Step 3: PC-style function-key table. A `Fixed` entry has no modifier
    // slot of its own, so it only applies unmodified; under any modifier it
    // falls through (e.g. ctrl+space must reach the C0 table below instead
    // of emitting a literal space).
    if let Key::Named(named) = event.key {
        if let Some(seq) = pc_table::lookup(named, state.cursor_key_mode) {
            if !matches!(seq, PcSeq::Fixed(_)) || binding_mods.is_empty() {
                write_pc_seq(seq, binding_mods, state, out);
                return true;
            }
        }
    }

    // Step 4: C0 control table. Disqualified by any non-alt modifier
    // besides ctrl. Space is a named key but still a C0-table character.
    let without_alt = binding_mods.without_alt();
    if without_alt
        == (Mods {
            ctrl: true,
            ..Mods::empty()
        })
    {
        let c = match event.key {
            Key::Char(c) => Some(c),
            Key::Named(NamedKey::Space) => Some(' '),
            _ => None,
        };
        if let Some(byte) = c.and_then(c0_table::lookup) {
            if binding_mods.alt {
                out.push(0x1b);
            }
            out.push(byte);
            return true;
        }
    }

    // Step 5.
    if event.text.is_empty() {
        return false;
    }
    let first_cp = event.text.chars().next().unwrap();

    // Step 6: xterm modifyOtherKeys state 2.
    if state.modify_other_keys_state_2 && event.text.chars().count() == 1 {
        let cp = first_cp as u32;
        let non_shift_mod = binding_mods.alt
            || binding_mods.ctrl
            || binding_mods.super_
            || binding_mods.hyper
            || binding_mods.meta;
        let should_modify = (0x40..=0x7f).contains(&cp)
            || non_shift_mod
            || (first_cp == ' ' && binding_mods == (Mods { shift: true, ..Mods::empty() }));
        if should_modify {
            out.extend_from_slice(b"\x1b[27;");
            out.extend_from_slice(binding_mods.csi_u_code().to_string().as_bytes());
            out.push(b';');
            out.extend_from_slice(cp.to_string().as_bytes());
            out.push(b'~');
            return true;
        }
    }

    // Step 7: fixterms CSI u. Triggered whenever raw `mods.ctrl` is set,
    // independent of binding_mods/effective_mods. Uses the raw first
    // *byte* of utf8, not the decoded codepoint (spec.md §9: preserved
    // intentionally, not "fixed").
    if event.mods.ctrl {
        let byte = event.text.as_bytes()[0];
        let code = 1 + event.mods.csi_u_bitmask();
        out.extend_from_slice(b"\x1b[");
        out.extend_from_slice(byte.to_string().as_bytes());
        out.push(b';');
        out.extend_from_slice(code.to_string().as_bytes());
        out.push(b'u');
        return true;
    }

    // Step 8: alt-prefixed utf8.
    if binding_mods.alt && state.alt_esc_prefix {
        out.push(0x1b);
        out.extend_from_slice(event.text.as_bytes());
        return true;
    }

    // Step 9: verbatim.
    out.extend_from_slice(event.text.as_bytes());
    true
}

fn write_pc_seq(seq: PcSeq, mods: Mods, state: &EncoderState, out: &mut Vec<u8>) {
    use crate::state::CursorKeyMode;

    match seq {
        PcSeq::Fixed(bytes) => {
            out.extend_from_slice(bytes);
        }
        PcSeq::CursorFinal(final_byte) => {
            if mods.is_empty() {
                if state.cursor_key_mode == CursorKeyMode::Application {
                    out.extend_from_slice(b"\x1bO");
                } else {
                    out.extend_from_slice(b"\x1b[");
                }
                out.push(final_byte);
            } else {
                out.extend_from_slice(b"\x1b[1;");
                out.extend_from_slice(mods.csi_u_code().to_string().as_bytes());
                out.push(final_byte);
            }
        }
        PcSeq::TildeCode(code) => {
            out.extend_from_slice(b"\x1b[");
            out.extend_from_slice(code.to_string().as_bytes());
            if !mods.is_empty() {
                out.push(b';');
                out.extend_from_slice(mods.csi_u_code().to_string().as_bytes());
            }
            out.push(b'~');
        }
        PcSeq::Ss3Final(final_byte) => {
            if mods.is_empty() {
                out.extend_from_slice(b"\x1bO");
                out.push(final_byte);
            } else {
                out.extend_from_slice(b"\x1b[1;");
                out.extend_from_slice(mods.csi_u_code().to_string().as_bytes());
                out.push(final_byte);
            }
        }
    }
}
