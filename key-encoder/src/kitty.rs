//! Kitty keyboard protocol encoding path (spec.md §4.1.2).

use crate::event::{KeyAction, KeyEvent};
use crate::key::{Key, NamedKey};
use crate::kitty_table::{self, Entry};
use crate::state::EncoderState;

struct KittySequence {
    key: u32,
    final_byte: u8,
    mods_code: u16,
    event_tag: Option<u8>,
    alternates: Vec<u32>,
    text: Option<String>,
}

fn resolve_entry(event: &KeyEvent) -> Option<Entry> {
    if let Key::Named(named) = event.key {
        if let Some(entry) = kitty_table::lookup(named) {
            return Some(entry);
        }
    }
    if event.unshifted_codepoint > 0 {
        return Some(Entry {
            code: event.unshifted_codepoint,
            final_byte: b'u',
            is_modifier: false,
        });
    }
    None
}

/// Encode `event` under the Kitty protocol, appending bytes to `out`.
/// Returns `true` if a sequence (or a verbatim text pass-through) was
/// written.
pub fn encode(event: &KeyEvent, state: &EncoderState, out: &mut Vec<u8>) -> bool {
    let flags = state.kitty_flags;

    // Step 1.
    let entry = resolve_entry(event);

    // Step 2.
    if event.composing {
        match entry {
            Some(e) if e.is_modifier => {}
            _ => return false,
        }
    }

    // Step 3, skipped under report_all.
    if !flags.report_all {
        if event.mods.effective().is_empty()
            && matches!(
                event.key,
                Key::Named(NamedKey::Enter | NamedKey::Tab | NamedKey::Backspace)
            )
        {
            out.push(match event.key {
                Key::Named(NamedKey::Enter) => b'\r',
                Key::Named(NamedKey::Tab) => b'\t',
                _ => 0x7f,
            });
            return true;
        }
        if !event.text.is_empty()
            && event.mods.binding().is_empty()
            && event.action != KeyAction::Release
        {
            out.extend_from_slice(event.text.as_bytes());
            return true;
        }
    }

    // Step 4.
    let Some(entry) = entry else {
        return false;
    };

    // Step 5.
    let event_tag = if flags.report_events {
        Some(match event.action {
            KeyAction::Press => b'1',
            KeyAction::Release => b'3',
            KeyAction::Repeat => b'2',
        })
    } else {
        None
    };
    let alternates = if flags.report_alternates {
        let mut chars = event.text.chars();
        match (chars.next(), chars.next()) {
            (Some(cp), None) if cp as u32 != entry.code => vec![cp as u32],
            _ => Vec::new(),
        }
    } else {
        Vec::new()
    };
    let text = if flags.report_associated && !event.text.is_empty() {
        Some(event.text.clone())
    } else {
        None
    };

    let seq = KittySequence {
        key: entry.code,
        final_byte: entry.final_byte,
        mods_code: event.mods.kitty_code(),
        event_tag,
        alternates,
        text,
    };

    // Step 6.
    write_sequence(&seq, out);
    true
}

fn write_sequence(seq: &KittySequence, out: &mut Vec<u8>) {
    if seq.final_byte == b'u' || seq.final_byte == b'~' {
        out.extend_from_slice(b"\x1b[");
        out.extend_from_slice(seq.key.to_string().as_bytes());
        for alt in &seq.alternates {
            out.push(b':');
            out.extend_from_slice(alt.to_string().as_bytes());
        }
        let modifier_section = seq.event_tag.is_some() || seq.mods_code > 1;
        if modifier_section {
            out.push(b';');
            out.extend_from_slice(seq.mods_code.to_string().as_bytes());
            if let Some(tag) = seq.event_tag {
                out.push(b':');
                out.push(tag);
            }
        }
        if let Some(text) = &seq.text {
            if !modifier_section {
                out.push(b';');
            }
            out.push(b';');
            let mut first = true;
            for cp in text.chars() {
                if !first {
                    out.push(b':');
                }
                first = false;
                out.extend_from_slice((cp as u32).to_string().as_bytes());
            }
        }
        out.push(seq.final_byte);
    } else if let Some(tag) = seq.event_tag {
        out.extend_from_slice(b"\x1b[1;");
        out.extend_from_slice(seq.mods_code.to_string().as_bytes());
        out.push(b':');
        out.push(tag);
        out.push(seq.final_byte);
    } else if seq.mods_code > 1 {
        out.extend_from_slice(b"\x1b[1;");
        out.extend_from_slice(seq.mods_code.to_string().as_bytes());
        out.push(seq.final_byte);
    } else {
        out.extend_from_slice(b"\x1b[");
        out.push(seq.final_byte);
    }
}
