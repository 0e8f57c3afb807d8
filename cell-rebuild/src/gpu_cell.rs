//! Packed per-instance GPU vertex attribute (spec.md §3).

use bytemuck::{Pod, Zeroable};

/// Discriminates what a [`GPUCell`] instance draws. Masks OR'd onto the
/// base value are allowed by the wire format but currently unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CellMode {
    Bg = 1,
    Fg = 2,
    CursorRect = 3,
    CursorRectHollow = 4,
    CursorBar = 5,
    FgColor = 7,
    Strikethrough = 8,
}

/// Bit-exact packed record used as a per-instance vertex attribute.
/// Field order is observable to a shader and must not be reordered.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct GPUCell {
    pub grid_col: u16,
    pub grid_row: u16,
    pub glyph_x: u32,
    pub glyph_y: u32,
    pub glyph_width: u32,
    pub glyph_height: u32,
    pub glyph_offset_x: i32,
    pub glyph_offset_y: i32,
    pub fg_r: u8,
    pub fg_g: u8,
    pub fg_b: u8,
    pub fg_a: u8,
    pub bg_r: u8,
    pub bg_g: u8,
    pub bg_b: u8,
    pub bg_a: u8,
    pub mode: u8,
    pub grid_width: u8,
    /// Explicit alignment padding. `#[derive(Pod)]` rejects implicit
    /// compiler-inserted padding, so this makes the trailing two bytes
    /// (needed to round the struct up to its 4-byte alignment) part of
    /// the type instead.
    pub(crate) _pad: u16,
}

impl GPUCell {
    pub fn mode(&self) -> u8 {
        self.mode
    }

    pub fn is_bg(&self) -> bool {
        self.mode == CellMode::Bg as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn layout_matches_expected_stride() {
        // u16*2 + u32*4 + i32*2 + u8*10 + pad*u16 = 40 bytes.
        assert_eq!(size_of::<GPUCell>(), 40);
    }

    #[test]
    fn is_bg_matches_mode() {
        let mut cell = GPUCell::zeroed();
        cell.mode = CellMode::Bg as u8;
        assert!(cell.is_bg());
        cell.mode = CellMode::Fg as u8;
        assert!(!cell.is_bg());
    }
}
