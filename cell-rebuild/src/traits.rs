//! External collaborator boundaries: font shaping/atlas and GPU upload.
//! Both are out of scope per spec.md §1 and specified only at their
//! interface here.

use term_model::{ScreenCell, UnderlineStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    pub cell_index: usize,
    pub font_index: u16,
    pub glyph_index: u32,
    pub is_emoji: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub atlas_x: u32,
    pub atlas_y: u32,
    pub width: u32,
    pub height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
    pub thickness: u32,
    pub underline_position: i32,
}

/// Font shaping and glyph atlas lookup, consumed by the rebuilder but
/// implemented by an application-supplied text engine.
pub trait GlyphSource {
    fn shape_row(&mut self, cells: &[ScreenCell]) -> Vec<ShapedGlyph>;
    fn glyph_metrics(&mut self, font_index: u16, glyph_index: u32, cell_height: u32) -> GlyphMetrics;
    fn underline_sprite(&mut self, style: UnderlineStyle) -> GlyphMetrics;
    fn cell_metrics(&mut self) -> CellMetrics;
}

/// GPU instance-buffer upload, implemented by an application-supplied
/// wgpu (or equivalent) backend. The rebuilder never owns a device or
/// queue directly.
pub trait GpuUploader {
    fn ensure_capacity(&mut self, bytes: usize);
    fn upload(&mut self, offset: usize, data: &[u8]);
    fn buffer_len(&self) -> usize;
}

/// Per-atlas dirty flags consulted by the atlas flush (spec.md §4.2
/// "Atlas flush"), mirroring the greyscale/color atlas pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AtlasDirty {
    pub modified: bool,
    pub resized: bool,
}

/// Texture upload boundary for a single glyph atlas, implemented by an
/// application-supplied GPU backend. Distinct from [`GpuUploader`] because
/// an atlas distinguishes a full reupload (on resize) from a `subImage2D`
/// of the existing region.
pub trait AtlasSink {
    fn bind(&mut self);
    fn reupload(&mut self);
    fn sub_upload(&mut self);
}

/// Window mailbox boundary for messages posted out of the render path
/// (spec.md "Window mailbox messages out").
pub trait CellSizeMailbox {
    fn post_cell_size(&mut self, width: u32, height: u32);
}
