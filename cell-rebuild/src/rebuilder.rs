//! The stateful half of this crate: turns a screen snapshot into GPU
//! vertex-instance arrays, backed by the row LRU (spec.md §4.2).

use term_model::{CellColor, CursorStyle, ScreenCell, ScreenType, ScreenView, Selection};

use crate::cache::RowCache;
use crate::config::RenderConfig;
use crate::error::RebuildError;
use crate::gpu_cell::{CellMode, GPUCell};
use crate::traits::{AtlasDirty, AtlasSink, CellMetrics, CellSizeMailbox, GlyphSource};

const DEFAULT_FG: [u8; 4] = [229, 229, 229, 255];
const DEFAULT_BG: [u8; 4] = [30, 30, 30, 255];
const DEFAULT_CURSOR: [u8; 4] = [255, 255, 255, 255];

fn blank_cell(grid_col: u16, grid_row: u16, grid_width: u8, mode: CellMode) -> GPUCell {
    GPUCell {
        grid_col,
        grid_row,
        glyph_x: 0,
        glyph_y: 0,
        glyph_width: 0,
        glyph_height: 0,
        glyph_offset_x: 0,
        glyph_offset_y: 0,
        fg_r: 0,
        fg_g: 0,
        fg_b: 0,
        fg_a: 0,
        bg_r: 0,
        bg_g: 0,
        bg_b: 0,
        bg_a: 0,
        mode: mode as u8,
        grid_width,
        _pad: 0,
    }
}

/// Turns screen snapshots into GPU-ready vertex-instance arrays. Owns the
/// row LRU, the two growing cell arrays, and the GPU-upload cursor; does
/// not own a font shaper, atlas, or GPU device (see [`GlyphSource`] and
/// [`crate::traits::GpuUploader`]).
pub struct CellRebuilder {
    pub cells_bg: Vec<GPUCell>,
    pub cells: Vec<GPUCell>,
    cache: RowCache,
    config: RenderConfig,
    cell_metrics: Option<CellMetrics>,
    gl_bg_size: usize,
    gl_bg_written: usize,
    gl_fg_size: usize,
    gl_fg_written: usize,
}

impl CellRebuilder {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            cells_bg: Vec::new(),
            cells: Vec::new(),
            cache: RowCache::new(config.cache_capacity_floor),
            config,
            cell_metrics: None,
            gl_bg_size: 0,
            gl_bg_written: 0,
            gl_fg_size: 0,
            gl_fg_written: 0,
        }
    }

    /// Handle a font-size change (or first init): re-derive cell metrics
    /// from `glyphs`, drop the row cache since cached cells reference
    /// stale atlas positions, and notify `mailbox` if the cell size
    /// actually changed so layout can reflow (spec.md §4.2 "Font-metric
    /// reset").
    pub fn on_font_metrics_changed(
        &mut self,
        glyphs: &mut impl GlyphSource,
        mailbox: &mut impl CellSizeMailbox,
    ) -> CellMetrics {
        let metrics = glyphs.cell_metrics();
        let size_changed = self
            .cell_metrics
            .map(|m| m.width != metrics.width || m.height != metrics.height)
            .unwrap_or(true);
        self.cell_metrics = Some(metrics);
        self.invalidate_cache();
        if size_changed {
            mailbox.post_cell_size(metrics.width, metrics.height);
        }
        metrics
    }

    /// Re-point the row cache at a capacity matching the current screen
    /// size; cheap no-op if the screen size hasn't changed enough to move
    /// the formula's result.
    fn retune_cache(&mut self, rows: u16) {
        let target = self.config.cache_capacity(rows);
        if target != self.cache.capacity() {
            self.cache = RowCache::new(target);
        }
    }

    /// Drop all cached rows; call when font metrics change, since cached
    /// cells reference stale atlas positions.
    pub fn invalidate_cache(&mut self) {
        self.cache.clear();
    }

    pub fn rebuild(
        &mut self,
        active_screen: ScreenType,
        selection: Option<Selection>,
        screen: &mut ScreenView,
        draw_cursor: bool,
        glyphs: &mut impl GlyphSource,
    ) -> Result<(), RebuildError> {
        if screen.rows_data.len() != screen.rows as usize {
            return Err(RebuildError::RowCountMismatch {
                declared: screen.rows,
                actual: screen.rows_data.len(),
            });
        }

        self.retune_cache(screen.rows);

        self.cells_bg.clear();
        self.cells_bg.reserve(screen.rows as usize * screen.cols as usize);
        self.cells.clear();
        self.cells.reserve(screen.rows as usize * screen.cols as usize * 2 + 1);

        self.gl_bg_written = 0;
        self.gl_fg_written = 0;

        let mut cursor_overlay: Option<GPUCell> = None;

        for y in 0..screen.rows {
            let Some(row) = screen.rows_data.get_mut(y as usize) else {
                break;
            };
            let (_, screen_row) = screen.viewport_to_screen(0, y);
            let per_row_selection = selection.filter(|s| s.contains_row(screen_row));
            let key = (per_row_selection, active_screen, row.id);
            let start_index = self.cells.len();

            let served_from_cache = if !row.dirty {
                if let Some(cached) = self.cache.get(&key) {
                    for cell in cached {
                        let mut cell = *cell;
                        cell.grid_row = y;
                        self.cells.push(cell);
                    }
                    true
                } else {
                    false
                }
            } else {
                false
            };

            if !served_from_cache {
                let shaped = glyphs.shape_row(&row.cells);
                for (x, cell) in row.cells.iter().enumerate() {
                    let x = x as u16;
                    let shaped_glyph = shaped.iter().find(|g| g.cell_index == x as usize);
                    update_cell(
                        &mut self.cells_bg,
                        &mut self.cells,
                        &self.config,
                        per_row_selection,
                        screen_row,
                        x,
                        y,
                        cell,
                        shaped_glyph,
                        glyphs,
                    );
                }
                let to_cache: Vec<GPUCell> = self.cells[start_index..]
                    .iter()
                    .map(|c| {
                        let mut c = *c;
                        c.grid_row = 0;
                        c
                    })
                    .collect();
                self.cache.put(key, to_cache);
            }

            if screen.cursor.visible
                && screen.cursor.style == CursorStyle::Block
                && screen.viewport_at_bottom
                && y == screen.cursor.y
            {
                cursor_overlay = self.cells[start_index..]
                    .iter()
                    .find(|c| c.grid_col == screen.cursor.x && c.mode == CellMode::Fg as u8)
                    .copied();
            }

            row.dirty = false;
        }

        if draw_cursor {
            let wide = screen
                .rows_data
                .get(screen.cursor.y as usize)
                .and_then(|r| r.cells.get(screen.cursor.x as usize))
                .map(|c| c.wide)
                .unwrap_or(false);
            let mode = match screen.cursor.style {
                CursorStyle::Block => CellMode::CursorRect,
                CursorStyle::BlockHollow => CellMode::CursorRectHollow,
                CursorStyle::Bar => CellMode::CursorBar,
            };
            let mut cursor_cell = blank_cell(
                screen.cursor.x,
                screen.cursor.y,
                if wide { 2 } else { 1 },
                mode,
            );
            let [r, g, b, a] = DEFAULT_CURSOR;
            cursor_cell.bg_r = r;
            cursor_cell.bg_g = g;
            cursor_cell.bg_b = b;
            cursor_cell.bg_a = a;
            cursor_cell.fg_a = 0;
            self.cells.push(cursor_cell);
        }

        if let Some(mut overlay) = cursor_overlay {
            overlay.fg_r = 0;
            overlay.fg_g = 0;
            overlay.fg_b = 0;
            overlay.fg_a = 255;
            self.cells.push(overlay);
        }

        Ok(())
    }

    pub fn gl_bg_state(&self) -> (usize, usize) {
        (self.gl_bg_size, self.gl_bg_written)
    }

    pub fn gl_fg_state(&self) -> (usize, usize) {
        (self.gl_fg_size, self.gl_fg_written)
    }

    /// Upload both cell arrays via `uploader`, reallocating when capacity
    /// grew and uploading only the unsent suffix (spec.md §4.2 "GPU
    /// upload protocol"; `gl_*_written` is reset to 0 every rebuild, so
    /// this always re-uploads in full — a known, flagged optimization
    /// gap carried from the source design, not fixed here).
    pub fn upload(
        &mut self,
        bg_uploader: &mut impl crate::traits::GpuUploader,
        fg_uploader: &mut impl crate::traits::GpuUploader,
    ) {
        upload_one(
            &self.cells_bg,
            &mut self.gl_bg_size,
            &mut self.gl_bg_written,
            bg_uploader,
        );
        upload_one(
            &self.cells,
            &mut self.gl_fg_size,
            &mut self.gl_fg_written,
            fg_uploader,
        );
    }
}

fn upload_one(
    cells: &[GPUCell],
    gl_size: &mut usize,
    gl_written: &mut usize,
    uploader: &mut impl crate::traits::GpuUploader,
) {
    let needed = std::mem::size_of::<GPUCell>() * cells.capacity();
    if *gl_size < needed {
        uploader.ensure_capacity(needed);
        *gl_size = needed;
        *gl_written = 0;
    }
    if *gl_written < cells.len() {
        let bytes = bytemuck::cast_slice(&cells[*gl_written..]);
        let offset = *gl_written * std::mem::size_of::<GPUCell>();
        uploader.upload(offset, bytes);
        *gl_written = cells.len();
    }
}

/// Bind and reupload (or `subImage2D`) a single glyph atlas per `dirty`'s
/// flags, then clear them (spec.md §4.2 "Atlas flush"). Called once per
/// atlas (greyscale, color) the same way [`upload_one`] is called once per
/// cell array.
pub fn flush_atlas(sink: &mut impl AtlasSink, dirty: &mut AtlasDirty) {
    if !dirty.modified {
        return;
    }
    sink.bind();
    if dirty.resized {
        sink.reupload();
    } else {
        sink.sub_upload();
    }
    dirty.modified = false;
    dirty.resized = false;
}

#[allow(clippy::too_many_arguments)]
fn update_cell(
    cells_bg: &mut Vec<GPUCell>,
    cells: &mut Vec<GPUCell>,
    config: &RenderConfig,
    selection: Option<Selection>,
    screen_row: u16,
    x: u16,
    y: u16,
    cell: &ScreenCell,
    shaped: Option<&crate::traits::ShapedGlyph>,
    glyphs: &mut impl GlyphSource,
) -> bool {
    let (bg, fg) = resolve_colors(config, selection, screen_row, x, cell);
    let alpha = if cell.attrs.faint { 175 } else { 255 };
    let grid_width = if cell.wide { 2 } else { 1 };

    let has_underline = cell.attrs.underline.is_some();
    let has_glyph = !cell.is_empty();
    let needed = (bg.is_some() as usize)
        + (has_glyph as usize)
        + (has_underline as usize)
        + (cell.attrs.strikethrough as usize);

    if cells.len() + needed > cells.capacity() {
        tracing::warn!(x, y, "cell array capacity exceeded mid-row, skipping cell");
        return false;
    }

    if let Some(bg) = bg {
        let mut c = blank_cell(x, y, grid_width, CellMode::Bg);
        c.bg_r = bg[0];
        c.bg_g = bg[1];
        c.bg_b = bg[2];
        c.bg_a = bg[3];
        cells_bg.push(c);
    }

    if has_glyph {
        if let Some(glyph) = shaped {
            let metrics = glyphs.glyph_metrics(glyph.font_index, glyph.glyph_index, 0);
            let mode = if glyph.is_emoji {
                CellMode::FgColor
            } else {
                CellMode::Fg
            };
            let mut c = blank_cell(x, y, grid_width, mode);
            c.glyph_x = metrics.atlas_x;
            c.glyph_y = metrics.atlas_y;
            c.glyph_width = metrics.width;
            c.glyph_height = metrics.height;
            c.glyph_offset_x = metrics.offset_x;
            c.glyph_offset_y = metrics.offset_y;
            c.fg_r = fg[0];
            c.fg_g = fg[1];
            c.fg_b = fg[2];
            c.fg_a = alpha;
            cells.push(c);
        } else {
            tracing::warn!(x, y, "no shaped glyph for non-empty cell, skipping glyph");
        }
    }

    if let Some(style) = cell.attrs.underline {
        let metrics = glyphs.underline_sprite(style);
        let mut c = blank_cell(x, y, grid_width, CellMode::Fg);
        c.glyph_x = metrics.atlas_x;
        c.glyph_y = metrics.atlas_y;
        c.glyph_width = metrics.width;
        c.glyph_height = metrics.height;
        c.glyph_offset_x = metrics.offset_x;
        c.glyph_offset_y = metrics.offset_y;
        c.fg_r = fg[0];
        c.fg_g = fg[1];
        c.fg_b = fg[2];
        c.fg_a = alpha;
        cells.push(c);
    }

    if cell.attrs.strikethrough {
        let mut c = blank_cell(x, y, grid_width, CellMode::Strikethrough);
        c.fg_r = fg[0];
        c.fg_g = fg[1];
        c.fg_b = fg[2];
        c.fg_a = alpha;
        cells.push(c);
    }

    true
}

fn resolve_colors(
    config: &RenderConfig,
    selection: Option<Selection>,
    screen_row: u16,
    x: u16,
    cell: &ScreenCell,
) -> (Option<[u8; 4]>, [u8; 4]) {
    if let Some(sel) = selection {
        if sel.contains_point(x, screen_row) {
            let bg = config
                .selection_background
                .unwrap_or(CellColor::Default)
                .resolve(DEFAULT_FG);
            let fg = config
                .selection_foreground
                .unwrap_or(CellColor::Default)
                .resolve(DEFAULT_BG);
            return (Some(bg), fg);
        }
    }

    if cell.attrs.inverse {
        let bg = if cell.has_fg {
            cell.fg.resolve(DEFAULT_FG)
        } else {
            DEFAULT_FG
        };
        let fg = if cell.has_bg {
            cell.bg.resolve(DEFAULT_BG)
        } else {
            DEFAULT_BG
        };
        return (Some(bg), fg);
    }

    let bg = if cell.has_bg {
        Some(cell.bg.resolve(DEFAULT_BG))
    } else {
        None
    };
    let fg = if cell.has_fg {
        cell.fg.resolve(DEFAULT_FG)
    } else {
        DEFAULT_FG
    };
    (bg, fg)
}
