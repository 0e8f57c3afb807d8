//! Transforms a terminal screen snapshot into flat GPU vertex-instance
//! buffers, backed by a row-granularity LRU cache keyed on row identity.
//!
//! Font shaping/atlas lookup and GPU buffer ownership are out of scope —
//! both are consumed through the [`GlyphSource`] and [`GpuUploader`]
//! traits, matching how the teacher's render primitive receives its GPU
//! resources from its host rather than owning them.

mod cache;
mod config;
mod error;
mod gpu_cell;
mod rebuilder;
mod traits;

pub use cache::RowKey;
pub use config::RenderConfig;
pub use error::RebuildError;
pub use gpu_cell::{CellMode, GPUCell};
pub use rebuilder::{flush_atlas, CellRebuilder};
pub use traits::{
    AtlasDirty, AtlasSink, CellMetrics, CellSizeMailbox, GlyphMetrics, GlyphSource, GpuUploader,
    ShapedGlyph,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use term_model::{
        CellAttrs, CellColor, CursorState, CursorStyle, RowId, RowView, ScreenCell, ScreenType,
        ScreenView, Selection, UnderlineStyle,
    };

    /// Deterministic in-memory glyph source: every ASCII character maps
    /// to a 1:1 glyph index at a fixed atlas slot, so two shapes of the
    /// same text always produce bit-identical output.
    struct FakeGlyphSource {
        calls: Rc<RefCell<usize>>,
    }

    impl FakeGlyphSource {
        fn new() -> Self {
            Self {
                calls: Rc::new(RefCell::new(0)),
            }
        }
    }

    impl GlyphSource for FakeGlyphSource {
        fn shape_row(&mut self, cells: &[ScreenCell]) -> Vec<ShapedGlyph> {
            *self.calls.borrow_mut() += 1;
            cells
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_empty())
                .map(|(i, c)| ShapedGlyph {
                    cell_index: i,
                    font_index: 0,
                    glyph_index: c.c as u32,
                    is_emoji: false,
                })
                .collect()
        }

        fn glyph_metrics(&mut self, _font: u16, glyph_index: u32, _cell_height: u32) -> GlyphMetrics {
            GlyphMetrics {
                atlas_x: glyph_index * 8,
                atlas_y: 0,
                width: 8,
                height: 16,
                offset_x: 0,
                offset_y: 0,
            }
        }

        fn underline_sprite(&mut self, _style: UnderlineStyle) -> GlyphMetrics {
            GlyphMetrics::default()
        }

        fn cell_metrics(&mut self) -> CellMetrics {
            CellMetrics {
                width: 8,
                height: 16,
                thickness: 2,
                underline_position: 14,
            }
        }
    }

    fn cell(c: char) -> ScreenCell {
        ScreenCell {
            c,
            fg: CellColor::Default,
            bg: CellColor::Default,
            has_bg: false,
            has_fg: false,
            wide: false,
            attrs: CellAttrs::default(),
        }
    }

    fn one_row_screen(text: &str) -> ScreenView {
        let cells: Vec<ScreenCell> = text.chars().map(cell).collect();
        ScreenView {
            cols: cells.len() as u16,
            rows: 1,
            screen_type: ScreenType::Primary,
            rows_data: vec![RowView::new(RowId(1), cells)],
            cursor: CursorState {
                x: 0,
                y: 0,
                visible: false,
                style: CursorStyle::Block,
            },
            viewport_at_bottom: true,
        }
    }

    #[test]
    fn selection_overlay_colors_the_first_cell_in_spec_scenario_8() {
        let mut screen = one_row_screen("AB");
        let selection = Selection::new((0, 0), (0, 0));
        let mut glyphs = FakeGlyphSource::new();
        let mut rebuilder = CellRebuilder::new(RenderConfig::default());

        rebuilder
            .rebuild(
                ScreenType::Primary,
                Some(selection),
                &mut screen,
                false,
                &mut glyphs,
            )
            .unwrap();

        // bg(selected A), fg(A), bg(B, none since unset)... background
        // array only ever contains the selected column's bg cell.
        assert_eq!(rebuilder.cells_bg.len(), 1);
        assert!(rebuilder.cells_bg.iter().all(|c| c.is_bg()));
        assert_eq!(rebuilder.cells.len(), 2);
        assert_eq!(rebuilder.cells[0].grid_col, 0);
        assert_eq!(rebuilder.cells[1].grid_col, 1);
    }

    #[test]
    fn cache_hit_matches_miss_output_modulo_grid_row() {
        let mut screen = one_row_screen("hi");
        let mut glyphs = FakeGlyphSource::new();
        let mut rebuilder = CellRebuilder::new(RenderConfig::default());

        rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap();
        let first_pass: Vec<_> = rebuilder.cells.clone();

        // Row is no longer dirty, so the second pass must hit cache.
        rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap();
        let second_pass = rebuilder.cells.clone();

        assert_eq!(first_pass.len(), second_pass.len());
        for (a, b) in first_pass.iter().zip(second_pass.iter()) {
            let mut a = *a;
            let mut b = *b;
            a.grid_row = 0;
            b.grid_row = 0;
            assert_eq!(a, b);
        }
    }

    #[test]
    fn dirty_row_bypasses_cache() {
        let mut screen = one_row_screen("x");
        let mut glyphs = FakeGlyphSource::new();
        let mut rebuilder = CellRebuilder::new(RenderConfig::default());

        rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap();
        screen.rows_data[0].dirty = true;
        rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap();

        assert_eq!(rebuilder.cells.len(), 1);
    }

    #[test]
    fn background_array_never_contains_foreground_modes() {
        let mut screen = one_row_screen("z");
        screen.rows_data[0].cells[0].has_bg = true;
        screen.rows_data[0].cells[0].bg = CellColor::Rgb(10, 20, 30);
        let mut glyphs = FakeGlyphSource::new();
        let mut rebuilder = CellRebuilder::new(RenderConfig::default());

        rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap();

        assert!(rebuilder.cells_bg.iter().all(|c| c.is_bg()));
        assert!(rebuilder.cells.iter().all(|c| !c.is_bg()));
    }

    #[test]
    fn eviction_does_not_leak_frees_displaced_row() {
        let mut cache = crate::cache::RowCache::new(1);
        cache.put((None, ScreenType::Primary, RowId(1)), vec![]);
        cache.put((None, ScreenType::Primary, RowId(2)), vec![]);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&(None, ScreenType::Primary, RowId(1))).is_none());
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let mut screen = one_row_screen("x");
        screen.rows = 3;
        let mut glyphs = FakeGlyphSource::new();
        let mut rebuilder = CellRebuilder::new(RenderConfig::default());

        let err = rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap_err();
        assert_eq!(
            err,
            RebuildError::RowCountMismatch {
                declared: 3,
                actual: 1,
            }
        );
    }

    #[test]
    fn selection_color_override_replaces_default_inversion() {
        let mut screen = one_row_screen("A");
        let selection = Selection::new((0, 0), (0, 0));
        let mut glyphs = FakeGlyphSource::new();
        let config = RenderConfig {
            selection_background: Some(CellColor::Rgb(1, 2, 3)),
            selection_foreground: Some(CellColor::Rgb(4, 5, 6)),
            ..RenderConfig::default()
        };
        let mut rebuilder = CellRebuilder::new(config);

        rebuilder
            .rebuild(
                ScreenType::Primary,
                Some(selection),
                &mut screen,
                false,
                &mut glyphs,
            )
            .unwrap();

        let bg_cell = rebuilder.cells_bg[0];
        assert_eq!((bg_cell.bg_r, bg_cell.bg_g, bg_cell.bg_b), (1, 2, 3));
        let fg_cell = rebuilder.cells[0];
        assert_eq!((fg_cell.fg_r, fg_cell.fg_g, fg_cell.fg_b), (4, 5, 6));
    }

    struct FakeMailbox {
        posted: Vec<(u32, u32)>,
    }

    impl CellSizeMailbox for FakeMailbox {
        fn post_cell_size(&mut self, width: u32, height: u32) {
            self.posted.push((width, height));
        }
    }

    #[test]
    fn font_metrics_change_clears_cache_and_posts_once() {
        let mut screen = one_row_screen("x");
        let mut glyphs = FakeGlyphSource::new();
        let mut rebuilder = CellRebuilder::new(RenderConfig::default());
        let mut mailbox = FakeMailbox { posted: Vec::new() };

        rebuilder
            .rebuild(ScreenType::Primary, None, &mut screen, false, &mut glyphs)
            .unwrap();
        rebuilder.on_font_metrics_changed(&mut glyphs, &mut mailbox);
        assert_eq!(mailbox.posted, vec![(8, 16)]);

        // Same metrics the second time: no new cell-size message.
        rebuilder.on_font_metrics_changed(&mut glyphs, &mut mailbox);
        assert_eq!(mailbox.posted.len(), 1);
    }

    struct FakeAtlas {
        bound: bool,
        reuploaded: bool,
        sub_uploaded: bool,
    }

    impl AtlasSink for FakeAtlas {
        fn bind(&mut self) {
            self.bound = true;
        }
        fn reupload(&mut self) {
            self.reuploaded = true;
        }
        fn sub_upload(&mut self) {
            self.sub_uploaded = true;
        }
    }

    #[test]
    fn atlas_flush_skips_unmodified_atlas() {
        let mut atlas = FakeAtlas {
            bound: false,
            reuploaded: false,
            sub_uploaded: false,
        };
        let mut dirty = AtlasDirty::default();
        flush_atlas(&mut atlas, &mut dirty);
        assert!(!atlas.bound);
    }

    #[test]
    fn atlas_flush_resized_triggers_full_reupload() {
        let mut atlas = FakeAtlas {
            bound: false,
            reuploaded: false,
            sub_uploaded: false,
        };
        let mut dirty = AtlasDirty {
            modified: true,
            resized: true,
        };
        flush_atlas(&mut atlas, &mut dirty);
        assert!(atlas.bound);
        assert!(atlas.reuploaded);
        assert!(!atlas.sub_uploaded);
        assert_eq!(dirty, AtlasDirty::default());
    }

    #[test]
    fn atlas_flush_modified_only_triggers_sub_upload() {
        let mut atlas = FakeAtlas {
            bound: false,
            reuploaded: false,
            sub_uploaded: false,
        };
        let mut dirty = AtlasDirty {
            modified: true,
            resized: false,
        };
        flush_atlas(&mut atlas, &mut dirty);
        assert!(atlas.bound);
        assert!(!atlas.reuploaded);
        assert!(atlas.sub_uploaded);
    }
}
