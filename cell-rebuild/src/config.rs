//! Row-cache capacity policy and selection color overrides.

use term_model::CellColor;

/// Drives the row-LRU capacity formula: `max(cache_capacity_floor, rows *
/// cache_rows_multiplier)`, plus the colors a selected cell is painted
/// with. `None` falls back to the default foreground/background (spec.md
/// §4.2: `bg = selection_background ?? default_foreground, fg =
/// selection_foreground ?? default_background`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub cache_capacity_floor: usize,
    pub cache_rows_multiplier: usize,
    pub selection_background: Option<CellColor>,
    pub selection_foreground: Option<CellColor>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cache_capacity_floor: 80,
            cache_rows_multiplier: 10,
            selection_background: None,
            selection_foreground: None,
        }
    }
}

impl RenderConfig {
    pub fn cache_capacity(&self, rows: u16) -> usize {
        self.cache_capacity_floor
            .max(rows as usize * self.cache_rows_multiplier)
    }
}
