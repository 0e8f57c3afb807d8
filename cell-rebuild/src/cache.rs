//! Row-granularity LRU cache (spec.md §3 "Row LRU").

use std::num::NonZeroUsize;

use lru::LruCache;
use term_model::{RowId, ScreenType, Selection};

use crate::gpu_cell::GPUCell;

/// Cache key: selection range (or none), active screen, and row identity.
/// Including selection means toggling selection never poisons the
/// unselected rendering — both coexist under distinct keys.
pub type RowKey = (Option<Selection>, ScreenType, RowId);

pub struct RowCache {
    inner: LruCache<RowKey, Vec<GPUCell>>,
}

impl RowCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            inner: LruCache::new(cap),
        }
    }

    pub fn get(&mut self, key: &RowKey) -> Option<&Vec<GPUCell>> {
        self.inner.get(key)
    }

    /// Insert `cells` under `key`. If this eviction displaces another
    /// entry, its cell `Vec` is dropped here, freeing the allocation.
    pub fn put(&mut self, key: RowKey, cells: Vec<GPUCell>) {
        self.inner.put(key, cells);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn capacity(&self) -> usize {
        self.inner.cap().get()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_cell() -> GPUCell {
        GPUCell {
            grid_col: 0,
            grid_row: 0,
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
            mode: 0,
            grid_width: 1,
            _pad: 0,
        }
    }

    fn key(row: u64) -> RowKey {
        (None, ScreenType::Primary, RowId(row))
    }

    #[test]
    fn hit_after_insert() {
        let mut cache = RowCache::new(4);
        cache.put(key(1), vec![blank_cell()]);
        assert!(cache.get(&key(1)).is_some());
    }

    #[test]
    fn eviction_at_capacity_one_frees_previous_entry() {
        let mut cache = RowCache::new(1);
        cache.put(key(1), vec![blank_cell(); 3]);
        assert_eq!(cache.len(), 1);
        cache.put(key(2), vec![blank_cell(); 5]);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key(1)).is_none());
        assert!(cache.get(&key(2)).is_some());
    }

    #[test]
    fn distinct_selection_keys_coexist() {
        use term_model::Selection;

        let mut cache = RowCache::new(4);
        let sel = Selection::new((0, 0), (1, 0));
        cache.put((None, ScreenType::Primary, RowId(1)), vec![blank_cell()]);
        cache.put(
            (Some(sel), ScreenType::Primary, RowId(1)),
            vec![blank_cell(); 2],
        );
        assert_eq!(cache.len(), 2);
    }
}
