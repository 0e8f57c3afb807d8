//! Read-only terminal screen snapshot types.
//!
//! This crate defines the data model shared between a terminal engine (out
//! of scope here) and the GPU renderer: cells, rows, colors, selection, and
//! the screen snapshot that crosses the thread boundary in spec.md §5.

mod attrs;
mod cell;
mod color;
mod row;
mod screen;
mod selection;

pub use attrs::{CellAttrs, UnderlineStyle};
pub use cell::ScreenCell;
pub use color::CellColor;
pub use row::{RowId, RowView};
pub use screen::{CursorState, CursorStyle, ScreenType, ScreenView};
pub use selection::Selection;
