//! Plain-text board rendering
//!
//! Produces one line per row from y = 0 downwards, with columns in increasing
//! x order. Empty cells use [`EMPTY_CELL_GLYPH`].

use std::fmt::{Display, Write};

use crate::io::configuration::{COLUMN_SEPARATOR, EMPTY_CELL_GLYPH};
use crate::spatial::grid::Grid;

/// Render every cell of `grid` as text
///
/// Each line ends with a newline, so a 1x1 empty grid renders as `".\n"`.
pub fn render<T, G>(grid: &G) -> String
where
    T: Display,
    G: Grid<T> + ?Sized,
{
    let mut board = String::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if x > 0 {
                board.push_str(COLUMN_SEPARATOR);
            }
            match grid.get(x, y) {
                Ok(Some(element)) => {
                    // Writing into a String cannot fail
                    let _ = write!(board, "{element}");
                }
                _ => board.push_str(EMPTY_CELL_GLYPH),
            }
        }
        board.push('\n');
    }

    board
}
