//! Rendering and script syntax constants

// Board rendering
/// Glyph drawn for an empty cell
pub const EMPTY_CELL_GLYPH: &str = ".";
/// Separator placed between columns of a rendered row
pub const COLUMN_SEPARATOR: &str = " ";

// Script syntax
/// Lines starting with this prefix are ignored
pub const COMMENT_PREFIX: char = '#';
/// Text printed by `get` for an empty cell
pub const EMPTY_CELL_REPORT: &str = "empty";

/// File extension expected for script files
pub const SCRIPT_EXTENSION: &str = "grid";
