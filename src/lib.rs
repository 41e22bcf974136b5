//! Fixed-size generic 2D grid with coordinate-addressed storage
//!
//! Each integer coordinate of a rectangular surface holds at most one element.
//! The grid supports insertion, lookup, removal, clearing, and resizing that
//! keeps every element at its coordinate and refuses to discard any of them.

#![forbid(unsafe_code)]

/// Script replay, text rendering, and error handling
pub mod io;
/// Grid capability set and its array-backed implementation
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{ArrayGrid, Dimensions, Grid};
