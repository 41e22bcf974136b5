//! Spatial data structures
//!
//! This module contains the grid container itself:
//! - The capability set every backing implements
//! - Validated dimensions and bounds checking
//! - The dense array-backed reference backing

/// Dense array-backed grid
pub mod array;
/// Validated dimensions and coordinate mapping
pub mod bounds;
/// Grid capability set
pub mod grid;

pub use array::ArrayGrid;
pub use bounds::Dimensions;
pub use grid::Grid;
