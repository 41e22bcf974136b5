//! Capability set shared by every grid backing
//!
//! A grid is a fixed-size rectangle of integer coordinates where each cell is
//! either empty or holds exactly one element. Coordinates run over
//! `[0, width) x [0, height)`; both upper bounds are exclusive.
//!
//! All fallible operations either complete fully or leave the grid exactly as
//! it was.

use crate::io::error::Result;
use crate::spatial::bounds::Dimensions;

/// Coordinate-addressed storage of at most one element per cell
pub trait Grid<T> {
    /// Current width and height
    fn dimensions(&self) -> Dimensions;

    /// Number of occupied cells
    fn len(&self) -> usize;

    /// Store `element` at (x, y), replacing any element already there
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`](crate::GridError::OutOfBounds) if
    /// the coordinate is outside the grid
    fn add(&mut self, x: i32, y: i32, element: T) -> Result<()>;

    /// Element at (x, y), or `None` if the cell is empty
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`](crate::GridError::OutOfBounds) if
    /// the coordinate is outside the grid
    fn get(&self, x: i32, y: i32) -> Result<Option<&T>>;

    /// Empty the cell at (x, y)
    ///
    /// Returns `true` if an element was removed, `false` if the cell was
    /// already empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`](crate::GridError::OutOfBounds) if
    /// the coordinate is outside the grid
    fn remove(&mut self, x: i32, y: i32) -> Result<bool>;

    /// Empty every cell, keeping the dimensions
    fn clear(&mut self);

    /// Change the dimensions, keeping every element at its coordinate
    ///
    /// Cells introduced by growth start empty. Shrinking is only allowed when
    /// every discarded cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`](crate::GridError::InvalidDimension)
    /// for a non-positive size and [`GridError::DataLoss`](crate::GridError::DataLoss)
    /// if an occupied cell would fall outside the new bounds. The grid is
    /// unchanged in both cases.
    fn resize(&mut self, new_width: i32, new_height: i32) -> Result<()>;

    /// Number of valid x-coordinates
    fn width(&self) -> i32 {
        self.dimensions().width()
    }

    /// Number of valid y-coordinates
    fn height(&self) -> i32 {
        self.dimensions().height()
    }

    /// Whether (x, y) is addressable
    fn contains(&self, x: i32, y: i32) -> bool {
        self.dimensions().contains(x, y)
    }

    /// Whether no cell is occupied
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
