//! Validated grid dimensions and coordinate-to-index mapping
//!
//! Every bounds check in the crate goes through [`Dimensions::index`], so the
//! exclusive upper boundary is decided in exactly one place.

use num_traits::ToPrimitive;

use crate::io::error::{GridError, Result};

/// Width and height of a bounds rectangle, both strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: i32,
    height: i32,
}

impl Dimensions {
    /// Validate a width and height
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either value is not strictly positive
    pub const fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of valid x-coordinates
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of valid y-coordinates
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of addressable coordinates
    pub const fn area(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether (x, y) lies within `[0, width) x [0, height)`
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Array shape in `(rows, cols)` order
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Convert a coordinate into a `[row, col]` array index
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is negative or
    /// reaches `width`/`height`
    pub fn index(&self, x: i32, y: i32) -> Result<[usize; 2]> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        match (y.to_usize(), x.to_usize()) {
            (Some(row), Some(col)) => Ok([row, col]),
            _ => Err(self.out_of_bounds(x, y)),
        }
    }

    /// Whether this rectangle covers every coordinate of `other`
    pub const fn covers(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    const fn rows(&self) -> usize {
        self.height as usize
    }

    const fn cols(&self) -> usize {
        self.width as usize
    }

    /// Error for a coordinate outside this rectangle
    pub(crate) const fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
