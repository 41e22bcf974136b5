//! Dense array-backed grid
//!
//! Cells are stored as `Option<T>` in a row-major `Array2` indexed `[y, x]`,
//! so any element type works without a sentinel value. Resizing validates
//! first and only then moves elements into freshly allocated storage, which
//! keeps a rejected resize free of side effects.

use ndarray::Array2;

use crate::io::error::{GridError, Result};
use crate::spatial::bounds::Dimensions;
use crate::spatial::grid::Grid;

/// Grid backed by a dense two-dimensional array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayGrid<T> {
    /// Cell contents indexed by `[row, col]` (that is `[y, x]`)
    cells: Array2<Option<T>>,

    /// Current bounds rectangle
    dimensions: Dimensions,

    /// Number of occupied cells
    occupied: usize,
}

impl<T> ArrayGrid<T> {
    /// Create an empty grid with the given width and height
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either value is not
    /// strictly positive
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let dimensions = Dimensions::new(width, height)?;

        Ok(Self {
            cells: empty_cells(dimensions),
            dimensions,
            occupied: 0,
        })
    }

    /// Mutable access to the element at (x, y), or `None` if the cell is empty
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is outside the grid
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<Option<&mut T>> {
        Ok(self.cell_mut(x, y)?.as_mut())
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Option<T>> {
        let index = self.dimensions.index(x, y)?;
        let dimensions = self.dimensions;
        self.cells
            .get_mut(index)
            .ok_or_else(|| dimensions.out_of_bounds(x, y))
    }

    /// First occupied coordinate that `target` would not cover
    ///
    /// Scans in row-major order, so the reported cell has the smallest y and
    /// then the smallest x among those that would be lost.
    fn first_lost(&self, target: &Dimensions) -> Option<(i32, i32)> {
        if target.covers(&self.dimensions) {
            return None;
        }

        self.cells
            .indexed_iter()
            .find(|((row, col), cell)| {
                cell.is_some() && !target.contains(*col as i32, *row as i32)
            })
            .map(|((row, col), _)| (col as i32, row as i32))
    }
}

impl<T> Grid<T> for ArrayGrid<T> {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn len(&self) -> usize {
        self.occupied
    }

    fn add(&mut self, x: i32, y: i32, element: T) -> Result<()> {
        if self.cell_mut(x, y)?.replace(element).is_none() {
            self.occupied += 1;
        }
        Ok(())
    }

    fn get(&self, x: i32, y: i32) -> Result<Option<&T>> {
        let index = self.dimensions.index(x, y)?;
        Ok(self.cells.get(index).and_then(Option::as_ref))
    }

    fn remove(&mut self, x: i32, y: i32) -> Result<bool> {
        let removed = self.cell_mut(x, y)?.take().is_some();
        if removed {
            self.occupied -= 1;
        }
        Ok(removed)
    }

    fn clear(&mut self) {
        self.cells.map_inplace(|cell| *cell = None);
        self.occupied = 0;
    }

    fn resize(&mut self, new_width: i32, new_height: i32) -> Result<()> {
        let target = Dimensions::new(new_width, new_height)?;

        if let Some((x, y)) = self.first_lost(&target) {
            return Err(GridError::DataLoss {
                x,
                y,
                new_width,
                new_height,
            });
        }

        if target == self.dimensions {
            return Ok(());
        }

        // Every cell outside `target` is empty past this point, so moving
        // elements across cannot drop any of them
        let mut cells = empty_cells(target);
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            if let (Some(element), Some(dst)) = (cell.take(), cells.get_mut([row, col])) {
                *dst = Some(element);
            }
        }

        self.cells = cells;
        self.dimensions = target;
        Ok(())
    }
}

fn empty_cells<T>(dimensions: Dimensions) -> Array2<Option<T>> {
    Array2::from_shape_simple_fn(dimensions.shape(), || None)
}
