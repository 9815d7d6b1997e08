// grid.rs - Flat cell buffer for Conway's Game of Life

use crate::error::{LifeError, Result};

/// A fixed-size field of cells, stored row-major as `x + y * width`.
///
/// Dimensions never change after allocation. `get`/`set` do not re-validate coordinates:
/// callers resolve wrap/clamp first and stay inside `[0, width) x [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let total = width
            .checked_mul(height)
            .filter(|&n| n > 0)
            .ok_or_else(|| LifeError::empty_grid(width, height))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|e| LifeError::out_of_memory(width, height, e))?;
        cells.resize(total, false);

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Counts live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Same dimensions and same cell contents.
    pub fn equals(&self, other: &Grid) -> bool {
        self == other
    }

    pub(crate) fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.population(), 0);
        assert!(!grid.is_empty());
    }

    #[test]
    fn zero_sized_grid_is_an_allocation_error() {
        assert!(matches!(Grid::new(0, 5), Err(LifeError::Allocation { .. })));
        assert!(matches!(Grid::new(5, 0), Err(LifeError::Allocation { .. })));
        assert!(matches!(Grid::new(usize::MAX, 2), Err(LifeError::Allocation { .. })));
    }

    #[test]
    fn addressing_is_row_major() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(1, 2, true);
        assert_eq!(grid.index(1, 2), 9);
        assert!(grid.cells()[9]);
        assert!(grid.get(1, 2));
        assert!(!grid.get(2, 1));
    }

    #[test]
    fn equality_needs_shape_and_contents() {
        let mut a = Grid::new(4, 2).unwrap();
        let b = Grid::new(2, 4).unwrap();
        let mut c = Grid::new(4, 2).unwrap();
        assert!(!a.equals(&b)); // same cell count, different shape
        assert!(a.equals(&c));

        a.set(3, 1, true);
        assert!(!a.equals(&c));
        c.set(3, 1, true);
        assert!(a.equals(&c));

        a.clear();
        assert_eq!(a.population(), 0);
    }
}
