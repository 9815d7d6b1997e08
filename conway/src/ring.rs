// ring.rs - Fixed cycle of grids that successive generations rotate through

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Slots allocated per epoch. Only the current slot and its successor take part in a step.
pub const DEFAULT_RING_SIZE: usize = 3;

/// A ring of equally-sized grids with an explicit "current" slot.
///
/// Slot `i` is followed by slot `(i + 1) % len`. The ring owns its grids in a plain `Vec`, so
/// dropping it releases each grid exactly once with no link cycle to break.
#[derive(Debug, Clone)]
pub struct GenerationRing {
    grids: Vec<Grid>,
    current: usize,
}

impl GenerationRing {
    pub fn new(size: usize, width: usize, height: usize) -> Result<Self> {
        if size < 2 {
            return Err(LifeError::config(format!(
                "a generation ring needs at least 2 grids, got {size}"
            )));
        }

        // Grids built so far are dropped on the first failure.
        let grids = (0..size)
            .map(|_| Grid::new(width, height))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { grids, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Always false: a ring holds at least two grids.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the slot that follows `index`; wraps after `len` steps.
    pub fn successor_index(&self, index: usize) -> usize {
        (index + 1) % self.grids.len()
    }

    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.grids[self.current]
    }

    /// The grid in the slot after `index`.
    pub fn successor(&self, index: usize) -> &Grid {
        &self.grids[self.successor_index(index)]
    }

    /// Current grid for reading and its successor for writing.
    pub fn split_current(&mut self) -> (&Grid, &mut Grid) {
        let cur = self.current;
        let next = self.successor_index(cur);

        if cur < next {
            let (head, tail) = self.grids.split_at_mut(next);
            (&head[cur], &mut tail[0])
        } else {
            // current is the last slot, successor wraps to 0
            let (head, tail) = self.grids.split_at_mut(cur);
            (&tail[0], &mut head[next])
        }
    }

    /// Makes the successor the current grid. No cells are copied.
    pub fn advance(&mut self) {
        self.current = self.successor_index(self.current);
    }

    /// Consumes the ring, yielding each owned grid once.
    pub fn into_grids(self) -> Vec<Grid> {
        self.grids
    }
}
