// neighbors.rs - Live-neighbor counting under the two edge policies

use std::fmt;

use crate::grid::Grid;

/// Counting stops once the total passes this; the rule cannot tell 4 from 8.
const MAX_RELEVANT: u8 = 3;

/// Moore neighborhood, scanned row by row from the top-left.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// How the grid's edges behave. Chosen once per epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Edges join the opposite edge (torus); every cell has 8 neighbors.
    Wrap,
    /// Hard edge; positions off the grid count as dead.
    Clamp,
}

impl Topology {
    pub const ALL: [Topology; 2] = [Topology::Wrap, Topology::Clamp];

    /// Live neighbors of `(x, y)`.
    ///
    /// Returns early once the count exceeds 3, so any value above 3 only means "four or more".
    pub fn count(self, grid: &Grid, x: usize, y: usize) -> u8 {
        match self {
            Topology::Wrap => count_wrapped(grid, x, y),
            Topology::Clamp => count_clamped(grid, x, y),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Wrap => f.write_str("wrap"),
            Topology::Clamp => f.write_str("clamp"),
        }
    }
}

fn count_wrapped(grid: &Grid, x: usize, y: usize) -> u8 {
    let w = grid.width() as isize;
    let h = grid.height() as isize;
    let mut count = 0;

    for &(dx, dy) in &OFFSETS {
        let nx = (x as isize + dx).rem_euclid(w) as usize;
        let ny = (y as isize + dy).rem_euclid(h) as usize;

        if grid.get(nx, ny) {
            count += 1;
            if count > MAX_RELEVANT {
                return count;
            }
        }
    }
    count
}

fn count_clamped(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;

    for &(dx, dy) in &OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if nx >= grid.width() || ny >= grid.height() {
            continue;
        }

        if grid.get(nx, ny) {
            count += 1;
            if count > MAX_RELEVANT {
                return count;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in live {
            grid.set(x, y, true);
        }
        grid
    }

    #[test]
    fn wrap_reaches_the_opposite_corner() {
        let grid = grid_with(4, 4, &[(0, 0), (3, 3)]);
        assert_eq!(Topology::Wrap.count(&grid, 0, 0), 1);
        assert_eq!(Topology::Clamp.count(&grid, 0, 0), 0);
    }

    #[test]
    fn lone_center_has_no_neighbors() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(Topology::Clamp.count(&grid, 1, 1), 0);
        assert_eq!(Topology::Wrap.count(&grid, 1, 1), 0);
    }

    #[test]
    fn clamp_corner_sees_three_cells_at_most() {
        let grid = grid_with(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)]);
        assert_eq!(Topology::Clamp.count(&grid, 0, 0), 3);
        // the wrapped corner also sees (2, 2) and stops past 3
        assert_eq!(Topology::Wrap.count(&grid, 0, 0), 4);
    }

    #[test]
    fn counting_stops_after_four() {
        let full = grid_with(
            3,
            3,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        );
        assert_eq!(Topology::Clamp.count(&full, 1, 1), 4);
        assert_eq!(Topology::Wrap.count(&full, 1, 1), 4);
    }

    #[test]
    fn sparse_counts_are_exact() {
        let grid = grid_with(5, 5, &[(1, 1), (3, 3)]);
        assert_eq!(Topology::Clamp.count(&grid, 2, 2), 2);
        assert_eq!(Topology::Wrap.count(&grid, 2, 2), 2);
        assert_eq!(Topology::Clamp.count(&grid, 4, 4), 1);
        // (4,4) wraps onto (0,0), (0,4), (4,0), ...; only (3,3) is live nearby
        assert_eq!(Topology::Wrap.count(&grid, 4, 4), 1);
        assert_eq!(Topology::Wrap.count(&grid, 0, 0), 1);
    }

    #[test]
    fn display_names() {
        assert_eq!(Topology::Wrap.to_string(), "wrap");
        assert_eq!(Topology::Clamp.to_string(), "clamp");
    }
}
