// engine.rs - Generation transition (B3/S23)

use crate::grid::Grid;
use crate::neighbors::Topology;

/// Conway's rule for one cell given its live-neighbor count.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Writes the generation after `current` into `next`. `current` is only read.
pub fn step(topology: Topology, current: &Grid, next: &mut Grid) {
    debug_assert!(current.same_shape(next), "grids must share dimensions");

    for y in 0..current.height() {
        for x in 0..current.width() {
            let neighbors = topology.count(current, x, y);
            next.set(x, y, next_state(current.get(x, y), neighbors));
        }
    }
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
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn lone_center_dies_under_clamp() {
        let current = grid_with(3, 3, &[(1, 1)]);
        let mut next = Grid::new(3, 3).unwrap();
        next.set(0, 0, true); // stale data must be overwritten

        step(Topology::Clamp, &current, &mut next);
        assert_eq!(next.population(), 0);
        assert_eq!(current.population(), 1);
    }

    #[test]
    fn blinker_flips_orientation() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        for topology in Topology::ALL {
            let mut next = Grid::new(5, 5).unwrap();
            step(topology, &horizontal, &mut next);
            assert_eq!(next, vertical, "{topology}");

            let mut back = Grid::new(5, 5).unwrap();
            step(topology, &next, &mut back);
            assert_eq!(back, horizontal, "{topology}");
        }
    }

    #[test]
    fn block_is_still() {
        let block = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut next = Grid::new(4, 4).unwrap();
        step(Topology::Clamp, &block, &mut next);
        assert_eq!(next, block);
    }

    #[test]
    fn edge_rows_differ_between_topologies() {
        // A horizontal bar on the top edge: under wrap the bottom row sees it too.
        let bar = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0)]);

        let mut clamped = Grid::new(5, 5).unwrap();
        step(Topology::Clamp, &bar, &mut clamped);
        let mut wrapped = Grid::new(5, 5).unwrap();
        step(Topology::Wrap, &bar, &mut wrapped);

        assert_eq!(clamped.population(), 2); // (2,0) and (2,1)
        assert!(clamped.get(2, 1) && clamped.get(2, 0));
        assert!(wrapped.get(2, 4) && wrapped.get(2, 1) && wrapped.get(2, 0));
        assert_eq!(wrapped.population(), 3);
    }
}
