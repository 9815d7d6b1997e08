// patterns.rs - Well-known seed patterns

use crate::grid::Grid;

/// A named set of live cells, as `(x, y)` offsets from the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Still life.
pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
};

/// Period 2, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Period 2.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// Period 2.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

/// Moves one cell diagonally (down-right) every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Methuselah; settles after 1103 generations on an unbounded plane.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

/// Sets the pattern's cells alive with its top-left at `origin`, wrapping past the edges.
/// Other cells are left as they are.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) {
    let (ox, oy) = origin;
    for &(dx, dy) in pattern.cells {
        let x = (ox + dx) % grid.width();
        let y = (oy + dy) % grid.height();
        grid.set(x, y, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_wraps_at_edges() {
        let mut grid = Grid::new(4, 4).unwrap();
        stamp(&mut grid, &BLOCK, (3, 3));
        assert_eq!(grid.population(), 4);
        assert!(grid.get(3, 3) && grid.get(0, 3) && grid.get(3, 0) && grid.get(0, 0));
    }
}
