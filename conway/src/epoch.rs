// epoch.rs - One simulation context paired with the grids it runs on

use crate::context::SimulationContext;
use crate::engine;
use crate::error::Result;
use crate::grid::Grid;
use crate::ring::GenerationRing;

/// A context and a generation ring sized to it. Replaced wholesale on reseed.
#[derive(Debug, Clone)]
pub struct Epoch {
    context: SimulationContext,
    ring: GenerationRing,
    generation: u64,
}

impl Epoch {
    /// An epoch whose grids are all dead.
    pub fn new(context: SimulationContext, ring_size: usize) -> Result<Self> {
        let ring = GenerationRing::new(ring_size, context.width(), context.height())?;
        Ok(Self {
            context,
            ring,
            generation: 0,
        })
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn ring(&self) -> &GenerationRing {
        &self.ring
    }

    /// The grid being displayed.
    pub fn current(&self) -> &Grid {
        self.ring.current()
    }

    /// Mutable access to the current grid, for seeding.
    pub fn current_mut(&mut self) -> &mut Grid {
        self.ring.current_mut()
    }

    /// The grid in the slot after the current one.
    pub fn successor(&self) -> &Grid {
        self.ring.successor(self.ring.current_index())
    }

    /// Steps taken since the epoch began.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Writes the next generation into the successor slot without moving on.
    pub fn compute_successor(&mut self) {
        let topology = self.context.topology();
        let (current, next) = self.ring.split_current();
        engine::step(topology, current, next);
    }

    /// Computes the next generation and makes it current.
    pub fn step(&mut self) {
        self.compute_successor();
        self.ring.advance();
        self.generation += 1;
    }

    /// True when the next generation equals the current one (still life or all dead).
    ///
    /// Oscillators of period 2 or more are never reported.
    pub fn is_fixed_point(&mut self) -> bool {
        self.compute_successor();
        self.current().equals(self.successor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ColorMode, PanelSize};
    use crate::neighbors::Topology;
    use crate::patterns::{self, BLINKER, BLOCK};

    fn epoch(size: usize, topology: Topology) -> Epoch {
        let ctx = SimulationContext::new(
            PanelSize::new(size, size),
            1,
            60,
            topology,
            ColorMode::default(),
        )
        .unwrap();
        Epoch::new(ctx, 3).unwrap()
    }

    #[test]
    fn step_rotates_through_the_ring() {
        let mut e = epoch(6, Topology::Wrap);
        patterns::stamp(e.current_mut(), &BLINKER, (1, 2));

        let start = e.current().clone();
        let first_slot = e.ring().current_index();
        e.step();
        assert_eq!(e.ring().current_index(), (first_slot + 1) % 3);
        assert_ne!(e.current(), &start);
        e.step();
        assert_eq!(e.current(), &start);
        assert_eq!(e.generation(), 2);
    }

    #[test]
    fn fixed_point_detection() {
        let mut dead = epoch(8, Topology::Clamp);
        assert!(dead.is_fixed_point());

        let mut block = epoch(8, Topology::Clamp);
        patterns::stamp(block.current_mut(), &BLOCK, (3, 3));
        assert!(block.is_fixed_point());
        // checking does not advance
        assert_eq!(block.generation(), 0);
    }

    #[test]
    fn oscillators_are_not_fixed_points() {
        let mut e = epoch(6, Topology::Wrap);
        patterns::stamp(e.current_mut(), &BLINKER, (1, 2));
        assert!(!e.is_fixed_point());
        e.step();
        assert!(!e.is_fixed_point());
        e.step();
        assert!(!e.is_fixed_point());
    }
}
