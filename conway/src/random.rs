// random.rs - Random seeding of grids and epoch settings

use rand::Rng;

use crate::context::{COLOR_MODES, ColorMode, DIVIDERS, PanelSize, REFRESH_RATES_HZ, SimulationContext};
use crate::epoch::Epoch;
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::neighbors::Topology;
use crate::ring::DEFAULT_RING_SIZE;

/// Probability that a freshly seeded cell is alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f64);

impl Density {
    /// One live cell in three.
    pub const DEFAULT: Density = Density(1.0 / 3.0);

    pub fn new(p: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(LifeError::config(format!("density must be within [0, 1], got {p}")))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draws new epochs: a random context sized from `panel` and a grid seeded at `density`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Randomizer {
    pub panel: PanelSize,
    pub density: Density,
}

impl Randomizer {
    pub fn new(panel: PanelSize, density: Density) -> Self {
        Self { panel, density }
    }

    /// Picks divider, refresh rate, topology and color mode uniformly and independently.
    pub fn context<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationContext> {
        let divider = DIVIDERS[rng.random_range(0..DIVIDERS.len())];
        let refresh_hz = REFRESH_RATES_HZ[rng.random_range(0..REFRESH_RATES_HZ.len())];
        let topology = Topology::ALL[rng.random_range(0..Topology::ALL.len())];
        let color_mode = ColorMode(rng.random_range(0..COLOR_MODES));

        SimulationContext::new(self.panel, divider, refresh_hz, topology, color_mode)
    }

    /// Sets every cell alive independently with probability `density`.
    pub fn fill<R: Rng + ?Sized>(&self, rng: &mut R, grid: &mut Grid) {
        let p = self.density.get();
        for cell in grid.cells_mut() {
            *cell = rng.random_bool(p);
        }
    }

    /// A fresh epoch: new context, new ring, randomly seeded current grid.
    pub fn epoch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Epoch> {
        let context = self.context(rng)?;
        let mut epoch = Epoch::new(context, DEFAULT_RING_SIZE)?;
        self.fill(rng, epoch.current_mut());

        tracing::info!(
            width = epoch.context().width(),
            height = epoch.context().height(),
            divider = epoch.context().divider(),
            refresh_hz = epoch.context().refresh_hz(),
            topology = %epoch.context().topology(),
            color_mode = epoch.context().color_mode().0,
            population = epoch.current().population(),
            "new epoch"
        );
        Ok(epoch)
    }
}
