// lib.rs - Conway's Game of Life simulation core
//
// Grid state, the wrap/clamp neighbor policies, the B3/S23 transition, and the epoch
// lifecycle (random seeding, stagnation detection, reseeding). Displays, signals and
// frame pacing live with the host.

pub mod context;     // Per-epoch settings and option tables
pub mod engine;      // Generation transition
pub mod epoch;       // Context + ring pairing
pub mod error;       // LifeError
pub mod grid;        // Flat cell buffer
pub mod neighbors;   // Wrap / clamp counting
pub mod patterns;    // Known seed patterns
pub mod random;      // Randomizer and density
pub mod ring;        // Generation ring
pub mod rng;         // Process-wide RNG
pub mod stagnation;  // Fixed-point monitor

pub use context::{ColorMode, PanelSize, SimulationContext};
pub use epoch::Epoch;
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use neighbors::Topology;
pub use random::{Density, Randomizer};
pub use ring::{DEFAULT_RING_SIZE, GenerationRing};
pub use stagnation::{DEFAULT_CHECK_INTERVAL, StagnationCheck, StagnationMonitor};
