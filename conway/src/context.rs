// context.rs - Per-epoch simulation settings

use std::time::Duration;

use crate::error::{LifeError, Result};
use crate::neighbors::Topology;

/// Scale factors a panel pixel block can take.
pub const DIVIDERS: [usize; 3] = [1, 2, 4];
/// Target refresh rates, in Hz.
pub const REFRESH_RATES_HZ: [u32; 5] = [10, 15, 20, 30, 60];
/// Number of color modes the display understands.
pub const COLOR_MODES: u8 = 3;

/// Physical size of the display, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    pub width: usize,
    pub height: usize,
}

impl PanelSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for PanelSize {
    fn default() -> Self {
        Self::new(64, 64)
    }
}

/// Palette selector. Opaque to the simulation; the display interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorMode(pub u8);

/// Settings fixed for the lifetime of one epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationContext {
    width: usize,
    height: usize,
    divider: usize,
    refresh_hz: u32,
    frame_interval: Duration,
    topology: Topology,
    color_mode: ColorMode,
}

impl SimulationContext {
    /// Derives the grid size from `panel / divider`. A divider of 0 is treated as 1.
    pub fn new(
        panel: PanelSize,
        divider: usize,
        refresh_hz: u32,
        topology: Topology,
        color_mode: ColorMode,
    ) -> Result<Self> {
        let divider = divider.max(1);
        let width = panel.width / divider;
        let height = panel.height / divider;

        if width == 0 || height == 0 {
            return Err(LifeError::config(format!(
                "divider {divider} leaves no cells on a {}x{} panel",
                panel.width, panel.height
            )));
        }
        if refresh_hz == 0 {
            return Err(LifeError::config("refresh rate must be positive"));
        }

        Ok(Self {
            width,
            height,
            divider,
            refresh_hz,
            frame_interval: frame_interval(refresh_hz),
            topology,
            color_mode,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn divider(&self) -> usize {
        self.divider
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn refresh_hz(&self) -> u32 {
        self.refresh_hz
    }

    /// Target time per frame, `round(1000 / refresh_hz)` milliseconds.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
}

fn frame_interval(refresh_hz: u32) -> Duration {
    let ms = (1000.0 / f64::from(refresh_hz)).round() as u64;
    Duration::from_millis(ms)
}
