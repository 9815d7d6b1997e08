// canvas.rs - Panel-sized pixel buffers and the cell-to-pixel mapping

use conway::{Epoch, PanelSize};
use egui::Color32;

use crate::palette::Palette;

/// One color per physical panel pixel, row-major.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    panel: PanelSize,
    pixels: Vec<Color32>,
}

impl PixelCanvas {
    pub fn new(panel: PanelSize) -> Self {
        Self {
            panel,
            pixels: vec![Color32::BLACK; panel.width * panel.height],
        }
    }

    pub fn panel(&self) -> PanelSize {
        self.panel
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color32 {
        self.pixels[x + y * self.panel.width]
    }

    /// Paints the epoch's current grid; each cell covers a `divider x divider` block.
    pub fn paint(&mut self, epoch: &Epoch) {
        let ctx = epoch.context();
        let grid = epoch.current();
        let palette = Palette::for_mode(ctx.color_mode());
        let divider = ctx.divider();

        for py in 0..self.panel.height {
            // panels that do not divide evenly repeat the last row/column
            let cy = (py / divider).min(grid.height() - 1);
            for px in 0..self.panel.width {
                let cx = (px / divider).min(grid.width() - 1);
                self.pixels[px + py * self.panel.width] = palette.color(grid.get(cx, cy));
            }
        }
    }
}

/// Front buffer is shown, back buffer is painted; `swap` flips them.
#[derive(Debug, Clone)]
pub struct DoubleBuffer {
    front: PixelCanvas,
    back: PixelCanvas,
}

impl DoubleBuffer {
    pub fn new(panel: PanelSize) -> Self {
        Self {
            front: PixelCanvas::new(panel),
            back: PixelCanvas::new(panel),
        }
    }

    pub fn front(&self) -> &PixelCanvas {
        &self.front
    }

    pub fn back_mut(&mut self) -> &mut PixelCanvas {
        &mut self.back
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
