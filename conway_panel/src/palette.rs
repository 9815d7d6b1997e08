// palette.rs - Live/dead colors per color mode

use conway::ColorMode;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub live: Color32,
    pub dead: Color32,
}

const PALETTES: [Palette; 3] = [
    Palette { live: Color32::from_rgb(0x80, 0, 0),    dead: Color32::from_rgb(0, 4, 4) },  // red on teal
    Palette { live: Color32::from_rgb(0, 0x80, 0),    dead: Color32::from_rgb(4, 0, 4) },  // green on magenta
    Palette { live: Color32::from_rgb(0, 0, 0x99),    dead: Color32::from_rgb(4, 4, 0) },  // blue on olive
];

impl Palette {
    /// Unknown modes fall back onto the table cyclically.
    pub fn for_mode(mode: ColorMode) -> Self {
        PALETTES[usize::from(mode.0) % PALETTES.len()]
    }

    pub fn color(&self, alive: bool) -> Color32 {
        if alive { self.live } else { self.dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_distinct_colors() {
        for mode in 0..conway::context::COLOR_MODES {
            let p = Palette::for_mode(ColorMode(mode));
            assert_ne!(p.live, p.dead);
            assert_eq!(p.color(true), p.live);
            assert_eq!(p.color(false), p.dead);
        }
        assert_eq!(Palette::for_mode(ColorMode(3)), Palette::for_mode(ColorMode(0)));
    }
}
