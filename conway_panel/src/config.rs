// config.rs - Host settings: defaults overridden from the environment

use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use conway::context::DIVIDERS;
use conway::{DEFAULT_CHECK_INTERVAL, Density, PanelSize};

use crate::error::PanelError;

static CONFIG: OnceLock<PanelConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub panel: PanelSize,
    pub density: Density,
    pub stuck_check: Duration,
    /// Fixed RNG seed; the wall clock is used when absent.
    pub seed: Option<u64>,
    /// On-screen size of one panel pixel, in points.
    pub pixel_size: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel: PanelSize::default(),
            density: Density::DEFAULT,
            stuck_check: DEFAULT_CHECK_INTERVAL,
            seed: None,
            pixel_size: 10.0,
        }
    }
}

impl PanelConfig {
    pub fn from_env() -> Result<Self, PanelError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source. Set but malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PanelError> {
        let mut config = Self::default();

        if let Some(w) = parse::<usize>(&lookup, "CONWAY_PANEL_WIDTH")? {
            config.panel.width = panel_side("CONWAY_PANEL_WIDTH", w)?;
        }
        if let Some(h) = parse::<usize>(&lookup, "CONWAY_PANEL_HEIGHT")? {
            config.panel.height = panel_side("CONWAY_PANEL_HEIGHT", h)?;
        }
        if let Some(p) = parse::<f64>(&lookup, "CONWAY_DENSITY")? {
            config.density = Density::new(p)?;
        }
        if let Some(secs) = parse::<u64>(&lookup, "CONWAY_STUCK_CHECK_SECS")? {
            config.stuck_check = Duration::from_secs(positive("CONWAY_STUCK_CHECK_SECS", secs)?);
        }
        config.seed = parse::<u64>(&lookup, "CONWAY_SEED")?;
        if let Some(size) = parse::<f32>(&lookup, "CONWAY_PIXEL_SIZE")? {
            if !(size.is_finite() && size > 0.0) {
                return Err(invalid("CONWAY_PIXEL_SIZE", size, "must be a positive number"));
            }
            config.pixel_size = size;
        }

        Ok(config)
    }
}

/// The process configuration, read from the environment on first call.
pub fn load() -> Result<&'static PanelConfig, PanelError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = PanelConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(CONFIG.get_or_init(|| config))
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, PanelError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => {
            tracing::warn!(key, "empty value ignored");
            Ok(None)
        }
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| invalid(key, &raw, e)),
    }
}

/// Every divider a random epoch may draw must leave at least one cell.
fn panel_side(key: &'static str, pixels: usize) -> Result<usize, PanelError> {
    let min = DIVIDERS.iter().copied().max().unwrap_or(1);
    if pixels >= min {
        Ok(pixels)
    } else {
        Err(invalid(key, pixels, format!("panel needs at least {min} pixels per side")))
    }
}

fn positive<T: PartialOrd + Default + std::fmt::Display>(key: &'static str, v: T) -> Result<T, PanelError> {
    if v > T::default() {
        Ok(v)
    } else {
        Err(invalid(key, v, "must be greater than zero"))
    }
}

fn invalid(key: &'static str, value: impl std::fmt::Display, reason: impl std::fmt::Display) -> PanelError {
    PanelError::Config {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
