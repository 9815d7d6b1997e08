// error.rs - Host-level failures

use conway::LifeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("{key}={value:?}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("signal runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("display: {0}")]
    Display(#[from] eframe::Error),
}
