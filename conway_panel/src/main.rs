// main.rs - Game of Life on a (virtual) LED panel
//
// Each frame: check for stagnation on its cadence, paint the current generation into the
// back buffer, swap, then step the epoch. Ctrl-C or closing the window ends the run.

use eframe::egui;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use conway::rng::{clock_seed, seed_shared_rng, with_shared_rng};
use conway::{Epoch, Randomizer, StagnationCheck, StagnationMonitor};

mod canvas;    // Pixel buffers
mod config;    // Environment settings
mod error;     // PanelError
mod pacer;     // Frame timing
mod palette;   // Colors per mode
mod shutdown;  // Stop flag + failure slot
mod ui;        // eframe::App impl

use canvas::DoubleBuffer;
use config::PanelConfig;
use error::PanelError;
use pacer::FramePacer;
use shutdown::ShutdownFlag;

/// Height reserved above the panel for the status line.
const STATUS_HEIGHT: f32 = 28.0;

fn main() -> Result<(), PanelError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load()?.clone();
    let seed = config.seed.unwrap_or_else(clock_seed);
    seed_shared_rng(seed);
    tracing::info!(
        seed,
        width = config.panel.width,
        height = config.panel.height,
        "starting panel"
    );

    // A failed first epoch aborts startup.
    let randomizer = Randomizer::new(config.panel, config.density);
    let epoch = with_shared_rng(|rng| randomizer.epoch(rng))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("signals")
        .enable_all()
        .build()?;
    let shutdown = ShutdownFlag::default();
    let failure = shutdown.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.panel.width as f32 * config.pixel_size,
                config.panel.height as f32 * config.pixel_size + STATUS_HEIGHT,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway LED Panel",
        options,
        Box::new(move |cc| {
            shutdown::listen_for_ctrl_c(&runtime, shutdown.clone(), cc.egui_ctx.clone());
            Box::new(PanelApp::new(config, randomizer, epoch, shutdown, runtime))
        }),
    )?;

    if let Some(err) = failure.take_failure() {
        tracing::error!(error = %err, "run aborted");
        return Err(err.into());
    }
    tracing::info!("shutdown complete");
    Ok(())
}

/// Counters of the generation currently on the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShownFrame {
    pub generation: u64,
    pub population: usize,
}

/// Host state: the active epoch plus everything around it that outlives epochs.
pub struct PanelApp {
    config: PanelConfig,
    randomizer: Randomizer,
    epoch: Epoch,
    epochs: u64,
    monitor: StagnationMonitor,
    buffers: DoubleBuffer,
    pacer: FramePacer,
    shutdown: ShutdownFlag,
    closing: bool,
    shown: ShownFrame,

    // Kept alive for the signal listener.
    _runtime: tokio::runtime::Runtime,
}

impl PanelApp {
    fn new(
        config: PanelConfig,
        randomizer: Randomizer,
        epoch: Epoch,
        shutdown: ShutdownFlag,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            monitor: StagnationMonitor::new(config.stuck_check, Instant::now()),
            buffers: DoubleBuffer::new(config.panel),
            pacer: FramePacer::default(),
            config,
            randomizer,
            epoch,
            epochs: 1,
            shutdown,
            closing: false,
            shown: ShownFrame::default(),
            _runtime: runtime,
        }
    }

    /// One loop iteration. A failed reseed stops the run instead of limping on.
    fn advance_frame(&mut self, now: Instant) {
        let check = with_shared_rng(|rng| {
            self.monitor
                .check_and_maybe_reseed(&mut self.epoch, &self.randomizer, rng, now)
        });
        match check {
            Ok(StagnationCheck::Reseeded) => self.epochs += 1,
            Ok(StagnationCheck::Evolving | StagnationCheck::NotDue) => {}
            Err(e) => {
                tracing::error!(error = %e, "cannot start a new epoch, stopping");
                self.shutdown.fail(e);
                return;
            }
        }

        self.buffers.back_mut().paint(&self.epoch);
        self.buffers.swap();
        self.shown = ShownFrame {
            generation: self.epoch.generation(),
            population: self.epoch.current().population(),
        };

        self.epoch.step();
    }
}
