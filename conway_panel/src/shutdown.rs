// shutdown.rs - Ctrl-C handling for a clean exit

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use conway::LifeError;
use tokio::runtime::Runtime;

/// Set by the signal listener or by a fatal error, polled by the loop each frame.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    stop: Arc<AtomicBool>,
    failure: Arc<Mutex<Option<LifeError>>>,
}

impl ShutdownFlag {
    pub fn trigger(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Stops the run and keeps `err` for `main` to return. The first failure wins.
    pub fn fail(&self, err: LifeError) {
        {
            let mut slot = self.failure.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if slot.is_none() {
                *slot = Some(err);
            }
        }
        self.trigger();
    }

    pub fn is_set(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    pub fn take_failure(&self) -> Option<LifeError> {
        self.failure
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

/// Raises `flag` on Ctrl-C and wakes the UI so the next frame sees it.
pub fn listen_for_ctrl_c(runtime: &Runtime, flag: ShutdownFlag, ctx: egui::Context) {
    runtime.spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("interrupted");
                flag.trigger();
                ctx.request_repaint();
            }
            Err(e) => tracing::error!(error = %e, "cannot listen for ctrl-c"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let flag = ShutdownFlag::default();
        let listener = flag.clone();
        assert!(!flag.is_set());
        listener.trigger();
        assert!(flag.is_set());
    }

    #[test]
    fn failure_stops_and_is_kept() {
        let flag = ShutdownFlag::default();
        let loop_side = flag.clone();
        loop_side.fail(LifeError::Configuration("first".into()));
        loop_side.fail(LifeError::Configuration("second".into()));

        assert!(flag.is_set());
        assert_eq!(flag.take_failure(), Some(LifeError::Configuration("first".into())));
        assert_eq!(flag.take_failure(), None);
    }

    #[test]
    fn interrupt_is_not_a_failure() {
        let flag = ShutdownFlag::default();
        flag.trigger();
        assert!(flag.is_set());
        assert_eq!(flag.take_failure(), None);
    }
}
