//! Interrupt handling for the control thread
//!
//! The listeners are registered before the cycle thread starts, so a
//! Ctrl-C at any point after boot reaches [`supervise`] instead of the
//! default handler.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use katharos_core::cycle::CycleError;
use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::sync::oneshot;

/// SIGINT and SIGTERM listeners
///
/// Must be created inside a runtime context; delivery starts on creation.
pub struct Interrupts {
    sigint: Signal,
    sigterm: Signal,
}

impl Interrupts {
    pub fn register() -> Result<Self> {
        let sigint = signal(SignalKind::interrupt()).context("unable to listen for SIGINT (Ctrl+C)")?;
        let sigterm = signal(SignalKind::terminate()).context("unable to listen for SIGTERM")?;
        Ok(Self { sigint, sigterm })
    }

    /// Wait for either signal, returning its name
    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.sigint.recv() => "SIGINT",
            _ = self.sigterm.recv() => "SIGTERM",
        }
    }
}

/// Wait for the cycle to end, raising `shutdown` on an interrupt
pub async fn supervise(
    mut done: oneshot::Receiver<Result<(), CycleError>>,
    interrupts: &mut Interrupts,
    shutdown: &AtomicBool,
) -> Result<Result<(), CycleError>> {
    tokio::select! {
        outcome = &mut done => return outcome.context("cycle thread exited without a result"),
        name = interrupts.recv() => {
            log::warn!("{} received, stopping after the current step", name);
            shutdown.store(true, Ordering::Release);
        }
    }

    done.await.context("cycle thread exited without a result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_cycle_outcome_is_returned() {
        let runtime = runtime();
        let mut interrupts = {
            let _guard = runtime.enter();
            Interrupts::register().unwrap()
        };
        let shutdown = AtomicBool::new(false);
        let (done_tx, done_rx) = oneshot::channel();
        done_tx.send(Err(CycleError::GripAborted)).unwrap();

        let outcome = runtime.block_on(supervise(done_rx, &mut interrupts, &shutdown));

        assert_eq!(outcome.unwrap(), Err(CycleError::GripAborted));
        assert!(!shutdown.load(Ordering::Acquire));
    }

    #[test]
    fn test_signal_before_supervise_requests_shutdown() {
        let runtime = runtime();
        let mut interrupts = {
            let _guard = runtime.enter();
            Interrupts::register().unwrap()
        };
        let shutdown = Arc::new(AtomicBool::new(false));
        let (done_tx, done_rx) = oneshot::channel();

        // Stands in for the cycle thread: stops once asked to
        let cycle = {
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || {
                for _ in 0..500 {
                    if shutdown.load(Ordering::Acquire) {
                        break;
                    }
                    thread::sleep(Duration::from_millis(10));
                }
                let _ = done_tx.send(Ok(()));
            })
        };

        // Delivered while nothing is polling yet; without the listener
        // the default action would kill the test process
        let status = Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        let outcome = runtime.block_on(supervise(done_rx, &mut interrupts, &shutdown));
        cycle.join().unwrap();

        assert_eq!(outcome.unwrap(), Ok(()));
        assert!(shutdown.load(Ordering::Acquire));
    }
}
